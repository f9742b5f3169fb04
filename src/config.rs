//! Runtime configuration for an [`Interpreter`](crate::Interpreter).

/// How a sprite behaves when it reaches past the right or bottom edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteEdge {
    /// Pixels past an edge reappear on the opposite edge.
    Wrap,
    /// Pixels past an edge are dropped. The start coordinate still wraps.
    Clip,
}

impl Default for SpriteEdge {
    fn default() -> Self {
        SpriteEdge::Wrap
    }
}

/// The configuration used every time the machine is (re)initialized.
///
/// # Example
/// ```rust
/// # use chip8_interpreter::{Config, SpriteEdge};
/// let config = Config::new().with_seed(42).with_sprite_edge(SpriteEdge::Clip);
/// assert_eq!(config.seed, Some(42));
/// assert_eq!(config.sprite_edge, SpriteEdge::Clip);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Config {
    /// Edge behaviour of `DXYN`.
    pub sprite_edge: SpriteEdge,
    /// Seed for the random source used by `CXKK`, `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_sprite_edge(mut self, sprite_edge: SpriteEdge) -> Self {
        self.sprite_edge = sprite_edge;
        self
    }
}
