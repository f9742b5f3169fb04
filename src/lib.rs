//! A CHIP-8 interpreter core.
//!
//! The [`Interpreter`](chip8::Interpreter) owns the whole machine and is driven one
//! instruction at a time through [`step`](chip8::Interpreter::step). Timing, rendering,
//! key mapping and audio playback are left to the host.
pub mod chip8;
pub mod config;
pub mod definitions;
pub mod devices;
pub mod opcode;
pub mod timer;
mod error;

// reexporting for convinience
pub use chip8::Interpreter;
pub use config::{Config, SpriteEdge};
pub use error::*;
