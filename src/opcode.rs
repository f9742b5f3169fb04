//! Opcode abstractions, decoding and the instruction dispatch table.
use std::convert::TryFrom;

use crate::{definitions::memory, MemoryError, OpcodeError, ProcessError};

/// the base mask used for generating all the other sub masks
pub(crate) const OPCODE_MASK_FFFF: u16 = u16::MAX;

/// the mask for the first twelve bits
pub(crate) const OPCODE_MASK_FFF0: u16 = OPCODE_MASK_FFFF << 4;

/// the mask for the first eight bits
pub(crate) const OPCODE_MASK_FF00: u16 = OPCODE_MASK_FFFF << 8;

/// the mask for the first four bits
pub(crate) const OPCODE_MASK_F000: u16 = OPCODE_MASK_FFFF << 12;

/// the mask for the last four bits
pub(crate) const OPCODE_MASK_000F: u16 = OPCODE_MASK_FFFF ^ OPCODE_MASK_FFF0;

/// the mask for the last eight bits
pub(crate) const OPCODE_MASK_00FF: u16 = OPCODE_MASK_FFFF ^ OPCODE_MASK_FF00;

/// the mask for the last twelve bits
pub(crate) const OPCODE_MASK_0FFF: u16 = OPCODE_MASK_FFFF ^ OPCODE_MASK_F000;

/// the size of a single byte
const BYTE_SIZE: u16 = 0x8;

/// the size of a single nibble
const NIBBLE_SIZE: u16 = BYTE_SIZE / 2;

/// a wrapper type for u16 to make it clear what is meant to be used
pub type Opcode = u16;

/// Will fetch the big-endian opcode stored at `pointer` and `pointer + 1`.
///
/// # Arguments
///
/// - `memory` - The memory the opcode is read from
/// - `pointer` - Where in the memory the opcode starts
///
/// # Example
/// ```rust
/// # use chip8_interpreter::opcode::*;
/// # use chip8_interpreter::MemoryError;
/// const OPCODES: [Opcode; 2] = [0x00EE, 0x1EDA];
/// const SPLIT_OPCODE: [u8; 4] = [0x00, 0xEE, 0x1E, 0xDA];
/// for (i, val) in OPCODES.iter().enumerate() {
///     let opcode = fetch_opcode(&SPLIT_OPCODE, i * 2).expect("This will work.");
///     assert_eq!(opcode, *val);
/// }
/// # assert_eq!(
/// #    Err(MemoryError::AddressOutOfRange { address: 4, len: 4 }),
/// #    fetch_opcode(&SPLIT_OPCODE, 3)
/// # );
/// ```
pub fn fetch_opcode(memory: &[u8], pointer: usize) -> Result<Opcode, MemoryError> {
    match (memory.get(pointer), memory.get(pointer + 1)) {
        (Some(high), Some(low)) => Ok(Opcode::from_be_bytes([*high, *low])),
        (None, _) => Err(MemoryError::AddressOutOfRange {
            address: pointer,
            len: memory.len(),
        }),
        (Some(_), None) => Err(MemoryError::AddressOutOfRange {
            address: pointer + 1,
            len: memory.len(),
        }),
    }
}

/// Operand extractors for the fixed bit layout of an opcode word.
pub trait OpcodeTrait {
    /// this is an opcode extractor that will return the
    /// opcode family (the top nibble)
    fn family(&self) -> u8;

    /// this is an opcode extractor for the opcode type `TNNN`
    /// - `NNN` is an address
    fn nnn(&self) -> u16;

    /// this is an opcode extractor for the opcode type `TXKK`
    /// - `X` is a register index
    /// - `KK` is a constant
    fn xkk(&self) -> (usize, u8);

    /// this is an opcode extractor for the opcode type `TXYN`
    /// - `X` is a register index
    /// - `Y` is a register index
    /// - `N` is a constant or opcode subtype
    fn xyn(&self) -> (usize, usize, u8);

    /// this is an opcode extractor for the opcode type `TXYT`
    fn xy(&self) -> (usize, usize);

    /// this is an opcode extractor for the opcode type `TXTT`
    fn x(&self) -> usize;
}

impl OpcodeTrait for Opcode {
    /// # Example
    /// ```rust
    /// # use chip8_interpreter::opcode::*;
    /// const BASE_OPCODE: Opcode = 0x1EDA;
    /// assert_eq!(BASE_OPCODE.family(), 0x1);
    /// ```
    fn family(&self) -> u8 {
        ((self & OPCODE_MASK_F000) >> (3 * NIBBLE_SIZE)) as u8
    }

    /// # Example
    /// ```rust
    /// # use chip8_interpreter::opcode::*;
    /// const BASE_OPCODE: Opcode = 0x1EDA;
    /// assert_eq!(BASE_OPCODE.nnn(), 0xEDA)
    /// ```
    fn nnn(&self) -> u16 {
        self & OPCODE_MASK_0FFF
    }

    /// # Example
    /// ```rust
    /// # use chip8_interpreter::opcode::*;
    /// const BASE_OPCODE: Opcode = 0x1EDA;
    /// assert_eq!(BASE_OPCODE.xkk(), (0xE, 0xDA));
    /// ```
    fn xkk(&self) -> (usize, u8) {
        (self.x(), (self & OPCODE_MASK_00FF) as u8)
    }

    /// # Example
    /// ```rust
    /// # use chip8_interpreter::opcode::*;
    /// const BASE_OPCODE: Opcode = 0x1EDA;
    /// assert_eq!(BASE_OPCODE.xyn(), (0xE, 0xD, 0xA));
    /// ```
    fn xyn(&self) -> (usize, usize, u8) {
        let (x, y) = self.xy();
        (x, y, (self & OPCODE_MASK_000F) as u8)
    }

    fn xy(&self) -> (usize, usize) {
        const MASK: u16 = OPCODE_MASK_00FF ^ OPCODE_MASK_000F;
        (self.x(), ((self & MASK) >> NIBBLE_SIZE) as usize)
    }

    fn x(&self) -> usize {
        ((self & OPCODE_MASK_0FFF & OPCODE_MASK_FF00) >> BYTE_SIZE) as usize
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
/// Represents the program steps that the chip
/// can take.
pub enum ProgramCounterStep {
    /// Will not change the program counter
    None,
    /// Will move the program counter to the next instruction
    Next,
    /// Will skip the next instruction
    Skip,
    /// Will simply move the program counter to the given location.
    /// The location is validated by the next fetch.
    Jump(u16),
}

impl ProgramCounterStep {
    /// Will return a Skip if the condition is true.
    ///
    /// # Example
    /// ```rust
    /// # use chip8_interpreter::opcode::ProgramCounterStep;
    /// assert_eq!(ProgramCounterStep::Next, ProgramCounterStep::cond(false));
    /// assert_eq!(ProgramCounterStep::Skip, ProgramCounterStep::cond(true));
    /// ```
    #[inline]
    pub fn cond(cond: bool) -> Self {
        if cond {
            ProgramCounterStep::Skip
        } else {
            ProgramCounterStep::Next
        }
    }

    /// Maps the step onto the program counter `from`.
    ///
    /// # Example
    /// ```rust
    /// # use chip8_interpreter::opcode::ProgramCounterStep;
    /// assert_eq!(0x202, ProgramCounterStep::Next.apply(0x200));
    /// assert_eq!(0x204, ProgramCounterStep::Skip.apply(0x200));
    /// assert_eq!(0x123, ProgramCounterStep::Jump(0x123).apply(0x200));
    /// ```
    #[inline]
    pub fn apply(&self, from: u16) -> u16 {
        match *self {
            ProgramCounterStep::None => from,
            ProgramCounterStep::Next => from.wrapping_add(memory::opcodes::SIZE),
            ProgramCounterStep::Skip => from.wrapping_add(2 * memory::opcodes::SIZE),
            ProgramCounterStep::Jump(pointer) => pointer,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
/// Represents a command from the interpreter up to the host.
pub enum Operation {
    /// If no action has to be taken.
    None,
    /// The machine is parked on a key wait and
    /// will retry the same instruction next step.
    Wait,
    /// The frame buffer changed and should be redrawn.
    Draw,
}

/// Control flow: jumps, calls, returns and the conditional skips.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// `00EE`
    Return,
    /// `1NNN`
    Jump { nnn: u16 },
    /// `2NNN`
    Call { nnn: u16 },
    /// `3XKK`
    SkipIfEqualByte { x: usize, kk: u8 },
    /// `4XKK`
    SkipIfNotEqualByte { x: usize, kk: u8 },
    /// `5XY0`
    SkipIfEqual { x: usize, y: usize },
    /// `9XY0`
    SkipIfNotEqual { x: usize, y: usize },
    /// `BNNN`
    JumpOffset { nnn: u16 },
}

/// Register arithmetic and logic, including the random mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arithmetic {
    /// `6XKK`
    LoadByte { x: usize, kk: u8 },
    /// `7XKK`
    AddByte { x: usize, kk: u8 },
    /// `8XY0`
    Load { x: usize, y: usize },
    /// `8XY1`
    Or { x: usize, y: usize },
    /// `8XY2`
    And { x: usize, y: usize },
    /// `8XY3`
    Xor { x: usize, y: usize },
    /// `8XY4`
    Add { x: usize, y: usize },
    /// `8XY5`
    Sub { x: usize, y: usize },
    /// `8XY6`
    ShiftRight { x: usize },
    /// `8XY7`
    SubNegated { x: usize, y: usize },
    /// `8XYE`
    ShiftLeft { x: usize },
    /// `CXKK`
    Random { x: usize, kk: u8 },
}

/// Moves between registers, the index register and memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transfer {
    /// `ANNN`
    LoadIndex { nnn: u16 },
    /// `FX1E`
    AddToIndex { x: usize },
    /// `FX29`
    LoadGlyph { x: usize },
    /// `FX33`
    StoreBcd { x: usize },
    /// `FX55`
    StoreRegisters { x: usize },
    /// `FX65`
    LoadRegisters { x: usize },
}

/// Delay and sound timer access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timing {
    /// `FX07`
    GetDelay { x: usize },
    /// `FX15`
    SetDelay { x: usize },
    /// `FX18`
    SetSound { x: usize },
}

/// Keypad tests and the blocking key wait.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// `EX9E`
    SkipIfPressed { x: usize },
    /// `EXA1`
    SkipIfNotPressed { x: usize },
    /// `FX0A`
    AwaitKey { x: usize },
}

/// Frame buffer mutations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Graphics {
    /// `00E0`
    Clear,
    /// `DXYN`
    Draw { x: usize, y: usize, n: u8 },
}

/// A fully decoded instruction, grouped by the part of the machine it works on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    Flow(Flow),
    Arithmetic(Arithmetic),
    Transfer(Transfer),
    Timing(Timing),
    Input(Input),
    Graphics(Graphics),
}

/// Matches a sub opcode against its table, anything not listed
/// is reported as an unknown opcode.
macro_rules! decode_table {
    ($opcode:expr, $key:expr; $( $pattern:pat => $instruction:expr ),+ $(,)?) => {
        match $key {
            $(
                $pattern => Ok($instruction),
            )+
            _ => Err(OpcodeError::UnknownOpcode($opcode)),
        }
    };
}

impl TryFrom<Opcode> for Instruction {
    type Error = OpcodeError;

    fn try_from(value: Opcode) -> Result<Self, Self::Error> {
        let (x, y, n) = value.xyn();
        let (_, kk) = value.xkk();
        let nnn = value.nnn();

        match value.family() {
            0x0 => decode_table!(value, value;
                0x00E0 => Instruction::Graphics(Graphics::Clear),
                0x00EE => Instruction::Flow(Flow::Return),
            ),
            0x1 => Ok(Instruction::Flow(Flow::Jump { nnn })),
            0x2 => Ok(Instruction::Flow(Flow::Call { nnn })),
            0x3 => Ok(Instruction::Flow(Flow::SkipIfEqualByte { x, kk })),
            0x4 => Ok(Instruction::Flow(Flow::SkipIfNotEqualByte { x, kk })),
            0x5 => decode_table!(value, n;
                0x0 => Instruction::Flow(Flow::SkipIfEqual { x, y }),
            ),
            0x6 => Ok(Instruction::Arithmetic(Arithmetic::LoadByte { x, kk })),
            0x7 => Ok(Instruction::Arithmetic(Arithmetic::AddByte { x, kk })),
            0x8 => decode_table!(value, n;
                0x0 => Instruction::Arithmetic(Arithmetic::Load { x, y }),
                0x1 => Instruction::Arithmetic(Arithmetic::Or { x, y }),
                0x2 => Instruction::Arithmetic(Arithmetic::And { x, y }),
                0x3 => Instruction::Arithmetic(Arithmetic::Xor { x, y }),
                0x4 => Instruction::Arithmetic(Arithmetic::Add { x, y }),
                0x5 => Instruction::Arithmetic(Arithmetic::Sub { x, y }),
                0x6 => Instruction::Arithmetic(Arithmetic::ShiftRight { x }),
                0x7 => Instruction::Arithmetic(Arithmetic::SubNegated { x, y }),
                0xE => Instruction::Arithmetic(Arithmetic::ShiftLeft { x }),
            ),
            0x9 => decode_table!(value, n;
                0x0 => Instruction::Flow(Flow::SkipIfNotEqual { x, y }),
            ),
            0xA => Ok(Instruction::Transfer(Transfer::LoadIndex { nnn })),
            0xB => Ok(Instruction::Flow(Flow::JumpOffset { nnn })),
            0xC => Ok(Instruction::Arithmetic(Arithmetic::Random { x, kk })),
            0xD => Ok(Instruction::Graphics(Graphics::Draw { x, y, n })),
            0xE => decode_table!(value, kk;
                0x9E => Instruction::Input(Input::SkipIfPressed { x }),
                0xA1 => Instruction::Input(Input::SkipIfNotPressed { x }),
            ),
            0xF => decode_table!(value, kk;
                0x07 => Instruction::Timing(Timing::GetDelay { x }),
                0x0A => Instruction::Input(Input::AwaitKey { x }),
                0x15 => Instruction::Timing(Timing::SetDelay { x }),
                0x18 => Instruction::Timing(Timing::SetSound { x }),
                0x1E => Instruction::Transfer(Transfer::AddToIndex { x }),
                0x29 => Instruction::Transfer(Transfer::LoadGlyph { x }),
                0x33 => Instruction::Transfer(Transfer::StoreBcd { x }),
                0x55 => Instruction::Transfer(Transfer::StoreRegisters { x }),
                0x65 => Instruction::Transfer(Transfer::LoadRegisters { x }),
            ),
            _ => Err(OpcodeError::UnknownOpcode(value)),
        }
    }
}

/// Represents a step of the program counter
/// this requires the enum ProgramCounterStep
/// to work.
pub trait ProgramCounter {
    /// will move the program counter by a step.
    fn advance(&mut self, step: ProgramCounterStep);
}

/// These are the traits that have to be full filled for a working opcode
/// table. Every group only validates and mutates, the provided
/// [`execute`](InstructionSet::execute) moves the program counter afterwards.
///
/// An implementation must check every precondition before touching any state,
/// so that an `Err` leaves the machine unchanged.
pub trait InstructionSet: ProgramCounter {
    /// will execute a single decoded instruction
    fn execute(&mut self, instruction: &Instruction) -> Result<Operation, ProcessError> {
        let (step, operation) = match instruction {
            Instruction::Flow(op) => (self.flow(op)?, Operation::None),
            Instruction::Arithmetic(op) => (self.arithmetic(op)?, Operation::None),
            Instruction::Transfer(op) => (self.transfer(op)?, Operation::None),
            Instruction::Timing(op) => (self.timing(op)?, Operation::None),
            Instruction::Input(op) => self.input(op)?,
            Instruction::Graphics(op) => self.graphics(op)?,
        };

        self.advance(step);
        Ok(operation)
    }

    /// - `00EE` - Flow     - `return;`             - Returns from a subroutine.
    /// - `1NNN` - Flow     - `goto NNN;`           - Jumps to address `NNN`.
    /// - `2NNN` - Flow     - `*(0xNNN)()`          - Calls subroutine at `NNN`.
    /// - `3XKK` - Cond     - `if(Vx==KK)`          - Skips the next instruction if `VX` equals `KK`.
    /// - `4XKK` - Cond     - `if(Vx!=KK)`          - Skips the next instruction if `VX` doesn't equal `KK`.
    /// - `5XY0` - Cond     - `if(Vx==Vy)`          - Skips the next instruction if `VX` equals `VY`.
    /// - `9XY0` - Cond     - `if(Vx!=Vy)`          - Skips the next instruction if `VX` doesn't equal `VY`.
    /// - `BNNN` - Flow     - `PC=V0+NNN`           - Jumps to the address `NNN` plus `V0`.
    fn flow(&mut self, op: &Flow) -> Result<ProgramCounterStep, ProcessError>;

    /// - `6XKK` - Const    - `Vx = KK`             - Sets `VX` to `KK`.
    /// - `7XKK` - Const    - `Vx += KK`            - Adds `KK` to `VX`. (Carry flag is not changed)
    /// - `8XY0` - Assign   - `Vx=Vy`               - Sets `VX` to the value of `VY`.
    /// - `8XY1` - BitOp    - `Vx=Vx|Vy`            - Sets `VX` to `VX` or `VY`.
    /// - `8XY2` - BitOp    - `Vx=Vx&Vy`            - Sets `VX` to `VX` and `VY`.
    /// - `8XY3` - BitOp    - `Vx=Vx^Vy`            - Sets `VX` to `VX` xor `VY`.
    /// - `8XY4` - Math     - `Vx += Vy`            - `VF` is set to `1` when there's a carry, and to `0` when there isn't.
    /// - `8XY5` - Math     - `Vx -= Vy`            - `VF` is set to `0` when there's a borrow, and `1` when there isn't.
    /// - `8XY6` - BitOp    - `Vx>>=1`              - Stores the least significant bit of `VX` in `VF`.
    /// - `8XY7` - Math     - `Vx=Vy-Vx`            - `VF` is set to `0` when there's a borrow, and `1` when there isn't.
    /// - `8XYE` - BitOp    - `Vx<<=1`              - Stores the most significant bit of `VX` in `VF`.
    /// - `CXKK` - Rand     - `Vx=rand()&KK`        - Sets `VX` to a random byte masked with `KK`.
    fn arithmetic(&mut self, op: &Arithmetic) -> Result<ProgramCounterStep, ProcessError>;

    /// - `ANNN` - MEM      - `I = NNN`             - Sets `I` to the address `NNN`.
    /// - `FX1E` - MEM      - `I +=Vx`              - Adds `VX` to `I`. `VF` is not affected.
    /// - `FX29` - MEM      - `I=sprite_addr[Vx]`   - Sets `I` to the location of the glyph for `VX`.
    /// - `FX33` - BCD      - `set_BCD(Vx)`         - Stores the hundreds, tens and ones of `VX` at `I`, `I+1`, `I+2`.
    /// - `FX55` - MEM      - `reg_dump(Vx,&I)`     - Stores `V0` to `VX` in memory starting at `I`.
    /// - `FX65` - MEM      - `reg_load(Vx,&I)`     - Fills `V0` to `VX` from memory starting at `I`.
    fn transfer(&mut self, op: &Transfer) -> Result<ProgramCounterStep, ProcessError>;

    /// - `FX07` - Timer    - `Vx = get_delay()`    - Sets `VX` to the value of the delay timer.
    /// - `FX15` - Timer    - `delay_timer(Vx)`     - Sets the delay timer to `VX`.
    /// - `FX18` - Sound    - `sound_timer(Vx)`     - Sets the sound timer to `VX`.
    fn timing(&mut self, op: &Timing) -> Result<ProgramCounterStep, ProcessError>;

    /// - `EX9E` - KeyOp    - `if(key()==Vx)`       - Skips the next instruction if the key stored in `VX` is pressed.
    /// - `EXA1` - KeyOp    - `if(key()!=Vx)`       - Skips the next instruction if the key stored in `VX` isn't pressed.
    /// - `FX0A` - KeyOp    - `Vx = get_key()`      - A key press is awaited, and then stored in `VX`.
    fn input(&mut self, op: &Input) -> Result<(ProgramCounterStep, Operation), ProcessError>;

    /// - `00E0` - Display  - `disp_clear()`        - Clears the screen.
    /// - `DXYN` - Disp     - `draw(Vx,Vy,N)`       - Draws an `8xN` sprite from `I` at `(VX, VY)`, `VF` reports a collision.
    fn graphics(&mut self, op: &Graphics) -> Result<(ProgramCounterStep, Operation), ProcessError>;
}

#[cfg(test)]
mod tests {
    use std::convert::TryInto;

    use super::*;

    #[test]
    fn test_tryfrom_opcode_simple() {
        let value: Opcode = 0x00E0;
        let conv = value.try_into();
        assert_eq!(conv, Ok(Instruction::Graphics(Graphics::Clear)));
    }

    #[test]
    fn test_tryfrom_opcode_simple_fail() {
        let value: Opcode = 0x00E1;
        let conv: Result<Instruction, _> = value.try_into();
        assert_eq!(conv, Err(OpcodeError::UnknownOpcode(value)));
    }

    #[test]
    fn test_tryfrom_opcode_multiple() {
        let tests = [
            (0x00E0, Ok(Instruction::Graphics(Graphics::Clear))),
            (0x00EE, Ok(Instruction::Flow(Flow::Return))),
            (0x0000, Err("")),
            (0x0123, Err("")),
            (0x1919, Ok(Instruction::Flow(Flow::Jump { nnn: 0x919 }))),
            (0x2222, Ok(Instruction::Flow(Flow::Call { nnn: 0x222 }))),
            (
                0x3123,
                Ok(Instruction::Flow(Flow::SkipIfEqualByte { x: 0x1, kk: 0x23 })),
            ),
            (
                0x4123,
                Ok(Instruction::Flow(Flow::SkipIfNotEqualByte { x: 0x1, kk: 0x23 })),
            ),
            (
                0x5120,
                Ok(Instruction::Flow(Flow::SkipIfEqual { x: 0x1, y: 0x2 })),
            ),
            (0x5121, Err("")),
            (
                0x6123,
                Ok(Instruction::Arithmetic(Arithmetic::LoadByte { x: 0x1, kk: 0x23 })),
            ),
            (
                0x7123,
                Ok(Instruction::Arithmetic(Arithmetic::AddByte { x: 0x1, kk: 0x23 })),
            ),
            (
                0x8120,
                Ok(Instruction::Arithmetic(Arithmetic::Load { x: 0x1, y: 0x2 })),
            ),
            (
                0x8121,
                Ok(Instruction::Arithmetic(Arithmetic::Or { x: 0x1, y: 0x2 })),
            ),
            (
                0x8122,
                Ok(Instruction::Arithmetic(Arithmetic::And { x: 0x1, y: 0x2 })),
            ),
            (
                0x8123,
                Ok(Instruction::Arithmetic(Arithmetic::Xor { x: 0x1, y: 0x2 })),
            ),
            (
                0x8124,
                Ok(Instruction::Arithmetic(Arithmetic::Add { x: 0x1, y: 0x2 })),
            ),
            (
                0x8125,
                Ok(Instruction::Arithmetic(Arithmetic::Sub { x: 0x1, y: 0x2 })),
            ),
            (
                0x8126,
                Ok(Instruction::Arithmetic(Arithmetic::ShiftRight { x: 0x1 })),
            ),
            (
                0x8127,
                Ok(Instruction::Arithmetic(Arithmetic::SubNegated { x: 0x1, y: 0x2 })),
            ),
            (
                0x812E,
                Ok(Instruction::Arithmetic(Arithmetic::ShiftLeft { x: 0x1 })),
            ),
            (0x8128, Err("")),
            (
                0x9120,
                Ok(Instruction::Flow(Flow::SkipIfNotEqual { x: 0x1, y: 0x2 })),
            ),
            (0x9121, Err("")),
            (
                0xA222,
                Ok(Instruction::Transfer(Transfer::LoadIndex { nnn: 0x222 })),
            ),
            (0xB222, Ok(Instruction::Flow(Flow::JumpOffset { nnn: 0x222 }))),
            (
                0xC123,
                Ok(Instruction::Arithmetic(Arithmetic::Random { x: 0x1, kk: 0x23 })),
            ),
            (
                0xD123,
                Ok(Instruction::Graphics(Graphics::Draw {
                    x: 0x1,
                    y: 0x2,
                    n: 0x3,
                })),
            ),
            (0xE19E, Ok(Instruction::Input(Input::SkipIfPressed { x: 0x1 }))),
            (
                0xE1A1,
                Ok(Instruction::Input(Input::SkipIfNotPressed { x: 0x1 })),
            ),
            (0xE111, Err("")),
            (0xF007, Ok(Instruction::Timing(Timing::GetDelay { x: 0x0 }))),
            (0xF00A, Ok(Instruction::Input(Input::AwaitKey { x: 0x0 }))),
            (0xF015, Ok(Instruction::Timing(Timing::SetDelay { x: 0x0 }))),
            (0xF018, Ok(Instruction::Timing(Timing::SetSound { x: 0x0 }))),
            (
                0xF01E,
                Ok(Instruction::Transfer(Transfer::AddToIndex { x: 0x0 })),
            ),
            (
                0xF029,
                Ok(Instruction::Transfer(Transfer::LoadGlyph { x: 0x0 })),
            ),
            (0xF033, Ok(Instruction::Transfer(Transfer::StoreBcd { x: 0x0 }))),
            (
                0xF055,
                Ok(Instruction::Transfer(Transfer::StoreRegisters { x: 0x0 })),
            ),
            (
                0xF065,
                Ok(Instruction::Transfer(Transfer::LoadRegisters { x: 0x0 })),
            ),
            (0xF0AA, Err("")),
            (0xFFFF, Err("")),
        ];
        for (value, res) in tests {
            let conv: Result<Instruction, _> = value.try_into();
            assert_eq!(conv, res.map_err(|_| OpcodeError::UnknownOpcode(value)));
        }
    }

    #[test]
    fn test_program_counter_step_none() {
        assert_eq!(0x0200, ProgramCounterStep::None.apply(0x0200));
    }
}
