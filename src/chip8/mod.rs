//! The full implementation of the chip8 interpreter, from the machine state and the
//! opcode table to an option to pretty print them.
mod instructions;
mod interpreter;
mod print;

/// reexport interpreter structs and data for simpler usage
pub use interpreter::*;
