use thiserror::Error;

use crate::opcode::Opcode;

/// Every way a single [`step`](crate::Interpreter::step) can fail.
///
/// The machine state is left untouched whenever one of these is returned.
#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
pub enum ProcessError {
    #[error("Invalid opcode state '{0}'.")]
    Opcode(#[from] OpcodeError),
    #[error("Invalid stack state '{0}'.")]
    Stack(#[from] StackError),
    #[error("Invalid memory access '{0}'.")]
    Memory(#[from] MemoryError),
}

#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
pub enum OpcodeError {
    #[error("An unsupported opcode was used {0:#06X?}.")]
    UnknownOpcode(Opcode),
}

#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
pub enum StackError {
    #[error("Stack is full!")]
    Overflow,
    #[error("Stack is empty!")]
    Underflow,
}

#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
pub enum MemoryError {
    #[error("Address {address:#06X} is out of range, if memory len is {len}")]
    AddressOutOfRange { address: usize, len: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err: ProcessError = OpcodeError::UnknownOpcode(0xFFFF).into();
        assert_eq!(
            "Invalid opcode state 'An unsupported opcode was used 0xFFFF.'.",
            err.to_string()
        );

        let err: ProcessError = StackError::Overflow.into();
        assert_eq!("Invalid stack state 'Stack is full!'.", err.to_string());

        let err = MemoryError::AddressOutOfRange {
            address: 0x1000,
            len: 4096,
        };
        assert_eq!(
            "Address 0x1000 is out of range, if memory len is 4096",
            err.to_string()
        );
    }
}
