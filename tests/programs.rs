//! Runs small hand assembled programs through the public interface of the interpreter.
//!
//! Tests cover:
//! - Loops and conditional skips
//! - Subroutine calls and returns
//! - Drawing glyphs from the built in font
//! - Memory transfer through the index register
//! - Waiting for key presses
//! - Recovery after a failed step

use chip8_interpreter::{
    definitions::{cpu, display},
    opcode::Operation,
    Config, Interpreter, OpcodeError, ProcessError,
};

const SEED: u64 = 42;

/// Helper function to create an interpreter with the program loaded
fn setup_chip(program: &[u8]) -> Interpreter {
    let mut chip = Interpreter::with_config(Config::new().with_seed(SEED));
    chip.load_program(program).unwrap();
    chip
}

/// Steps until the program counter reaches `target`, returns the amount of steps taken.
fn run_until(chip: &mut Interpreter, target: u16, limit: usize) -> usize {
    for steps in 0..limit {
        if chip.program_counter() == target {
            return steps;
        }
        chip.step().unwrap();
    }
    panic!("{:#06X} was not reached after {} steps", target, limit);
}

#[test]
fn test_countdown_loop() {
    #[rustfmt::skip]
    let mut chip = setup_chip(&[
        0x60, 0x05, // 0x200: V0 = 5
        0x70, 0xFF, // 0x202: V0 += 0xFF
        0x30, 0x00, // 0x204: skip if V0 == 0
        0x12, 0x02, // 0x206: jump 0x202
        0x12, 0x08, // 0x208: jump 0x208
    ]);

    // load, then five rounds of add, skip and jump minus the last jump
    assert_eq!(1 + 5 * 3 - 1, run_until(&mut chip, 0x208, 100));
    assert_eq!(0, chip.registers()[0x0]);
    // VF is not touched by the byte addition
    assert_eq!(0, chip.registers()[0xF]);
}

#[test]
fn test_subroutine() {
    #[rustfmt::skip]
    let mut chip = setup_chip(&[
        0x22, 0x06, // 0x200: call 0x206
        0x61, 0x01, // 0x202: V1 = 1
        0x12, 0x04, // 0x204: jump 0x204
        0x60, 0x42, // 0x206: V0 = 0x42
        0x00, 0xEE, // 0x208: return
    ]);

    chip.step().unwrap();
    assert_eq!(0x206, chip.program_counter());
    assert_eq!(&[cpu::PROGRAM_COUNTER], chip.stack());

    assert_eq!(4, run_until(&mut chip, 0x204, 10) + 1);
    assert_eq!(0x42, chip.registers()[0x0]);
    assert_eq!(0x01, chip.registers()[0x1]);
    assert_eq!(0, chip.stack_pointer());
}

#[test]
fn test_draw_font_glyph() {
    #[rustfmt::skip]
    let mut chip = setup_chip(&[
        0x60, 0x0A, // V0 = 0xA
        0xF0, 0x29, // I = glyph V0
        0x61, 0x08, // V1 = 8
        0x62, 0x04, // V2 = 4
        0xD1, 0x25, // draw 5 rows at (V1, V2)
    ]);
    chip.clear_redraw();

    for _ in 0..4 {
        assert_eq!(Ok(Operation::None), chip.step());
    }
    assert!(!chip.redraw_requested());
    assert_eq!(Ok(Operation::Draw), chip.step());
    assert!(chip.redraw_requested());
    assert_eq!(0, chip.registers()[0xF]);

    // `A` is 0xF0 0x90 0xF0 0x90 0x90
    let expected: [[u8; 4]; 5] = [
        [1, 1, 1, 1],
        [1, 0, 0, 1],
        [1, 1, 1, 1],
        [1, 0, 0, 1],
        [1, 0, 0, 1],
    ];
    for (row, pixels) in expected.iter().enumerate() {
        let line = chip.frame_buffer().row(4 + row);
        assert_eq!(&pixels[..], &line[8..12]);
        assert_eq!(0, line[12]);
    }

    let lit = chip.display().iter().filter(|pixel| **pixel == 1).count();
    assert_eq!(14, lit);
    assert_eq!(display::RESOLUTION, chip.display().len());
}

#[test]
fn test_bcd_round_trip_through_memory() {
    #[rustfmt::skip]
    let mut chip = setup_chip(&[
        0x60, 0x7B, // V0 = 123
        0xA3, 0x00, // I = 0x300
        0xF0, 0x33, // BCD of V0 at I
        0xF2, 0x65, // V0..=V2 = memory[I..]
    ]);

    for _ in 0..4 {
        chip.step().unwrap();
    }
    assert_eq!(&[1, 2, 3], &chip.registers()[..3]);
    assert_eq!(&[1, 2, 3], &chip.memory()[0x300..0x303]);
}

#[test]
fn test_wait_for_key() {
    #[rustfmt::skip]
    let mut chip = setup_chip(&[
        0xF5, 0x0A, // V5 = next key
        0x12, 0x02, // jump 0x202
    ]);

    assert_eq!(Ok(Operation::Wait), chip.step());
    assert_eq!(Ok(Operation::Wait), chip.step());
    assert_eq!(cpu::PROGRAM_COUNTER, chip.program_counter());

    chip.set_key(0xE, true);
    assert_eq!(Ok(Operation::None), chip.step());
    assert_eq!(0xE, chip.registers()[0x5]);
    assert_eq!(0x202, chip.program_counter());
}

#[test]
fn test_recover_after_failure() {
    let mut chip = setup_chip(&[0x60, 0x01, 0xFF, 0xFF]);
    chip.step().unwrap();

    let err = ProcessError::Opcode(OpcodeError::UnknownOpcode(0xFFFF));
    assert_eq!(Err(err), chip.step());
    // the machine stays where it failed
    assert_eq!(Err(err), chip.step());
    assert_eq!(0x202, chip.program_counter());
    assert_eq!(0x01, chip.registers()[0x0]);

    chip.initialize();
    assert_eq!(cpu::PROGRAM_COUNTER, chip.program_counter());
    assert_eq!(0x00, chip.registers()[0x0]);
    assert_eq!(
        "Invalid opcode state 'An unsupported opcode was used 0xFFFF.'.",
        err.to_string()
    );
}
