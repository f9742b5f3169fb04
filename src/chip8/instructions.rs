use crate::{
    definitions::{cpu, display},
    opcode::{
        Arithmetic, Flow, Graphics, Input, InstructionSet, Operation, ProgramCounterStep, Timing,
        Transfer,
    },
    timer::TimerCallback,
    ProcessError,
};

use super::Interpreter;

/// the modulus of all byte sized arithmetic
const BYTE_MODULUS: u16 = 0x100;

/// the modulus of the index register
const INDEX_MODULUS: u32 = 0x1_0000;

/// only the lower nibble of a register can address a key or a glyph
const NIBBLE_MASK: u8 = 0xF;

/// truncates a widened result back to a byte
#[inline]
fn wrap_byte(value: u16) -> u8 {
    (value % BYTE_MODULUS) as u8
}

impl<S: TimerCallback> Interpreter<S> {
    /// register `x` widened for carry aware arithmetic
    #[inline]
    fn wide(&self, x: usize) -> u16 {
        u16::from(self.registers[x])
    }

    /// The flag is written first, so if `X` is `F` the result wins.
    #[inline]
    fn store_with_flag(&mut self, x: usize, value: u8, flag: bool) {
        self.registers[cpu::register::LAST] = flag as u8;
        self.registers[x] = value;
    }
}

impl<S> InstructionSet for Interpreter<S>
where
    S: TimerCallback,
{
    fn flow(&mut self, op: &Flow) -> Result<ProgramCounterStep, ProcessError> {
        let step = match *op {
            Flow::Return => {
                // resume at the instruction following the call
                let pointer = self.pop_stack()?;
                ProgramCounterStep::Jump(ProgramCounterStep::Next.apply(pointer))
            }
            Flow::Jump { nnn } => ProgramCounterStep::Jump(nnn),
            Flow::Call { nnn } => {
                self.push_stack(self.program_counter)?;
                ProgramCounterStep::Jump(nnn)
            }
            Flow::SkipIfEqualByte { x, kk } => ProgramCounterStep::cond(self.registers[x] == kk),
            Flow::SkipIfNotEqualByte { x, kk } => {
                ProgramCounterStep::cond(self.registers[x] != kk)
            }
            Flow::SkipIfEqual { x, y } => {
                ProgramCounterStep::cond(self.registers[x] == self.registers[y])
            }
            Flow::SkipIfNotEqual { x, y } => {
                ProgramCounterStep::cond(self.registers[x] != self.registers[y])
            }
            Flow::JumpOffset { nnn } => {
                ProgramCounterStep::Jump(nnn + u16::from(self.registers[0]))
            }
        };
        Ok(step)
    }

    fn arithmetic(&mut self, op: &Arithmetic) -> Result<ProgramCounterStep, ProcessError> {
        match *op {
            Arithmetic::LoadByte { x, kk } => self.registers[x] = kk,
            Arithmetic::AddByte { x, kk } => {
                // no carry here
                self.registers[x] = wrap_byte(self.wide(x) + u16::from(kk));
            }
            Arithmetic::Load { x, y } => self.registers[x] = self.registers[y],
            Arithmetic::Or { x, y } => self.registers[x] |= self.registers[y],
            Arithmetic::And { x, y } => self.registers[x] &= self.registers[y],
            Arithmetic::Xor { x, y } => self.registers[x] ^= self.registers[y],
            Arithmetic::Add { x, y } => {
                let sum = self.wide(x) + self.wide(y);
                self.store_with_flag(x, wrap_byte(sum), sum > 0xFF);
            }
            Arithmetic::Sub { x, y } => {
                let (left, right) = (self.wide(x), self.wide(y));
                let diff = wrap_byte(BYTE_MODULUS + left - right);
                self.store_with_flag(x, diff, left >= right);
            }
            Arithmetic::ShiftRight { x } => {
                let value = self.wide(x);
                self.store_with_flag(x, (value >> 1) as u8, value & 0x1 == 0x1);
            }
            Arithmetic::SubNegated { x, y } => {
                let (left, right) = (self.wide(y), self.wide(x));
                let diff = wrap_byte(BYTE_MODULUS + left - right);
                self.store_with_flag(x, diff, left >= right);
            }
            Arithmetic::ShiftLeft { x } => {
                let value = self.wide(x);
                self.store_with_flag(x, wrap_byte(value << 1), value >> 7 == 0x1);
            }
            Arithmetic::Random { x, kk } => {
                // using a fill bytes call here, as the trait RngCore does not
                // support random u8.
                let mut random = [0u8; 1];
                self.rng.fill_bytes(&mut random);
                self.registers[x] = random[0] & kk;
            }
        }
        Ok(ProgramCounterStep::Next)
    }

    fn transfer(&mut self, op: &Transfer) -> Result<ProgramCounterStep, ProcessError> {
        match *op {
            Transfer::LoadIndex { nnn } => self.index_register = nnn,
            Transfer::AddToIndex { x } => {
                let sum = u32::from(self.index_register) + u32::from(self.registers[x]);
                self.index_register = (sum % INDEX_MODULUS) as u16;
            }
            Transfer::LoadGlyph { x } => {
                let digit = (self.registers[x] & NIBBLE_MASK) as usize;
                let address =
                    display::fontset::LOCATION + display::fontset::GLYPH_SIZE * digit;
                self.index_register = address as u16;
            }
            Transfer::StoreBcd { x } => {
                let range = self.index_range(3)?;
                let value = self.registers[x];
                self.memory[range].copy_from_slice(&[value / 100, value / 10 % 10, value % 10]);
            }
            Transfer::StoreRegisters { x } => {
                let range = self.index_range(x + 1)?;
                self.memory[range].copy_from_slice(&self.registers[..=x]);
            }
            Transfer::LoadRegisters { x } => {
                let range = self.index_range(x + 1)?;
                self.registers[..=x].copy_from_slice(&self.memory[range]);
            }
        }
        Ok(ProgramCounterStep::Next)
    }

    fn timing(&mut self, op: &Timing) -> Result<ProgramCounterStep, ProcessError> {
        match *op {
            Timing::GetDelay { x } => self.registers[x] = self.delay_timer.get_value(),
            Timing::SetDelay { x } => self.delay_timer.set_value(self.registers[x]),
            Timing::SetSound { x } => self.sound_timer.set_value(self.registers[x]),
        }
        Ok(ProgramCounterStep::Next)
    }

    fn input(&mut self, op: &Input) -> Result<(ProgramCounterStep, Operation), ProcessError> {
        let key = |chip: &Self, x: usize| (chip.registers[x] & NIBBLE_MASK) as usize;

        let res = match *op {
            Input::SkipIfPressed { x } => {
                let pressed = self.keypad.is_pressed(key(self, x));
                (ProgramCounterStep::cond(pressed), Operation::None)
            }
            Input::SkipIfNotPressed { x } => {
                let pressed = self.keypad.is_pressed(key(self, x));
                (ProgramCounterStep::cond(!pressed), Operation::None)
            }
            Input::AwaitKey { x } => match self.keypad.first_pressed() {
                Some(pressed) => {
                    self.registers[x] = pressed as u8;
                    (ProgramCounterStep::Next, Operation::None)
                }
                // retry the very same instruction on the next step
                None => (ProgramCounterStep::None, Operation::Wait),
            },
        };
        Ok(res)
    }

    fn graphics(&mut self, op: &Graphics) -> Result<(ProgramCounterStep, Operation), ProcessError> {
        match *op {
            Graphics::Clear => self.frame_buffer.clear(),
            Graphics::Draw { x, y, n } => {
                let range = self.index_range(n as usize)?;
                let coorx = self.registers[x] as usize;
                let coory = self.registers[y] as usize;

                let collision = self.frame_buffer.draw(
                    coorx,
                    coory,
                    &self.memory[range],
                    self.config.sprite_edge,
                );
                self.registers[cpu::register::LAST] = collision as u8;
            }
        }
        Ok((ProgramCounterStep::Next, Operation::Draw))
    }
}
