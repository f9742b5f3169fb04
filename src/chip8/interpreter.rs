use std::{convert::TryFrom, ops::Range};

use {
    crate::{
        config::Config,
        definitions::{cpu, display, memory},
        devices::{FrameBuffer, Keypad},
        opcode::{
            fetch_opcode, Instruction, InstructionSet, Opcode, Operation, ProgramCounter,
            ProgramCounterStep,
        },
        timer::{NoCallback, Timer, TimerCallback},
        MemoryError, ProcessError, StackError,
    },
    rand::{rngs::StdRng, RngCore, SeedableRng},
    tinyvec::ArrayVec,
};

/// The Interpreter struct represents the current state
/// of the system, it contains all the structures
/// needed for emulating an instance of the
/// Chip8 CPU.
///
/// # Example
/// ```rust
/// # use chip8_interpreter::{Interpreter, opcode::Operation};
/// let mut chip = Interpreter::new();
/// // V0 = 0x05; V0 += 0x03
/// chip.load_program(&[0x60, 0x05, 0x70, 0x03]).unwrap();
///
/// assert_eq!(chip.step(), Ok(Operation::None));
/// assert_eq!(chip.step(), Ok(Operation::None));
/// assert_eq!(chip.registers()[0], 0x08);
/// assert_eq!(chip.program_counter(), 0x204);
/// ```
pub struct Interpreter<S = NoCallback>
where
    S: TimerCallback,
{
    pub(super) config: Config,
    /// the last successfully executed opcode, all two bytes long and stored big-endian
    pub(super) opcode: Opcode,
    /// - `0x000-0x04F` - The built in `4x5` pixel font set (`0-F`)
    /// - `0x050-0x1FF` - Reserved for the interpreter
    /// - `0x200-0xFFF` - Program ROM and work RAM
    pub(super) memory: Vec<u8>,
    /// `8-bit` data registers named `V0` to `VF`. The `VF` register doubles as a flag for some
    /// instructions; thus, it should be avoided. In an addition operation, `VF` is the carry flag,
    /// while in subtraction, it is the "no borrow" flag. In the draw instruction `VF` is set upon
    /// pixel collision.
    pub(super) registers: [u8; cpu::register::SIZE],
    /// The index register `I`, only the lower twelve bits address memory.
    pub(super) index_register: u16,
    /// The address of the next instruction to be executed from memory.
    pub(super) program_counter: u16,
    /// The stack is only used to store return addresses when subroutines are called.
    /// It holds up to `16` levels of nesting.
    pub(super) stack: ArrayVec<[u16; cpu::stack::SIZE]>,
    /// Delay timer: This timer is intended to be used for timing the events of games. Its value
    /// can be set and read. Counts down once per step, until it reaches 0.
    pub(super) delay_timer: Timer<NoCallback>,
    /// Sound timer: This timer is used for sound effects. When its value is nonzero, a beeping
    /// sound is made. Counts down once per step, until it reaches 0.
    pub(super) sound_timer: Timer<S>,
    pub(super) frame_buffer: FrameBuffer,
    pub(super) keypad: Keypad,
    /// This stores the random number generator, used by the `CXKK` opcode.
    /// It is stored into the interpreter, so as to enable simple mocking
    /// of the given type.
    pub(super) rng: Box<dyn RngCore + Send>,
}

impl Interpreter<NoCallback> {
    /// will create a new interpreter with the default configuration
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        Self::with_callback(config, NoCallback)
    }
}

impl Default for Interpreter<NoCallback> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: TimerCallback> Interpreter<S> {
    /// will create a new initialized interpreter, `beep` is run every time
    /// the sound timer runs out.
    pub fn with_callback(config: Config, beep: S) -> Self {
        let mut chip = Self {
            config,
            opcode: 0,
            memory: vec![0; memory::SIZE],
            registers: [0; cpu::register::SIZE],
            index_register: 0,
            program_counter: cpu::PROGRAM_COUNTER,
            stack: ArrayVec::default(),
            delay_timer: Timer::default(),
            sound_timer: Timer::with_callback(beep),
            frame_buffer: FrameBuffer::new(),
            keypad: Keypad::new(),
            rng: Box::new(StdRng::seed_from_u64(0)),
        };
        chip.initialize();
        chip
    }

    /// Will hard reset the machine.
    ///
    /// Clears memory, registers, stack, keypad, display and timers, loads the font set and
    /// reseeds the random source from the configuration.
    pub fn initialize(&mut self) {
        self.memory.iter_mut().for_each(|byte| *byte = 0);

        // load fonts
        let fontset = display::fontset::LOCATION
            ..(display::fontset::LOCATION + display::fontset::FONTSET.len());
        self.memory[fontset].copy_from_slice(&display::fontset::FONTSET);

        self.opcode = 0;
        self.registers = [0; cpu::register::SIZE];
        self.index_register = 0;
        self.program_counter = cpu::PROGRAM_COUNTER;
        self.stack.clear();
        self.delay_timer.reset();
        self.sound_timer.reset();
        self.keypad.reset();
        // the host shall paint the blank screen once
        self.frame_buffer.clear();

        self.rng = match self.config.seed {
            Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
            None => Box::new(StdRng::from_entropy()),
        };

        log::info!("initialized the interpreter with {:?}", self.config);
    }

    /// Will write the program into memory starting at the program counter start.
    pub fn load_program(&mut self, program: &[u8]) -> Result<(), ProcessError> {
        let start = cpu::PROGRAM_COUNTER as usize;
        let end = start + program.len();
        if end > self.memory.len() {
            return Err(MemoryError::AddressOutOfRange {
                address: self.memory.len(),
                len: self.memory.len(),
            }
            .into());
        }

        self.memory[start..end].copy_from_slice(program);
        log::info!("loaded a program of {} bytes", program.len());
        Ok(())
    }

    /// will advance the program by a single instruction and count both timers down
    ///
    /// Nothing is changed if an error is returned.
    pub fn step(&mut self) -> Result<Operation, ProcessError> {
        match self.cycle() {
            Ok(operation) => {
                self.delay_timer.tick();
                self.sound_timer.tick();
                Ok(operation)
            }
            Err(err) => {
                log::warn!("step at {:#06X} failed: {}", self.program_counter, err);
                Err(err)
            }
        }
    }

    /// fetch, decode and execute
    fn cycle(&mut self) -> Result<Operation, ProcessError> {
        let opcode = fetch_opcode(&self.memory, self.program_counter as usize)?;
        let instruction = Instruction::try_from(opcode)?;
        log::debug!("opcode {:#06X} at {:#06X}", opcode, self.program_counter);

        let operation = self.execute(&instruction)?;
        self.opcode = opcode;
        Ok(operation)
    }

    /// Will replace the random source used by `CXKK` until the next [`initialize`](Self::initialize).
    pub fn set_rng<R: RngCore + Send + 'static>(&mut self, rng: R) {
        self.rng = Box::new(rng);
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Will set the value of the given key
    pub fn set_key(&mut self, key: usize, pressed: bool) {
        self.keypad.set_key(key, pressed)
    }

    /// Will write keyboard data into interncal keyboard representation.
    pub fn set_keys(&mut self, keys: [bool; crate::definitions::keyboard::SIZE]) {
        self.keypad.set_keys(keys)
    }

    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    pub fn keypad_mut(&mut self) -> &mut Keypad {
        &mut self.keypad
    }

    pub fn frame_buffer(&self) -> &FrameBuffer {
        &self.frame_buffer
    }

    /// Will return a immutable slice of the current display, one byte per pixel
    pub fn display(&self) -> &[u8] {
        self.frame_buffer.pixels()
    }

    pub fn redraw_requested(&self) -> bool {
        self.frame_buffer.redraw_requested()
    }

    pub fn clear_redraw(&mut self) {
        self.frame_buffer.clear_redraw()
    }

    /// Is the tone currently playing
    pub fn sound_active(&self) -> bool {
        self.sound_timer.is_active()
    }

    /// How often the sound timer ran out since the last initialization
    pub fn beep_count(&self) -> usize {
        self.sound_timer.elapsed()
    }

    pub fn sound_callback(&self) -> &S {
        self.sound_timer.callback()
    }

    pub fn sound_callback_mut(&mut self) -> &mut S {
        self.sound_timer.callback_mut()
    }

    /// will return the sound timer
    pub fn sound_timer(&self) -> u8 {
        self.sound_timer.get_value()
    }

    /// will return the delay timer
    pub fn delay_timer(&self) -> u8 {
        self.delay_timer.get_value()
    }

    pub fn program_counter(&self) -> u16 {
        self.program_counter
    }

    pub fn index_register(&self) -> u16 {
        self.index_register
    }

    pub fn registers(&self) -> &[u8] {
        &self.registers
    }

    pub fn stack(&self) -> &[u16] {
        &self.stack
    }

    pub fn stack_pointer(&self) -> usize {
        self.stack.len()
    }

    pub fn memory(&self) -> &[u8] {
        &self.memory
    }

    /// the last successfully executed opcode
    pub fn current_opcode(&self) -> Opcode {
        self.opcode
    }

    /// Will push the pointer to the stack
    pub(super) fn push_stack(&mut self, pointer: u16) -> Result<(), StackError> {
        if self.stack.len() == self.stack.capacity() {
            Err(StackError::Overflow)
        } else {
            log::debug!("push {:#06X} to the stack", pointer);
            self.stack.push(pointer);
            Ok(())
        }
    }

    /// Will pop the last pointer from the stack
    pub(super) fn pop_stack(&mut self) -> Result<u16, StackError> {
        let pointer = self.stack.pop().ok_or(StackError::Underflow)?;
        log::debug!("pop {:#06X} from the stack", pointer);
        Ok(pointer)
    }

    /// The memory range `I..I + len`, if it is fully addressable.
    pub(super) fn index_range(&self, len: usize) -> Result<Range<usize>, MemoryError> {
        let start = self.index_register as usize;
        let end = start + len;
        if end > self.memory.len() {
            Err(MemoryError::AddressOutOfRange {
                address: start.max(self.memory.len()),
                len: self.memory.len(),
            })
        } else {
            Ok(start..end)
        }
    }
}

impl<S: TimerCallback> ProgramCounter for Interpreter<S> {
    fn advance(&mut self, step: ProgramCounterStep) {
        self.program_counter = step.apply(self.program_counter);
    }
}
