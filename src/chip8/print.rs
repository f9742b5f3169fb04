//! The pretty print implementation of the [`Interpreter`](super::Interpreter).
//! This implementation was split up into this file for smaller file sizes and higher
//! cohesion.

use std::fmt::{self, Write};

use once_cell::sync::Lazy;

use super::Interpreter;
use crate::{definitions::cpu, timer::TimerCallback};

/// The length of the pretty print data
/// as a single instruction is u16 the octa
/// size will show how often the block shall
/// be repeated has to be bigger then 2
const HEX_PRINT_STEP: usize = 8;

const END_OF_LINE: char = '\n';
const INDENT_FILLAMENT: char = '\t';
const INDENT_SIZE: usize = 2;

/// Will add an indent
fn indent_helper(text: &mut String, indent: usize) {
    for _ in 0..indent {
        text.push(INDENT_FILLAMENT);
    }
}

/// The formatted string will be 2 symbols for the prefix (0x)
/// and 4 for the rest long.
macro_rules! intformat {
    () => {
        "{:#06X}"
    };
}

static POINTER_LEN: Lazy<usize> = Lazy::new(|| {
    let mut line = String::with_capacity(20);
    // If there was an error panicing here is correct,
    // as some essential component of printing went
    // wrongly.
    pointer_print::formatter(&mut line, 0, 0).unwrap();
    line.len()
});

static INTEGER_LEN: Lazy<usize> = Lazy::new(|| {
    let mut string = String::new();
    integer_print::formatter(&mut string, 0u8).unwrap();
    string.len()
});

/// a line lenght (This is a bit bigger then the actual line will be)
static LENLINE: Lazy<usize> =
    Lazy::new(|| INDENT_SIZE + HEX_PRINT_STEP * (*INTEGER_LEN + 1) + 1 + *POINTER_LEN);

/// Handles all the printing of the pointer values.
mod pointer_print {
    use std::fmt::Write;

    /// will formatt the pointers according to definition
    pub(super) fn formatter(line: &mut String, from: usize, to: usize) -> std::fmt::Result {
        write!(line, concat!(intformat!(), " - ", intformat!(), " :"), from, to)
    }
}

/// handles printting of any and all of intergers.
mod integer_print {
    use super::{pointer_print, HEX_PRINT_STEP};
    use num_traits::Unsigned;
    use std::fmt::{self, Write};

    /// will format all integer types
    pub(super) fn formatter<T>(line: &mut String, data: T) -> fmt::Result
    where
        T: fmt::UpperHex + Unsigned + Copy,
    {
        write!(line, intformat!(), data)
    }

    /// will pretty print all the integer data given, the offsets
    /// are calculated from the beginning of the data block
    pub(super) fn printer<T>(data: &[T], indent: usize) -> Result<String, fmt::Error>
    where
        T: fmt::UpperHex + Unsigned + Copy,
    {
        let mut res = String::with_capacity(*super::LENLINE * (data.len() / HEX_PRINT_STEP + 1));

        for from in (0..data.len()).step_by(HEX_PRINT_STEP) {
            let to = (from + HEX_PRINT_STEP - 1).min(data.len() - 1);

            super::indent_helper(&mut res, indent);
            pointer_print::formatter(&mut res, from, to)?;

            for entry in &data[from..=to] {
                res.push(' ');
                formatter(&mut res, *entry)?;
            }
            res.push(super::END_OF_LINE);
        }

        // Remove unneded new line
        if res.ends_with(super::END_OF_LINE) {
            res.pop();
        }

        Ok(res)
    }
}

/// Handles all the boolean data types.
mod bool_print {
    use super::{pointer_print, Lazy, END_OF_LINE, HEX_PRINT_STEP};

    /// the prepared true string
    static TRUE: Lazy<String> = Lazy::new(|| formatter("true"));
    /// the prepared false string
    static FALSE: Lazy<String> = Lazy::new(|| formatter("false"));

    /// a function to keep the correct format length
    fn formatter(message: &str) -> String {
        format!("{:width$}", message, width = *super::INTEGER_LEN)
    }

    /// will pretty print all the boolean data given
    pub(super) fn printer(data: &[bool], indent: usize) -> Result<String, std::fmt::Error> {
        let mut res = String::with_capacity(*super::LENLINE * (data.len() / HEX_PRINT_STEP + 1));

        let check_type = |val: bool| if val { &*TRUE } else { &*FALSE };

        for from in (0..data.len()).step_by(HEX_PRINT_STEP) {
            let to = (from + HEX_PRINT_STEP - 1).min(data.len() - 1);
            super::indent_helper(&mut res, indent);
            pointer_print::formatter(&mut res, from, to)?;

            let line = data[from..=to]
                .iter()
                .map(|value| check_type(*value).as_str())
                .collect::<Vec<_>>()
                .join(" ");
            res.push(' ');
            res.push_str(line.trim_end());
            res.push(END_OF_LINE);
        }

        if res.ends_with(END_OF_LINE) {
            res.pop();
        }

        Ok(res)
    }
}

/// Handles the memory, printed as opcodes, with runs of empty rows collapsed.
mod memory_print {
    use super::{integer_print, pointer_print, Lazy, HEX_PRINT_STEP};
    use crate::{definitions::memory, opcode::Opcode};
    use std::fmt::{self, Write};

    /// The amount of bytes a single row covers.
    const POINTER_INCREMENT: usize = HEX_PRINT_STEP * memory::opcodes::SIZE as usize;
    /// The values that are used when a row contains only zeros.
    const FILLER_BASE: &str = "...";

    /// Prepares the line that will be used, in the case that a row is empty.
    static ZERO_FILLER: Lazy<String> = Lazy::new(|| {
        let mut formatted = String::new();
        // SAFTY: If there is an error here panicing is correct
        integer_print::formatter(&mut formatted, 0u16).unwrap();

        let lenght = formatted.len() * (HEX_PRINT_STEP - 2) + (HEX_PRINT_STEP - 1)
            - FILLER_BASE.len();
        let filler = " ".repeat(lenght / 2);

        format!("{0}{1}{2}{1}{0}", formatted, filler, FILLER_BASE)
    });

    /// this struct will simulate a single row of opcodes
    struct Row {
        from: usize,
        to: usize,
        data: Vec<Opcode>,
    }

    impl Row {
        fn only_null(&self) -> bool {
            self.data.iter().all(|opcode| *opcode == 0)
        }
    }

    impl fmt::Display for Row {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            let mut res = String::with_capacity(*super::LENLINE);
            pointer_print::formatter(&mut res, self.from, self.to)?;
            res.push(' ');

            if self.only_null() {
                res.push_str(&ZERO_FILLER);
            } else {
                let entries = self
                    .data
                    .iter()
                    .map(|opcode| format!(intformat!(), opcode))
                    .collect::<Vec<_>>();
                res.push_str(&entries.join(" "));
            }
            write!(f, "{}", res)
        }
    }

    /// will pretty print the content of the raw memory, the offsets
    /// are calculated from the beginning of the memory block
    pub(super) fn printer(memory: &[u8], indent: usize) -> Result<String, fmt::Error> {
        let mut rows: Vec<Row> = Vec::with_capacity(memory.len() / POINTER_INCREMENT + 1);

        for (index, chunk) in memory.chunks(POINTER_INCREMENT).enumerate() {
            let from = index * POINTER_INCREMENT;
            let row = Row {
                from,
                to: from + chunk.len() - 1,
                data: chunk
                    .chunks(memory::opcodes::SIZE as usize)
                    .map(|pair| match pair {
                        [high, low] => Opcode::from_be_bytes([*high, *low]),
                        [high] => Opcode::from_be_bytes([*high, 0]),
                        _ => 0,
                    })
                    .collect(),
            };

            match rows.last_mut() {
                // merge consecutive empty rows into a single one
                Some(last) if last.only_null() && row.only_null() => last.to = row.to,
                _ => rows.push(row),
            }
        }

        let mut string = String::with_capacity((*super::LENLINE + 1) * rows.len());
        for row in rows {
            super::indent_helper(&mut string, indent);
            writeln!(string, "{}", row)?;
        }
        if string.ends_with(super::END_OF_LINE) {
            string.pop();
        }
        Ok(string)
    }
}

/// prints a single value with the given indent
fn single<T>(value: T) -> Result<String, fmt::Error>
where
    T: fmt::UpperHex + num_traits::Unsigned + Copy,
{
    let mut res = String::with_capacity(*INTEGER_LEN + INDENT_SIZE);
    indent_helper(&mut res, INDENT_SIZE);
    integer_print::formatter(&mut res, value)?;
    Ok(res)
}

impl<S: TimerCallback> fmt::Display for Interpreter<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let opc = single(self.opcode)?;
        let prc = single(self.program_counter)?;
        let idx = single(self.index_register)?;
        let dlt = single(self.delay_timer.get_value())?;
        let snd = single(self.sound_timer.get_value())?;

        let mem = memory_print::printer(&self.memory, INDENT_SIZE)?;
        let reg = integer_print::printer(&self.registers, INDENT_SIZE)?;

        // handle stack specially as it needes to be filled up if empty
        let mut stack = [0u16; cpu::stack::SIZE];
        stack[..self.stack.len()].copy_from_slice(&self.stack);
        let sta = integer_print::printer(&stack, INDENT_SIZE)?;

        let key = bool_print::printer(self.keypad.keys(), INDENT_SIZE)?;

        let mut out = String::with_capacity(mem.len() + 4 * *LENLINE * 8);
        write!(
            out,
            "Interpreter {{\n\
                \tOpcode :\n{}\n\
                \tProgram Counter :\n{}\n\
                \tIndex Register :\n{}\n\
                \tDelay Timer :\n{}\n\
                \tSound Timer :\n{}\n\
                \tMemory :\n{}\n\
                \tKeypad :\n{}\n\
                \tStack :\n{}\n\
                \tRegister :\n{}\n\
                }}",
            opc, prc, idx, dlt, snd, mem, key, sta, reg
        )?;

        f.write_str(&out)
    }
}
