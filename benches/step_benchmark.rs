use chip8_interpreter::{Config, Interpreter};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// Counts V0 down and draws the matching glyph, forever.
#[rustfmt::skip]
const PROGRAM: [u8; 14] = [
    0x00, 0xE0, // 0x200: clear
    0x70, 0xFF, // 0x202: V0 -= 1
    0xF0, 0x29, // 0x204: I = glyph V0
    0xD1, 0x25, // 0x206: draw
    0xC2, 0xFF, // 0x208: V2 = random
    0x82, 0x04, // 0x20A: V2 += V0
    0x12, 0x00, // 0x20C: jump 0x200
];

/// will setup the default configured chip
fn get_default_chip() -> Interpreter {
    let mut chip = Interpreter::with_config(Config::new().with_seed(0));
    // the program is tiny, panicing here is correct
    chip.load_program(&PROGRAM).unwrap();
    chip
}

pub fn step_bench(c: &mut Criterion) {
    let mut chip = get_default_chip();
    c.bench_function("step_bench", |b| {
        b.iter(|| {
            let _ = black_box(chip.step());
        });
    });
}

pub fn print_bench(c: &mut Criterion) {
    let chip = get_default_chip();
    c.bench_function("print_bench", |b| {
        b.iter(|| {
            let _ = format!("{}", chip);
        });
    });
}

criterion_group!(benches, step_bench, print_bench);
criterion_main!(benches);
