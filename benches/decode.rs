use barcode25::tools::render::{RenderOptions, render};
use barcode25::{BitMatrix, ScanEngine, Symbology};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn symbol(symbology: Symbology, value: &str) -> BitMatrix {
    let opts = RenderOptions {
        narrow: 3,
        wide: 8,
        quiet_zone: 20,
        height: 60,
    };
    render(symbology, value, &opts).expect("renderable value")
}

fn bench_industrial_12_digits(c: &mut Criterion) {
    let image = symbol(Symbology::Industrial, "123456789012");
    let engine = ScanEngine::new(Symbology::Industrial).with_digit_count(12);
    c.bench_function("industrial_decode_12", |b| {
        b.iter(|| engine.decode(black_box(&image)))
    });
}

fn bench_interleaved_12_digits(c: &mut Criterion) {
    let image = symbol(Symbology::Interleaved, "123456789012");
    let engine = ScanEngine::new(Symbology::Interleaved).with_digit_count(6);
    c.bench_function("interleaved_decode_12", |b| {
        b.iter(|| engine.decode(black_box(&image)))
    });
}

fn bench_symbol_low_in_image(c: &mut Criterion) {
    // seek cost dominates: 400 blank rows above the symbol
    let sym = symbol(Symbology::Industrial, "4711");
    let mut image = BitMatrix::new(sym.width(), sym.height() + 400);
    for y in 0..sym.height() {
        for x in 0..sym.width() {
            image.set(x, y + 400, sym.get(x, y));
        }
    }
    let engine = ScanEngine::new(Symbology::Industrial).with_digit_count(4);
    c.bench_function("industrial_decode_seek_400_rows", |b| {
        b.iter(|| engine.decode(black_box(&image)))
    });
}

fn bench_batch_64(c: &mut Criterion) {
    let images: Vec<BitMatrix> = (0..64)
        .map(|i| symbol(Symbology::Interleaved, &format!("{:08}", i * 1_234_567 % 100_000_000)))
        .collect();
    let engine = ScanEngine::new(Symbology::Interleaved).with_digit_count(4);
    c.bench_function("interleaved_decode_batch_64", |b| {
        b.iter(|| engine.decode_batch(black_box(&images)))
    });
}

criterion_group!(
    benches,
    bench_industrial_12_digits,
    bench_interleaved_12_digits,
    bench_symbol_low_in_image,
    bench_batch_64
);
criterion_main!(benches);
