//! Demodulation benchmarks

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use qam16::*;

fn benchmark_qam16_demodulate(c: &mut Criterion) {
    let qam = Qam16;
    let symbols: Vec<Complex64> = (0..1000).map(|i| qam.symbol_to_iq((i % 16) as u8)).collect();

    c.bench_function("qam16_demodulate_1000_symbols", |b| {
        b.iter(|| {
            for &s in &symbols {
                black_box(demodulate(s));
            }
        })
    });
}

fn benchmark_qam16_vec_demod(c: &mut Criterion) {
    let qam = Qam16;
    let symbols: Vec<Complex64> = (0..1000).map(|i| qam.symbol_to_iq((i % 16) as u8)).collect();

    c.bench_function("qam16_vec_demod_both_1000_symbols", |b| {
        b.iter(|| black_box(vec_demod(&symbols, DemodOutput::Both)))
    });
}

criterion_group!(benches, benchmark_qam16_demodulate, benchmark_qam16_vec_demod);
criterion_main!(benches);
