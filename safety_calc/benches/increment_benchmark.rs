//! Increment calculator micro-benchmark.
//!
//! Measures throughput of:
//! - Each increment formula alone
//! - Fraction ratio derivation
//! - Full `CalculationRequest::evaluate()` in both ratio modes

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use safety_calc::increment::{SafetyFunction, compute_scw, compute_sos, compute_ssr};
use safety_calc::ratio::{encoder_resolution_from_bits, ratio_from_fraction};
use safety_calc::request::{CalculationRequest, RatioInput};

fn bench_formulas(c: &mut Criterion) {
    c.bench_function("compute_ssr", |b| {
        b.iter(|| compute_ssr(black_box(4.0), black_box(100.0), black_box(10.0)))
    });
    c.bench_function("compute_sos", |b| {
        b.iter(|| compute_sos(black_box(4.0), black_box(100.0), black_box(10.0)))
    });
    c.bench_function("compute_scw", |b| {
        b.iter(|| compute_scw(black_box(4.0), black_box(100.0), black_box(10.0)))
    });
}

fn bench_ratio(c: &mut Criterion) {
    let resolution = encoder_resolution_from_bits(16.0);

    c.bench_function("ratio_from_fraction", |b| {
        b.iter(|| ratio_from_fraction(black_box(5.0), black_box(32768.0), resolution))
    });
}

fn bench_evaluate(c: &mut Criterion) {
    let direct = CalculationRequest {
        function: SafetyFunction::Ssr,
        pole_pairs: 4.0,
        max_value: 100.0,
        ratio: RatioInput::Direct { ratio: 10.0 },
    };
    let fraction = CalculationRequest {
        ratio: RatioInput::Fraction {
            numerator: 5.0,
            denominator: 32768.0,
            encoder_bits: 16.0,
        },
        ..direct
    };

    c.bench_function("evaluate_direct", |b| b.iter(|| black_box(&direct).evaluate()));
    c.bench_function("evaluate_fraction", |b| {
        b.iter(|| black_box(&fraction).evaluate())
    });
}

criterion_group!(benches, bench_formulas, bench_ratio, bench_evaluate);
criterion_main!(benches);
