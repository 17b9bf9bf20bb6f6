// ============================================================================
// Numeric Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. f16 Codec - Quantization, encoding and decoding of binary16 values
// 2. Checked Arithmetic - Overflow-checked integer and float operations
// 3. Conversion - Range-checked conversion between kinds
// 4. Folding - Literal parsing and constant folding through the scalar layer
// ============================================================================

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use wgsl_numeric::number::{f16_bits_from_quantized, f32_from_f16_bits, quantize_f16};
use wgsl_numeric::prelude::*;

// ============================================================================
// f16 Codec Benchmarks
// ============================================================================

fn benchmark_f16_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("f16_codec");

    // Normal, subnormal, underflow and saturating inputs
    let inputs: Vec<f32> = (0..1024)
        .map(|i| match i % 4 {
            0 => i as f32 * 1.37,
            1 => 1.0e-5 * i as f32,
            2 => 1.0e-9,
            _ => 70000.0 + i as f32,
        })
        .collect();

    group.bench_function("quantize", |b| {
        b.iter(|| {
            for &v in &inputs {
                black_box(quantize_f16(black_box(v)));
            }
        });
    });

    let quantized: Vec<f32> = inputs.iter().map(|&v| quantize_f16(v)).collect();
    group.bench_function("encode", |b| {
        b.iter(|| {
            for &v in &quantized {
                black_box(f16_bits_from_quantized(black_box(v)));
            }
        });
    });

    group.bench_function("decode_all_patterns", |b| {
        b.iter(|| {
            for bits in 0..=u16::MAX {
                black_box(f32_from_f16_bits(black_box(bits)));
            }
        });
    });

    group.finish();
}

// ============================================================================
// Checked Arithmetic Benchmarks
// ============================================================================

fn benchmark_checked_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("checked_arithmetic");

    for (label, a, b) in [
        ("in_range", 123_456_789i64, 987_654i64),
        ("overflowing", i64::MAX - 3, i64::MAX / 2),
    ] {
        group.bench_with_input(BenchmarkId::new("abstract_int_mul", label), &(a, b), |bench, &(a, b)| {
            bench.iter(|| black_box(checked_mul(AInt::new(black_box(a)), AInt::new(black_box(b)))));
        });
        group.bench_with_input(BenchmarkId::new("abstract_int_madd", label), &(a, b), |bench, &(a, b)| {
            bench.iter(|| {
                black_box(checked_madd(
                    AInt::new(black_box(a)),
                    AInt::new(black_box(b)),
                    AInt::new(1),
                ))
            });
        });
    }

    group.bench_function("f16_add", |b| {
        b.iter(|| black_box(checked_add(F16::new(black_box(1.5)), F16::new(black_box(1024.25)))));
    });

    group.bench_function("f32_pow", |b| {
        b.iter(|| black_box(checked_pow(F32::new(black_box(1.0001)), F32::new(black_box(300.0)))));
    });

    group.finish();
}

// ============================================================================
// Conversion Benchmarks
// ============================================================================

fn benchmark_conversion(c: &mut Criterion) {
    let mut group = c.benchmark_group("conversion");

    group.bench_function("f32_to_i32_saturating", |b| {
        b.iter(|| black_box(checked_convert::<i32, f32>(F32::new(black_box(3.0e9)))));
    });

    group.bench_function("abstract_int_to_i8_failing", |b| {
        b.iter(|| black_box(checked_convert::<i8, i64>(AInt::new(black_box(300)))));
    });

    group.bench_function("abstract_float_to_f16", |b| {
        b.iter(|| black_box(checked_convert::<wgsl_numeric::number::Half, f64>(AFloat::new(black_box(0.1)))));
    });

    group.finish();
}

// ============================================================================
// Folding Benchmarks
// ============================================================================

fn benchmark_folding(c: &mut Criterion) {
    let mut group = c.benchmark_group("folding");
    let folder = ConstantFolder::new(FoldConfig::with_f16());

    for token in ["42", "0xdeadbeefu", "1.5e3h", "3.14159f"] {
        group.bench_with_input(BenchmarkId::new("parse_literal", token), &token, |b, &token| {
            b.iter(|| black_box(parse_literal(black_box(token))));
        });
    }

    let lhs = Scalar::from(I32::new(1 << 20));
    let rhs = Scalar::from(I32::new(1 << 12));
    group.bench_function("fold_binary_overflow", |b| {
        b.iter(|| black_box(folder.fold_binary(BinaryOp::Multiply, black_box(lhs), black_box(rhs))));
    });

    let value = Scalar::from(AFloat::new(65504.0));
    group.bench_function("convert_to_f16", |b| {
        b.iter(|| black_box(folder.convert(black_box(value), NumberKind::F16)));
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_f16_codec,
    benchmark_checked_arithmetic,
    benchmark_conversion,
    benchmark_folding,
);
criterion_main!(benches);
