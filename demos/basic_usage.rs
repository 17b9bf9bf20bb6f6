// ============================================================================
// Basic Usage Example
// ============================================================================

use wgsl_numeric::prelude::*;

fn main() {
    println!("=== WGSL Numeric Example ===\n");

    // f16 values live in an f32 but only ever hold binary16 values
    println!("f16 quantization:");
    for v in [1.0009f32, 65503.0, 70000.0, 1.0e-8, 3.0e-5] {
        let h = F16::new(v);
        println!(
            "  {:>10e} -> {:<12} bits 0x{:04x}",
            v,
            h.value(),
            h.bits_representation()
        );
    }

    // Checked arithmetic reports overflow as None
    println!("\nChecked arithmetic:");
    println!(
        "  i32::MAX + 1     = {:?}",
        checked_add(I32::new(i32::MAX), I32::new(1))
    );
    println!(
        "  -7.5 % 2.0       = {:?}",
        checked_mod(AFloat::new(-7.5), AFloat::new(2.0))
    );
    println!(
        "  pow(-2.0, 2.0)   = {:?}",
        checked_pow(F32::new(-2.0), F32::new(2.0))
    );

    // Conversions saturate from float to integer and fail otherwise
    println!("\nConversion:");
    println!(
        "  2147483648.0f -> i32 = {:?}",
        checked_convert::<i32, f32>(F32::new(2147483648.0))
    );
    println!(
        "  300 -> i8            = {:?}",
        checked_convert::<i8, i64>(AInt::new(300))
    );

    // Constant folding over parsed literals
    println!("\nConstant folding:");
    let folder = ConstantFolder::new(FoldConfig::with_f16());
    let expressions = [
        ("2147483647i", BinaryOp::Add, "1i"),
        ("2147483647", BinaryOp::Add, "1"),
        ("60000.0h", BinaryOp::Add, "10000.0h"),
        ("2.0f", BinaryOp::Power, "10.0f"),
        ("7u", BinaryOp::Modulo, "0u"),
    ];

    for (lhs, op, rhs) in expressions {
        let result = folder
            .literal(lhs)
            .and_then(|l| folder.literal(rhs).map(|r| (l, r)))
            .and_then(|(l, r)| folder.fold_binary(op, l, r));
        match result {
            Ok(value) => println!("  {} {} {} = {}", lhs, op, rhs, value),
            Err(err) => println!("  {} {} {} -> error: {}", lhs, op, rhs, err),
        }
    }

    println!("\n=== Example Complete ===");
}
