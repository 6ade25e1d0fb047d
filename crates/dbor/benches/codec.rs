use core::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use dbor::{Value, decode, encode};

/// A mixed tree exercising every class and a few token widths.
fn fixture() -> Value {
    let scalars = (0..64u64)
        .map(|n| Value::Integer(i128::from(n) * 101 - 280))
        .collect::<Vec<_>>();
    let row = Value::Sequence(vec![
        Value::None,
        Value::Integer(123_456_789),
        Value::String("¡Olé! 😀 naïve coöperation".into()),
        Value::Bytes((0..=255u8).collect()),
        Value::Sequence(scalars),
    ]);
    Value::Sequence(vec![row; 32])
}

fn bench_encode(c: &mut Criterion) {
    let value = fixture();
    c.bench_function("encode/nested", |b| {
        b.iter(|| encode(black_box(&value)).expect("valid"));
    });
}

fn bench_decode(c: &mut Criterion) {
    let bytes = encode(&fixture()).expect("valid");
    c.bench_function("decode/nested", |b| {
        b.iter(|| decode(black_box(&bytes)).expect("valid"));
    });
}

criterion_group!(benches, bench_encode, bench_decode);
criterion_main!(benches);
