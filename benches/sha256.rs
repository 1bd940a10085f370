use sha256_bits::hash::sha256_bytes;
use sha256_bits::hash::sha256::padding::pad;
use sha256_bits::hash::sha256::{H256_INIT, reference};

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

pub fn bench_sha256(c: &mut Criterion) {
    c.bench_function("sha256 64 bytes", |b| {
        b.iter(|| sha256_bytes(black_box(&[0u8; 64])))
    });

    c.bench_function("sha256 4096 bytes", |b| {
        b.iter(|| sha256_bytes(black_box(&[0xA5u8; 4096])))
    });

    let blocks = pad(&[0u8; 64]);
    c.bench_function("sha256 bit-level reference 64 bytes", |b| {
        b.iter(|| reference::compress(H256_INIT, black_box(&blocks)))
    });
}

criterion_group!(benches, bench_sha256);
criterion_main!(benches);
