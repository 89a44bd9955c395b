use lithic::encryption::gimli_aead;
use lithic::hash::hash_array;
use lithic::permutation::permute;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

pub fn bench_permutation(c: &mut Criterion) {
    c.bench_function("gimli permutation", |b| {
        let mut state = [0u32; 12];
        b.iter(|| permute(black_box(&mut state)))
    });
}

pub fn bench_hash(c: &mut Criterion) {
    let mut group = c.benchmark_group("gimli hash");

    for len in [64usize, 1024, 16384] {
        let input = vec![0u8; len];
        group.throughput(Throughput::Bytes(len as u64));
        group.bench_function(format!("{len} bytes"), |b| {
            b.iter(|| hash_array::<32>(black_box(&input)))
        });
    }

    group.finish();
}

pub fn bench_aead(c: &mut Criterion) {
    let key = [7u8; gimli_aead::KEY_LEN];
    let nonce = [9u8; gimli_aead::NONCE_LEN];
    let plaintext = vec![0u8; 1024];

    c.bench_function("gimli aead seal 1024 bytes", |b| {
        b.iter(|| gimli_aead::seal(black_box(&plaintext), b"", &nonce, &key))
    });
}

criterion_group!(benches, bench_permutation, bench_hash, bench_aead);
criterion_main!(benches);
