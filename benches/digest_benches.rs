use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use kctf_gate::hash::digest_hex;
use kctf_gate::{derive_references, verify, Candidate, ChallengeVariant};

fn bench_digest(c: &mut Criterion) {
    let sizes = [16usize, 64, 1024];
    let mut group = c.benchmark_group("digest_hex");
    for &size in &sizes {
        let data: Vec<u8> = (0..size).map(|i| i as u8).collect();
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| digest_hex(black_box(data)));
        });
    }
    group.finish();
}

fn bench_verify(c: &mut Criterion) {
    let value_refs = derive_references(ChallengeVariant::MagicNumber);
    let array_refs = derive_references(ChallengeVariant::CodeMatrix);
    c.bench_function("verify_word", |b| {
        b.iter(|| verify(black_box(&value_refs), Candidate::Word(black_box(440_600_951))));
    });
    c.bench_function("verify_bytes", |b| {
        b.iter(|| {
            verify(
                black_box(&array_refs),
                Candidate::Bytes(black_box(b"ReQ3M*3EIg1n33M!")),
            )
        });
    });
}

criterion_group!(benches, bench_digest, bench_verify);
criterion_main!(benches);
