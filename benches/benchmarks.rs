use criterion::{BenchmarkId,black_box, criterion_group, criterion_main, Criterion};

use rand::SeedableRng;
use rand_xorshift::XorShiftRng;

use anagen::*;
use anagen::test::*;

pub fn anahash_benchmark(c: &mut Criterion) {
    c.bench_function("anahash_word_6_chars", |b| b.iter(|| {
        black_box("houses").anahash()
    }));

    c.bench_function("anahash_word_12_chars", |b| b.iter(|| {
        black_box("benchmarking").anahash()
    }));

    c.bench_function("canonical_key_word_12_chars", |b| b.iter(|| {
        black_box("benchmarking").canonical_key()
    }));
}

pub fn dictionary_benchmark(c: &mut Criterion) {
    let dictionary = get_test_dictionary();

    for query in ["TAC", "SILENT", "XYZXYZ"] {
        c.bench_with_input(BenchmarkId::new("solve", query), &query, |b, query| b.iter(|| {
            dictionary.solve(black_box(query)).len()
        }));
    }

    c.bench_function("fakify_word_6_chars", |b| {
        let mut rng = XorShiftRng::seed_from_u64(1);
        b.iter(|| fakify(&dictionary, black_box("NELIST"), &mut rng, 10_000))
    });
}

pub fn generator_benchmark(c: &mut Criterion) {
    let mut generator = get_test_generator_5(1);

    c.bench_function("generate_10_with_3_fakes", |b| b.iter(|| {
        generator.generate_anagrams(5, 10, 3).map(|anagrams| anagrams.len())
    }));
}

criterion_group!(benches, anahash_benchmark, dictionary_benchmark, generator_benchmark);
criterion_main!(benches);
