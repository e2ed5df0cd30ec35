use boggle_solver::Dictionary;
use criterion::{criterion_group, criterion_main, Criterion};

const WORDS: &[&str] = &[
    "cat", "cats", "at", "act", "tac", "sat", "ate", "eat", "tea", "seat", "east", "eats",
];
const WORDFILE: &str = "wordlists/words.txt";

fn bench_from_words() {
    let _dictionary = Dictionary::from_words(WORDS);
}

fn bench_from_file() {
    let _dictionary = Dictionary::from_file(WORDFILE).unwrap();
}

fn bench_queries(c: &mut Criterion) {
    let dictionary = Dictionary::from_file(WORDFILE).unwrap();
    c.bench_function("dictionary.is_word", |b| {
        b.iter(|| dictionary.is_word("stare"))
    });
    c.bench_function("dictionary.is_prefix", |b| {
        b.iter(|| dictionary.is_prefix("sta"))
    });
}

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("dictionary.from_words", |b| b.iter(bench_from_words));
    c.bench_function("dictionary.from_file", |b| b.iter(bench_from_file));
    bench_queries(c);
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
