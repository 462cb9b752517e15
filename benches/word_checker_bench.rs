//! Benchmark for WordChecker over each set implementation.
//!
//! Measures suggestion lookup against a synthetic dictionary held in an
//! AvlSet and in a ChainedHashSet.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use setwise::set::{AvlSet, ChainedHashSet, Set};
use setwise::word_checker::WordChecker;
use std::hint::black_box;

/// Builds `count` distinct uppercase words: the seed written in base 26,
/// padded with `A` to at least three letters.
fn synthetic_dictionary(count: usize) -> Vec<String> {
    let letters: Vec<char> = ('A'..='Z').collect();
    (0..count)
        .map(|seed| {
            let mut word = Vec::new();
            let mut remaining = seed;
            loop {
                word.push(letters[remaining % letters.len()]);
                remaining /= letters.len();
                if remaining == 0 {
                    break;
                }
            }
            while word.len() < 3 {
                word.push('A');
            }
            word.into_iter().rev().collect()
        })
        .collect()
}

fn fill<S: Set<String>>(mut set: S, words: &[String]) -> S {
    for word in words {
        set.add(word.clone());
    }
    set
}

// =============================================================================
// find_suggestions Benchmark
// =============================================================================

fn benchmark_find_suggestions(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("find_suggestions");
    let queries = ["HELO", "WROLD", "SPELING", "CAT", "THEDOG"];

    for size in [1000, 10000, 50000] {
        // Prepare data
        let words = synthetic_dictionary(size);
        let tree = fill(AvlSet::<String>::new(), &words);
        let table = fill(ChainedHashSet::<String>::new(), &words);

        group.bench_function(BenchmarkId::new("AvlSet", size), |bencher| {
            let checker = WordChecker::new(&tree);
            bencher.iter(|| {
                for query in queries {
                    black_box(checker.find_suggestions(black_box(query)));
                }
            });
        });

        group.bench_function(BenchmarkId::new("ChainedHashSet", size), |bencher| {
            let checker = WordChecker::new(&table);
            bencher.iter(|| {
                for query in queries {
                    black_box(checker.find_suggestions(black_box(query)));
                }
            });
        });
    }

    group.finish();
}

// =============================================================================
// word_exists Benchmark
// =============================================================================

fn benchmark_word_exists(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("word_exists");
    let words = synthetic_dictionary(10000);
    let tree = fill(AvlSet::<String>::new(), &words);
    let table = fill(ChainedHashSet::<String>::new(), &words);

    group.bench_function("AvlSet", |bencher| {
        let checker = WordChecker::new(&tree);
        bencher.iter(|| words.iter().filter(|word| checker.word_exists(word)).count());
    });

    group.bench_function("ChainedHashSet", |bencher| {
        let checker = WordChecker::new(&table);
        bencher.iter(|| words.iter().filter(|word| checker.word_exists(word)).count());
    });

    group.finish();
}

// =============================================================================
// Criterion Group and Main
// =============================================================================

criterion_group!(benches, benchmark_find_suggestions, benchmark_word_exists);

criterion_main!(benches);
