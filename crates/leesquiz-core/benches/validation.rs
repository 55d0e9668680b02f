use criterion::{black_box, criterion_group, criterion_main, Criterion};

use leesquiz_core::model::{KeywordConfig, LiteralConfig};
use leesquiz_core::normalize::normalize;
use leesquiz_core::validate::{validate_keywords, validate_literal};

fn make_keyword_config(groups: usize, synonyms_per_group: usize) -> KeywordConfig {
    KeywordConfig {
        min_words: 3,
        must_include_any: (0..groups)
            .map(|g| {
                (0..synonyms_per_group)
                    .map(|s| format!("woord{g}x{s}"))
                    .collect()
            })
            .collect(),
        allow_extra_text: true,
        disallowed_keywords: Some(vec!["misschien".into(), "weet niet".into()]),
    }
}

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");

    group.bench_function("short", |b| {
        b.iter(|| normalize(black_box("  De Kat heet Milo!  ")))
    });

    let long = "De kat zit op de mat, en de hond rent in het park. ".repeat(50);
    group.bench_function("long", |b| b.iter(|| normalize(black_box(&long))));

    group.finish();
}

fn bench_literal(c: &mut Criterion) {
    let config = LiteralConfig {
        acceptable_answers: vec![
            "in het park".into(),
            "het park".into(),
            "park".into(),
            "buiten in het park".into(),
        ],
    };

    c.bench_function("literal_miss", |b| {
        b.iter(|| validate_literal(black_box("in de tuin"), black_box(&config)))
    });
}

fn bench_keywords(c: &mut Criterion) {
    let mut group = c.benchmark_group("keywords");

    let small = make_keyword_config(2, 3);
    let large = make_keyword_config(10, 8);
    let answer = "de kat is woord0x1 en ook woord1x2 maar verder niets bijzonders";

    group.bench_function("groups=2,synonyms=3", |b| {
        b.iter(|| validate_keywords(black_box(answer), black_box(&small)))
    });

    group.bench_function("groups=10,synonyms=8", |b| {
        b.iter(|| validate_keywords(black_box(answer), black_box(&large)))
    });

    group.finish();
}

criterion_group!(benches, bench_normalize, bench_literal, bench_keywords);
criterion_main!(benches);
