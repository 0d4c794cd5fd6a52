use criterion::{black_box, criterion_group, criterion_main, Criterion};

use termquiz_core::parser::{parse_record_str, parse_terms};

fn bench_parse_terms(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_terms");

    let tabbed = "주식\t기업의 소유권을 나타내는 증권\n배당\t이익의 일부를 지급\nPER\t주가수익비율\nPBR\t주가순자산비율";

    let spaced = "LLM    large language  model\nRAG   retrieval augmented generation\nGPU  graphics processing unit";

    let large = {
        let mut s = String::new();
        for i in 0..500 {
            if i % 2 == 0 {
                s.push_str(&format!("term {i}\tdefinition of term {i}\n"));
            } else {
                s.push_str(&format!("term {i}    definition  of  term {i}\n\n"));
            }
        }
        s
    };

    group.bench_function("tabbed", |b| b.iter(|| parse_terms(black_box(tabbed))));

    group.bench_function("spaced", |b| b.iter(|| parse_terms(black_box(spaced))));

    group.bench_function("500_lines", |b| b.iter(|| parse_terms(black_box(&large))));

    group.finish();
}

fn bench_deck_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("deck_parsing");

    let small_toml = generate_deck_toml(5);
    let large_toml = generate_deck_toml(200);

    group.bench_function("5_infos", |b| {
        b.iter(|| parse_record_str(black_box(&small_toml), black_box("bench.toml".as_ref())))
    });

    group.bench_function("200_infos", |b| {
        b.iter(|| parse_record_str(black_box(&large_toml), black_box("bench.toml".as_ref())))
    });

    group.finish();
}

fn generate_deck_toml(n: usize) -> String {
    let mut s = String::new();
    s.push_str(
        r#"id = "bench"
hub = "ai"
date = "2025-01-20"
"#,
    );
    for i in 0..n {
        s.push_str(&format!(
            r#"
[[infos]]
title = "Info {i}"
content = "Body of info {i}"

[[infos.terms]]
term = "term {i}a"
description = "first definition {i}"

[[infos.terms]]
term = "term {i}b"
description = "second definition {i}"
"#
        ));
    }
    s
}

criterion_group!(benches, bench_parse_terms, bench_deck_parsing);
criterion_main!(benches);
