use criterion::{criterion_group, criterion_main, Criterion};

use debcontrol::Parser;

/// Build a Sources-like index with `count` paragraphs.
fn sources(count: usize) -> String {
    let mut text = String::new();
    for i in 0..count {
        text.push_str(&format!(
            "Package: pkg{i}\n\
             Binary: pkg{i}, pkg{i}-doc\n\
             Version: 1.{i}-1\n\
             Build-Depends: debhelper (>= 8),\n  libfoo-dev (>= 1:1.1-3),\n  libbar-dev, pkg-config\n\
             Format: 3.0 (quilt)\n\
             Files:\n 3d5f65778bf3f89be03c313b0024b62c 1980 pkg{i}_1.{i}-1.dsc\n 1e0d0b693fdeebec268004ba41701baf 59773 pkg{i}_1.{i}.orig.tar.gz\n\
             Description: package number {i}\n Longer text describing\n the package.\n .\n Another paragraph.\n\n"
        ));
    }
    text
}

fn parse_benchmark(c: &mut Criterion) {
    let data = sources(1000);
    let parser = Parser::default();

    c.bench_function("parse_sources", |b| {
        b.iter(|| parser.parse_str(&data).unwrap());
    });

    c.bench_function("stream_sources", |b| {
        b.iter(|| parser.paragraphs(data.as_bytes()).count());
    });
}

criterion_group!(benches, parse_benchmark);
criterion_main!(benches);
