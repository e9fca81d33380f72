use bunner_pathmatch_rs::compile;
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use regex::Regex;
use std::hint::black_box;

struct Case {
    name: &'static str,
    regex: &'static str,
    pattern: &'static str,
    input: &'static str,
}

const CASES: &[Case] = &[
    Case {
        name: "param-tail",
        regex: r"^foo/([^/]+)/bar/(.*)$",
        pattern: "foo/:id/bar/*",
        input: "foo/1/bar/2/baz/3",
    },
    Case {
        name: "backtrack",
        regex: r"^/(.+)/a/b/(.+)/c/d$",
        pattern: "/*/a/b/*/c/d",
        input: "/x/a/x/a/b/x/a/b/x/c/d",
    },
];

fn bench_compile(c: &mut Criterion) {
    let mut group = c.benchmark_group("compile");
    for case in CASES {
        group.bench_with_input(BenchmarkId::new("regex", case.name), case, |b, case| {
            b.iter(|| Regex::new(black_box(case.regex)))
        });
        group.bench_with_input(BenchmarkId::new("path", case.name), case, |b, case| {
            b.iter(|| compile(black_box(case.pattern), []))
        });
    }
    group.finish();
}

fn bench_match(c: &mut Criterion) {
    let mut group = c.benchmark_group("is_match");
    for case in CASES {
        let Ok(re) = Regex::new(case.regex) else {
            continue;
        };
        let Ok(path) = compile(case.pattern, []) else {
            continue;
        };
        group.bench_with_input(BenchmarkId::new("regex", case.name), case, |b, case| {
            b.iter(|| re.is_match(black_box(case.input)))
        });
        group.bench_with_input(BenchmarkId::new("path", case.name), case, |b, case| {
            b.iter(|| path.is_match(black_box(case.input)))
        });
    }
    group.finish();
}

fn bench_find_submatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_submatch");
    for case in CASES {
        let Ok(re) = Regex::new(case.regex) else {
            continue;
        };
        let Ok(path) = compile(case.pattern, []) else {
            continue;
        };
        group.bench_with_input(BenchmarkId::new("regex", case.name), case, |b, case| {
            b.iter(|| re.captures(black_box(case.input)).map(|caps| caps.len()))
        });
        group.bench_with_input(BenchmarkId::new("path", case.name), case, |b, case| {
            b.iter(|| path.find_submatch(black_box(case.input)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_compile, bench_match, bench_find_submatch);
criterion_main!(benches);
