use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sexpr_reader::{parse, Scanner};

const PROGRAM: &str = r#"
(begin
  (define fact (lambda (n) (if (<= n 1) 1 (* n (fact (- n 1))))))
  (define circle-area (lambda (r) (* 3.141592653 (* r r))))
  (list (fact 10) (circle-area 2.5) (quote (a b c))))
"#;

fn scanner_benchmark(c: &mut Criterion) {
    c.bench_function("tokenize program", |b| {
        b.iter(|| Scanner::new(black_box(PROGRAM)).scan_tokens())
    });
}

fn reader_benchmark(c: &mut Criterion) {
    c.bench_function("parse program", |b| {
        b.iter(|| parse(black_box(PROGRAM)).unwrap())
    });

    let nested = format!("{}x{}", "(".repeat(500), ")".repeat(500));
    c.bench_function("parse 500 nested lists", |b| {
        b.iter(|| parse(black_box(&nested)).unwrap())
    });
}

criterion_group!(benches, scanner_benchmark, reader_benchmark);
criterion_main!(benches);
