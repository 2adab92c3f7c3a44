use benchplot_core::BenchTable;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn gen_table(rows: usize, series: usize) -> String {
    let mut s = String::from("preamble line\nTABLE:\nWindow");
    for j in 0..series {
        s.push_str(&format!(" Series{j}"));
    }
    s.push('\n');
    for i in 0..rows {
        s.push_str(&format!("{}", 2 * i + 3));
        for j in 0..series {
            s.push_str(&format!(" {}", (i + 1) * (j + 7)));
        }
        s.push('\n');
    }
    s
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    for &rows in &[10usize, 1_000usize, 100_000usize] {
        let text = gen_table(rows, 3);
        group.bench_with_input(BenchmarkId::from_parameter(format!("rows{rows}")), &text, |b, t| {
            b.iter(|| {
                let table = BenchTable::parse(black_box(t).lines()).unwrap();
                black_box(table);
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_parse);
criterion_main!(benches);
