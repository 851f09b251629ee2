//! パフォーマンスベンチマーク
//!
//! 列幅計算とテーブル出力のスループットを測定します。

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use sheetrender::{max_column_width, OutputFormat, Sheet, SheetRendererBuilder, WidthMetric};

/// 指定行数・列数のシートを生成する
fn generate_sheet(rows: usize, cols: usize) -> Sheet {
    let header = (0..cols).map(|col| format!("Column{}", col)).collect::<Vec<_>>();
    let data = (0..rows).map(|row| {
        (0..cols)
            .map(|col| "x".repeat((row * 7 + col * 3) % 40))
            .collect::<Vec<_>>()
    });
    std::iter::once(header).chain(data).collect()
}

fn benchmark_max_column_width(c: &mut Criterion) {
    let mut group = c.benchmark_group("max_column_width");

    for rows in [100usize, 10_000, 100_000] {
        let sheet = generate_sheet(rows, 8);
        group.throughput(Throughput::Elements(rows as u64));
        group.bench_with_input(BenchmarkId::from_parameter(rows), &sheet, |b, sheet| {
            b.iter(|| max_column_width(black_box(sheet), black_box(3)).unwrap());
        });
    }

    group.finish();
}

fn benchmark_render(c: &mut Criterion) {
    let sheet = generate_sheet(10_000, 8);

    let mut group = c.benchmark_group("render");
    group.throughput(Throughput::Elements(10_000));

    for (name, metric, format) in [
        ("plain_chars", WidthMetric::Chars, OutputFormat::Plain),
        ("markdown_display", WidthMetric::Display, OutputFormat::Markdown),
    ] {
        let renderer = SheetRendererBuilder::new()
            .with_width_metric(metric)
            .with_output_format(format)
            .build(sheet.clone())
            .unwrap();

        group.bench_function(name, |b| {
            b.iter(|| {
                let mut output = Vec::new();
                renderer.render(black_box(&mut output)).unwrap();
                black_box(output)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_max_column_width, benchmark_render);
criterion_main!(benches);
