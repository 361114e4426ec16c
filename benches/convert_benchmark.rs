//! Benchmarks for gdoc2md conversion performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks use synthetic documents built from the model types.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use gdoc2md::model::{Document, InlineObject, List, Paragraph, Table, TextRun, TextStyle};
use gdoc2md::render::{self, JsonFormat, RenderOptions};

/// Creates a synthetic document with `sections` repetitions of a heading,
/// styled paragraph, nested list, image and small table.
fn create_test_document(sections: usize) -> Document {
    let mut doc = Document::with_title("Benchmark");
    doc.add_list("list.b", List::unordered());
    doc.add_inline_object(
        "kix.img",
        InlineObject::image("https://img/figure.png", Some("Figure"), Some("A figure")),
    );

    for i in 0..sections {
        doc.add_paragraph(Paragraph::heading(format!("Section {}\n", i + 1), 2));

        let mut p = Paragraph::with_text("Plain text with ");
        p.add_run(TextRun::styled("bold", TextStyle::default().bold()));
        p.add_run(TextRun::new(" and "));
        p.add_run(TextRun::styled(
            "a link",
            TextStyle::default().italic().link("https://example.com"),
        ));
        p.add_run(TextRun::new(".\n"));
        doc.add_paragraph(p);

        for j in 0..5 {
            let level = if j % 2 == 1 { Some(1) } else { None };
            doc.add_paragraph(
                Paragraph::with_text(format!("Item {}\n", j)).with_bullet("list.b", level),
            );
        }

        let mut figure = Paragraph::with_text("Figure ");
        figure.add_inline_object("kix.img");
        doc.add_paragraph(figure);

        doc.add_table(Table::from_rows(vec![
            vec!["Name", "Value"],
            vec!["alpha", "1"],
            vec!["beta", "2"],
        ]));
    }

    doc
}

fn benchmark_convert(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert");

    for sections in [10, 100, 1000] {
        let doc = create_test_document(sections);
        group.bench_with_input(BenchmarkId::from_parameter(sections), &doc, |b, doc| {
            b.iter(|| gdoc2md::convert::convert(black_box(doc)))
        });
    }

    group.finish();
}

fn benchmark_markdown(c: &mut Criterion) {
    let doc = create_test_document(100);
    let options = RenderOptions::default();

    c.bench_function("to_markdown_100_sections", |b| {
        b.iter(|| render::to_markdown(black_box(&doc), black_box(&options)))
    });

    let cleanup = RenderOptions::new().with_cleanup_preset(gdoc2md::CleanupPreset::Standard);
    c.bench_function("to_markdown_100_sections_cleanup", |b| {
        b.iter(|| render::to_markdown(black_box(&doc), black_box(&cleanup)))
    });
}

fn benchmark_parse(c: &mut Criterion) {
    let doc = create_test_document(100);
    let json = serde_json::to_string(&doc).unwrap_or_default();

    c.bench_function("parse_str_100_sections", |b| {
        b.iter(|| gdoc2md::parse_str(black_box(&json)))
    });

    let ir = gdoc2md::convert::convert(&doc).ok().unwrap_or_default();
    c.bench_function("to_json_100_sections", |b| {
        b.iter(|| render::to_json(black_box(&ir), JsonFormat::Compact))
    });
}

criterion_group!(
    benches,
    benchmark_convert,
    benchmark_markdown,
    benchmark_parse
);
criterion_main!(benches);
