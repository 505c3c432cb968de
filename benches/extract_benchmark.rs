//! Benchmarks for slidecast extraction and rendering performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks test the pipeline at various deck sizes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::io::{Cursor, Write};

/// Creates a synthetic PPTX with the given number of slides, each carrying
/// a handful of paragraphs.
fn create_test_pptx(slide_count: usize) -> Vec<u8> {
    use zip::write::SimpleFileOptions;
    use zip::ZipWriter;

    let mut buffer = Vec::new();
    let mut zip = ZipWriter::new(Cursor::new(&mut buffer));
    let options =
        SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);

    for i in 1..=slide_count {
        let mut content = String::from(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:sld xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main"
       xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main">
  <p:cSld><p:spTree>"#,
        );

        content.push_str(&format!(
            "<p:sp><p:txBody><a:p><a:r><a:t>Slide {} title</a:t></a:r></a:p>",
            i
        ));
        for b in 0..4 {
            content.push_str(&format!(
                "<a:p><a:r><a:t>Bullet {} with some benchmark content</a:t></a:r></a:p>",
                b
            ));
        }
        content.push_str("</p:txBody></p:sp>");

        content.push_str("</p:spTree></p:cSld></p:sld>");

        zip.start_file(format!("ppt/slides/slide{}.xml", i), options)
            .unwrap();
        zip.write_all(content.as_bytes()).unwrap();
    }

    zip.finish().unwrap();
    buffer
}

/// Benchmark slide extraction at various deck sizes.
fn bench_extraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("extraction");

    for slide_count in [5, 25, 100].iter() {
        let data = create_test_pptx(*slide_count);
        let size = data.len() as u64;

        group.throughput(Throughput::Bytes(size));
        group.bench_with_input(BenchmarkId::new("slides", slide_count), &data, |b, data| {
            b.iter(|| {
                let _ = slidecast::extract_bytes(black_box(data.clone()));
            });
        });
    }

    group.finish();
}

/// Benchmark HTML rendering of extracted decks.
fn bench_html_rendering(c: &mut Criterion) {
    let mut group = c.benchmark_group("html_rendering");

    for slide_count in [5, 25, 100].iter() {
        let data = create_test_pptx(*slide_count);
        let slides = slidecast::extract_bytes(data).unwrap();

        group.bench_with_input(
            BenchmarkId::new("slides", slide_count),
            &slides,
            |b, slides| {
                b.iter(|| {
                    let options = slidecast::RenderOptions::default();
                    let _ = slidecast::render::to_html(black_box(slides), &options);
                });
            },
        );
    }

    group.finish();
}

/// Benchmark the markdown stage round-trip.
fn bench_markdown_round_trip(c: &mut Criterion) {
    let mut group = c.benchmark_group("markdown_round_trip");

    for slide_count in [25, 100].iter() {
        let data = create_test_pptx(*slide_count);
        let slides = slidecast::extract_bytes(data).unwrap();

        group.bench_with_input(
            BenchmarkId::new("slides", slide_count),
            &slides,
            |b, slides| {
                b.iter(|| {
                    let md = slidecast::markdown::write_markdown(black_box(slides));
                    let _ = slidecast::markdown::parse_markdown(&md, std::path::Path::new(""));
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_extraction,
    bench_html_rendering,
    bench_markdown_round_trip,
);
criterion_main!(benches);
