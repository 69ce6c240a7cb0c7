//! Performance benchmarks for pagebrief.
//!
//! Run with: `cargo bench`
//!
//! Benchmarks include:
//! - A small article page for the full extraction path
//! - Highlight target resolution on the same page
//! - Synthetic pages with many paragraphs, where the document-order index
//!   and the quality filter dominate

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use pagebrief::{extract, resolve_highlight_targets, Page};

const PAGE_URL: &str = "https://blog.example.com/sample-article";

const SAMPLE_HTML: &str = r#"
<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Sample Article - Example Blog</title>
    <meta name="author" content="John Doe">
    <meta name="description" content="A sample article for benchmarking.">
</head>
<body>
    <nav>
        <a href="/">Home</a>
        <a href="/about">About</a>
    </nav>
    <article>
        <h1 class="entry-title">Sample Article Title</h1>
        <time datetime="2024-05-01">May 1, 2024</time>
        <div class="entry-content">
            <p>This is the first paragraph of the article. It contains enough
            meaningful content to be selected as the summary of the page.</p>
            <p>Here is a second paragraph with more content, which should be
            ignored because the first one already qualifies.</p>
        </div>
    </article>
    <aside class="sidebar">
        <p>Related articles and other sidebar content that is long enough to be a candidate.</p>
    </aside>
    <footer>
        <p>Copyright 2024 Example Blog. All rights reserved.</p>
    </footer>
</body>
</html>
"#;

fn synthetic_page(paragraphs: usize) -> String {
    let mut html = String::from("<html><body><h1>Synthetic</h1><main>");
    for i in 0..paragraphs {
        // Short filler so only the last paragraph qualifies.
        html.push_str(&format!("<p>filler {i}</p>"));
    }
    html.push_str(
        "<p>The only paragraph on this page long enough to pass the quality filter.</p>",
    );
    html.push_str("</main></body></html>");
    html
}

fn bench_extract_default(c: &mut Criterion) {
    c.bench_function("extract_default", |b| {
        b.iter(|| {
            let page = Page::parse(black_box(SAMPLE_HTML), PAGE_URL).ok()?;
            Some(extract(&page))
        });
    });
}

fn bench_highlight_targets(c: &mut Criterion) {
    c.bench_function("highlight_targets", |b| {
        b.iter(|| {
            let page = Page::parse(black_box(SAMPLE_HTML), PAGE_URL).ok()?;
            Some(resolve_highlight_targets(&page).is_empty())
        });
    });
}

fn bench_paragraph_count(c: &mut Criterion) {
    let mut group = c.benchmark_group("paragraphs");

    for count in [10, 100, 1000] {
        let html = synthetic_page(count);
        group.throughput(Throughput::Bytes(html.len() as u64));
        group.bench_with_input(BenchmarkId::new("extract", count), &html, |b, html| {
            b.iter(|| {
                let page = Page::parse(black_box(html), PAGE_URL).ok()?;
                Some(extract(&page))
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_extract_default,
    bench_highlight_targets,
    bench_paragraph_count
);
criterion_main!(benches);
