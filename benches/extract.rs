// benches/extract.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use profile_harvest::extract::extract_from_html;

/// Synthetic results page: `n` cards, every third one a repeat, plus noise links.
fn sample_page(n: usize) -> String {
    let mut html = String::from("<html><body>");
    for i in 0..n {
        let id = if i % 3 == 0 { i / 3 } else { i };
        html.push_str(&format!(
            r#"<div class="card"><a href="https://www.linkedin.com/in/user{id}/?miniProfileUrn=x{i}">User</a>
               <a href="/company/c{i}">Company</a><a href="/in/user{id}#about">About</a></div>"#
        ));
    }
    html.push_str("</body></html>");
    html
}

fn bench_extract(c: &mut Criterion) {
    let doc = sample_page(500);

    c.bench_function("extract_500_cards", |b| {
        b.iter(|| {
            let found = extract_from_html(black_box(&doc));
            black_box(found.len())
        })
    });
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
