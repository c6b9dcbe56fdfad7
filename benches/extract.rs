// benches/extract.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use auction_scrape::extract::{self, Format};

/// A results page shaped like the live one: layout tables first, then the listing table.
fn synthetic_page(rows: usize) -> String {
    let mut doc = String::from(
        "<html><body><table class=\"layout\"><tr><td>menu</td></tr></table>\
         <table class=\"Ltbl_list\"><tr><th>사건번호</th><th>물건번호</th><th>소재지</th>\
         <th>감정평가액</th><th>매각기일</th></tr>",
    );
    for i in 0..rows {
        doc.push_str(&format!(
            "<tr><td> 2024타경{i} </td><td>1</td><td>서울특별시 <b>강남구</b> {i}번지</td>\
             <td>{},000,000</td><td>2024.03.{:02}</td></tr>",
            100 + i,
            1 + i % 28
        ));
    }
    doc.push_str("</table></body></html>");
    doc
}

fn synthetic_json(rows: usize) -> String {
    let items: Vec<String> = (0..rows)
        .map(|i| format!(r#"{{"csNo":"2024타경{i}","gamevalAmt":{},"maeGiil":"20240301"}}"#, 100_000_000 + i))
        .collect();
    format!(r#"{{"data":{{"dlt_srchResult":[{}]}}}}"#, items.join(","))
}

fn bench_extract(c: &mut Criterion) {
    let html = synthetic_page(40);
    let html_big = synthetic_page(1_000);
    let json = synthetic_json(40);

    c.bench_function("html_page_40", |b| {
        b.iter(|| {
            let t = extract::extract(black_box(&html), Format::Html).unwrap();
            black_box(t.row_count())
        })
    });

    c.bench_function("html_rows_1000", |b| {
        b.iter(|| {
            let t = extract::extract(black_box(&html_big), Format::Html).unwrap();
            black_box(t.row_count())
        })
    });

    c.bench_function("json_page_40", |b| {
        b.iter(|| {
            let t = extract::extract(black_box(&json), Format::Json).unwrap();
            black_box(t.row_count())
        })
    });
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
