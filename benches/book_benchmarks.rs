//! Performance benchmarks for address book lookup and pagination.
//!
//! These benchmarks measure:
//! - Lookup by name in books of different sizes
//! - Walking the book with the one-shot cursor
//! - Walking the book with the restartable page iterator

use address_book::{AddressBook, Record};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// Build a book of `size` records, each with one phone and a birthday.
fn build_book(size: usize) -> AddressBook {
    let mut book = AddressBook::new();
    for i in 0..size {
        let mut record = Record::with_birthday(format!("Contact{}", i), (1990, 1 + (i % 12) as u32, 1))
            .expect("valid benchmark record");
        record
            .add_phone(&format!("{:010}", i))
            .expect("valid benchmark phone");
        book.add_record(record);
    }
    book
}

fn bench_find(c: &mut Criterion) {
    let mut group = c.benchmark_group("find");
    for size in [10, 100, 1_000] {
        let book = build_book(size);
        let target = format!("Contact{}", size / 2);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| book.find(black_box(&target)).is_ok());
        });
    }
    group.finish();
}

fn bench_cursor_pages(c: &mut Criterion) {
    let mut book = build_book(1_000);
    book.set_records_per_page(10).expect("valid page size");

    c.bench_function("cursor_pages_1000", |b| {
        b.iter(|| {
            book.reset_cursor();
            let mut pages = 0;
            while book.next_page().is_ok() {
                pages += 1;
            }
            black_box(pages)
        });
    });
}

fn bench_restartable_pages(c: &mut Criterion) {
    let mut book = build_book(1_000);
    book.set_records_per_page(10).expect("valid page size");

    c.bench_function("restartable_pages_1000", |b| {
        b.iter(|| black_box(book.pages().map(|p| p.to_string().len()).sum::<usize>()));
    });
}

criterion_group!(benches, bench_find, bench_cursor_pages, bench_restartable_pages);
criterion_main!(benches);
