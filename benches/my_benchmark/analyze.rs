use book_randomness::prelude::*;
use criterion::{black_box, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn make_books(count: usize) -> Vec<InputText> {
    (0..count)
        .map(|i| {
            let text = format!("Chapter {}. It was a dark and stormy night. ", i).repeat(2000);
            InputText::new(format!("book_{}.txt", i), text)
        })
        .collect()
}

pub fn bench_analyze_text(c: &mut Criterion) {
    let book = make_books(1).remove(0);
    c.bench_function("analyze_text", |b| {
        let mut rng = StdRng::seed_from_u64(0);
        b.iter(|| analyze_text(black_box(&book), &mut rng).unwrap())
    });
}

pub fn bench_analyze_batch(c: &mut Criterion) {
    let books = make_books(32);
    let thread_counts = [1, 4];

    for &threads in &thread_counts {
        let settings = AnalysisSettings {
            max_num_threads: core::num::NonZeroU32::new(threads).unwrap(),
        };

        let id = &format!("analyze_batch_32_books_{}_threads", threads);
        c.bench_function(id, |b| {
            b.iter(|| {
                analyze_batch_with(black_box(&books), &settings, |i| {
                    StdRng::seed_from_u64(i as u64)
                })
                .unwrap()
            })
        });
    }
}
