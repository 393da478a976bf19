use book_randomness::utilities::baseline::random_baseline::generate_baseline;
use book_randomness::utilities::compression::deflate::{compress, max_alloc_for_compress_size};
use criterion::{black_box, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

pub fn bench_compress(c: &mut Criterion) {
    let sizes = [4096, 65536, 1048576];

    for &size in &sizes {
        let text = generate_baseline(&mut StdRng::seed_from_u64(0), size);
        let mut destination = vec![0u8; max_alloc_for_compress_size(size)];

        let id = &format!("compress_random_{}", size);
        c.bench_function(id, |b| {
            b.iter(|| compress(black_box(text.as_bytes()), &mut destination).unwrap())
        });
    }
}
