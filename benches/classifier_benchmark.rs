use criterion::{black_box, criterion_group, criterion_main, Criterion};
use image::{ImageFormat, Rgb, RgbImage};
use occipital::classifier::{top_labels, Preprocessor, TOP_K};
use occipital::BuiltinModel;
use std::io::Cursor;

fn encode_jpeg(width: u32, height: u32) -> Vec<u8> {
    let image = RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8])
    });
    let mut buf = Cursor::new(Vec::new());
    image.write_to(&mut buf, ImageFormat::Jpeg).unwrap();
    buf.into_inner()
}

fn bench_preprocessing(c: &mut Criterion) {
    let preprocessor = Preprocessor::new(&BuiltinModel::Inception.characteristics());
    let mut group = c.benchmark_group("Preprocessing");

    // Configure sampling
    group.sample_size(50);
    group.warm_up_time(std::time::Duration::from_secs(1));

    // Small image (already near the target size)
    let small = encode_jpeg(256, 256);
    group.bench_function("small_image", |b| {
        b.iter(|| preprocessor.normalize(black_box(&small)).unwrap())
    });

    // Camera-sized image
    let large = encode_jpeg(1920, 1080);
    group.bench_function("large_image", |b| {
        b.iter(|| preprocessor.normalize(black_box(&large)).unwrap())
    });

    group.finish();
}

fn bench_ranking(c: &mut Criterion) {
    let mut group = c.benchmark_group("Ranking");
    group.sample_size(50);
    group.warm_up_time(std::time::Duration::from_secs(1));

    // Test scaling with vocabulary size
    let label_counts = [10, 100, 1008, 10_000];
    for &count in &label_counts {
        let labels: Vec<String> = (0..count).map(|i| format!("class_{}", i)).collect();
        let probabilities: Vec<f32> = (0..count)
            .map(|i| ((i * 2654435761_usize) % 1000) as f32 / 1000.0)
            .collect();

        group.bench_function(format!("labels_{}", count), |b| {
            b.iter(|| top_labels(black_box(&labels), black_box(&probabilities), TOP_K).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_preprocessing, bench_ranking);
criterion_main!(benches);
