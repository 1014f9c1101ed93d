use criterion::{black_box, criterion_group, criterion_main, Criterion, BenchmarkId};
use image::{Rgb, RgbImage};
use imageproc::drawing::draw_filled_circle_mut;
use tennis_tracker_rs::ball_pipeline::{
    ColorRange, FrameProcessor, MorphologyOrder, TrackerConfig,
};

fn generate_ball_frame(width: u32, height: u32) -> RgbImage {
    let mut frame = RgbImage::from_fn(width, height, |x, y| {
        let value = ((x + y) % 256) as u8;
        Rgb([value, value / 2, 255 - value])
    });
    let radius = (width.min(height) / 8) as i32;
    draw_filled_circle_mut(
        &mut frame,
        ((width / 2) as i32, (height / 2) as i32),
        radius,
        Rgb([60, 220, 60]),
    );
    frame
}

fn benchmark_frame_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("process_by_size");

    let sizes = vec![
        (600, 400, "600x400"),
        (640, 480, "640x480"),
        (1280, 720, "1280x720"),
    ];

    let processor = FrameProcessor::new(TrackerConfig::default()).unwrap();

    for (width, height, label) in sizes {
        let frame = generate_ball_frame(width, height);

        group.bench_with_input(
            BenchmarkId::from_parameter(label),
            &frame,
            |b, frame| {
                b.iter(|| processor.process(black_box(frame), &ColorRange::TENNIS_BALL));
            },
        );
    }

    group.finish();
}

fn benchmark_morphology_order(c: &mut Criterion) {
    let mut group = c.benchmark_group("morphology_order");
    let frame = generate_ball_frame(640, 480);

    let orders = vec![
        (MorphologyOrder::DilateThenErode, "dilate_then_erode"),
        (MorphologyOrder::ErodeThenDilate, "erode_then_dilate"),
    ];

    for (order, label) in orders {
        let config = TrackerConfig::builder().morphology_order(order).build();
        let processor = FrameProcessor::new(config).unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(label), &frame, |b, frame| {
            b.iter(|| processor.process(black_box(frame), &ColorRange::TENNIS_BALL));
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_frame_sizes, benchmark_morphology_order);
criterion_main!(benches);
