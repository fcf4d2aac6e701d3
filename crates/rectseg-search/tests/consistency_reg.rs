//! Search consistency regression test
//!
//! Compares the searches with an exhaustive reference, with each other and
//! with themselves across pool sizes and chunk sizes.

use rectseg_core::{ImageView, Rect};
use rectseg_search::{
    IntegralImage, SegmentOptions, Strategy, best_shape, direct_search, segment,
    shape_then_position_search,
};
use rectseg_test::{
    RegParams, block_image, brute_force_best, brute_force_score, random_image, replicate_mono,
};

#[test]
fn brute_force_reg() {
    let mut rp = RegParams::new("brute_force");

    for (seed, (ny, nx)) in [(1u64, (3, 4)), (2, (5, 5)), (3, (6, 4)), (4, (2, 9)), (5, (7, 6))] {
        let data = random_image(ny, nx, seed);
        let image = ImageView::new(ny, nx, &data).expect("view");
        eprintln!("=== Random {}x{} seed {} ===", ny, nx, seed);

        // Color: the winner's score matches the reference maximum
        let (_, expected) = brute_force_best(&image, 3).expect("reference");
        let color = segment(&image, &SegmentOptions::new()).expect("segment");
        rp.compare_values(expected, color.score, 1e-9 * expected.max(1.0));
        rp.compare_values(
            brute_force_score(&image, color.rect, 3),
            color.score,
            1e-9 * expected.max(1.0),
        );

        // Monochrome: first channel only
        let (_, expected) = brute_force_best(&image, 1).expect("reference");
        let options = SegmentOptions::new().with_strategy(Strategy::ShapeThenPosition);
        let mono = segment(&image, &options).expect("segment");
        rp.compare_values(expected, mono.score, 1e-9 * expected.max(1.0));
        rp.compare_values(
            brute_force_score(&image, mono.rect, 1),
            mono.score,
            1e-9 * expected.max(1.0),
        );
    }

    // A separated block is found exactly by both
    let block = Rect::new(1, 2, 4, 5).expect("rect");
    let data = block_image(6, 7, block, [0.8, 0.1, 0.6], [0.1, 0.5, 0.2]).expect("block");
    let image = ImageView::new(6, 7, &data).expect("view");
    let (reference, _) = brute_force_best(&image, 3).expect("reference");
    rp.compare_rects(block, reference);
    let color = segment(&image, &SegmentOptions::new()).expect("segment");
    rp.compare_rects(reference, color.rect);

    assert!(rp.cleanup());
}

#[test]
fn cross_variant_reg() {
    let mut rp = RegParams::new("cross_variant");

    // Gray image: both searches see the same values in every channel
    let (ny, nx) = (8, 11);
    let block = Rect::new(2, 4, 7, 9).expect("rect");
    let values: Vec<f32> = (0..ny * nx)
        .map(|i| if block.contains(i / nx, i % nx) { 0.75 } else { 0.25 })
        .collect();
    let data = replicate_mono(&values);
    let image = ImageView::new(ny, nx, &data).expect("view");

    let color = segment(&image, &SegmentOptions::new().with_strategy(Strategy::Direct))
        .expect("direct");
    let mono = segment(
        &image,
        &SegmentOptions::new().with_strategy(Strategy::ShapeThenPosition),
    )
    .expect("shape then position");
    eprintln!(
        "  direct: {:?} {}  mono: {:?} {}",
        color.rect, color.score, mono.rect, mono.score
    );

    rp.compare_rects(block, color.rect);
    rp.compare_rects(color.rect, mono.rect);
    // Three identical channels triple the color score
    rp.compare_values(3.0 * mono.score, color.score, 1e-9);
    for c in 0..3 {
        rp.compare_values(color.inner[c] as f64, mono.inner[c] as f64, 1e-5);
        rp.compare_values(color.outer[c] as f64, mono.outer[c] as f64, 1e-5);
    }

    // On one table, both strategies reach the same best score
    let table = IntegralImage::from_first_channel(&image);
    let direct = direct_search(&table, 2).expect("direct_search");
    let staged = shape_then_position_search(&table, 2).expect("staged search");
    rp.compare_bool("identical scores on one table", direct.score == staged.score);
    rp.compare_rects(direct.rect, staged.rect);

    assert!(rp.cleanup());
}

#[test]
fn random_gray_variants_reg() {
    let mut rp = RegParams::new("random_gray_variants");

    // Full-width and full-height bands score exactly like their complements,
    // so both searches must settle those ties on the same rectangle.
    let direct = SegmentOptions::new().with_strategy(Strategy::Direct);
    let staged = SegmentOptions::new().with_strategy(Strategy::ShapeThenPosition);
    let mut mismatches = 0usize;
    for seed in 0..300u64 {
        let ny = 2 + (seed as usize * 7) % 13;
        let nx = 2 + (seed as usize * 11 + 3) % 13;
        let first: Vec<f32> = random_image(ny, nx, seed).iter().step_by(3).copied().collect();
        let data = replicate_mono(&first);
        let image = ImageView::new(ny, nx, &data).expect("view");

        let color = segment(&image, &direct).expect("direct");
        let mono = segment(&image, &staged).expect("shape then position");
        if color.rect != mono.rect {
            mismatches += 1;
            eprintln!(
                "  seed {} {}x{}: direct {:?} {}  mono {:?} {}",
                seed, ny, nx, color.rect, color.score, mono.rect, mono.score
            );
        }
        rp.compare_values(3.0 * mono.score, color.score, 1e-9 * color.score.max(1.0));
    }
    rp.compare_values(0.0, mismatches as f64, 0.0);

    // Two rows: every full-width band has a band complement
    let values = [0.2f32, 0.9, 0.4, 0.6, 0.3, 0.8];
    let data = replicate_mono(&values);
    let image = ImageView::new(2, 3, &data).expect("view");
    let color = segment(&image, &direct).expect("direct");
    let mono = segment(&image, &staged).expect("shape then position");
    rp.compare_rects(color.rect, mono.rect);

    assert!(rp.cleanup());
}

#[test]
fn determinism_reg() {
    let mut rp = RegParams::new("determinism");

    let (ny, nx) = (9, 13);
    let data = random_image(ny, nx, 42);
    let image = ImageView::new(ny, nx, &data).expect("view");

    for strategy in [Strategy::Direct, Strategy::ShapeThenPosition] {
        eprintln!("=== {:?} ===", strategy);
        let baseline = segment(
            &image,
            &SegmentOptions::new().with_strategy(strategy).with_threads(1),
        )
        .expect("baseline");

        for threads in [1, 2, 4] {
            for chunk_size in [1, 2, 7] {
                let options = SegmentOptions::new()
                    .with_strategy(strategy)
                    .with_threads(threads)
                    .with_chunk_size(chunk_size);
                for _ in 0..2 {
                    let result = segment(&image, &options).expect("segment");
                    rp.compare_bool(
                        &format!("{:?} threads={} chunk={}", strategy, threads, chunk_size),
                        result == baseline,
                    );
                }
            }
        }

        // Global pool gives the same answer
        let global = segment(&image, &SegmentOptions::new().with_strategy(strategy))
            .expect("global pool");
        rp.compare_bool("global pool", global == baseline);
    }

    // The shape phase alone is independent of the chunk size
    let table = IntegralImage::from_first_channel(&image);
    let a = best_shape(&table, 1).expect("shape");
    let b = best_shape(&table, 16).expect("shape");
    rp.compare_bool("shape phase chunk size", a == b);

    assert!(rp.cleanup());
}
