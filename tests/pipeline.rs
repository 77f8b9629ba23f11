mod common;

use common::synthetic_image::{
    diagonal_line, filled_rect, horizontal_step, isolated_pixel, max_difference, uniform,
};
use smaa_filter::{EdgeDetectionMode, ImageReader, Preset, SmaaFilter, SmaaOptions};

const BLACK: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

#[test]
fn uniform_image_passes_through_unchanged() {
    let input = uniform(8, 8, [0.5, 0.5, 0.5, 1.0]);
    for mode in [
        EdgeDetectionMode::Luma,
        EdgeDetectionMode::Color,
        EdgeDetectionMode::Depth,
    ] {
        let filter = SmaaFilter::from_preset(mode, Preset::High);
        let run = filter.process_detailed(&input, None, None).unwrap();

        for p in run.edges.pixels() {
            assert_eq!(p[0], 0.0);
            assert_eq!(p[1], 0.0);
        }
        for p in run.weights.pixels() {
            assert_eq!(*p, [0.0; 4]);
        }
        assert_eq!(max_difference(&run.output, &input), 0.0);
    }
}

#[test]
fn velocity_image_threads_through_the_pipeline() {
    let input = uniform(8, 8, [0.5, 0.5, 0.5, 1.0]);
    let velocity = uniform(8, 8, [0.6, 0.8, 0.0, 0.0]);
    let filter = SmaaFilter::from_preset(EdgeDetectionMode::Color, Preset::High);
    let out = filter.process_with_velocity(&input, &velocity).unwrap();

    // A uniform input blends nothing, but the velocity magnitude still
    // lands in every alpha channel.
    let expected = (5.0f32 * (0.6f32 * 0.6 + 0.8f32 * 0.8).sqrt()).sqrt();
    for p in out.pixels() {
        assert_eq!(p[0], 0.5);
        assert_eq!(p[1], 0.5);
        assert_eq!(p[2], 0.5);
        assert!((p[3] - expected).abs() < 1e-6);
    }
}

#[test]
fn horizontal_step_detects_one_row_of_north_edges() {
    let input = horizontal_step(8, 8, 4, BLACK, WHITE);
    let filter = SmaaFilter::from_preset(EdgeDetectionMode::Luma, Preset::High);
    let run = filter.process_detailed(&input, None, None).unwrap();

    for y in 0..8 {
        for x in 0..8 {
            let e = run.edges.get_pixel(x, y);
            assert_eq!(e[0], 0.0, "no west edge expected at ({x}, {y})");
            let expected = if y == 4 { 1.0 } else { 0.0 };
            assert_eq!(e[1], expected, "north edge at ({x}, {y})");
        }
    }
}

#[test]
fn isolated_pixel_edges() {
    let input = isolated_pixel(8, 8, 4, 4);
    let filter = SmaaFilter::from_preset(EdgeDetectionMode::Color, Preset::High);
    let run = filter.process_detailed(&input, None, None).unwrap();

    for y in 0..8 {
        for x in 0..8 {
            let e = run.edges.get_pixel(x, y);
            let west = matches!((x, y), (4, 4) | (5, 4));
            let north = matches!((x, y), (4, 4) | (4, 5));
            assert_eq!(e[0], if west { 1.0 } else { 0.0 }, "west at ({x}, {y})");
            assert_eq!(e[1], if north { 1.0 } else { 0.0 }, "north at ({x}, {y})");
        }
    }
}

#[test]
fn edge_channels_are_binary_and_weights_bounded() {
    let input = diagonal_line(16);
    let filter = SmaaFilter::from_preset(EdgeDetectionMode::Color, Preset::High);
    let run = filter.process_detailed(&input, None, None).unwrap();

    for p in run.edges.pixels() {
        assert!(p[0] == 0.0 || p[0] == 1.0);
        assert!(p[1] == 0.0 || p[1] == 1.0);
    }
    for p in run.weights.pixels() {
        for c in p {
            assert!((0.0..=1.0).contains(c), "weight out of range: {c}");
        }
    }
    // Inputs are 0/1 in every channel, and blending is convex.
    for p in run.output.pixels() {
        for c in p {
            assert!((0.0..=1.0).contains(c), "output out of range: {c}");
        }
    }
}

#[test]
fn diagonal_line_is_softened_within_a_corridor() {
    let input = diagonal_line(16);
    let filter = SmaaFilter::from_preset(EdgeDetectionMode::Color, Preset::High);
    let run = filter.process_detailed(&input, None, None).unwrap();

    // Stair-step pixels carry both edges.
    for i in 1..15 {
        let e = run.edges.get_pixel(i, i);
        assert_eq!(e[0], 1.0, "west edge on the line at ({i}, {i})");
        assert_eq!(e[1], 1.0, "north edge on the line at ({i}, {i})");
    }

    let mut touched = 0usize;
    for y in 0..16i32 {
        for x in 0..16i32 {
            let before = input.get_pixel(x, y);
            let after = run.output.get_pixel(x, y);
            let diff = before
                .iter()
                .zip(&after)
                .map(|(a, b)| (a - b).abs())
                .fold(0.0f32, f32::max);
            if diff > 0.0 {
                assert!(
                    (y - x).abs() <= 2,
                    "change outside the diagonal corridor at ({x}, {y})"
                );
                if (y - x).abs() <= 1 {
                    touched += 1;
                }
            }
        }
    }
    assert!(touched > 0, "expected softening along the diagonal");
}

#[test]
fn rerunning_on_filtered_output_is_nearly_stable() {
    let input = diagonal_line(16);
    let filter = SmaaFilter::from_preset(EdgeDetectionMode::Color, Preset::High);
    let once = filter.process(&input).unwrap();
    let twice = filter.process(&once).unwrap();

    // The first run does the bulk of the work; a second application moves
    // pixels by less than half the original step contrast.
    let drift = max_difference(&twice, &once);
    assert!(drift < 0.5, "second run drifted by {drift}");
}

#[test]
fn corner_detection_changes_inner_corner_weights() {
    let input = filled_rect(16, 16, 4, 4, 12, 12);

    let on = SmaaFilter::new(
        EdgeDetectionMode::Color,
        SmaaOptions {
            enable_corner_detection: true,
            ..SmaaOptions::from_preset(Preset::High)
        },
    );
    let off = SmaaFilter::new(
        EdgeDetectionMode::Color,
        SmaaOptions {
            enable_corner_detection: false,
            ..SmaaOptions::from_preset(Preset::High)
        },
    );

    let w_on = on.process_detailed(&input, None, None).unwrap().weights;
    let w_off = off.process_detailed(&input, None, None).unwrap().weights;
    let diff = max_difference(&w_on, &w_off);
    assert!(diff >= 0.01, "corner rounding had no effect (diff {diff})");
}

#[test]
fn zero_search_steps_disable_searches_without_crashing() {
    let input = horizontal_step(8, 8, 4, BLACK, WHITE);
    let options = SmaaOptions {
        max_search_steps: 0,
        max_search_steps_diag: 0,
        ..SmaaOptions::from_preset(Preset::High)
    };
    let filter = SmaaFilter::new(EdgeDetectionMode::Luma, options);
    let run = filter.process_detailed(&input, None, None).unwrap();

    for p in run.weights.pixels() {
        assert_eq!(*p, [0.0; 4]);
    }
    assert_eq!(max_difference(&run.output, &input), 0.0);
}

#[test]
fn border_reads_clamp_to_nearest_pixel() {
    let input = horizontal_step(8, 8, 4, BLACK, WHITE);
    assert_eq!(input.get_pixel(-1, 0), input.get_pixel(0, 0));
    assert_eq!(input.get_pixel(8, 7), input.get_pixel(7, 7));
    assert_eq!(input.get_pixel(3, -1), input.get_pixel(3, 0));
    assert_eq!(input.get_pixel(3, 8), input.get_pixel(3, 7));
}

#[test]
fn depth_mode_thresholds_first_channel_only() {
    // Depth in the first channel: a step at y = 4.
    let input = horizontal_step(8, 8, 4, [0.2, 0.0, 0.0, 1.0], [0.9, 0.0, 0.0, 1.0]);
    let filter = SmaaFilter::from_preset(EdgeDetectionMode::Depth, Preset::High);
    let run = filter.process_detailed(&input, None, None).unwrap();

    for x in 0..8 {
        assert_eq!(run.edges.get_pixel(x, 4)[1], 1.0);
        assert_eq!(run.edges.get_pixel(x, 3)[1], 0.0);
    }
}

#[test]
fn predication_scales_the_threshold() {
    // Contrast of 0.15 sits between the plain threshold (0.1) and the
    // predication-scaled one (0.2), so a flat predication buffer suppresses
    // the edge.
    let input = horizontal_step(8, 8, 4, [0.0, 0.0, 0.0, 1.0], [0.15, 0.15, 0.15, 1.0]);
    let flat_predication = uniform(8, 8, [0.5, 0.5, 0.5, 1.0]);

    let options = SmaaOptions {
        enable_predication: true,
        ..SmaaOptions::from_preset(Preset::High)
    };
    let filter = SmaaFilter::new(EdgeDetectionMode::Luma, options);

    let run = filter
        .process_detailed(&input, Some(&flat_predication), None)
        .unwrap();
    for p in run.edges.pixels() {
        assert_eq!(p[1], 0.0, "edge should be suppressed by predication");
    }

    // A predication buffer with a matching edge lowers the threshold back
    // down and the edge reappears.
    let edged_predication = horizontal_step(8, 8, 4, [0.0, 0.0, 0.0, 1.0], [1.0, 0.0, 0.0, 1.0]);
    let run = filter
        .process_detailed(&input, Some(&edged_predication), None)
        .unwrap();
    let mut found = false;
    for x in 0..8 {
        if run.edges.get_pixel(x, 4)[1] > 0.0 {
            found = true;
        }
    }
    assert!(found, "predication edge should re-enable detection");
}
