use inknote_core::{
    rescale_points, rescale_stroke, to_logical, to_physical, FrameSize, Stroke, StrokePoint,
    LOGICAL_PAGE,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn assert_close(actual: f32, expected: f32) {
    let tolerance = 1e-4 * expected.abs().max(1.0);
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn forward_then_inverse_reproduces_points() {
    // Fixed seed so a failing frame pair reproduces exactly.
    let mut rng = StdRng::seed_from_u64(0x1404_1872);
    for _ in 0..200 {
        let source =
            FrameSize::new(rng.gen_range(1.0..4000.0), rng.gen_range(1.0..4000.0)).unwrap();
        let destination =
            FrameSize::new(rng.gen_range(1.0..4000.0), rng.gen_range(1.0..4000.0)).unwrap();
        let points: Vec<StrokePoint> = (0..16)
            .map(|_| {
                StrokePoint::new(
                    rng.gen_range(0.0..source.width()),
                    rng.gen_range(0.0..source.height()),
                    rng.gen::<f32>(),
                )
            })
            .collect();

        let there = rescale_points(&points, source, destination);
        let back = rescale_points(&there, destination, source);

        assert_eq!(back.len(), points.len());
        for (original, restored) in points.iter().zip(&back) {
            assert_close(restored.x(), original.x());
            assert_close(restored.y(), original.y());
            assert_eq!(restored.pressure(), original.pressure());
        }
    }
}

#[test]
fn logical_round_trip_for_common_e_ink_panels() {
    let panels = [(1404.0, 1872.0), (1264.0, 1680.0), (1072.0, 1448.0), (1860.0, 2480.0)];
    let points = vec![
        StrokePoint::new(0.0, 0.0, 0.5),
        StrokePoint::new(123.4, 567.8, 0.7),
        StrokePoint::new(1000.0, 1400.0, 1.0),
    ];
    for (width, height) in panels {
        let surface = FrameSize::new(width, height).unwrap();
        let back = to_physical(&to_logical(&points, surface), surface);
        for (original, restored) in points.iter().zip(&back) {
            assert_close(restored.x(), original.x());
            assert_close(restored.y(), original.y());
        }
    }
}

#[test]
fn surface_corner_maps_to_logical_corner() {
    let surface = FrameSize::new(1072.0, 1448.0).unwrap();
    let logical = to_logical(&[StrokePoint::new(1072.0, 1448.0, 0.3)], surface);
    assert_close(logical[0].x(), LOGICAL_PAGE.width());
    assert_close(logical[0].y(), LOGICAL_PAGE.height());
    assert_eq!(logical[0].pressure(), 0.3);
}

#[test]
fn rescale_stroke_keeps_id_and_point_count() {
    let stroke = Stroke::new(vec![
        StrokePoint::new(10.0, 10.0, 0.5),
        StrokePoint::new(20.0, 30.0, 0.5),
    ])
    .unwrap();
    let surface = FrameSize::new(702.0, 936.0).unwrap();
    let logical = rescale_stroke(&stroke, surface, LOGICAL_PAGE);

    assert_eq!(logical.id(), stroke.id());
    assert_eq!(logical.len(), 2);
    assert_eq!(logical.points()[1].x(), 40.0);
    assert_eq!(logical.points()[1].y(), 60.0);
}

#[test]
fn zero_dimensions_are_rejected_before_scaling() {
    let err = FrameSize::new(0.0, 1872.0).unwrap_err();
    assert!(err.to_string().contains("must be finite and > 0"));
}
