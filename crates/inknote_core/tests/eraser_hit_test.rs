use inknote_core::{
    BatchOutcome, FrameSize, InkCaptureEngine, InkConfig, InkSession, MemoryStrokeSink, Sample,
    SinkEvent, Stroke, StrokePoint, ToolMode, LOGICAL_PAGE,
};

fn stroke_through(points: &[(f32, f32)]) -> Stroke {
    Stroke::new(
        points
            .iter()
            .map(|(x, y)| StrokePoint::new(*x, *y, 0.5))
            .collect(),
    )
    .unwrap()
}

/// Vertical eraser sweep at `x`, sampled every 6 units from y=70 to y=130.
fn vertical_sweep(x: f32) -> Vec<Sample> {
    (0..=10)
        .map(|step| Sample::new(x, 70.0 + 6.0 * step as f32, 0.0, step))
        .collect()
}

fn erase(batch: &[Sample], visible: &[Stroke]) -> Option<inknote_core::StrokeId> {
    let mut engine = InkCaptureEngine::new(InkConfig::default());
    engine.begin_contact(ToolMode::Erase);
    engine.erase_batch(batch, visible)
}

#[test]
fn eraser_within_radius_reports_stroke() {
    let target = stroke_through(&[(100.0, 100.0), (140.0, 140.0)]);
    let visible = vec![target.clone()];

    assert_eq!(erase(&vertical_sweep(95.0), &visible), Some(target.id()));
}

#[test]
fn eraser_exactly_on_radius_reports_stroke() {
    let target = stroke_through(&[(100.0, 100.0)]);
    assert_eq!(erase(&vertical_sweep(90.0), &[target.clone()]), Some(target.id()));
}

#[test]
fn eraser_eleven_units_away_reports_nothing() {
    let target = stroke_through(&[(100.0, 100.0)]);
    assert_eq!(erase(&vertical_sweep(89.0), &[target]), None);
}

#[test]
fn empty_eraser_batch_is_a_no_op() {
    let target = stroke_through(&[(100.0, 100.0)]);
    assert_eq!(erase(&[], &[target]), None);
}

#[test]
fn one_stroke_is_removed_per_batch() {
    let mut session = InkSession::new(LOGICAL_PAGE, InkConfig::default(), MemoryStrokeSink::new())
        .expect("default config is valid");
    let first = stroke_through(&[(100.0, 100.0)]);
    let second = stroke_through(&[(100.0, 104.0)]);
    session.load_page(&[first.clone(), second.clone()]);

    session.begin_contact(ToolMode::Erase);
    let sweep = vertical_sweep(95.0);
    assert_eq!(session.push_samples(&sweep), BatchOutcome::Erased(first.id()));
    assert_eq!(session.visible_strokes().len(), 1);
    assert_eq!(session.push_samples(&sweep), BatchOutcome::Erased(second.id()));
    assert_eq!(session.push_samples(&sweep), BatchOutcome::Missed);
    assert!(session.end_contact().is_none());

    assert!(session.visible_strokes().is_empty());
    assert_eq!(
        session.sink().events(),
        &[SinkEvent::Erased(first.id()), SinkEvent::Erased(second.id())]
    );
}

#[test]
fn hit_test_runs_in_surface_space() {
    // Surface at half the logical page: logical (200, 200) shows at (100, 100).
    let surface = FrameSize::new(702.0, 936.0).unwrap();
    let mut session =
        InkSession::new(surface, InkConfig::default(), MemoryStrokeSink::new()).unwrap();
    let stored = stroke_through(&[(200.0, 200.0)]);
    session.load_page(&[stored.clone()]);

    session.begin_contact(ToolMode::Erase);
    assert_eq!(
        session.push_samples(&[Sample::new(104.0, 100.0, 0.0, 0)]),
        BatchOutcome::Erased(stored.id())
    );
}
