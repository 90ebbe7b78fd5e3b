//! FFI ink API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose the page ink session to Dart via FRB as plain sync calls.
//! - Translate core types into flat, string-keyed FFI records.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - One process-wide session serves the single drawing surface.
//! - Stroke coordinates crossing the boundary in `InkStroke` are in logical
//!   page space; samples are in surface space.

use inknote_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    rescale_points, BatchOutcome, FrameSize, InkConfig, InkSession, MemoryStrokeSink, Sample,
    SinkEvent, Stroke, StrokePoint, SwipeDirection, ToolMode,
};
use log::warn;
use std::sync::{Mutex, MutexGuard, OnceLock};
use uuid::Uuid;

type PageSession = InkSession<MemoryStrokeSink>;

static INK_SESSION: OnceLock<Mutex<Option<PageSession>>> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Returns empty string on success and the error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// One raw digitizer reading in surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InkSample {
    pub x: f32,
    pub y: f32,
    pub pressure: f32,
    pub timestamp_ms: i64,
}

/// One stored stroke point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InkPoint {
    pub x: f32,
    pub y: f32,
    pub pressure: f32,
}

/// One stored stroke in logical page coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct InkStroke {
    /// Stable stroke UUID in string form.
    pub id: String,
    pub points: Vec<InkPoint>,
}

/// Response envelope for every ink session call.
///
/// `completed_strokes` and `erased_stroke_ids` carry what the host must
/// persist since the previous call.
#[derive(Debug, Clone, PartialEq)]
pub struct InkActionResponse {
    pub ok: bool,
    pub message: String,
    pub completed_strokes: Vec<InkStroke>,
    pub erased_stroke_ids: Vec<String>,
}

impl InkActionResponse {
    fn success(message: impl Into<String>, events: Vec<SinkEvent>) -> Self {
        let mut completed_strokes = Vec::new();
        let mut erased_stroke_ids = Vec::new();
        for event in events {
            match event {
                SinkEvent::Completed(stroke) => completed_strokes.push(to_ink_stroke(&stroke)),
                SinkEvent::Erased(id) => erased_stroke_ids.push(id.to_string()),
            }
        }
        Self {
            ok: true,
            message: message.into(),
            completed_strokes,
            erased_stroke_ids,
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
            completed_strokes: Vec::new(),
            erased_stroke_ids: Vec::new(),
        }
    }
}

/// Response envelope for whole-page reads.
#[derive(Debug, Clone, PartialEq)]
pub struct InkPageResponse {
    pub ok: bool,
    pub message: String,
    pub strokes: Vec<InkStroke>,
}

/// Response envelope for stateless point rescaling.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizeResponse {
    pub ok: bool,
    pub message: String,
    pub points: Vec<InkPoint>,
}

/// Opens a page on a surface, replacing any previous session.
///
/// Input semantics:
/// - `strokes`: persisted strokes in logical page coordinates.
/// - `config_json`: optional threshold overrides (`InkConfig` JSON).
///
/// # FFI contract
/// - Sync call, CPU-bound.
/// - Never panics; invalid size, config or stroke records fail the call.
#[flutter_rust_bridge::frb(sync)]
pub fn ink_open_page(
    surface_width: f32,
    surface_height: f32,
    strokes: Vec<InkStroke>,
    config_json: Option<String>,
) -> InkActionResponse {
    match build_session(surface_width, surface_height, &strokes, config_json.as_deref()) {
        Ok(session) => {
            let message = format!(
                "Page opened with {} stroke(s).",
                session.visible_strokes().len()
            );
            *lock_session() = Some(session);
            InkActionResponse::success(message, Vec::new())
        }
        Err(err) => InkActionResponse::failure(format!("ink_open_page failed: {err}")),
    }
}

/// Pointer-down for a pen (`"pen"`) or eraser (`"eraser"`) contact.
///
/// `samples` is the first digitizer batch of the contact and may be empty.
#[flutter_rust_bridge::frb(sync)]
pub fn ink_pointer_down(tool: String, samples: Vec<InkSample>) -> InkActionResponse {
    let mode = match parse_tool(tool.as_str()) {
        Some(mode) => mode,
        None => {
            return InkActionResponse::failure(format!(
                "ink_pointer_down failed: unsupported tool `{}`; expected pen|eraser",
                tool.trim()
            ))
        }
    };
    with_session("ink_pointer_down", |session| {
        session.begin_contact(mode);
        describe_outcome(session.push_samples(&to_samples(&samples)))
    })
}

/// Pointer-move batch for the active contact.
#[flutter_rust_bridge::frb(sync)]
pub fn ink_pointer_move(samples: Vec<InkSample>) -> InkActionResponse {
    with_session("ink_pointer_move", |session| {
        describe_outcome(session.push_samples(&to_samples(&samples)))
    })
}

/// Pointer-up with the final batch; completes a pen stroke.
#[flutter_rust_bridge::frb(sync)]
pub fn ink_pointer_up(samples: Vec<InkSample>) -> InkActionResponse {
    with_session("ink_pointer_up", |session| {
        session.push_samples(&to_samples(&samples));
        match session.end_contact() {
            Some(stroke_id) => format!("Stroke {stroke_id} completed."),
            None => "Contact ended.".to_string(),
        }
    })
}

/// Abandons the active contact (e.g. surface torn down mid-gesture).
#[flutter_rust_bridge::frb(sync)]
pub fn ink_cancel_contact() -> InkActionResponse {
    with_session("ink_cancel_contact", |session| {
        session.cancel_contact();
        "Contact cancelled.".to_string()
    })
}

/// Returns every visible stroke in logical page coordinates.
#[flutter_rust_bridge::frb(sync)]
pub fn ink_export_page() -> InkPageResponse {
    let guard = lock_session();
    match guard.as_ref() {
        Some(session) => {
            let strokes = session
                .export_page()
                .iter()
                .map(to_ink_stroke)
                .collect::<Vec<_>>();
            InkPageResponse {
                ok: true,
                message: format!("Exported {} stroke(s).", strokes.len()),
                strokes,
            }
        }
        None => InkPageResponse {
            ok: false,
            message: "ink_export_page failed: no page is open".to_string(),
            strokes: Vec::new(),
        },
    }
}

/// Pointer-down for a navigation gesture.
#[flutter_rust_bridge::frb(sync)]
pub fn swipe_pointer_down(x: f32, y: f32) -> bool {
    match lock_session().as_mut() {
        Some(session) => {
            session.swipe_begin(x, y);
            true
        }
        None => false,
    }
}

/// Pointer-move for a navigation gesture.
///
/// Returns `true` when the move was consumed as a swipe vote and must not
/// also drive scrolling.
#[flutter_rust_bridge::frb(sync)]
pub fn swipe_pointer_move(x: f32, y: f32) -> bool {
    lock_session()
        .as_mut()
        .map(|session| session.swipe_move(x, y).is_consumed())
        .unwrap_or(false)
}

/// Pointer-up for a navigation gesture.
///
/// Returns `left_to_right|right_to_left|up_to_down|down_to_up` or `none`.
#[flutter_rust_bridge::frb(sync)]
pub fn swipe_pointer_up() -> String {
    lock_session()
        .as_mut()
        .and_then(|session| session.swipe_end())
        .map(SwipeDirection::as_str)
        .unwrap_or("none")
        .to_string()
}

/// Rescales points between two frames; pressure is untouched.
///
/// # FFI contract
/// - Stateless; does not touch the page session.
/// - Zero, negative or non-finite dimensions fail the call.
#[flutter_rust_bridge::frb(sync)]
pub fn normalize_points(
    points: Vec<InkPoint>,
    source_width: f32,
    source_height: f32,
    destination_width: f32,
    destination_height: f32,
) -> NormalizeResponse {
    let frames = FrameSize::new(source_width, source_height).and_then(|source| {
        FrameSize::new(destination_width, destination_height)
            .map(|destination| (source, destination))
    });
    match frames {
        Ok((source, destination)) => {
            let scaled = rescale_points(&to_stroke_points(&points), source, destination);
            NormalizeResponse {
                ok: true,
                message: String::new(),
                points: scaled.iter().map(to_ink_point).collect(),
            }
        }
        Err(err) => NormalizeResponse {
            ok: false,
            message: format!("normalize_points failed: {err}"),
            points: Vec::new(),
        },
    }
}

fn build_session(
    surface_width: f32,
    surface_height: f32,
    strokes: &[InkStroke],
    config_json: Option<&str>,
) -> Result<PageSession, String> {
    let surface = FrameSize::new(surface_width, surface_height).map_err(|err| err.to_string())?;
    let config = match config_json.map(str::trim) {
        Some(raw) if !raw.is_empty() => {
            InkConfig::from_json(raw).map_err(|err| err.to_string())?
        }
        _ => InkConfig::default(),
    };
    let strokes = strokes
        .iter()
        .map(from_ink_stroke)
        .collect::<Result<Vec<_>, _>>()?;

    let mut session = InkSession::new(surface, config, MemoryStrokeSink::new())
        .map_err(|err| err.to_string())?;
    session.load_page(&strokes);
    Ok(session)
}

fn lock_session() -> MutexGuard<'static, Option<PageSession>> {
    // A poisoned lock only means an earlier call panicked mid-update; the
    // session data is still structurally valid.
    INK_SESSION
        .get_or_init(|| Mutex::new(None))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn with_session(
    operation: &str,
    f: impl FnOnce(&mut PageSession) -> String,
) -> InkActionResponse {
    let mut guard = lock_session();
    match guard.as_mut() {
        Some(session) => {
            let message = f(session);
            let events = session.sink_mut().take_events();
            InkActionResponse::success(message, events)
        }
        None => {
            warn!("event=ffi_call module=ffi status=error op={operation} error_code=no_page");
            InkActionResponse::failure(format!("{operation} failed: no page is open"))
        }
    }
}

fn describe_outcome(outcome: BatchOutcome) -> String {
    match outcome {
        BatchOutcome::Idle => "No active contact.".to_string(),
        BatchOutcome::Drawn { accepted } => format!("Accepted {accepted} point(s)."),
        BatchOutcome::Erased(stroke_id) => format!("Stroke {stroke_id} erased."),
        BatchOutcome::Missed => "Nothing under eraser.".to_string(),
    }
}

fn parse_tool(tool: &str) -> Option<ToolMode> {
    match tool.trim().to_ascii_lowercase().as_str() {
        "pen" => Some(ToolMode::Pen),
        "eraser" | "erase" => Some(ToolMode::Erase),
        _ => None,
    }
}

fn to_samples(samples: &[InkSample]) -> Vec<Sample> {
    samples
        .iter()
        .map(|sample| Sample::new(sample.x, sample.y, sample.pressure, sample.timestamp_ms))
        .collect()
}

fn to_stroke_points(points: &[InkPoint]) -> Vec<StrokePoint> {
    points
        .iter()
        .map(|point| StrokePoint::from_stored(point.x, point.y, point.pressure))
        .collect()
}

fn to_ink_point(point: &StrokePoint) -> InkPoint {
    InkPoint {
        x: point.x(),
        y: point.y(),
        pressure: point.pressure(),
    }
}

fn to_ink_stroke(stroke: &Stroke) -> InkStroke {
    InkStroke {
        id: stroke.id().to_string(),
        points: stroke.points().iter().map(to_ink_point).collect(),
    }
}

fn from_ink_stroke(stroke: &InkStroke) -> Result<Stroke, String> {
    let id = Uuid::parse_str(stroke.id.trim())
        .map_err(|err| format!("invalid stroke id `{}`: {err}", stroke.id))?;
    Stroke::with_id(id, to_stroke_points(&stroke.points))
        .map_err(|err| format!("invalid stroke `{id}`: {err}"))
}

#[cfg(test)]
mod tests {
    use super::{
        core_version, init_logging, ink_cancel_contact, ink_export_page, ink_open_page,
        ink_pointer_down, ink_pointer_move, ink_pointer_up, normalize_points, ping,
        swipe_pointer_down, swipe_pointer_move, swipe_pointer_up, InkPoint, InkSample, InkStroke,
    };

    fn assert_close(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() <= 1e-3,
            "expected {expected}, got {actual}"
        );
    }

    fn sample(x: f32, y: f32) -> InkSample {
        InkSample {
            x,
            y,
            pressure: 0.5,
            timestamp_ms: 0,
        }
    }

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), "/tmp/inknote-logs".to_string());
        assert!(error.contains("unsupported log level"));
    }

    #[test]
    fn normalize_points_scales_axes_independently() {
        let response = normalize_points(
            vec![InkPoint {
                x: 100.0,
                y: 100.0,
                pressure: 0.4,
            }],
            702.0,
            936.0,
            1404.0,
            1872.0,
        );
        assert!(response.ok);
        assert_eq!(
            response.points,
            vec![InkPoint {
                x: 200.0,
                y: 200.0,
                pressure: 0.4
            }]
        );
    }

    #[test]
    fn normalize_points_round_trip_keeps_unrounded_coordinates() {
        let original = InkPoint {
            x: 33.3,
            y: 77.7,
            pressure: 0.5,
        };
        let logical = normalize_points(vec![original], 1000.0, 1333.0, 1404.0, 1872.0);
        assert!(logical.ok);
        assert_close(logical.points[0].x, 46.7532);

        let back = normalize_points(logical.points, 1404.0, 1872.0, 1000.0, 1333.0);
        assert!(back.ok);
        assert_close(back.points[0].x, original.x);
        assert_close(back.points[0].y, original.y);
        assert_eq!(back.points[0].pressure, original.pressure);
    }

    #[test]
    fn normalize_points_rejects_zero_dimensions() {
        let response = normalize_points(Vec::new(), 0.0, 936.0, 1404.0, 1872.0);
        assert!(!response.ok);
        assert!(response.message.contains("normalize_points failed"));
    }

    // The session is process-wide, so the whole lifecycle runs in one test.
    #[test]
    fn page_session_lifecycle() {
        let bad = ink_open_page(0.0, 100.0, Vec::new(), None);
        assert!(!bad.ok);

        let bad_stroke = InkStroke {
            id: "not-a-uuid".to_string(),
            points: Vec::new(),
        };
        assert!(!ink_open_page(702.0, 936.0, vec![bad_stroke], None).ok);

        let opened = ink_open_page(702.0, 936.0, Vec::new(), Some(String::new()));
        assert!(opened.ok, "{}", opened.message);

        assert!(!ink_pointer_down("brush".to_string(), Vec::new()).ok);

        let down = ink_pointer_down("pen".to_string(), vec![sample(10.0, 10.0)]);
        assert!(down.ok);
        assert!(down.completed_strokes.is_empty());
        ink_pointer_move(vec![sample(11.0, 10.0), sample(20.0, 10.0)]);
        let up = ink_pointer_up(Vec::new());
        assert_eq!(up.completed_strokes.len(), 1);
        let stroke = &up.completed_strokes[0];
        assert_eq!(stroke.points.len(), 2);
        assert_eq!(stroke.points[1].x, 40.0);

        let erase = ink_pointer_down("eraser".to_string(), vec![sample(12.0, 12.0)]);
        assert_eq!(erase.erased_stroke_ids, vec![stroke.id.clone()]);
        ink_pointer_up(Vec::new());

        ink_pointer_down("pen".to_string(), vec![sample(50.0, 50.0)]);
        ink_cancel_contact();
        assert!(ink_pointer_up(Vec::new()).completed_strokes.is_empty());

        let page = ink_export_page();
        assert!(page.ok);
        assert!(page.strokes.is_empty());

        assert!(swipe_pointer_down(300.0, 300.0));
        assert!(swipe_pointer_move(300.0, 250.0));
        assert_eq!(swipe_pointer_up(), "down_to_up");
        assert_eq!(swipe_pointer_up(), "none");

        // Saved strokes carry unrounded logical coordinates; reopening must
        // export them unchanged.
        assert!(ink_open_page(1000.0, 1333.0, Vec::new(), None).ok);
        ink_pointer_down("pen".to_string(), vec![sample(33.3, 77.7)]);
        let saved = ink_pointer_up(Vec::new()).completed_strokes;
        assert_eq!(saved.len(), 1);

        assert!(ink_open_page(1000.0, 1333.0, saved.clone(), None).ok);
        let exported = ink_export_page();
        assert!(exported.ok);
        assert_eq!(exported.strokes.len(), 1);
        assert_eq!(exported.strokes[0].id, saved[0].id);
        let (before, after) = (&saved[0].points[0], &exported.strokes[0].points[0]);
        assert_close(after.x, before.x);
        assert_close(after.y, before.y);
        assert_eq!(after.pressure, before.pressure);
    }
}
