//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `inknote_core` linkage without the Flutter/FFI runtime.
//! - Replay one fixed pen contact and one swipe with deterministic output.
//! - Write core logs under the system temp directory at the build's default level.

use inknote_core::{
    default_log_level, init_logging, InkConfig, InkSession, MemoryStrokeSink, Sample, SinkEvent,
    SwipeDirection, ToolMode, LOGICAL_PAGE,
};

fn main() {
    println!("inknote_core ping={}", inknote_core::ping());
    println!("inknote_core version={}", inknote_core::core_version());

    let log_dir = std::env::temp_dir().join("inknote-cli-logs");
    match init_logging(default_log_level(), &log_dir.to_string_lossy()) {
        Ok(()) => println!(
            "inknote_core logging level={} dir={}",
            default_log_level(),
            log_dir.display()
        ),
        Err(err) => eprintln!("inknote_core logging error={err}"),
    }

    let mut session =
        match InkSession::new(LOGICAL_PAGE, InkConfig::default(), MemoryStrokeSink::new()) {
            Ok(session) => session,
            Err(err) => {
                eprintln!("inknote_core session error={err}");
                std::process::exit(1);
            }
        };

    session.begin_contact(ToolMode::Pen);
    session.push_samples(&[
        Sample::new(0.0, 0.0, 0.5, 0),
        Sample::new(1.0, 1.0, 0.5, 8),
        Sample::new(20.0, 20.0, 0.6, 16),
        Sample::new(25.0, 25.0, 0.6, 24),
    ]);
    session.end_contact();

    for event in session.sink_mut().take_events() {
        if let SinkEvent::Completed(stroke) = event {
            let points = stroke
                .points()
                .iter()
                .map(|p| format!("({},{},{})", p.x(), p.y(), p.pressure()))
                .collect::<Vec<_>>()
                .join(" ");
            println!("stroke points={points}");
        }
    }

    session.swipe_begin(600.0, 900.0);
    for step in 1..=5 {
        session.swipe_move(600.0 - 40.0 * step as f32, 900.0);
    }
    let direction = session.swipe_end();
    println!(
        "swipe direction={}",
        direction.map(SwipeDirection::as_str).unwrap_or("none")
    );
}
