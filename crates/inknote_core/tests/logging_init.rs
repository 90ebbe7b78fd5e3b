use inknote_core::{init_logging, logging_status, LoggingError};

#[test]
fn init_logging_is_idempotent_and_rejects_reconfiguration() {
    let log_dir = tempfile::tempdir().expect("temp dir");
    let other_dir = tempfile::tempdir().expect("temp dir");
    let log_dir_str = log_dir.path().to_str().expect("utf-8 temp dir");
    let other_dir_str = other_dir.path().to_str().expect("utf-8 temp dir");

    init_logging("info", log_dir_str).expect("first init should succeed");
    init_logging("INFO", log_dir_str).expect("same config should be idempotent");

    let level_err = init_logging("debug", log_dir_str).expect_err("level conflict must fail");
    assert!(matches!(level_err, LoggingError::LevelConflict { .. }));
    assert!(level_err.to_string().contains("refusing to switch"));

    let dir_err = init_logging("info", other_dir_str).expect_err("dir conflict must fail");
    assert!(matches!(dir_err, LoggingError::DirectoryConflict { .. }));

    let (level, dir) = logging_status().expect("logging should be active");
    assert_eq!(level, "info");
    assert_eq!(dir, log_dir.path());

    log::info!("event=ink_stroke_completed module=test status=ok points=3");
}

#[test]
fn init_logging_rejects_relative_directory() {
    let err = init_logging("info", "relative/logs").expect_err("relative dir must fail");
    assert!(matches!(err, LoggingError::InvalidDirectory(_)));
}
