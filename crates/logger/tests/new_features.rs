//! Tests for verbose output and the file sink.

#[cfg(feature = "verbose")]
#[test]
fn verbose_respects_runtime_flag() {
    use logger::{disable_verbose, enable_verbose, is_verbose_enabled};

    disable_verbose();
    assert!(!is_verbose_enabled());

    enable_verbose();
    assert!(is_verbose_enabled());
    disable_verbose();
}

#[cfg(feature = "file-logging")]
#[test]
fn file_logging_captures_tagged_messages() {
    use logger::{close_file_logging, error, info, init_file_logging, set_level, warn, Level};
    use std::fs;

    let dir = std::env::temp_dir().join(format!("schedulai-logger-{}", std::process::id()));
    let log_path = dir.join("nested").join("test.log");
    let _ = fs::remove_dir_all(&dir);

    // Parent directories are created on demand
    assert!(init_file_logging(&log_path));

    set_level(Level::Info);
    info!("Test info message");
    warn!("Test warning message");
    error!("Test error message");
    close_file_logging();

    let contents = fs::read_to_string(&log_path).expect("Failed to read log file");
    assert!(contents.contains("[INFO] Test info message"));
    assert!(contents.contains("[WARN] Test warning message"));
    assert!(contents.contains("[ERROR] Test error message"));

    let _ = fs::remove_dir_all(&dir);
}
