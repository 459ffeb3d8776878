use tintlog::logger::*;

#[test]
fn set_level_before_build_builds_at_that_level() {
    assert_eq!(current_level(), LEVEL_DEBUG);

    set_level("warn");
    assert_eq!(current_level(), LEVEL_WARN);
    assert!(!logger().enabled(Severity::Info));
    assert!(logger().enabled(Severity::Warn));

    build_logger(LEVEL_DEBUG);
    assert_eq!(current_level(), LEVEL_WARN);
}
