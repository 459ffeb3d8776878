use tintlog::logger::*;

// Lives in its own test binary so nothing else builds the global logger first.
#[test]
fn logger_builds_itself_at_debug() {
    assert_eq!(current_level(), LEVEL_DEBUG);

    let first = logger();
    assert_eq!(first.level(), Severity::Debug);
    assert!(first.enabled(Severity::Debug));
    debug!("lazily built logger accepts debug");

    // Already built, so the requested level is ignored.
    build_logger(LEVEL_ERROR);
    assert!(std::ptr::eq(first, logger()));
    assert_eq!(current_level(), LEVEL_DEBUG);
}

