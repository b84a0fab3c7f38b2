use broadside::{init_logging, level_from};
use log::LevelFilter;

#[test]
fn test_level_parsing_defaults_to_info() {
    assert_eq!(level_from(None), LevelFilter::Info);
    assert_eq!(level_from(Some("nonsense")), LevelFilter::Info);
    assert_eq!(level_from(Some("debug")), LevelFilter::Debug);
    assert_eq!(level_from(Some("TRACE")), LevelFilter::Trace);
}

#[test]
fn test_init_logging_is_repeatable() {
    init_logging();
    init_logging();
    log::info!("logger installed");
}
