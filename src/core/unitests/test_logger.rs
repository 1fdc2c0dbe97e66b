use log::{info, error, LevelFilter};
use crate::core::logger;

#[test]
fn test_logger() {
    logger::setup(LevelFilter::Info, None);
    info!("info: testing....");
    error!("error: testing...");
    assert_eq!(log::max_level(), LevelFilter::Info);
}
