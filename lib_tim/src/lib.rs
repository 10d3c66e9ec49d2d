pub mod constants;
pub mod layer;
pub mod merge;
pub mod overlay;

use log::*;
use std::io::Write;

pub use crate::layer::format::Layer;
pub use crate::merge::{merge, MergeError};

pub fn init_logging() {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}:{}] {}",
                record.level(),
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .init();
}
