//! Spinning cube demo: one window, one cube, 60 ticks per second.

use anyhow::Result;

use tumble_engine::host::CubeHost;
use tumble_engine::logging::{init_logging, LoggingConfig};
use tumble_engine::surface::SurfaceConfig;
use tumble_engine::window::{Runtime, RuntimeConfig};

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let config = RuntimeConfig {
        title: "tumble".to_string(),
        ..RuntimeConfig::default()
    };

    log::info!("starting tumble demo");
    Runtime::run(config, SurfaceConfig::default(), CubeHost::default())
}
