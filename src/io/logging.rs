//! Console logger installation for the command-line binary

use crate::io::configuration::{LOG_APPENDER, LOG_PATTERN};
use crate::io::error::{DistributionError, Result};
use log::LevelFilter;
use log4rs::{
    Config,
    append::console::{ConsoleAppender, Target},
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
};

/// Install a stderr logger at `level` and route panics through it
///
/// # Errors
///
/// Returns a logging error if the configuration is rejected or a logger is
/// already installed
pub fn init_log(level: LevelFilter) -> Result<()> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build();
    let appender = Appender::builder().build(LOG_APPENDER, Box::new(stderr));

    let config = Config::builder()
        .appender(appender)
        .build(Root::builder().appender(LOG_APPENDER).build(level))
        .map_err(|errors| DistributionError::Logging {
            reason: errors.to_string(),
        })?;
    log4rs::init_config(config)?;
    update_panic_hook();

    Ok(())
}

fn update_panic_hook() {
    let hook = std::panic::take_hook();

    std::panic::set_hook(Box::new(move |info| {
        log::error!("PANIC => {info}");
        hook(info);
    }));
}
