use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Target every catalog log line is emitted under (`RUST_LOG=catalog=debug`).
pub const TARGET: &str = "catalog";

/// Forwards business logging to `tracing` under [`TARGET`].
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: TARGET, "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: TARGET, "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: TARGET, "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: TARGET, "{}", message);
    }
}
