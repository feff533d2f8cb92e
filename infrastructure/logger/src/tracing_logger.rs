use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Forwards use-case log lines to `tracing` under a single `analysis` target.
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "analysis", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "analysis", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "analysis", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "analysis", "{}", message);
    }
}
