use super::StopReason;
use crate::objective::Score;
use crate::utils::{InfoLogger, Timer};
use std::time::Duration;

/// Specifies a telemetry mode.
#[derive(Clone)]
pub enum TelemetryMode {
    /// No telemetry at all.
    None,
    /// Only logging.
    OnlyLogging {
        /// A logger type.
        logger: InfoLogger,
        /// Specifies how often progress is logged. When not set, strategy's default is used.
        log_every: Option<usize>,
    },
}

/// Writes search progress into log and measures elapsed time.
pub struct Telemetry {
    logger: Option<InfoLogger>,
    log_every: usize,
    prefix: String,
    timer: Timer,
}

impl Telemetry {
    /// Creates a new instance of `Telemetry`.
    pub fn new(mode: &TelemetryMode, prefix: &str, default_log_every: usize) -> Self {
        let (logger, log_every) = match mode {
            TelemetryMode::None => (None, default_log_every),
            TelemetryMode::OnlyLogging { logger, log_every } => {
                (Some(logger.clone()), log_every.unwrap_or(default_log_every))
            }
        };

        Self { logger, log_every: log_every.max(1), prefix: prefix.to_string(), timer: Timer::start() }
    }

    /// Reports initial score.
    pub fn on_start(&self, score: Score) {
        self.log(&format!("initial score: {score}"));
    }

    /// Reports a step, message is created and logged only at the configured frequency.
    pub fn on_step<F: FnOnce() -> String>(&self, step: usize, message: F) {
        if self.logger.is_some() && step % self.log_every == 0 {
            self.log(&message());
        }
    }

    /// Reports search end.
    pub fn on_stop(&self, reason: StopReason, best_score: Score, steps: usize) {
        self.log(&format!(
            "stopped after {steps} steps in {}ms: {reason}, best score: {best_score}",
            self.timer.elapsed_millis()
        ));
    }

    /// Writes message into log.
    pub fn log(&self, message: &str) {
        if let Some(logger) = &self.logger {
            (logger)(&format!("[{}s] {}: {message}", self.timer.elapsed_secs(), self.prefix));
        }
    }

    /// Returns elapsed time since telemetry creation.
    pub fn elapsed(&self) -> Duration {
        self.timer.elapsed()
    }
}
