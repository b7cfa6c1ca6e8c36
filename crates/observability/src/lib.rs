//! Tracing and logging (shared setup).

/// Tracing configuration (filters, output format).
pub mod tracing;

pub use tracing::{LogFormat, UnknownLogFormat};

/// Initialize process-wide logging.
///
/// Safe to call multiple times; subsequent calls are no-ops.
pub fn init(format: LogFormat) {
    tracing::init(format);
}
