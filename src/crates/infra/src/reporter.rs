use domain::error::CatalogError;
use domain::report::ErrorReporter;
use log::error;

/// Error-tracking sink backed by the process log. Controllers only see
/// the `ErrorReporter` port, so a hosted tracker can be swapped in
/// without touching them.
#[derive(Debug, Clone, Default)]
pub struct LogReporter;

impl ErrorReporter for LogReporter {
    fn capture(&self, context: &str, err: &CatalogError) {
        error!("captured failure in {}: {}", context, err);
    }
}
