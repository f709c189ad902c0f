use crate::error::CatalogError;

/// Sink for persistence-layer failures that get downgraded to generic
/// 500s on the wire. Injected at construction, never reached through a
/// global.
pub trait ErrorReporter: Send + Sync {
    fn capture(&self, context: &str, err: &CatalogError);
}
