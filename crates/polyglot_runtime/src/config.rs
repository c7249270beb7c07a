//! Classifier configuration.

/// Classifier configuration options.
#[derive(Clone, Copy, Debug)]
pub struct ClassifierConfig {
    /// Memoize tags per capability signature.
    pub use_cache: bool,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self { use_cache: true }
    }
}
