use thiserror::Error;

/// Default distance cutoff in Angstroms for edge creation.
pub const DEFAULT_CUTOFF: f64 = 3.5;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("Invalid cutoff {0}: must be a positive, finite distance")]
    InvalidCutoff(f64),
}

/// Policy for atoms whose element symbol is absent from the feature store.
///
/// The default is [`Abort`](UnknownElementPolicy::Abort): an unknown symbol
/// fails the whole file, so every emitted artifact carries a complete feature
/// set. [`NullFeatures`](UnknownElementPolicy::NullFeatures) instead emits the
/// node with all four feature fields null, which keeps structures with exotic
/// ligands convertible at the cost of sparse features.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownElementPolicy {
    #[default]
    Abort,
    NullFeatures,
}

/// Configuration for neighbor graph construction.
///
/// Two knobs only: the edge distance cutoff (inclusive, Angstroms) and the
/// unknown-element policy. This is the whole runtime configuration surface of
/// the core; everything else is fixed by the output format contract.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraphConfig {
    pub cutoff: f64,
    pub on_unknown_element: UnknownElementPolicy,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            cutoff: DEFAULT_CUTOFF,
            on_unknown_element: UnknownElementPolicy::default(),
        }
    }
}

impl GraphConfig {
    pub fn new(cutoff: f64) -> Self {
        Self {
            cutoff,
            ..Self::default()
        }
    }

    /// Checks the configuration before any per-file work starts.
    ///
    /// A non-positive or non-finite cutoff is a configuration error, not a
    /// per-file condition, so the batch driver rejects it up front.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidCutoff`] if the cutoff is NaN, infinite,
    /// or not strictly positive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.cutoff.is_finite() || self.cutoff <= 0.0 {
            return Err(ConfigError::InvalidCutoff(self.cutoff));
        }
        Ok(())
    }
}
