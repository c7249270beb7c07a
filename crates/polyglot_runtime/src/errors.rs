//! Classification errors.

use polyglot_core::{Capability, Signature};
use thiserror::Error;

pub type ClassifyResult<T> = Result<T, ClassifyError>;

/// Failure reported by the foreign value bridge while answering a capability query.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct BridgeError {
    pub message: String,
}

impl BridgeError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ClassifyError {
    #[error("probing {capability} failed: {source}")]
    ProbeFailure {
        capability: Capability,
        #[source]
        source: BridgeError,
    },

    #[error("no classification rule matched capability signature {signature}")]
    ClassificationTableError { signature: Signature },

    #[error("unknown classification tag code {0}")]
    UnknownTag(u8),
}

impl ClassifyError {
    pub fn probe(capability: Capability, source: BridgeError) -> Self {
        ClassifyError::ProbeFailure { capability, source }
    }

    /// True for invariant violations inside the classifier itself.
    pub fn is_internal(&self) -> bool {
        !matches!(self, ClassifyError::ProbeFailure { .. })
    }
}
