//! Capability probing over the foreign value bridge.

use crate::errors::{BridgeError, ClassifyError, ClassifyResult};
use polyglot_core::{Capability, CapabilitySet};

/// Uniform capability-query interface of an opaque foreign value.
///
/// Implementations must answer without side effects on the value: asking the
/// same question twice gives the same answer.
pub trait ForeignValue {
    fn query(&self, capability: Capability) -> Result<bool, BridgeError>;
}

impl<T: ForeignValue + ?Sized> ForeignValue for &T {
    fn query(&self, capability: Capability) -> Result<bool, BridgeError> {
        (**self).query(capability)
    }
}

impl ForeignValue for CapabilitySet {
    fn query(&self, capability: Capability) -> Result<bool, BridgeError> {
        Ok(self.contains(capability))
    }
}

/// Ask every capability of the vocabulary once, in declaration order.
///
/// The first bridge failure aborts the probe; no partial set is returned.
pub fn probe<V: ForeignValue + ?Sized>(value: &V) -> ClassifyResult<CapabilitySet> {
    let mut set = CapabilitySet::empty();
    for capability in Capability::ALL {
        match value.query(capability) {
            Ok(true) => set = set.with(capability),
            Ok(false) => {}
            Err(source) => {
                log::warn!("foreign value bridge failed on {capability}: {source}");
                return Err(ClassifyError::probe(capability, source));
            }
        }
    }
    Ok(set)
}
