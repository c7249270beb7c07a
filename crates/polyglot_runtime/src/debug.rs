//! Debug foreign values.
//!
//! Ready-made values for each foreign shape, standing in for objects handed
//! over by another language. Used by tests and by host code that wants to
//! exercise dispatch without a live bridge.

use crate::errors::BridgeError;
use crate::probe::ForeignValue;
use polyglot_core::{Capability, Capability as C, CapabilitySet};
use std::sync::atomic::{AtomicUsize, Ordering};

pub struct DebugForeign {
    caps: CapabilitySet,
    fail_on: Option<Capability>,
    queries: AtomicUsize,
}

impl DebugForeign {
    pub fn new(caps: CapabilitySet) -> Self {
        Self {
            caps,
            fail_on: None,
            queries: AtomicUsize::new(0),
        }
    }

    pub fn with(caps: &[Capability]) -> Self {
        Self::new(CapabilitySet::of(caps))
    }

    /// Make the bridge fail when `capability` is queried.
    #[must_use]
    pub fn failing_on(mut self, capability: Capability) -> Self {
        self.fail_on = Some(capability);
        self
    }

    pub fn capabilities(&self) -> CapabilitySet {
        self.caps
    }

    /// Number of capability queries answered or refused so far.
    pub fn queries(&self) -> usize {
        self.queries.load(Ordering::Relaxed)
    }
}

impl ForeignValue for DebugForeign {
    fn query(&self, capability: Capability) -> Result<bool, BridgeError> {
        self.queries.fetch_add(1, Ordering::Relaxed);
        if self.fail_on == Some(capability) {
            return Err(BridgeError::new(format!(
                "foreign value is unreachable while answering {capability}"
            )));
        }
        Ok(self.caps.contains(capability))
    }
}

pub fn foreign_object() -> DebugForeign {
    DebugForeign::with(&[C::HasMembers])
}

pub fn foreign_hash() -> DebugForeign {
    DebugForeign::with(&[C::HasHashEntries, C::HasMembers])
}

pub fn foreign_hash_iterable() -> DebugForeign {
    DebugForeign::with(&[C::HasHashEntries, C::HasIterator, C::HasMembers])
}

pub fn foreign_array() -> DebugForeign {
    DebugForeign::with(&[C::HasArrayElements, C::HasMembers])
}

pub fn foreign_exception() -> DebugForeign {
    DebugForeign::with(&[C::IsException, C::HasMembers])
}

pub fn foreign_executable() -> DebugForeign {
    DebugForeign::with(&[C::IsExecutable])
}

pub fn foreign_iterable() -> DebugForeign {
    DebugForeign::with(&[C::HasIterator, C::HasMembers])
}

pub fn foreign_iterator() -> DebugForeign {
    DebugForeign::with(&[C::IsIterator])
}

pub fn foreign_iterable_iterator() -> DebugForeign {
    DebugForeign::with(&[C::HasIterator, C::IsIterator, C::HasMembers])
}

pub fn java_null() -> DebugForeign {
    DebugForeign::with(&[C::IsNull])
}

/// A boxed primitive. Integers and floats both report `isNumber`.
pub fn foreign_boxed_value() -> DebugForeign {
    DebugForeign::with(&[C::IsNumber])
}

pub fn foreign_pointer() -> DebugForeign {
    DebugForeign::with(&[C::IsPointer])
}

pub fn foreign_pointer_array() -> DebugForeign {
    DebugForeign::with(&[C::IsPointer, C::HasArrayElements])
}

pub fn foreign_string() -> DebugForeign {
    DebugForeign::with(&[C::IsString])
}

pub fn foreign_class() -> DebugForeign {
    DebugForeign::with(&[C::IsInstantiable, C::IsMetaObject, C::HasMembers])
}

/// A meta object that is itself iterable, so it does not qualify as a class.
pub fn foreign_meta_object() -> DebugForeign {
    DebugForeign::with(&[C::IsMetaObject, C::HasIterator, C::HasMembers])
}

/// A value whose bridge refuses the very first query.
pub fn unreachable_value() -> DebugForeign {
    DebugForeign::new(CapabilitySet::empty()).failing_on(C::IsNull)
}
