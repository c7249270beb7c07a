//! Core types for foreign value classification.
//!
//! This crate contains the vocabulary that is independent of any classifier state:
//! - `Capability` / `CapabilitySet` - interop facts a foreign value reports about itself
//! - `Signature` - canonical cache key of a capability set
//! - `ForeignTag` - the closed catalog of classifications
//! - `InteropTrait` - capability mix-ins included by each host class

pub mod capability;
pub mod map;
pub mod tag;

pub use capability::{Capability, CapabilitySet, Signature};
pub use map::{FastHashMap, fast_map_new, fast_map_with_capacity};
pub use tag::{ForeignTag, InteropTrait};
