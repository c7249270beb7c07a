//! Foreign value classification.
//!
//! Probes a foreign value's interop capabilities, maps the resulting set to a
//! single tag through an ordered rule table, and resolves the tag to a stable
//! host class descriptor.

pub mod cache;
pub mod classifier;
pub mod config;
pub mod debug;
pub mod errors;
pub mod probe;
pub mod registry;
pub mod rules;

pub use polyglot_core::{Capability, CapabilitySet, ForeignTag, InteropTrait, Signature};

pub use cache::{CacheStats, ClassificationCache};
pub use classifier::{Classifier, classify};
pub use config::ClassifierConfig;
pub use errors::{BridgeError, ClassifyError, ClassifyResult};
pub use probe::{ForeignValue, probe};
pub use registry::{ClassDescriptor, ClassRegistry};
pub use rules::{Rule, RULES, evaluate, matching_rule};
