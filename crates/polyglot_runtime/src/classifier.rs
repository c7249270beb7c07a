//! Classifier facade: probe, classify, resolve the class.

use crate::cache::{CacheStats, ClassificationCache};
use crate::config::ClassifierConfig;
use crate::errors::ClassifyResult;
use crate::probe::{ForeignValue, probe};
use crate::registry::{ClassDescriptor, ClassRegistry};
use crate::rules;
use polyglot_core::{CapabilitySet, ForeignTag};
use std::sync::{Arc, OnceLock};

pub struct Classifier {
    config: ClassifierConfig,
    cache: Arc<ClassificationCache>,
    registry: &'static ClassRegistry,
}

impl Classifier {
    /// Classifier sharing the process-wide cache.
    pub fn new(config: ClassifierConfig) -> Self {
        Self::with_cache(config, ClassificationCache::global())
    }

    pub fn with_cache(config: ClassifierConfig, cache: Arc<ClassificationCache>) -> Self {
        Self {
            config,
            cache,
            registry: ClassRegistry::global(),
        }
    }

    pub fn config(&self) -> ClassifierConfig {
        self.config
    }

    pub fn registry(&self) -> &'static ClassRegistry {
        self.registry
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Tag for an already probed capability set, read through the cache.
    pub fn tag_for(&self, caps: CapabilitySet) -> ClassifyResult<ForeignTag> {
        if !self.config.use_cache {
            return rules::evaluate(caps);
        }
        let signature = caps.signature();
        if let Some(tag) = self.cache.lookup(signature) {
            log::trace!("cache hit {signature} -> {tag}");
            return Ok(tag);
        }
        let tag = rules::evaluate(caps)?;
        log::trace!("cache miss {signature} -> {tag}");
        self.cache.store(signature, tag);
        Ok(tag)
    }

    pub fn classify_tag<V: ForeignValue + ?Sized>(&self, value: &V) -> ClassifyResult<ForeignTag> {
        let caps = probe(value)?;
        self.tag_for(caps)
    }

    pub fn classify<V: ForeignValue + ?Sized>(
        &self,
        value: &V,
    ) -> ClassifyResult<&'static ClassDescriptor> {
        let tag = self.classify_tag(value)?;
        Ok(self.registry.descriptor_for(tag))
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(ClassifierConfig::default())
    }
}

fn default_classifier() -> &'static Classifier {
    static DEFAULT: OnceLock<Classifier> = OnceLock::new();
    DEFAULT.get_or_init(Classifier::default)
}

/// Class of `value` under the default configuration and the process-wide cache.
pub fn classify<V: ForeignValue + ?Sized>(value: &V) -> ClassifyResult<&'static ClassDescriptor> {
    default_classifier().classify(value)
}
