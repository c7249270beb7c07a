use polyglot_runtime::{
    CapabilitySet, ClassificationCache, Classifier, ClassifierConfig, ForeignTag, Signature,
    evaluate,
};
use proptest::prelude::*;
use proptest::test_runner::Config as ProptestConfig;
use std::sync::Arc;

fn any_caps() -> impl Strategy<Value = CapabilitySet> {
    (0u16..(Signature::COUNT as u16)).prop_map(|bits| CapabilitySet::from_bits(bits).unwrap())
}

#[test]
fn classification_is_total_over_every_signature() {
    for sig in Signature::all() {
        let tag = evaluate(sig.capabilities())
            .unwrap_or_else(|e| panic!("{sig} did not classify: {e}"));
        assert!(ForeignTag::ALL.contains(&tag));
    }
}

#[test]
fn warm_cache_agrees_with_rules_everywhere() {
    let cache = Arc::new(ClassificationCache::new());
    let classifier = Classifier::with_cache(ClassifierConfig::default(), cache.clone());
    for sig in Signature::all() {
        classifier.tag_for(sig.capabilities()).unwrap();
    }
    assert_eq!(cache.len(), Signature::COUNT);
    for sig in Signature::all() {
        let caps = sig.capabilities();
        assert_eq!(classifier.tag_for(caps).unwrap(), evaluate(caps).unwrap());
    }
    let stats = classifier.cache_stats();
    assert_eq!(stats.misses, Signature::COUNT as u64);
    assert_eq!(stats.hits, Signature::COUNT as u64);
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256, max_shrink_iters: 200, .. ProptestConfig::default()
    })]

    #[test]
    fn classification_is_deterministic(caps in any_caps()) {
        prop_assert_eq!(evaluate(caps).unwrap(), evaluate(caps).unwrap());
    }

    #[test]
    fn cold_and_warm_cache_agree(caps in any_caps()) {
        let cold = Classifier::with_cache(
            ClassifierConfig::default(),
            Arc::new(ClassificationCache::new()),
        );
        let first = cold.tag_for(caps).unwrap();
        let second = cold.tag_for(caps).unwrap();
        let uncached = Classifier::new(ClassifierConfig { use_cache: false })
            .tag_for(caps)
            .unwrap();
        prop_assert_eq!(first, second);
        prop_assert_eq!(first, uncached);
    }

    #[test]
    fn null_dominates_any_other_capability(caps in any_caps()) {
        let with_null = caps.with(polyglot_runtime::Capability::IsNull);
        prop_assert_eq!(evaluate(with_null).unwrap(), ForeignTag::Null);
    }
}
