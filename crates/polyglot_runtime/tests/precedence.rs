use polyglot_runtime::{
    Capability as C, CapabilitySet, ForeignTag, RULES, Signature, evaluate, matching_rule,
};

fn tag(caps: &[C]) -> ForeignTag {
    evaluate(CapabilitySet::of(caps)).unwrap()
}

#[test]
fn null_wins_over_everything() {
    assert_eq!(tag(&[C::IsNull]), ForeignTag::Null);
    assert_eq!(tag(&C::ALL), ForeignTag::Null);
    assert_eq!(tag(&[C::IsNull, C::HasMembers]), ForeignTag::Null);
}

#[test]
fn exception_is_not_an_object() {
    assert_eq!(tag(&[C::IsException, C::HasMembers]), ForeignTag::Exception);
}

#[test]
fn pointer_with_array_elements_keeps_indexing() {
    let t = tag(&[C::IsPointer, C::HasArrayElements]);
    assert_eq!(t, ForeignTag::ArrayPointer);
    assert_ne!(t, ForeignTag::Pointer);
    assert_ne!(t, ForeignTag::Array);
    assert_eq!(tag(&[C::IsPointer]), ForeignTag::Pointer);
}

#[test]
fn iterable_hash_and_iterable_iterator() {
    assert_eq!(tag(&[C::HasHashEntries, C::HasIterator]), ForeignTag::HashIterable);
    assert_eq!(tag(&[C::HasHashEntries]), ForeignTag::Hash);
    assert_eq!(tag(&[C::HasIterator, C::IsIterator]), ForeignTag::IterableIterator);
    assert_eq!(tag(&[C::IsIterator]), ForeignTag::Iterator);
    assert_eq!(tag(&[C::HasIterator]), ForeignTag::Iterable);
}

#[test]
fn scalars() {
    assert_eq!(tag(&[C::IsNumber]), ForeignTag::Number);
    assert_eq!(tag(&[C::IsString]), ForeignTag::String);
    assert_eq!(tag(&[C::IsNumber, C::IsString]), ForeignTag::Number);
}

#[test]
fn plain_members_fall_back_to_object() {
    assert_eq!(tag(&[C::HasMembers]), ForeignTag::Object);
    assert_eq!(tag(&[]), ForeignTag::Object);
    assert_eq!(tag(&[C::IsBoolean]), ForeignTag::Object);
}

#[test]
fn class_and_meta_object() {
    assert_eq!(tag(&[C::IsInstantiable]), ForeignTag::Class);
    assert_eq!(tag(&[C::IsMetaObject]), ForeignTag::Class);
    assert_eq!(tag(&[C::IsMetaObject, C::HasIterator]), ForeignTag::MetaObject);
    // An instantiable value that is also iterable is still a class.
    assert_eq!(tag(&[C::IsInstantiable, C::HasIterator]), ForeignTag::Class);
    assert_eq!(
        tag(&[C::IsInstantiable, C::HasHashEntries, C::HasIterator]),
        ForeignTag::Class
    );
}

#[test]
fn array_and_executable() {
    assert_eq!(tag(&[C::HasArrayElements, C::HasMembers]), ForeignTag::Array);
    assert_eq!(tag(&[C::HasArrayElements, C::IsExecutable]), ForeignTag::Array);
    assert_eq!(tag(&[C::IsExecutable, C::HasMembers]), ForeignTag::Executable);
}

#[test]
fn rule_table_covers_catalog_in_code_order() {
    assert_eq!(RULES.len(), ForeignTag::COUNT);
    for (rule, tag) in RULES.iter().zip(ForeignTag::ALL) {
        assert_eq!(rule.tag, tag);
    }
}

#[test]
fn every_rule_is_reachable() {
    let mut seen = [false; ForeignTag::COUNT];
    for sig in Signature::all() {
        if let Some(rule) = matching_rule(sig.capabilities()) {
            seen[rule.tag.code() as usize] = true;
        }
    }
    for tag in ForeignTag::ALL {
        assert!(seen[tag.code() as usize], "rule for {tag} never fires");
    }
}

#[test]
fn matching_rule_reports_guard() {
    let rule = matching_rule(CapabilitySet::of(&[C::HasIterator, C::IsIterator])).unwrap();
    assert_eq!(rule.guard, "hasIterator && isIterator");
}
