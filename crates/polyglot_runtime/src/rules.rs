//! Precedence-ordered classification rules.
//!
//! The table is scanned top-down and the first matching rule names the tag.
//! Combined shapes (pointer with array elements, iterable hash, iterable
//! iterator) must precede their single-capability forms. The last rule
//! matches every set.

use crate::errors::{ClassifyError, ClassifyResult};
use polyglot_core::{Capability as C, CapabilitySet, ForeignTag};

pub struct Rule {
    pub tag: ForeignTag,
    /// Human readable guard, for diagnostics.
    pub guard: &'static str,
    pub matches: fn(CapabilitySet) -> bool,
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("tag", &self.tag)
            .field("guard", &self.guard)
            .finish()
    }
}

pub static RULES: [Rule; ForeignTag::COUNT] = [
    Rule {
        tag: ForeignTag::Null,
        guard: "isNull",
        matches: |c| c.contains(C::IsNull),
    },
    Rule {
        tag: ForeignTag::Exception,
        guard: "isException",
        matches: |c| c.contains(C::IsException),
    },
    Rule {
        tag: ForeignTag::Number,
        guard: "isNumber",
        matches: |c| c.contains(C::IsNumber),
    },
    Rule {
        tag: ForeignTag::String,
        guard: "isString",
        matches: |c| c.contains(C::IsString),
    },
    Rule {
        tag: ForeignTag::ArrayPointer,
        guard: "isPointer && hasArrayElements",
        matches: |c| c.contains(C::IsPointer) && c.contains(C::HasArrayElements),
    },
    Rule {
        tag: ForeignTag::Pointer,
        guard: "isPointer",
        matches: |c| c.contains(C::IsPointer),
    },
    Rule {
        tag: ForeignTag::Class,
        guard: "isInstantiable || (isMetaObject && !hasIterator)",
        matches: |c| {
            c.contains(C::IsInstantiable)
                || (c.contains(C::IsMetaObject) && !c.contains(C::HasIterator))
        },
    },
    Rule {
        tag: ForeignTag::MetaObject,
        guard: "isMetaObject",
        matches: |c| c.contains(C::IsMetaObject),
    },
    Rule {
        tag: ForeignTag::HashIterable,
        guard: "hasHashEntries && hasIterator",
        matches: |c| c.contains(C::HasHashEntries) && c.contains(C::HasIterator),
    },
    Rule {
        tag: ForeignTag::Hash,
        guard: "hasHashEntries",
        matches: |c| c.contains(C::HasHashEntries),
    },
    Rule {
        tag: ForeignTag::IterableIterator,
        guard: "hasIterator && isIterator",
        matches: |c| c.contains(C::HasIterator) && c.contains(C::IsIterator),
    },
    Rule {
        tag: ForeignTag::Iterator,
        guard: "isIterator",
        matches: |c| c.contains(C::IsIterator),
    },
    Rule {
        tag: ForeignTag::Iterable,
        guard: "hasIterator",
        matches: |c| c.contains(C::HasIterator),
    },
    Rule {
        tag: ForeignTag::Array,
        guard: "hasArrayElements",
        matches: |c| c.contains(C::HasArrayElements),
    },
    Rule {
        tag: ForeignTag::Executable,
        guard: "isExecutable",
        matches: |c| c.contains(C::IsExecutable),
    },
    // Plain member access, or nothing structural at all.
    Rule {
        tag: ForeignTag::Object,
        guard: "true",
        matches: |_| true,
    },
];

/// The first rule in precedence order that accepts `caps`.
pub fn matching_rule(caps: CapabilitySet) -> Option<&'static Rule> {
    RULES.iter().find(|rule| (rule.matches)(caps))
}

/// Map a capability set to its tag. Pure; consults no cache.
pub fn evaluate(caps: CapabilitySet) -> ClassifyResult<ForeignTag> {
    match matching_rule(caps) {
        Some(rule) => {
            log::trace!("{caps} matched `{}` -> {}", rule.guard, rule.tag);
            Ok(rule.tag)
        }
        None => Err(ClassifyError::ClassificationTableError {
            signature: caps.signature(),
        }),
    }
}
