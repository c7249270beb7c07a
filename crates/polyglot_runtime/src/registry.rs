//! Class registry: one stable descriptor per classification tag.

use crate::errors::{ClassifyError, ClassifyResult};
use polyglot_core::{FastHashMap, ForeignTag, InteropTrait, fast_map_with_capacity};
use std::fmt;
use std::sync::OnceLock;

/// Host-visible class of every foreign value with a given tag.
#[derive(PartialEq, Eq)]
pub struct ClassDescriptor {
    tag: ForeignTag,
    name: &'static str,
    traits: &'static [InteropTrait],
}

impl ClassDescriptor {
    fn new(tag: ForeignTag) -> Self {
        Self {
            tag,
            name: tag.class_name(),
            traits: tag.traits(),
        }
    }

    pub fn tag(&self) -> ForeignTag {
        self.tag
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn traits(&self) -> &'static [InteropTrait] {
        self.traits
    }

    /// Whether the class includes `interop_trait`, like `is_a?(Polyglot::ArrayTrait)`.
    pub fn is_a(&self, interop_trait: InteropTrait) -> bool {
        self.traits.contains(&interop_trait)
    }
}

impl fmt::Debug for ClassDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

impl fmt::Display for ClassDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

pub struct ClassRegistry {
    descriptors: [ClassDescriptor; ForeignTag::COUNT],
    by_name: FastHashMap<&'static str, ForeignTag>,
}

impl ClassRegistry {
    fn build() -> Self {
        let descriptors = ForeignTag::ALL.map(ClassDescriptor::new);
        let mut by_name = fast_map_with_capacity(ForeignTag::COUNT);
        for d in &descriptors {
            by_name.insert(d.name, d.tag);
        }
        log::debug!("class registry initialised with {} descriptors", descriptors.len());
        Self {
            descriptors,
            by_name,
        }
    }

    pub fn global() -> &'static ClassRegistry {
        static GLOBAL: OnceLock<ClassRegistry> = OnceLock::new();
        GLOBAL.get_or_init(ClassRegistry::build)
    }

    #[inline]
    pub fn descriptor_for(&self, tag: ForeignTag) -> &ClassDescriptor {
        // `ForeignTag::ALL` is indexed by code, so this never goes out of bounds.
        &self.descriptors[tag.code() as usize]
    }

    pub fn descriptor_for_code(&self, code: u8) -> ClassifyResult<&ClassDescriptor> {
        ForeignTag::from_code(code)
            .map(|tag| self.descriptor_for(tag))
            .ok_or(ClassifyError::UnknownTag(code))
    }

    pub fn by_name(&self, name: &str) -> Option<&ClassDescriptor> {
        self.by_name.get(name).map(|&tag| self.descriptor_for(tag))
    }

    pub fn iter(&self) -> impl Iterator<Item = &ClassDescriptor> {
        self.descriptors.iter()
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}
