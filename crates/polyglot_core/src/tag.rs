//! Closed catalog of foreign value classifications.

use std::fmt;

/// Terminal classification of a foreign value.
///
/// Codes follow rule precedence: a lower code wins over a higher one when a
/// capability set satisfies both.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ForeignTag {
    Null = 0,
    Exception,
    Number,
    String,
    ArrayPointer,
    Pointer,
    Class,
    MetaObject,
    HashIterable,
    Hash,
    IterableIterator,
    Iterator,
    Iterable,
    Array,
    Executable,
    Object,
}

impl ForeignTag {
    pub const COUNT: usize = 16;

    pub const ALL: [ForeignTag; Self::COUNT] = [
        ForeignTag::Null,
        ForeignTag::Exception,
        ForeignTag::Number,
        ForeignTag::String,
        ForeignTag::ArrayPointer,
        ForeignTag::Pointer,
        ForeignTag::Class,
        ForeignTag::MetaObject,
        ForeignTag::HashIterable,
        ForeignTag::Hash,
        ForeignTag::IterableIterator,
        ForeignTag::Iterator,
        ForeignTag::Iterable,
        ForeignTag::Array,
        ForeignTag::Executable,
        ForeignTag::Object,
    ];

    #[inline(always)]
    pub const fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.get(code as usize).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            ForeignTag::Null => "Null",
            ForeignTag::Exception => "Exception",
            ForeignTag::Number => "Number",
            ForeignTag::String => "String",
            ForeignTag::ArrayPointer => "ArrayPointer",
            ForeignTag::Pointer => "Pointer",
            ForeignTag::Class => "Class",
            ForeignTag::MetaObject => "MetaObject",
            ForeignTag::HashIterable => "HashIterable",
            ForeignTag::Hash => "Hash",
            ForeignTag::IterableIterator => "IterableIterator",
            ForeignTag::Iterator => "Iterator",
            ForeignTag::Iterable => "Iterable",
            ForeignTag::Array => "Array",
            ForeignTag::Executable => "Executable",
            ForeignTag::Object => "Object",
        }
    }

    /// Host-visible class name, e.g. `Polyglot::ForeignHashIterable`.
    pub fn class_name(self) -> &'static str {
        match self {
            ForeignTag::Null => "Polyglot::ForeignNull",
            ForeignTag::Exception => "Polyglot::ForeignException",
            ForeignTag::Number => "Polyglot::ForeignNumber",
            ForeignTag::String => "Polyglot::ForeignString",
            ForeignTag::ArrayPointer => "Polyglot::ForeignArrayPointer",
            ForeignTag::Pointer => "Polyglot::ForeignPointer",
            ForeignTag::Class => "Polyglot::ForeignClass",
            ForeignTag::MetaObject => "Polyglot::ForeignMetaObject",
            ForeignTag::HashIterable => "Polyglot::ForeignHashIterable",
            ForeignTag::Hash => "Polyglot::ForeignHash",
            ForeignTag::IterableIterator => "Polyglot::ForeignIterableIterator",
            ForeignTag::Iterator => "Polyglot::ForeignIterator",
            ForeignTag::Iterable => "Polyglot::ForeignIterable",
            ForeignTag::Array => "Polyglot::ForeignArray",
            ForeignTag::Executable => "Polyglot::ForeignExecutable",
            ForeignTag::Object => "Polyglot::ForeignObject",
        }
    }

    /// Interop traits mixed into the class for this tag. `Object` comes last.
    pub fn traits(self) -> &'static [InteropTrait] {
        use InteropTrait as T;
        match self {
            ForeignTag::Null => &[T::Null, T::Object],
            ForeignTag::Exception => &[T::Exception, T::Object],
            ForeignTag::Number => &[T::Number, T::Object],
            ForeignTag::String => &[T::String, T::Object],
            ForeignTag::ArrayPointer => &[T::Array, T::Pointer, T::Object],
            ForeignTag::Pointer => &[T::Pointer, T::Object],
            ForeignTag::Class => &[T::Class, T::MetaObject, T::Object],
            ForeignTag::MetaObject => &[T::MetaObject, T::Object],
            ForeignTag::HashIterable => &[T::Hash, T::Iterable, T::Object],
            ForeignTag::Hash => &[T::Hash, T::Object],
            ForeignTag::IterableIterator => &[T::Iterable, T::Iterator, T::Object],
            ForeignTag::Iterator => &[T::Iterator, T::Object],
            ForeignTag::Iterable => &[T::Iterable, T::Object],
            ForeignTag::Array => &[T::Array, T::Object],
            ForeignTag::Executable => &[T::Executable, T::Object],
            ForeignTag::Object => &[T::Object],
        }
    }
}

impl fmt::Display for ForeignTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Capability mix-in included by a host class (`Polyglot::ArrayTrait`, ...).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InteropTrait {
    Array,
    Class,
    Exception,
    Executable,
    Hash,
    Iterable,
    Iterator,
    MetaObject,
    Null,
    Number,
    Object,
    Pointer,
    String,
}

impl InteropTrait {
    pub fn module_name(self) -> &'static str {
        match self {
            InteropTrait::Array => "Polyglot::ArrayTrait",
            InteropTrait::Class => "Polyglot::ClassTrait",
            InteropTrait::Exception => "Polyglot::ExceptionTrait",
            InteropTrait::Executable => "Polyglot::ExecutableTrait",
            InteropTrait::Hash => "Polyglot::HashTrait",
            InteropTrait::Iterable => "Polyglot::IterableTrait",
            InteropTrait::Iterator => "Polyglot::IteratorTrait",
            InteropTrait::MetaObject => "Polyglot::MetaObjectTrait",
            InteropTrait::Null => "Polyglot::NullTrait",
            InteropTrait::Number => "Polyglot::NumberTrait",
            InteropTrait::Object => "Polyglot::ObjectTrait",
            InteropTrait::Pointer => "Polyglot::PointerTrait",
            InteropTrait::String => "Polyglot::StringTrait",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_dense_and_round_trip() {
        for (i, tag) in ForeignTag::ALL.iter().enumerate() {
            assert_eq!(tag.code() as usize, i);
            assert_eq!(ForeignTag::from_code(tag.code()), Some(*tag));
        }
        assert_eq!(ForeignTag::from_code(ForeignTag::COUNT as u8), None);
        assert_eq!(ForeignTag::from_code(u8::MAX), None);
    }

    #[test]
    fn class_names_are_unique() {
        let mut names: Vec<_> = ForeignTag::ALL.iter().map(|t| t.class_name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), ForeignTag::COUNT);
    }

    #[test]
    fn every_class_includes_object_trait_last() {
        for tag in ForeignTag::ALL {
            assert_eq!(tag.traits().last(), Some(&InteropTrait::Object), "{tag}");
        }
    }
}
