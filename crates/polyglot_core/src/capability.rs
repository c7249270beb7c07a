//! Interop capability vocabulary.
//!
//! A foreign value answers a fixed set of boolean questions about itself. The
//! answers are packed into a 14-bit mask, one bit per capability in
//! declaration order, which doubles as the canonical cache signature.

use std::fmt;

#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Capability {
    IsNull = 0,
    IsBoolean,
    IsNumber,
    IsString,
    IsException,
    IsExecutable,
    IsInstantiable,
    HasArrayElements,
    HasHashEntries,
    HasIterator,
    IsIterator,
    HasMembers,
    IsMetaObject,
    IsPointer,
}

impl Capability {
    pub const COUNT: usize = 14;

    pub const ALL: [Capability; Self::COUNT] = [
        Capability::IsNull,
        Capability::IsBoolean,
        Capability::IsNumber,
        Capability::IsString,
        Capability::IsException,
        Capability::IsExecutable,
        Capability::IsInstantiable,
        Capability::HasArrayElements,
        Capability::HasHashEntries,
        Capability::HasIterator,
        Capability::IsIterator,
        Capability::HasMembers,
        Capability::IsMetaObject,
        Capability::IsPointer,
    ];

    #[inline(always)]
    pub const fn bit(self) -> u16 {
        1 << (self as u8)
    }

    /// Interop message name, as the bridge spells it.
    pub fn name(self) -> &'static str {
        match self {
            Capability::IsNull => "isNull",
            Capability::IsBoolean => "isBoolean",
            Capability::IsNumber => "isNumber",
            Capability::IsString => "isString",
            Capability::IsException => "isException",
            Capability::IsExecutable => "isExecutable",
            Capability::IsInstantiable => "isInstantiable",
            Capability::HasArrayElements => "hasArrayElements",
            Capability::HasHashEntries => "hasHashEntries",
            Capability::HasIterator => "hasIterator",
            Capability::IsIterator => "isIterator",
            Capability::HasMembers => "hasMembers",
            Capability::IsMetaObject => "isMetaObject",
            Capability::IsPointer => "isPointer",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.name() == name)
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Canonical key of a capability set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Signature(u16);

impl Signature {
    /// Number of distinct signatures over the vocabulary.
    pub const COUNT: usize = 1 << Capability::COUNT;

    #[inline(always)]
    pub const fn bits(self) -> u16 {
        self.0
    }

    /// Every signature expressible over the vocabulary, in ascending order.
    pub fn all() -> impl Iterator<Item = Signature> {
        (0..Self::COUNT as u16).map(Signature)
    }

    pub fn capabilities(self) -> CapabilitySet {
        CapabilitySet(self.0)
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#06x}", self.0)
    }
}

/// Immutable set of capability facts for one foreign value.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CapabilitySet(u16);

impl CapabilitySet {
    const MASK: u16 = (1 << Capability::COUNT) - 1;

    pub const fn empty() -> Self {
        Self(0)
    }

    /// Rejects masks with bits outside the vocabulary.
    pub fn from_bits(bits: u16) -> Option<Self> {
        if bits & !Self::MASK == 0 {
            Some(Self(bits))
        } else {
            None
        }
    }

    pub fn of(caps: &[Capability]) -> Self {
        caps.iter().fold(Self::empty(), |set, &c| set.with(c))
    }

    #[must_use]
    pub const fn with(self, cap: Capability) -> Self {
        Self(self.0 | cap.bit())
    }

    #[inline(always)]
    pub const fn contains(self, cap: Capability) -> bool {
        self.0 & cap.bit() != 0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline(always)]
    pub const fn signature(self) -> Signature {
        Signature(self.0)
    }

    pub fn iter(self) -> impl Iterator<Item = Capability> {
        Capability::ALL.into_iter().filter(move |c| self.contains(*c))
    }
}

impl FromIterator<Capability> for CapabilitySet {
    fn from_iter<I: IntoIterator<Item = Capability>>(iter: I) -> Self {
        iter.into_iter().fold(Self::empty(), |set, c| set.with(c))
    }
}

impl fmt::Debug for CapabilitySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter().map(Capability::name)).finish()
    }
}

impl fmt::Display for CapabilitySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, cap) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(cap.name())?;
        }
        f.write_str("}")
    }
}
