//! Per-property descriptors produced by map construction.
//!
//! A [`PropertyDescriptor`] is the frozen record of which registered methods
//! implement one logical property. Descriptors are built once per type,
//! validated at build time, and shared read-only afterwards; dispatch never
//! re-checks shapes, it only follows slots.

use std::fmt;
use std::sync::Arc;

use bitflags::bitflags;
use strum::Display;

use crate::registry::RawMethod;

bitflags! {
    /// Capability mask of one property, for cheap surface checks.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct PropertyFlags: u8 {
        /// A read surface exists (scalar getter or indexed getter).
        const HAS_GETTER = 1 << 0;
        /// A write surface exists (scalar setter or indexed setter).
        const HAS_SETTER = 1 << 1;
        /// An iterator method exists.
        const HAS_ITERATOR = 1 << 2;
        /// An unsetter method exists.
        const HAS_UNSETTER = 1 << 3;
    }
}

/// Shape category of a property, derived from its method arities.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum PropertyKind {
    /// Whole-value property: zero-argument getter and/or one-argument
    /// setter. Also covers descriptors that only carry an unsetter.
    Scalar,
    /// Indexed property with a one-argument getter only.
    IndexedGet,
    /// Indexed property with a two-argument setter only.
    IndexedSet,
    /// Indexed property with both getter and setter.
    IndexedBoth,
    /// Indexed property backed by nothing but an iterator method.
    IndexedIter,
}

impl PropertyKind {
    /// True for every indexed shape, i.e. whenever reads hand out a proxy
    /// instead of invoking a scalar getter.
    #[must_use]
    pub fn is_indexed(&self) -> bool {
        !matches!(self, PropertyKind::Scalar)
    }
}

/// The getter/setter/iterator triple backing one indexed property.
///
/// Shared by every proxy handed out for the property; the proxy adds the
/// instance binding, this holds the per-class method references.
pub(crate) struct IndexedSpec {
    pub(crate) name: Box<str>,
    pub(crate) getter: Option<RawMethod>,
    pub(crate) setter: Option<RawMethod>,
    pub(crate) iterator: Option<RawMethod>,
}

/// One entry of a type's property map.
pub struct PropertyDescriptor {
    name: Box<str>,
    kind: PropertyKind,
    flags: PropertyFlags,
    getter: Option<RawMethod>,
    setter: Option<RawMethod>,
    unsetter: Option<RawMethod>,
    indexed: Option<Arc<IndexedSpec>>,
}

impl PropertyDescriptor {
    pub(crate) fn scalar(
        name: &str,
        getter: Option<RawMethod>,
        setter: Option<RawMethod>,
        unsetter: Option<RawMethod>,
    ) -> Self {
        let mut flags = PropertyFlags::empty();
        flags.set(PropertyFlags::HAS_GETTER, getter.is_some());
        flags.set(PropertyFlags::HAS_SETTER, setter.is_some());
        flags.set(PropertyFlags::HAS_UNSETTER, unsetter.is_some());

        Self {
            name: name.into(),
            kind: PropertyKind::Scalar,
            flags,
            getter,
            setter,
            unsetter,
            indexed: None,
        }
    }

    pub(crate) fn indexed(
        name: &str,
        kind: PropertyKind,
        spec: IndexedSpec,
        unsetter: Option<RawMethod>,
    ) -> Self {
        let mut flags = PropertyFlags::empty();
        flags.set(PropertyFlags::HAS_GETTER, spec.getter.is_some());
        flags.set(PropertyFlags::HAS_SETTER, spec.setter.is_some());
        flags.set(PropertyFlags::HAS_ITERATOR, spec.iterator.is_some());
        flags.set(PropertyFlags::HAS_UNSETTER, unsetter.is_some());

        Self {
            name: name.into(),
            kind,
            flags,
            getter: None,
            setter: None,
            unsetter,
            indexed: Some(Arc::new(spec)),
        }
    }

    /// The canonical property name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The shape category this property was classified into.
    #[must_use]
    pub fn kind(&self) -> PropertyKind {
        self.kind
    }

    /// The capability mask of this property.
    #[must_use]
    pub fn flags(&self) -> PropertyFlags {
        self.flags
    }

    pub(crate) fn scalar_getter(&self) -> Option<&RawMethod> {
        self.getter.as_ref()
    }

    pub(crate) fn scalar_setter(&self) -> Option<&RawMethod> {
        self.setter.as_ref()
    }

    pub(crate) fn unsetter(&self) -> Option<&RawMethod> {
        self.unsetter.as_ref()
    }

    pub(crate) fn indexed_spec(&self) -> Option<&Arc<IndexedSpec>> {
        self.indexed.as_ref()
    }

    /// True when a read of this property resolves to something: a scalar
    /// getter, or any indexed shape (reads of those return a bound proxy).
    #[must_use]
    pub fn readable(&self) -> bool {
        self.getter.is_some() || self.indexed.is_some()
    }
}

impl fmt::Debug for PropertyDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyDescriptor")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("flags", &self.flags)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_display_names() {
        assert_eq!(PropertyKind::Scalar.to_string(), "Scalar");
        assert_eq!(PropertyKind::IndexedBoth.to_string(), "IndexedBoth");
        assert!(PropertyKind::IndexedIter.is_indexed());
        assert!(!PropertyKind::Scalar.is_indexed());
    }
}
