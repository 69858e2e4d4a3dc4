//! Process-wide property-map registry.
//!
//! Every participating type gets exactly one [`PropertyMap`], built lazily
//! on the first property access to any of its instances and cached for the
//! lifetime of the process, keyed by [`TypeId`]. Failed builds are cached
//! the same way: a malformed type costs one discovery pass and then fails
//! identically on every later access.
//!
//! # Thread safety
//!
//! The cache is a [`DashMap`] behind a [`OnceLock`]. Lookups after the first
//! insert are sharded reads; the build itself runs outside any lock, and the
//! first finished build wins the insert. Duplicate concurrent first-builds
//! of the same type are possible, produce identical results (construction is
//! a pure function of the registered method table), and the losers are
//! discarded.

use std::any::TypeId;
use std::collections::BTreeMap;
use std::sync::{Arc, OnceLock};

use dashmap::DashMap;

mod builder;
pub(crate) mod names;
mod table;

pub use table::{Introspect, MappingTable, MethodDesc, MethodTable};

pub(crate) use table::RawMethod;

use crate::descriptor::PropertyDescriptor;
use crate::Result;

/// Immutable mapping from canonical property name to descriptor, one per
/// participating type.
///
/// Entries are ordered by name, so enumeration is deterministic.
pub struct PropertyMap {
    entries: BTreeMap<Box<str>, PropertyDescriptor>,
}

impl PropertyMap {
    pub(crate) fn new(entries: BTreeMap<Box<str>, PropertyDescriptor>) -> Self {
        Self { entries }
    }

    /// Looks up the descriptor of one property.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&PropertyDescriptor> {
        self.entries.get(name)
    }

    /// Iterates all descriptors in name order.
    pub fn iter(&self) -> impl Iterator<Item = &PropertyDescriptor> {
        self.entries.values()
    }

    /// Iterates all property names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|name| &**name)
    }

    /// Number of properties in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the type exposes no properties at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

type CachedBuild = Result<Arc<PropertyMap>>;

static CACHE: OnceLock<DashMap<TypeId, CachedBuild>> = OnceLock::new();

/// Returns the property map of `T`, building and caching it on first use.
///
/// The cached outcome is shared: repeated calls return clones of the same
/// [`Arc`] (or the same error value, for types whose method shapes failed
/// validation). Discovery is never repeated once an outcome is cached.
///
/// # Errors
///
/// Returns [`MismatchedProperties`](crate::Error::MismatchedProperties) or
/// [`InvalidProperty`](crate::Error::InvalidProperty) when the registered
/// method shapes fail validation.
pub fn property_map<T: Introspect>() -> Result<Arc<PropertyMap>> {
    let cache = CACHE.get_or_init(DashMap::new);
    let key = TypeId::of::<T>();

    if let Some(hit) = cache.get(&key) {
        return hit.value().clone();
    }

    let built = builder::build::<T>().map(Arc::new);
    cache.entry(key).or_insert(built).value().clone()
}
