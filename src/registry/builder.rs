//! Map construction: grouping, mapping merge, and descriptor extraction.
//!
//! Building walks the registered method list once, groups conventionally
//! named methods under their derived property name, overlays explicit
//! mappings, and then validates each group's arities while extracting the
//! final descriptor. All shape validation lives here so dispatch can stay
//! branch-free; a failed extraction fails the whole map, and the registry
//! caches that failure.

use std::collections::BTreeMap;

use crate::descriptor::{IndexedSpec, PropertyDescriptor, PropertyKind};
use crate::registry::names::{classify, MethodRole};
use crate::registry::table::{MethodTable, RawMethod};
use crate::registry::{Introspect, MappingTable, PropertyMap};
use crate::{Error, Result};

/// Working slots of one property while its methods are being gathered.
#[derive(Default)]
struct Slots {
    getter: Option<RawMethod>,
    setter: Option<RawMethod>,
    iterator: Option<RawMethod>,
    unsetter: Option<RawMethod>,
}

impl Slots {
    fn set(&mut self, role: MethodRole, method: RawMethod) {
        match role {
            MethodRole::Getter => self.getter = Some(method),
            MethodRole::Setter => self.setter = Some(method),
            MethodRole::Iterator => self.iterator = Some(method),
            MethodRole::Unsetter => self.unsetter = Some(method),
        }
    }
}

/// Builds the property map of `T` from its registered methods.
pub(crate) fn build<T: Introspect>() -> Result<PropertyMap> {
    let mut table = MethodTable::<T>::new();
    T::methods(&mut table);

    let mut mappings = MappingTable::new();
    T::mappings(&mut mappings);

    let mut groups: BTreeMap<String, Slots> = BTreeMap::new();

    for method in table.entries() {
        if let Some((role, property)) = classify(method.name()) {
            groups.entry(property).or_default().set(role, method.clone());
        }
    }

    // Explicit mappings run after discovery and overwrite on collision.
    for entry in mappings.entries() {
        if let Some(method) = table.find(entry.method) {
            groups
                .entry(entry.property.to_string())
                .or_default()
                .set(entry.role, method);
        }
    }

    let mut map = BTreeMap::new();
    for (name, slots) in groups {
        let descriptor = extract(&name, slots)?;
        map.insert(name.into_boxed_str(), descriptor);
    }

    Ok(PropertyMap::new(map))
}

/// Validates one group's arities and produces its descriptor.
fn extract(name: &str, slots: Slots) -> Result<PropertyDescriptor> {
    let Slots {
        getter,
        setter,
        iterator,
        unsetter,
    } = slots;

    for zero_arg in [&iterator, &unsetter].into_iter().flatten() {
        if zero_arg.arity() != 0 {
            return Err(Error::InvalidProperty(zero_arg.desc()));
        }
    }

    match (getter, setter) {
        (Some(get), Some(set)) => match (get.arity(), set.arity()) {
            (0, 1) => Ok(PropertyDescriptor::scalar(
                name,
                Some(get),
                Some(set),
                unsetter,
            )),
            (1, 2) => Ok(PropertyDescriptor::indexed(
                name,
                PropertyKind::IndexedBoth,
                IndexedSpec {
                    name: name.into(),
                    getter: Some(get),
                    setter: Some(set),
                    iterator,
                },
                unsetter,
            )),
            _ => Err(Error::MismatchedProperties {
                getter: get.desc(),
                setter: set.desc(),
            }),
        },
        (Some(get), None) => match get.arity() {
            0 => Ok(PropertyDescriptor::scalar(name, Some(get), None, unsetter)),
            1 => Ok(PropertyDescriptor::indexed(
                name,
                PropertyKind::IndexedGet,
                IndexedSpec {
                    name: name.into(),
                    getter: Some(get),
                    setter: None,
                    iterator,
                },
                unsetter,
            )),
            _ => Err(Error::InvalidProperty(get.desc())),
        },
        (None, Some(set)) => match set.arity() {
            1 => Ok(PropertyDescriptor::scalar(name, None, Some(set), unsetter)),
            2 => Ok(PropertyDescriptor::indexed(
                name,
                PropertyKind::IndexedSet,
                IndexedSpec {
                    name: name.into(),
                    getter: None,
                    setter: Some(set),
                    iterator,
                },
                unsetter,
            )),
            _ => Err(Error::InvalidProperty(set.desc())),
        },
        (None, None) => {
            if let Some(itr) = iterator {
                Ok(PropertyDescriptor::indexed(
                    name,
                    PropertyKind::IndexedIter,
                    IndexedSpec {
                        name: name.into(),
                        getter: None,
                        setter: None,
                        iterator: Some(itr),
                    },
                    unsetter,
                ))
            } else {
                // Unsetter-only group: reads and writes have nothing to
                // resolve, delete still does.
                Ok(PropertyDescriptor::scalar(name, None, None, unsetter))
            }
        }
    }
}
