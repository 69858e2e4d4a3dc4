//! Dynamic property operations on participating instances.
//!
//! This is the dispatch half of the crate: an explicit capability trait,
//! blanket implemented for every [`Introspect`] type, stands in for the
//! member-access hooks a dynamic language would use. Each operation resolves the
//! property through the process-wide map (building it on the first access
//! to the type) and then either invokes the resolved method directly or
//! hands out a bound [`IndexedProperty`] view for deferred indexed access.
//!
//! The read and write operations take `&mut self` because dispatch invokes
//! arbitrary host methods, whose side effects this layer cannot rule out;
//! [`PropertyAccess::has_property`] only consults the map and stays `&self`.

use std::any::Any;

use crate::indexed::IndexedProperty;
use crate::registry::{self, Introspect};
use crate::{Error, Result, Value};

/// The result of reading one property.
#[derive(Debug)]
pub enum PropertyValue<'a> {
    /// A whole-value property: the getter's result.
    Scalar(Value),
    /// An indexed property: a view bound to the accessed instance.
    Indexed(IndexedProperty<'a>),
}

impl<'a> PropertyValue<'a> {
    /// Unwraps the scalar value, if this read produced one.
    #[must_use]
    pub fn into_value(self) -> Option<Value> {
        match self {
            PropertyValue::Scalar(value) => Some(value),
            PropertyValue::Indexed(_) => None,
        }
    }

    /// Unwraps the indexed view, if this read produced one.
    #[must_use]
    pub fn into_indexed(self) -> Option<IndexedProperty<'a>> {
        match self {
            PropertyValue::Scalar(_) => None,
            PropertyValue::Indexed(view) => Some(view),
        }
    }
}

/// Dynamic property read/write/existence/delete operations.
///
/// Blanket implemented for every [`Introspect`] type; host code never
/// implements this directly.
///
/// # Examples
///
/// ```rust
/// use propmap::prelude::*;
///
/// struct Gauge {
///     level: i64,
/// }
///
/// impl Introspect for Gauge {
///     fn methods(table: &mut MethodTable<Self>) {
///         table.insert("getLevel", 0, |g, _| Ok(Value::Int(g.level)));
///         table.insert("setLevel", 1, |g, args| {
///             g.level = args[0].as_int().unwrap_or(0);
///             Ok(Value::Null)
///         });
///     }
/// }
///
/// let mut gauge = Gauge { level: 0 };
/// assert!(gauge.has_property("level")?);
/// gauge.set_property("level", Value::Int(80))?;
/// assert_eq!(gauge.property("level")?.into_value(), Some(Value::Int(80)));
/// # Ok::<(), propmap::Error>(())
/// ```
pub trait PropertyAccess {
    /// Reads a property: a scalar getter's value, or a bound indexed view.
    ///
    /// # Errors
    ///
    /// [`Error::NoSuchProperty`] when no read surface exists under `name`;
    /// map-construction errors on the first access to a malformed type;
    /// anything the invoked getter itself returns.
    fn property(&mut self, name: &str) -> Result<PropertyValue<'_>>;

    /// Writes a whole value through a property's scalar setter.
    ///
    /// Indexed properties reject whole-value assignment; element writes go
    /// through the view returned by [`PropertyAccess::property`].
    ///
    /// # Errors
    ///
    /// [`Error::NoSuchProperty`] when no scalar setter exists under `name`;
    /// map-construction errors on the first access to a malformed type;
    /// anything the invoked setter itself returns.
    fn set_property(&mut self, name: &str, value: Value) -> Result<()>;

    /// True when a read of `name` would resolve: a scalar getter is
    /// present, or the property is indexed. Setter-only and unsetter-only
    /// properties report false.
    ///
    /// # Errors
    ///
    /// Map-construction errors on the first access to a malformed type.
    fn has_property(&self, name: &str) -> Result<bool>;

    /// Clears a property through its unsetter method.
    ///
    /// # Errors
    ///
    /// [`Error::NoSuchProperty`] when no unsetter exists under `name`;
    /// map-construction errors on the first access to a malformed type;
    /// anything the invoked unsetter itself returns.
    fn unset_property(&mut self, name: &str) -> Result<()>;
}

impl<T: Introspect> PropertyAccess for T {
    fn property(&mut self, name: &str) -> Result<PropertyValue<'_>> {
        let map = registry::property_map::<T>()?;
        let descriptor = map.get(name).ok_or_else(|| no_such(name))?;

        if let Some(spec) = descriptor.indexed_spec() {
            let spec = spec.clone();
            return Ok(PropertyValue::Indexed(IndexedProperty::bind(
                spec,
                self as &mut dyn Any,
            )));
        }

        let getter = descriptor.scalar_getter().ok_or_else(|| no_such(name))?;
        getter
            .invoke(self as &mut dyn Any, &[])
            .map(PropertyValue::Scalar)
    }

    fn set_property(&mut self, name: &str, value: Value) -> Result<()> {
        let map = registry::property_map::<T>()?;
        let setter = map
            .get(name)
            .and_then(|descriptor| descriptor.scalar_setter())
            .ok_or_else(|| no_such(name))?;

        setter.invoke(self as &mut dyn Any, &[value]).map(|_| ())
    }

    fn has_property(&self, name: &str) -> Result<bool> {
        let map = registry::property_map::<T>()?;
        Ok(map.get(name).is_some_and(|descriptor| descriptor.readable()))
    }

    fn unset_property(&mut self, name: &str) -> Result<()> {
        let map = registry::property_map::<T>()?;
        let unsetter = map
            .get(name)
            .and_then(|descriptor| descriptor.unsetter())
            .ok_or_else(|| no_such(name))?;

        unsetter.invoke(self as &mut dyn Any, &[]).map(|_| ())
    }
}

fn no_such(name: &str) -> Error {
    Error::NoSuchProperty(name.into())
}
