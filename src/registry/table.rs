//! Method registration for participating types.
//!
//! Rust has no runtime method reflection, so discovery is fed by an explicit
//! registration step: [`Introspect::methods`] runs once per type and records
//! every property-backing method into a [`MethodTable`] as a (name, declared
//! arity, callable) triple. The table is the exact analogue of a reflected
//! method list: a method that is not registered does not exist as far as
//! property discovery is concerned, which is also how strictly-private
//! methods stay invisible.
//!
//! Callables are stored type-erased over `&mut dyn Any` so the finished
//! property map can live in a process-wide registry that knows nothing about
//! the concrete host type. Erasure happens at registration; dispatch later
//! recovers the concrete type with a checked downcast.

use std::any::Any;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use crate::registry::names::MethodRole;
use crate::{Error, Result, Value};

/// Uniform call shape every registered method is erased to.
type CallFn = dyn Fn(&mut dyn Any, &[Value]) -> Result<Value> + Send + Sync;

/// Identifying data of a registered method, as carried by build errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MethodDesc {
    /// The registered method name, e.g. `"getCalculator"`.
    pub name: &'static str,
    /// The declared number of [`Value`] parameters, excluding the receiver.
    pub arity: usize,
}

impl fmt::Display for MethodDesc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.name, self.arity)
    }
}

/// One registered host method: identity plus the erased callable.
#[derive(Clone)]
pub(crate) struct RawMethod {
    desc: MethodDesc,
    call: Arc<CallFn>,
}

impl RawMethod {
    pub(crate) fn desc(&self) -> MethodDesc {
        self.desc
    }

    pub(crate) fn name(&self) -> &'static str {
        self.desc.name
    }

    pub(crate) fn arity(&self) -> usize {
        self.desc.arity
    }

    /// Invokes the underlying method on an erased instance.
    pub(crate) fn invoke(&self, host: &mut dyn Any, args: &[Value]) -> Result<Value> {
        (self.call.as_ref())(host, args)
    }
}

impl fmt::Debug for RawMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawMethod")
            .field("desc", &self.desc)
            .finish_non_exhaustive()
    }
}

/// Collects the property-backing methods of one host type.
///
/// Filled by [`Introspect::methods`]; consumed by map construction. Method
/// names follow the accessor naming convention (`get`/`set`/`itr`/`is`/
/// `has`/`uns`/`unset` prefixes) or are referenced from an explicit
/// [`MappingTable`] entry; anything else is registered but never becomes
/// part of the property surface.
pub struct MethodTable<T> {
    methods: Vec<RawMethod>,
    marker: PhantomData<fn(&mut T)>,
}

impl<T: 'static> MethodTable<T> {
    pub(crate) fn new() -> Self {
        Self {
            methods: Vec::new(),
            marker: PhantomData,
        }
    }

    /// Registers one method under its conventional name.
    ///
    /// `arity` is the number of [`Value`] arguments the method consumes from
    /// the slice it is handed; dispatch always passes exactly the declared
    /// count once the map has validated it. Registering the same name twice
    /// replaces the earlier entry.
    pub fn insert<F>(&mut self, name: &'static str, arity: usize, f: F)
    where
        F: Fn(&mut T, &[Value]) -> Result<Value> + Send + Sync + 'static,
    {
        let call: Arc<CallFn> = Arc::new(move |host: &mut dyn Any, args: &[Value]| {
            let host = host.downcast_mut::<T>().ok_or(Error::HostMismatch {
                expected: std::any::type_name::<T>(),
            })?;
            f(host, args)
        });

        self.methods.retain(|m| m.desc.name != name);
        self.methods.push(RawMethod {
            desc: MethodDesc { name, arity },
            call,
        });
    }

    pub(crate) fn entries(&self) -> &[RawMethod] {
        &self.methods
    }

    pub(crate) fn find(&self, name: &str) -> Option<RawMethod> {
        self.methods.iter().find(|m| m.desc.name == name).cloned()
    }
}

/// One explicit property-to-method association.
#[derive(Debug, Clone, Copy)]
pub(crate) struct MappingEntry {
    pub(crate) property: &'static str,
    pub(crate) role: MethodRole,
    pub(crate) method: &'static str,
}

/// Collects explicit property mappings that bypass convention discovery.
///
/// A type whose accessors do not follow the naming convention can still
/// expose them as properties by naming them here. Mapped property names are
/// used verbatim (no snake_case derivation), and mapped slots take
/// precedence over convention-discovered slots of the same property name
/// and role. An entry naming a method that was never registered is skipped.
#[derive(Default)]
pub struct MappingTable {
    entries: Vec<MappingEntry>,
}

impl MappingTable {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Maps `method` as the accessor of `property`.
    pub fn getter(&mut self, property: &'static str, method: &'static str) {
        self.push(property, MethodRole::Getter, method);
    }

    /// Maps `method` as the mutator of `property`.
    pub fn setter(&mut self, property: &'static str, method: &'static str) {
        self.push(property, MethodRole::Setter, method);
    }

    /// Maps `method` as the iterator of `property`.
    pub fn iterator(&mut self, property: &'static str, method: &'static str) {
        self.push(property, MethodRole::Iterator, method);
    }

    /// Maps `method` as the unsetter of `property`.
    pub fn unsetter(&mut self, property: &'static str, method: &'static str) {
        self.push(property, MethodRole::Unsetter, method);
    }

    fn push(&mut self, property: &'static str, role: MethodRole, method: &'static str) {
        self.entries.push(MappingEntry {
            property,
            role,
            method,
        });
    }

    pub(crate) fn entries(&self) -> &[MappingEntry] {
        &self.entries
    }
}

/// Declares a type's property-backing method surface.
///
/// Implementing this trait is what opts a type into virtual properties: the
/// blanket [`PropertyAccess`](crate::PropertyAccess) implementation covers
/// every `Introspect` type. `methods` runs exactly once per type, on the
/// first property access to any instance; its registrations are classified
/// by naming convention and frozen into the process-wide property map.
///
/// # Examples
///
/// ```rust
/// use propmap::{Introspect, MethodTable, PropertyAccess, Value};
///
/// struct Counter {
///     count: i64,
/// }
///
/// impl Introspect for Counter {
///     fn methods(table: &mut MethodTable<Self>) {
///         table.insert("getCount", 0, |c, _| Ok(Value::Int(c.count)));
///         table.insert("setCount", 1, |c, args| {
///             c.count = args[0].as_int().unwrap_or(0);
///             Ok(Value::Null)
///         });
///     }
/// }
///
/// let mut counter = Counter { count: 0 };
/// counter.set_property("count", Value::Int(3))?;
/// assert_eq!(counter.property("count")?.into_value(), Some(Value::Int(3)));
/// # Ok::<(), propmap::Error>(())
/// ```
pub trait Introspect: Any {
    /// Registers every property-backing method of this type.
    fn methods(table: &mut MethodTable<Self>)
    where
        Self: Sized;

    /// Registers explicit property mappings for methods that do not follow
    /// the naming convention. The default maps nothing.
    fn mappings(table: &mut MappingTable)
    where
        Self: Sized,
    {
        let _ = table;
    }
}
