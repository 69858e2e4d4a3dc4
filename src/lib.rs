#![deny(missing_docs)]

//! # propmap
//!
//! Method-map backed virtual properties for Rust types.
//!
//! `propmap` lets a type expose "virtual properties" implemented by
//! conventionally named accessor and mutator methods, addressed by name at
//! runtime. A type registers its methods once; the library classifies them
//! by naming convention (`getCalculator`, `setCalculator`, `itrEntries`,
//! `isActive`, `unsetCache`, ...), pairs accessors with mutators under a
//! derived snake_case property name, validates that their shapes agree, and
//! freezes the result into a per-type property table shared process-wide.
//! All dynamic reads and writes then dispatch through that table.
//!
//! ## Features
//!
//! - **One-time discovery** - method classification and arity validation run
//!   once per type, on first access; dispatch afterwards is table lookups
//! - **Convention or explicit mapping** - conventionally named methods are
//!   discovered automatically, and an explicit mapping table covers methods
//!   that do not follow the convention
//! - **Indexed properties** - one/two-argument accessor pairs behave as
//!   sub-collections, accessed through transient views that support element
//!   reads, element writes, and iteration
//! - **Typed failures** - malformed method shapes fail map construction
//!   with errors naming the offending methods; unknown property names fail
//!   dispatch with the property name
//! - **Thread safe** - the per-type table registry is concurrent and
//!   write-once; dispatch never locks
//!
//! ## Quick Start
//!
//! ```rust
//! use propmap::prelude::*;
//!
//! struct Amplifier {
//!     volume: i64,
//! }
//!
//! impl Introspect for Amplifier {
//!     fn methods(table: &mut MethodTable<Self>) {
//!         table.insert("getVolume", 0, |amp, _| Ok(Value::Int(amp.volume)));
//!         table.insert("setVolume", 1, |amp, args| {
//!             amp.volume = args[0].as_int().unwrap_or(0);
//!             Ok(Value::Null)
//!         });
//!     }
//! }
//!
//! let mut amp = Amplifier { volume: 0 };
//! amp.set_property("volume", Value::Int(11))?;
//! assert_eq!(amp.property("volume")?.into_value(), Some(Value::Int(11)));
//! assert!(amp.has_property("volume")?);
//! # Ok::<(), propmap::Error>(())
//! ```
//!
//! ## Indexed Properties
//!
//! A one-argument accessor paired with a two-argument mutator makes the
//! property indexed: reading it returns a view bound to the instance, and
//! element operations go through the view.
//!
//! ```rust
//! use propmap::prelude::*;
//!
//! struct Headers {
//!     entries: Vec<(Value, Value)>,
//! }
//!
//! impl Introspect for Headers {
//!     fn methods(table: &mut MethodTable<Self>) {
//!         table.insert("getField", 1, |h, args| {
//!             let found = h.entries.iter().find(|(k, _)| k == &args[0]);
//!             Ok(found.map(|(_, v)| v.clone()).unwrap_or(Value::Null))
//!         });
//!         table.insert("setField", 2, |h, args| {
//!             h.entries.push((args[0].clone(), args[1].clone()));
//!             Ok(Value::Null)
//!         });
//!         table.insert("itrField", 0, |h, _| Ok(Value::Map(h.entries.clone())));
//!     }
//! }
//!
//! let mut headers = Headers { entries: Vec::new() };
//!
//! let mut field = headers.property("field")?.into_indexed().unwrap();
//! field.set_index(Value::from("accept"), Value::from("text/plain"))?;
//! assert_eq!(field.index(Value::from("accept"))?, Value::from("text/plain"));
//! assert_eq!(field.iter()?.count(), 1);
//! # Ok::<(), propmap::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`prelude`] - re-exports of the commonly used surface
//! - [`registry`] - per-type property tables, built lazily and cached
//!   process-wide
//! - [`Introspect`] / [`MethodTable`] - the registration step feeding
//!   discovery
//! - [`PropertyAccess`] - dynamic read/write/existence/delete operations
//! - [`IndexedProperty`] - transient views over indexed properties
//! - [`Error`] and [`Result`] - typed failures

mod access;
mod descriptor;
mod error;
mod indexed;
pub mod prelude;
pub mod registry;
mod value;

/// The error type covering every failure this library can return.
pub use error::Error;

/// Crate-wide result alias.
pub use error::Result;

/// Dynamic property operations, blanket implemented for [`Introspect`] types.
pub use access::PropertyAccess;

/// Result of a property read: a scalar value or a bound indexed view.
pub use access::PropertyValue;

/// Per-property record of kind, capabilities, and backing methods.
pub use descriptor::{PropertyDescriptor, PropertyFlags, PropertyKind};

/// Views over indexed properties, and their entry iterator.
pub use indexed::{Entries, IndexedProperty};

/// Registration surface: the opt-in trait, the method collector, the
/// explicit mapping collector, and the method identity carried by errors.
pub use registry::{Introspect, MappingTable, MethodDesc, MethodTable};

/// The frozen per-type property table.
pub use registry::PropertyMap;

/// The dynamic value currency crossing the property boundary.
pub use value::Value;
