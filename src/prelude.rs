//! # propmap Prelude
//!
//! Convenient re-exports of the types needed by most users of the library:
//! the registration and access traits, the value currency, and the error
//! pair. Import this module to wire a type up without naming individual
//! paths.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all propmap operations
pub use crate::Error;

/// The result type used throughout propmap
pub use crate::Result;

/// The dynamic value passed into and out of property methods
pub use crate::Value;

// ================================================================================================
// Registration
// ================================================================================================

/// Trait a type implements to declare its property-backing methods
pub use crate::Introspect;

/// Collector for a type's registered methods
pub use crate::MethodTable;

/// Collector for explicit property-to-method mappings
pub use crate::MappingTable;

// ================================================================================================
// Dispatch
// ================================================================================================

/// Dynamic property operations, blanket implemented for `Introspect` types
pub use crate::PropertyAccess;

/// Result of a property read: scalar value or bound indexed view
pub use crate::PropertyValue;

/// View over one indexed property of one instance
pub use crate::IndexedProperty;

// ================================================================================================
// Introspection
// ================================================================================================

/// Per-type property table, lazily built and process-wide
pub use crate::registry::property_map;

/// Frozen name-to-descriptor mapping of one type
pub use crate::PropertyMap;

/// Per-property record of kind, capabilities, and backing methods
pub use crate::PropertyDescriptor;

/// Shape category of a property
pub use crate::PropertyKind;

/// Capability mask of a property
pub use crate::PropertyFlags;
