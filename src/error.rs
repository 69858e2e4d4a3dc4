use thiserror::Error;

use crate::registry::MethodDesc;

/// The generic Error type, covering every failure this library can return.
///
/// Two families of failures exist: map-construction errors
/// ([`Error::MismatchedProperties`], [`Error::InvalidProperty`]) raised the
/// first time a type's property map is built, and dispatch errors
/// ([`Error::NoSuchProperty`], [`Error::NotIterable`]) raised on individual
/// property operations. Construction errors are cached alongside successful
/// maps, so a malformed type fails identically on every access without the
/// discovery work being repeated; the whole enum is [`Clone`] to make that
/// caching direct.
///
/// # Examples
///
/// ```rust
/// use propmap::{Error, MethodTable, Introspect, PropertyAccess, Value};
///
/// struct Bare;
///
/// impl Introspect for Bare {
///     fn methods(_table: &mut MethodTable<Self>) {}
/// }
///
/// let mut bare = Bare;
/// match bare.set_property("anything", Value::Null) {
///     Err(Error::NoSuchProperty(name)) => assert_eq!(&*name, "anything"),
///     other => panic!("unexpected outcome: {other:?}"),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// No accessor, mutator or unsetter exists for the requested operation
    /// on this property name.
    ///
    /// Raised on reads of names without a read surface, writes of names
    /// without a scalar mutator, deletes of names without an unsetter, and
    /// indexed access through a proxy that is missing the needed method.
    /// Carries the property name.
    #[error("property [{0}] does not exist")]
    NoSuchProperty(Box<str>),

    /// An accessor/mutator pair was discovered for one property, but their
    /// declared arities fall into incompatible categories.
    ///
    /// Valid pairings are 0/1 (whole-value property) and 1/2 (indexed
    /// property). Anything else fails map construction with this error,
    /// naming both offending methods.
    #[error("declarations of [{getter}] and [{setter}] are inconsistent")]
    MismatchedProperties {
        /// The discovered accessor.
        getter: MethodDesc,
        /// The discovered mutator.
        setter: MethodDesc,
    },

    /// A single discovered method declares an arity outside the recognized
    /// shapes.
    ///
    /// Accessors accept 0 (whole-value) or 1 (indexed) arguments, mutators
    /// 1 or 2; iterators and unsetters accept none. Carries the offending
    /// method.
    #[error("property method [{0}] has an invalid number of arguments")]
    InvalidProperty(MethodDesc),

    /// An iterator method produced a value that is not an iterable
    /// [`Value`](crate::Value) shape (`List` or `Map`).
    ///
    /// Carries the property name.
    #[error("property [{0}] did not produce an iterable value")]
    NotIterable(Box<str>),

    /// A type-erased property method was handed an instance of a different
    /// type than the one it was registered for.
    ///
    /// Unreachable through [`PropertyAccess`](crate::PropertyAccess), which
    /// always pairs an instance with its own type's map; kept so erased
    /// invocation never panics.
    #[error("property dispatch reached a foreign instance, expected {expected}")]
    HostMismatch {
        /// Name of the type the method was registered on.
        expected: &'static str,
    },
}

/// Convenience alias used by every fallible operation in this crate.
pub type Result<T> = std::result::Result<T, Error>;
