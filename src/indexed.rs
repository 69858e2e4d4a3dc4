//! Transient views over indexed properties.
//!
//! An indexed property behaves as a sub-collection of its host: element
//! reads and writes go through one/two-argument accessor methods, and
//! iteration through a dedicated iterator method. Reading such a property
//! does not produce a value; it produces an [`IndexedProperty`] view bound
//! to the instance being accessed, which forwards index operations to the
//! underlying methods. Views are created per access expression and
//! discarded after use; the method references they forward to are shared
//! across all instances of the type.
//!
//! Missing capabilities surface lazily: binding always succeeds, and the
//! first forwarded operation without a backing method fails with
//! [`NoSuchProperty`](crate::Error::NoSuchProperty).

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use crate::descriptor::IndexedSpec;
use crate::{Error, Result, Value};

/// A view over one indexed property of one instance.
///
/// Obtained from [`PropertyAccess::property`](crate::PropertyAccess::property)
/// when the resolved property is indexed. The view borrows the instance
/// exclusively for its lifetime.
pub struct IndexedProperty<'a> {
    spec: Arc<IndexedSpec>,
    host: &'a mut dyn Any,
}

impl<'a> IndexedProperty<'a> {
    pub(crate) fn bind(spec: Arc<IndexedSpec>, host: &'a mut dyn Any) -> Self {
        Self { spec, host }
    }

    /// The canonical name of the property this view belongs to.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.spec.name
    }

    /// Reads one element through the indexed accessor.
    ///
    /// # Errors
    ///
    /// [`Error::NoSuchProperty`] when the property has no indexed accessor.
    pub fn index(&mut self, key: Value) -> Result<Value> {
        match &self.spec.getter {
            Some(getter) => getter.invoke(&mut *self.host, &[key]),
            None => Err(Error::NoSuchProperty(self.spec.name.clone())),
        }
    }

    /// Writes one element through the indexed mutator.
    ///
    /// # Errors
    ///
    /// [`Error::NoSuchProperty`] when the property has no indexed mutator.
    pub fn set_index(&mut self, key: Value, value: Value) -> Result<()> {
        match &self.spec.setter {
            Some(setter) => setter.invoke(&mut *self.host, &[key, value]).map(|_| ()),
            None => Err(Error::NoSuchProperty(self.spec.name.clone())),
        }
    }

    /// Element existence is never tracked; always false.
    #[must_use]
    pub fn contains_index(&self, _key: &Value) -> bool {
        false
    }

    /// Removing single elements is unsupported; always a no-op.
    pub fn remove_index(&mut self, _key: &Value) {}

    /// Invokes the iterator method and adapts its result into entries.
    ///
    /// A `List` result yields `(position, element)` pairs, a `Map` result
    /// yields its pairs in order. No ordering or finiteness contract exists
    /// beyond what the method's own collection provides.
    ///
    /// # Errors
    ///
    /// [`Error::NoSuchProperty`] when the property has no iterator method;
    /// [`Error::NotIterable`] when the method produced a non-iterable value.
    pub fn iter(&mut self) -> Result<Entries> {
        let Some(iterator) = &self.spec.iterator else {
            return Err(Error::NoSuchProperty(self.spec.name.clone()));
        };

        let pairs = match iterator.invoke(&mut *self.host, &[])? {
            Value::List(items) => items
                .into_iter()
                .enumerate()
                .map(|(position, element)| (Value::Int(position as i64), element))
                .collect(),
            Value::Map(pairs) => pairs,
            _ => return Err(Error::NotIterable(self.spec.name.clone())),
        };

        Ok(Entries {
            inner: pairs.into_iter(),
        })
    }
}

impl fmt::Debug for IndexedProperty<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IndexedProperty")
            .field("name", &self.name())
            .finish_non_exhaustive()
    }
}

/// Iterator over the `(key, value)` entries of an indexed property.
#[derive(Debug)]
pub struct Entries {
    inner: std::vec::IntoIter<(Value, Value)>,
}

impl Iterator for Entries {
    type Item = (Value, Value);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Entries {}
