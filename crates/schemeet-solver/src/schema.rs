//! Field-name to descriptor mapping.

use crate::types::TypeDescriptor;
use indexmap::IndexMap;
use indexmap::map::Iter;
use rustc_hash::FxBuildHasher;
use serde::{Deserialize, Serialize};

pub type FieldMap = IndexMap<String, TypeDescriptor, FxBuildHasher>;

/// A named collection of typed fields.
///
/// Insertion order is preserved so merge output is deterministic (it follows
/// the left operand), but equality compares fields by name only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schema {
    fields: FieldMap,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Schema {
            fields: FieldMap::with_capacity_and_hasher(capacity, FxBuildHasher),
        }
    }

    /// Builder-style insert. A repeated name replaces the earlier descriptor.
    pub fn with_field(mut self, name: impl Into<String>, descriptor: TypeDescriptor) -> Self {
        self.insert(name, descriptor);
        self
    }

    /// Insert a field, returning the descriptor it replaced.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        descriptor: TypeDescriptor,
    ) -> Option<TypeDescriptor> {
        self.fields.insert(name.into(), descriptor)
    }

    #[inline]
    pub fn get(&self, name: &str) -> Option<&TypeDescriptor> {
        self.fields.get(name)
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, String, TypeDescriptor> {
        self.fields.iter()
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn into_fields(self) -> FieldMap {
        self.fields
    }
}

impl<'a> IntoIterator for &'a Schema {
    type Item = (&'a String, &'a TypeDescriptor);
    type IntoIter = Iter<'a, String, TypeDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

impl<K: Into<String>> FromIterator<(K, TypeDescriptor)> for Schema {
    fn from_iter<T: IntoIterator<Item = (K, TypeDescriptor)>>(iter: T) -> Self {
        let mut schema = Schema::new();
        for (name, descriptor) in iter {
            schema.insert(name, descriptor);
        }
        schema
    }
}

impl From<FieldMap> for Schema {
    fn from(fields: FieldMap) -> Self {
        Schema { fields }
    }
}
