//! Descriptor constructors.
//!
//! Producers of descriptors (reflection layers, IDL readers, tests) should go
//! through these constructors rather than building `Opaque` unions by hand:
//! [`TypeDescriptor::union`] is where the boolean-domain invariant is enforced.

use crate::classifier::{DescriptorClass, classify};
use crate::schema::Schema;
use crate::types::{BaseKind, OpaqueShape, OrderedFloat, TypeDescriptor};
use std::collections::BTreeMap;

impl TypeDescriptor {
    pub fn string_literal(value: impl Into<String>) -> Self {
        TypeDescriptor::StringLiteral(value.into())
    }

    pub fn number_literal(value: f64) -> Self {
        TypeDescriptor::NumberLiteral(OrderedFloat(value))
    }

    pub const fn boolean_literal(value: bool) -> Self {
        TypeDescriptor::BooleanLiteral(value)
    }

    pub const fn string() -> Self {
        TypeDescriptor::StringPrimitive
    }

    pub const fn number() -> Self {
        TypeDescriptor::NumberPrimitive
    }

    pub const fn boolean() -> Self {
        TypeDescriptor::BooleanPrimitive
    }

    pub const fn null() -> Self {
        TypeDescriptor::Opaque(OpaqueShape::Null)
    }

    pub const fn undefined() -> Self {
        TypeDescriptor::Opaque(OpaqueShape::Undefined)
    }

    pub const fn unknown() -> Self {
        TypeDescriptor::Opaque(OpaqueShape::Unknown)
    }

    pub const fn never() -> Self {
        TypeDescriptor::Opaque(OpaqueShape::Never)
    }

    pub fn array(element: TypeDescriptor) -> Self {
        TypeDescriptor::Opaque(OpaqueShape::Array {
            element: Box::new(element),
        })
    }

    pub fn tuple(elements: Vec<TypeDescriptor>) -> Self {
        TypeDescriptor::Opaque(OpaqueShape::Tuple { elements })
    }

    /// Object shape. A repeated field name keeps the last descriptor.
    pub fn object<K, I>(fields: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, TypeDescriptor)>,
    {
        let fields: BTreeMap<String, TypeDescriptor> = fields
            .into_iter()
            .map(|(name, descriptor)| (name.into(), descriptor))
            .collect();
        TypeDescriptor::Opaque(OpaqueShape::Object { fields })
    }

    pub fn function(params: Vec<TypeDescriptor>, ret: TypeDescriptor) -> Self {
        TypeDescriptor::Opaque(OpaqueShape::Function {
            params,
            ret: Box::new(ret),
        })
    }

    pub fn named(name: impl Into<String>) -> Self {
        TypeDescriptor::Opaque(OpaqueShape::Named { name: name.into() })
    }

    /// Normalized union of `members`.
    ///
    /// - nested unions are flattened and `never` members vanish
    /// - `unknown` absorbs everything
    /// - `true | false` collapses to `boolean`
    /// - a literal next to its own primitive is absorbed by the primitive
    /// - members are sorted and deduplicated
    /// - zero members yield `never`, one member yields that member
    pub fn union<I>(members: I) -> Self
    where
        I: IntoIterator<Item = TypeDescriptor>,
    {
        let mut flat: Vec<TypeDescriptor> = Vec::new();
        for member in members {
            match member {
                TypeDescriptor::Opaque(OpaqueShape::Union { members }) => flat.extend(members),
                TypeDescriptor::Opaque(OpaqueShape::Never) => {}
                TypeDescriptor::Opaque(OpaqueShape::Unknown) => return TypeDescriptor::unknown(),
                other => flat.push(other),
            }
        }

        let has_true = flat.contains(&TypeDescriptor::BooleanLiteral(true));
        let has_false = flat.contains(&TypeDescriptor::BooleanLiteral(false));
        if has_true && has_false {
            flat.retain(|member| !matches!(member, TypeDescriptor::BooleanLiteral(_)));
            flat.push(TypeDescriptor::BooleanPrimitive);
        }

        let widened: Vec<BaseKind> = flat
            .iter()
            .filter_map(|member| match classify(member) {
                DescriptorClass::Primitive(kind) => Some(kind),
                _ => None,
            })
            .collect();
        if !widened.is_empty() {
            flat.retain(|member| match classify(member) {
                DescriptorClass::Literal(kind) => !widened.contains(&kind),
                _ => true,
            });
        }

        flat.sort();
        flat.dedup();

        match flat.len() {
            0 => TypeDescriptor::never(),
            1 => flat.pop().unwrap_or_else(TypeDescriptor::never),
            _ => TypeDescriptor::Opaque(OpaqueShape::Union { members: flat }),
        }
    }

    /// Rebuild every nested union through [`TypeDescriptor::union`].
    pub fn normalize(self) -> Self {
        match self {
            TypeDescriptor::Opaque(OpaqueShape::Union { members }) => {
                TypeDescriptor::union(members.into_iter().map(TypeDescriptor::normalize))
            }
            TypeDescriptor::Opaque(OpaqueShape::Array { element }) => {
                TypeDescriptor::array(element.normalize())
            }
            TypeDescriptor::Opaque(OpaqueShape::Tuple { elements }) => {
                TypeDescriptor::tuple(elements.into_iter().map(TypeDescriptor::normalize).collect())
            }
            TypeDescriptor::Opaque(OpaqueShape::Object { fields }) => TypeDescriptor::object(
                fields
                    .into_iter()
                    .map(|(name, descriptor)| (name, descriptor.normalize())),
            ),
            TypeDescriptor::Opaque(OpaqueShape::Function { params, ret }) => {
                TypeDescriptor::function(
                    params.into_iter().map(TypeDescriptor::normalize).collect(),
                    ret.normalize(),
                )
            }
            other => other,
        }
    }
}

impl Schema {
    /// Normalize every field descriptor.
    pub fn normalized(self) -> Schema {
        self.into_fields()
            .into_iter()
            .map(|(name, descriptor)| (name, descriptor.normalize()))
            .collect()
    }
}
