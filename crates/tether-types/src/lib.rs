//! Type-relationship and conversion-compatibility queries over a modeled
//! Java-like type hierarchy.
//!
//! The engine answers three questions for a dynamic call-dispatch layer:
//! is `A` a subtype of `B` (identity, widening reference, or widening
//! primitive conversion); can a value typed `A` be passed where `B` is
//! expected, under strict method-invocation rules or under the looser
//! "potentially convertible at runtime" rule used for guard generation;
//! and what is the most specific common ancestor of two types.
//!
//! The hierarchy itself is supplied by the host type system through the
//! [`TypeEnv`] trait. [`TypeStore`] is the in-memory reference
//! implementation. All queries are pure functions over `&dyn TypeEnv`;
//! a populated environment can be shared freely across threads.

mod common;
mod convert;
mod primitive;
mod store;
mod subtyping;

pub use common::{assignable_supertypes, most_specific_common_type};
pub use convert::{is_method_invocation_convertible, is_potentially_convertible};
pub use primitive::{is_proper_primitive_subtype, PrimitiveType};
pub use store::{TypeStore, WellKnownTypes};
pub use subtyping::{is_assignable_from, is_reference_assignable, is_subtype};

use serde::{Deserialize, Serialize};

/// Identity handle for a reference type (class or interface).
///
/// Types are compared by identity: two `ClassId`s are the same type iff
/// they are equal. The engine never mints ids itself; they come from the
/// host environment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ClassId(pub u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClassKind {
    Class,
    Interface,
}

/// Declared shape of a reference type, as the engine needs to see it:
/// the direct superclass edge and the directly declared interface edges.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassDef {
    pub name: String,
    pub kind: ClassKind,
    /// Direct superclass. `None` for interfaces and for the root type.
    pub super_class: Option<ClassId>,
    /// Directly declared interfaces, in declaration order.
    pub interfaces: Vec<ClassId>,
}

/// A type as seen by the relationship engine.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Type {
    Primitive(PrimitiveType),
    Class(ClassId),
    Array(Box<Type>),
}

impl Type {
    pub fn class(id: ClassId) -> Type {
        Type::Class(id)
    }

    pub fn array(element: Type) -> Type {
        Type::Array(Box::new(element))
    }

    pub fn is_primitive(&self) -> bool {
        matches!(self, Type::Primitive(_))
    }
}

/// Host type-system introspection consumed by the engine.
///
/// Implementations must present a finite hierarchy in which no type is its
/// own ancestor (superclass chains are finite and interface edges form a
/// DAG); every query below terminates under that contract. The hierarchy,
/// including the wrapper correspondence in [`WellKnownTypes`], must be
/// fully populated before the first query and never change afterwards.
pub trait TypeEnv {
    fn class(&self, id: ClassId) -> Option<&ClassDef>;

    fn lookup_class(&self, name: &str) -> Option<ClassId>;

    fn well_known(&self) -> &WellKnownTypes;

    /// True if `class` could hold *some* boxed primitive: it is a wrapper
    /// class, or a superclass or superinterface of one.
    fn assignable_from_boxed_primitive(&self, class: ClassId) -> bool;
}
