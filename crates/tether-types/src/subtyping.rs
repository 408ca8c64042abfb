use std::collections::HashSet;

use crate::primitive::is_proper_primitive_subtype;
use crate::{ClassId, Type, TypeEnv};

/// Reference assignability between class/interface identities: true if a
/// value of `source` can be stored in a variable of `target` via identity
/// or widening reference conversion. No primitive logic.
pub fn is_assignable_from(env: &dyn TypeEnv, target: ClassId, source: ClassId) -> bool {
    if target == source {
        return true;
    }
    // Every reference type, interfaces included, is assignable to the
    // root type (JLS 4.10.2), even though interface hierarchies do not
    // reach it structurally.
    if target == env.well_known().object {
        return true;
    }
    let mut seen = HashSet::new();
    reaches(env, source, target, &mut seen)
}

fn reaches(env: &dyn TypeEnv, from: ClassId, target: ClassId, seen: &mut HashSet<ClassId>) -> bool {
    if from == target {
        return true;
    }
    if !seen.insert(from) {
        return false;
    }
    let Some(def) = env.class(from) else {
        return false;
    };
    if let Some(super_class) = def.super_class {
        if reaches(env, super_class, target, seen) {
            return true;
        }
    }
    def.interfaces
        .iter()
        .any(|&interface| reaches(env, interface, target, seen))
}

/// Reference assignability lifted to [`Type`], covering the array rules of
/// JLS 4.10.3: element-covariant for reference element types, exact-match
/// only for primitive element types, and every array is assignable to the
/// root type, `Cloneable`, and `java.io.Serializable`. Primitives are
/// never reference-assignable to anything.
pub fn is_reference_assignable(env: &dyn TypeEnv, target: &Type, source: &Type) -> bool {
    match (target, source) {
        (Type::Class(t), Type::Class(s)) => is_assignable_from(env, *t, *s),
        (Type::Class(t), Type::Array(_)) => {
            let wk = env.well_known();
            *t == wk.object || *t == wk.cloneable || *t == wk.serializable
        }
        (Type::Array(t), Type::Array(s)) => match (t.as_ref(), s.as_ref()) {
            (Type::Primitive(a), Type::Primitive(b)) => a == b,
            (t, s) if !t.is_primitive() && !s.is_primitive() => {
                is_reference_assignable(env, t, s)
            }
            _ => false,
        },
        _ => false,
    }
}

/// Non-strict subtyping, JLS 4.10: true if `sub` converts to `sup` by
/// identity conversion, widening reference conversion, or widening
/// primitive conversion. A primitive is never a subtype of a reference
/// type under this predicate; boxing is the business of
/// [`crate::is_method_invocation_convertible`].
pub fn is_subtype(env: &dyn TypeEnv, sub: &Type, sup: &Type) -> bool {
    if is_reference_assignable(env, sup, sub) {
        return true;
    }
    match (sub, sup) {
        (Type::Primitive(p), Type::Primitive(q)) => {
            p == q || is_proper_primitive_subtype(*p, *q)
        }
        _ => false,
    }
}
