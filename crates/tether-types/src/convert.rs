use crate::primitive::is_proper_primitive_subtype;
use crate::subtyping::is_reference_assignable;
use crate::{Type, TypeEnv};

/// Method invocation conversion, JLS 5.3: everything subtyping allows,
/// plus boxing optionally followed by widening reference conversion, and
/// unboxing optionally followed by widening primitive conversion. Never
/// narrows, in either the reference or the primitive direction.
pub fn is_method_invocation_convertible(env: &dyn TypeEnv, from: &Type, to: &Type) -> bool {
    if is_reference_assignable(env, to, from) {
        return true;
    }
    match (from, to) {
        (Type::Primitive(p), Type::Primitive(q)) => is_proper_primitive_subtype(*p, *q),
        // Boxing, then widening reference conversion. Box-then-widen never
        // combines with primitive widening: `int` does not convert to
        // `Long`, only to `Integer` and its supertypes.
        (Type::Primitive(p), _) => {
            let wrapper = Type::Class(env.well_known().wrapper(*p));
            is_reference_assignable(env, to, &wrapper)
        }
        // Unboxing, then widening primitive conversion.
        (Type::Class(class), Type::Primitive(q)) => {
            match env.well_known().primitive_for(*class) {
                Some(p) => p == *q || is_proper_primitive_subtype(p, *q),
                None => false,
            }
        }
        _ => false,
    }
}

/// Whether a conversion from `from` to `to` could possibly succeed at
/// runtime. Deliberately permissive: it admits narrowing reference
/// conversions, any primitive-to-primitive pair, and any pairing of a
/// primitive with a reference type that could hold a boxed primitive.
/// A true result is a reason to emit a runtime guard, not a proof of
/// static safety.
pub fn is_potentially_convertible(env: &dyn TypeEnv, from: &Type, to: &Type) -> bool {
    // Widening or narrowing reference conversion, either direction.
    if is_reference_assignable(env, to, from) || is_reference_assignable(env, from, to) {
        return true;
    }
    match (from, to) {
        (Type::Primitive(_), Type::Primitive(_)) => true,
        (Type::Primitive(_), _) => can_hold_boxed_primitive(env, to),
        (_, Type::Primitive(_)) => can_hold_boxed_primitive(env, from),
        _ => false,
    }
}

fn can_hold_boxed_primitive(env: &dyn TypeEnv, ty: &Type) -> bool {
    match ty {
        Type::Class(class) => env.assignable_from_boxed_primitive(*class),
        _ => false,
    }
}
