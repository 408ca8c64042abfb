use std::collections::HashSet;

use tracing::trace;

use crate::subtyping::{is_reference_assignable, is_subtype};
use crate::{Type, TypeEnv};

/// Every type reachable from `start` along superclass and declared
/// interface edges (`start` included) that is reference-assignable-from
/// `must_be_assignable_from`.
///
/// Interfaces do not reach the root type this way: their hierarchies stop
/// at the topmost declared interface, which is why
/// [`most_specific_common_type`] needs its empty-intersection fallback.
/// Arrays contribute themselves plus the root type, `Cloneable`, and
/// `Serializable`, mirroring what host reflection reports for array
/// classes. For a primitive `start` the result is empty.
pub fn assignable_supertypes(
    env: &dyn TypeEnv,
    start: &Type,
    must_be_assignable_from: &Type,
) -> HashSet<Type> {
    let mut visited = HashSet::new();
    let mut out = HashSet::new();
    collect(env, start, must_be_assignable_from, &mut visited, &mut out);
    out
}

fn collect(
    env: &dyn TypeEnv,
    current: &Type,
    must: &Type,
    visited: &mut HashSet<Type>,
    out: &mut HashSet<Type>,
) {
    if !visited.insert(current.clone()) {
        return;
    }
    if is_reference_assignable(env, current, must) {
        out.insert(current.clone());
    }
    match current {
        Type::Class(id) => {
            let Some(def) = env.class(*id) else {
                return;
            };
            if let Some(super_class) = def.super_class {
                collect(env, &Type::Class(super_class), must, visited, out);
            }
            for &interface in &def.interfaces {
                collect(env, &Type::Class(interface), must, visited, out);
            }
        }
        Type::Array(_) => {
            let wk = env.well_known();
            collect(env, &Type::Class(wk.object), must, visited, out);
            collect(env, &Type::Class(wk.cloneable), must, visited, out);
            collect(env, &Type::Class(wk.serializable), must, visited, out);
        }
        Type::Primitive(_) => {}
    }
}

/// Most specific common superclass or superinterface of `a` and `b`.
///
/// Primitive operands are first replaced by their wrapper classes, since
/// primitives have no place in the ancestor graph. If the two ancestor
/// sets do not intersect (possible when an operand is an interface), or if
/// they share several mutually unrelated maximal ancestors (e.g. `String`
/// and `Number`, whose common interfaces `Comparable` and `Serializable`
/// extend neither each other), the result converges to the root type
/// rather than picking one arbitrarily.
pub fn most_specific_common_type(env: &dyn TypeEnv, a: &Type, b: &Type) -> Type {
    if a == b {
        return a.clone();
    }
    let a = boxed(env, a);
    let b = boxed(env, b);
    if a == b {
        return a;
    }

    let from_a = assignable_supertypes(env, &a, &b);
    let from_b = assignable_supertypes(env, &b, &a);
    let object = Type::Class(env.well_known().object);

    let common: Vec<&Type> = from_a.intersection(&from_b).collect();
    if common.is_empty() {
        // Interface hierarchies do not bottom out at the root type, so two
        // unrelated interfaces share no structural ancestor at all.
        trace!(?a, ?b, "no common ancestor, falling back to root type");
        return object;
    }

    // Maximal-antichain reduction: a candidate survives only if no other
    // candidate is strictly more specific than it.
    let mut maximal: Vec<&Type> = Vec::new();
    'candidates: for candidate in common {
        let mut i = 0;
        while i < maximal.len() {
            if is_subtype(env, maximal[i], candidate) {
                // A more specific element already covers this candidate.
                continue 'candidates;
            }
            if is_subtype(env, candidate, maximal[i]) {
                // The candidate supersedes this previously maximal element.
                maximal.swap_remove(i);
            } else {
                i += 1;
            }
        }
        maximal.push(candidate);
    }

    match maximal.as_slice() {
        [only] => (*only).clone(),
        _ => {
            trace!(?a, ?b, count = maximal.len(), "multiple maximal common ancestors");
            object
        }
    }
}

fn boxed(env: &dyn TypeEnv, ty: &Type) -> Type {
    match ty {
        Type::Primitive(p) => Type::Class(env.well_known().wrapper(*p)),
        other => other.clone(),
    }
}
