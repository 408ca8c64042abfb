use tether_types::{is_subtype, PrimitiveType, Type, TypeStore};

fn class(env: &TypeStore, name: &str) -> Type {
    Type::Class(
        env.class_id(name)
            .unwrap_or_else(|| panic!("minimal JDK should define {name}")),
    )
}

#[test]
fn subtyping_is_reflexive() {
    let env = TypeStore::with_minimal_jdk();

    for primitive in PrimitiveType::ALL {
        let ty = Type::Primitive(primitive);
        assert!(is_subtype(&env, &ty, &ty), "{}", primitive.name());
    }

    for name in ["Object", "String", "Number", "java.util.List"] {
        let ty = class(&env, name);
        assert!(is_subtype(&env, &ty, &ty), "{name}");
    }

    let int_array = Type::array(Type::Primitive(PrimitiveType::Int));
    assert!(is_subtype(&env, &int_array, &int_array));
}

#[test]
fn primitive_widening_chain() {
    use PrimitiveType::*;
    let env = TypeStore::with_minimal_jdk();
    let prim = |p| Type::Primitive(p);

    for (sub, sup) in [
        (Byte, Short),
        (Short, Int),
        (Int, Long),
        (Long, Float),
        (Float, Double),
        (Char, Int),
        (Byte, Double),
    ] {
        assert!(is_subtype(&env, &prim(sub), &prim(sup)));
    }

    assert!(!is_subtype(&env, &prim(Double), &prim(Byte)));
    assert!(!is_subtype(&env, &prim(Boolean), &prim(Int)));
    assert!(!is_subtype(&env, &prim(Char), &prim(Short)));
    assert!(!is_subtype(&env, &prim(Long), &prim(Int)));
}

#[test]
fn primitives_are_not_subtypes_of_reference_types() {
    let env = TypeStore::with_minimal_jdk();
    let int = Type::Primitive(PrimitiveType::Int);

    // Boxing is not subtyping.
    assert!(!is_subtype(&env, &int, &class(&env, "Object")));
    assert!(!is_subtype(&env, &int, &class(&env, "Integer")));
    assert!(!is_subtype(&env, &class(&env, "Integer"), &int));
}

#[test]
fn reference_widening_follows_the_class_graph() {
    let env = TypeStore::with_minimal_jdk();

    assert!(is_subtype(&env, &class(&env, "Integer"), &class(&env, "Number")));
    assert!(is_subtype(&env, &class(&env, "Integer"), &class(&env, "Object")));
    assert!(is_subtype(&env, &class(&env, "String"), &class(&env, "CharSequence")));
    assert!(is_subtype(
        &env,
        &class(&env, "java.util.ArrayList"),
        &class(&env, "java.lang.Iterable"),
    ));

    // Narrowing directions are not subtyping.
    assert!(!is_subtype(&env, &class(&env, "Number"), &class(&env, "Integer")));
    assert!(!is_subtype(&env, &class(&env, "Object"), &class(&env, "String")));
    assert!(!is_subtype(&env, &class(&env, "String"), &class(&env, "Number")));
}

#[test]
fn interfaces_are_subtypes_of_the_root_type() {
    let env = TypeStore::with_minimal_jdk();
    let object = class(&env, "Object");

    for name in ["Cloneable", "Comparable", "java.io.Serializable", "java.util.List"] {
        assert!(is_subtype(&env, &class(&env, name), &object), "{name}");
    }
    assert!(!is_subtype(&env, &object, &class(&env, "Cloneable")));
}

#[test]
fn array_subtyping() {
    let env = TypeStore::with_minimal_jdk();
    let int_array = Type::array(Type::Primitive(PrimitiveType::Int));
    let long_array = Type::array(Type::Primitive(PrimitiveType::Long));
    let integer_array = Type::array(class(&env, "Integer"));
    let number_array = Type::array(class(&env, "Number"));

    for name in ["Object", "Cloneable", "java.io.Serializable"] {
        assert!(is_subtype(&env, &int_array, &class(&env, name)), "{name}");
        assert!(is_subtype(&env, &integer_array, &class(&env, name)), "{name}");
    }

    // Reference element types are covariant; primitive ones are not.
    assert!(is_subtype(&env, &integer_array, &number_array));
    assert!(!is_subtype(&env, &number_array, &integer_array));
    assert!(!is_subtype(&env, &int_array, &long_array));
    assert!(!is_subtype(&env, &int_array, &integer_array));
    assert!(!is_subtype(&env, &integer_array, &int_array));

    // Arrays of arrays follow the same rules one level down.
    let deep_integer = Type::array(integer_array.clone());
    let deep_number = Type::array(number_array.clone());
    assert!(is_subtype(&env, &deep_integer, &deep_number));
    assert!(is_subtype(&env, &deep_integer, &class(&env, "Object")));
}

#[test]
fn no_two_distinct_types_are_mutual_subtypes() {
    let env = TypeStore::with_minimal_jdk();
    let mut types: Vec<Type> = PrimitiveType::ALL.map(Type::Primitive).to_vec();
    for name in [
        "Object",
        "String",
        "Number",
        "Integer",
        "Comparable",
        "java.io.Serializable",
        "java.util.List",
        "java.util.Collection",
        "java.util.ArrayList",
    ] {
        types.push(class(&env, name));
    }
    types.push(Type::array(class(&env, "Integer")));
    types.push(Type::array(Type::Primitive(PrimitiveType::Int)));

    for a in &types {
        for b in &types {
            if a != b {
                assert!(
                    !(is_subtype(&env, a, b) && is_subtype(&env, b, a)),
                    "{a:?} and {b:?} are mutual subtypes"
                );
            }
        }
    }
}
