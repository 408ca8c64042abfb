use serde::{Deserialize, Serialize};

/// The eight primitive kinds. Fixed: there is no way to register more.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PrimitiveType {
    Boolean,
    Byte,
    Short,
    Char,
    Int,
    Long,
    Float,
    Double,
}

impl PrimitiveType {
    pub const ALL: [PrimitiveType; 8] = [
        PrimitiveType::Boolean,
        PrimitiveType::Byte,
        PrimitiveType::Short,
        PrimitiveType::Char,
        PrimitiveType::Int,
        PrimitiveType::Long,
        PrimitiveType::Float,
        PrimitiveType::Double,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PrimitiveType::Boolean => "boolean",
            PrimitiveType::Byte => "byte",
            PrimitiveType::Short => "short",
            PrimitiveType::Char => "char",
            PrimitiveType::Int => "int",
            PrimitiveType::Long => "long",
            PrimitiveType::Float => "float",
            PrimitiveType::Double => "double",
        }
    }

    /// Fully qualified name of the corresponding wrapper class.
    pub fn wrapper_name(self) -> &'static str {
        match self {
            PrimitiveType::Boolean => "java.lang.Boolean",
            PrimitiveType::Byte => "java.lang.Byte",
            PrimitiveType::Short => "java.lang.Short",
            PrimitiveType::Char => "java.lang.Character",
            PrimitiveType::Int => "java.lang.Integer",
            PrimitiveType::Long => "java.lang.Long",
            PrimitiveType::Float => "java.lang.Float",
            PrimitiveType::Double => "java.lang.Double",
        }
    }
}

/// Proper (strict, non-identical) widening among primitives, JLS 4.10.1:
/// byte < short < int < long < float < double, char < int < long < float <
/// double. `boolean` is unrelated to everything, and `char` and `short`
/// are unrelated to each other.
pub fn is_proper_primitive_subtype(sub: PrimitiveType, sup: PrimitiveType) -> bool {
    use PrimitiveType::*;
    if sub == sup {
        return false;
    }
    match sub {
        Boolean | Double => false,
        Byte => matches!(sup, Short | Int | Long | Float | Double),
        Short | Char => matches!(sup, Int | Long | Float | Double),
        Int => matches!(sup, Long | Float | Double),
        Long => matches!(sup, Float | Double),
        Float => sup == Double,
    }
}
