use std::collections::{HashMap, HashSet};

use once_cell::sync::OnceCell;
use tracing::debug;

use crate::{ClassDef, ClassId, ClassKind, PrimitiveType, TypeEnv};

/// Identities the engine must know about in any environment: the root
/// type, a handful of `java.lang`/`java.io` fixtures, and the bijective
/// primitive-wrapper correspondence. Populated once when the environment
/// is built.
#[derive(Clone, Debug)]
pub struct WellKnownTypes {
    pub object: ClassId,
    pub string: ClassId,
    pub number: ClassId,
    pub comparable: ClassId,
    pub serializable: ClassId,
    pub cloneable: ClassId,
    pub char_sequence: ClassId,
    wrappers: [ClassId; 8],
}

impl WellKnownTypes {
    /// Wrapper class for a primitive kind (the boxing direction).
    pub fn wrapper(&self, primitive: PrimitiveType) -> ClassId {
        self.wrappers[primitive as usize]
    }

    /// Primitive kind boxed by `class` (the unboxing direction), if any.
    pub fn primitive_for(&self, class: ClassId) -> Option<PrimitiveType> {
        PrimitiveType::ALL
            .into_iter()
            .find(|&p| self.wrappers[p as usize] == class)
    }
}

/// In-memory [`TypeEnv`] implementation.
///
/// `TypeStore::default()` builds a minimal JDK model sufficient for the
/// relationship queries and their tests: `Object`, `String`, `Number`, the
/// eight wrapper classes, the marker/comparison interfaces they implement,
/// and a small collections hierarchy. Additional classes can be added with
/// [`TypeStore::add_class`] before the store is shared; after that point
/// the store is read-only and safe to query concurrently.
#[derive(Clone, Debug)]
pub struct TypeStore {
    classes: Vec<ClassDef>,
    by_name: HashMap<String, ClassId>,
    well_known: WellKnownTypes,
    /// Union of the ancestor closures of the eight wrapper classes,
    /// computed on first use and dropped on mutation.
    boxed_supertypes: OnceCell<HashSet<ClassId>>,
}

impl Default for TypeStore {
    fn default() -> Self {
        Self::with_minimal_jdk()
    }
}

impl TypeStore {
    pub fn with_minimal_jdk() -> Self {
        fn add(
            classes: &mut Vec<ClassDef>,
            by_name: &mut HashMap<String, ClassId>,
            name: &str,
            kind: ClassKind,
            super_class: Option<ClassId>,
            interfaces: Vec<ClassId>,
        ) -> ClassId {
            let id = ClassId(classes.len() as u32);
            classes.push(ClassDef {
                name: name.to_string(),
                kind,
                super_class,
                interfaces,
            });
            by_name.insert(name.to_string(), id);
            id
        }

        use ClassKind::{Class, Interface};

        let mut classes: Vec<ClassDef> = Vec::new();
        let mut by_name: HashMap<String, ClassId> = HashMap::new();

        let object = add(&mut classes, &mut by_name, "java.lang.Object", Class, None, vec![]);
        let serializable = add(
            &mut classes,
            &mut by_name,
            "java.io.Serializable",
            Interface,
            None,
            vec![],
        );
        let comparable = add(
            &mut classes,
            &mut by_name,
            "java.lang.Comparable",
            Interface,
            None,
            vec![],
        );
        let char_sequence = add(
            &mut classes,
            &mut by_name,
            "java.lang.CharSequence",
            Interface,
            None,
            vec![],
        );
        let cloneable = add(
            &mut classes,
            &mut by_name,
            "java.lang.Cloneable",
            Interface,
            None,
            vec![],
        );

        let string = add(
            &mut classes,
            &mut by_name,
            "java.lang.String",
            Class,
            Some(object),
            vec![serializable, comparable, char_sequence],
        );
        // The model gives `Number` both of the interfaces its subclasses
        // share, so that `Number` and `String` have two mutually unrelated
        // maximal common interfaces.
        let number = add(
            &mut classes,
            &mut by_name,
            "java.lang.Number",
            Class,
            Some(object),
            vec![serializable, comparable],
        );

        // `Boolean` and `Character` extend `Object` directly; the six
        // numeric wrappers extend `Number`, which already carries
        // `Serializable`.
        let wrappers = PrimitiveType::ALL.map(|primitive| {
            let (super_class, interfaces) = match primitive {
                PrimitiveType::Boolean | PrimitiveType::Char => {
                    (object, vec![serializable, comparable])
                }
                _ => (number, vec![comparable]),
            };
            add(
                &mut classes,
                &mut by_name,
                primitive.wrapper_name(),
                Class,
                Some(super_class),
                interfaces,
            )
        });

        // A small collections hierarchy for interface-graph scenarios.
        let iterable = add(
            &mut classes,
            &mut by_name,
            "java.lang.Iterable",
            Interface,
            None,
            vec![],
        );
        let collection = add(
            &mut classes,
            &mut by_name,
            "java.util.Collection",
            Interface,
            None,
            vec![iterable],
        );
        let list = add(
            &mut classes,
            &mut by_name,
            "java.util.List",
            Interface,
            None,
            vec![collection],
        );
        let random_access = add(
            &mut classes,
            &mut by_name,
            "java.util.RandomAccess",
            Interface,
            None,
            vec![],
        );
        add(
            &mut classes,
            &mut by_name,
            "java.util.ArrayList",
            Class,
            Some(object),
            vec![list, random_access, cloneable, serializable],
        );

        debug!(classes = classes.len(), "built minimal JDK type model");

        TypeStore {
            classes,
            by_name,
            well_known: WellKnownTypes {
                object,
                string,
                number,
                comparable,
                serializable,
                cloneable,
                char_sequence,
                wrappers,
            },
            boxed_supertypes: OnceCell::new(),
        }
    }

    /// Register a new class or interface and return its identity.
    pub fn add_class(&mut self, def: ClassDef) -> ClassId {
        let id = ClassId(self.classes.len() as u32);
        self.by_name.insert(def.name.clone(), id);
        self.classes.push(def);
        self.boxed_supertypes = OnceCell::new();
        id
    }

    pub fn class_id(&self, name: &str) -> Option<ClassId> {
        self.lookup_class(name)
    }

    /// Mutable access to a class definition, for building test hierarchies.
    pub fn class_mut(&mut self, id: ClassId) -> Option<&mut ClassDef> {
        self.boxed_supertypes = OnceCell::new();
        self.classes.get_mut(id.0 as usize)
    }

    fn boxed_supertypes(&self) -> &HashSet<ClassId> {
        self.boxed_supertypes.get_or_init(|| {
            let mut set = HashSet::new();
            for primitive in PrimitiveType::ALL {
                self.collect_hierarchy(self.well_known.wrapper(primitive), &mut set);
            }
            set
        })
    }

    fn collect_hierarchy(&self, id: ClassId, out: &mut HashSet<ClassId>) {
        if !out.insert(id) {
            return;
        }
        let Some(def) = self.classes.get(id.0 as usize) else {
            return;
        };
        if let Some(super_class) = def.super_class {
            self.collect_hierarchy(super_class, out);
        }
        for &interface in &def.interfaces {
            self.collect_hierarchy(interface, out);
        }
    }
}

impl TypeEnv for TypeStore {
    fn class(&self, id: ClassId) -> Option<&ClassDef> {
        self.classes.get(id.0 as usize)
    }

    fn lookup_class(&self, name: &str) -> Option<ClassId> {
        if let Some(id) = self.by_name.get(name) {
            return Some(*id);
        }
        // Implicit `java.lang.*` lookup for unqualified core names.
        if !name.contains('.') {
            return self.by_name.get(&format!("java.lang.{name}")).copied();
        }
        None
    }

    fn well_known(&self) -> &WellKnownTypes {
        &self.well_known
    }

    fn assignable_from_boxed_primitive(&self, class: ClassId) -> bool {
        self.boxed_supertypes().contains(&class)
    }
}
