//! Objects (declared symbols) and the handles the front-end hands out.

macro_rules! handle {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        pub struct $name(u32);

        impl $name {
            #[inline]
            pub fn from_raw(index: u32) -> Self {
                Self(index)
            }

            #[inline]
            pub fn as_u32(self) -> u32 {
                self.0
            }

            #[inline]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }
    };
}

handle!(
    /// A declared object: variable, constant, function or type name.
    ObjId
);
handle!(
    /// An expression node in the front-end's syntax tree.
    ExprId
);
handle!(
    /// Any syntax subtree the escape analysis can be queried about.
    NodeId
);

/// Byte offset into the unit's source text.
pub type Pos = u32;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ObjKind {
    Var,
    Const,
    Func,
    TypeName,
}

/// A source-declared name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Object {
    pub name: String,
    pub kind: ObjKind,
    /// Path of the declaring package; empty for predeclared objects.
    pub pkg: String,
    /// Declared directly in the package scope (not inside a function).
    pub package_level: bool,
}

impl Object {
    pub fn new(name: impl Into<String>, kind: ObjKind, pkg: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            pkg: pkg.into(),
            package_level: false,
        }
    }

    pub fn package_level(mut self) -> Self {
        self.package_level = true;
        self
    }

    pub fn is_exported(&self) -> bool {
        is_exported(&self.name)
    }

    pub fn is_var(&self) -> bool {
        self.kind == ObjKind::Var
    }

    /// Predeclared objects (`error`, `int`, ...) belong to no package.
    pub fn is_predeclared(&self) -> bool {
        self.pkg.is_empty()
    }
}

/// Names starting with an uppercase letter are visible outside their package.
pub fn is_exported(name: &str) -> bool {
    name.chars().next().is_some_and(char::is_uppercase)
}

/// A compile-time constant value.
#[derive(Clone, Debug, PartialEq)]
pub enum Constant {
    Bool(bool),
    Int(i128),
    Float(f64),
    Complex(f64, f64),
    String(String),
}
