//! Source-language type model.
//!
//! `Type` is a closed variant over every shape the front-end can hand us.
//! Its `Eq`/`Hash` are structural: two anonymous types that are spelled
//! the same way compare equal, which is exactly the identity the descriptor
//! registry needs. Named types compare by their declaring object.

use std::hash::{Hash, Hasher};

use crate::object::{ObjId, is_exported};

/// Kind of a predeclared basic type.
///
/// The aliases `byte` and `rune` are not separate kinds; `from_name` folds
/// them into `Uint8` and `Int32`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BasicKind {
    Bool,
    Int,
    Int8,
    Int16,
    Int32,
    Int64,
    Uint,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Uintptr,
    Float32,
    Float64,
    Complex64,
    Complex128,
    String,
    UnsafePointer,

    UntypedBool,
    UntypedInt,
    UntypedRune,
    UntypedFloat,
    UntypedComplex,
    UntypedString,
    UntypedNil,
}

impl BasicKind {
    /// Look up a basic kind by its source spelling.
    pub fn from_name(name: &str) -> Option<Self> {
        let kind = match name {
            "bool" => Self::Bool,
            "int" => Self::Int,
            "int8" => Self::Int8,
            "int16" => Self::Int16,
            "int32" | "rune" => Self::Int32,
            "int64" => Self::Int64,
            "uint" => Self::Uint,
            "uint8" | "byte" => Self::Uint8,
            "uint16" => Self::Uint16,
            "uint32" => Self::Uint32,
            "uint64" => Self::Uint64,
            "uintptr" => Self::Uintptr,
            "float32" => Self::Float32,
            "float64" => Self::Float64,
            "complex64" => Self::Complex64,
            "complex128" => Self::Complex128,
            "string" => Self::String,
            "unsafe.Pointer" => Self::UnsafePointer,
            "untyped bool" => Self::UntypedBool,
            "untyped int" => Self::UntypedInt,
            "untyped rune" => Self::UntypedRune,
            "untyped float" => Self::UntypedFloat,
            "untyped complex" => Self::UntypedComplex,
            "untyped string" => Self::UntypedString,
            "untyped nil" => Self::UntypedNil,
            _ => return None,
        };
        Some(kind)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Int8 => "int8",
            Self::Int16 => "int16",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::Uint => "uint",
            Self::Uint8 => "uint8",
            Self::Uint16 => "uint16",
            Self::Uint32 => "uint32",
            Self::Uint64 => "uint64",
            Self::Uintptr => "uintptr",
            Self::Float32 => "float32",
            Self::Float64 => "float64",
            Self::Complex64 => "complex64",
            Self::Complex128 => "complex128",
            Self::String => "string",
            Self::UnsafePointer => "unsafe.Pointer",
            Self::UntypedBool => "untyped bool",
            Self::UntypedInt => "untyped int",
            Self::UntypedRune => "untyped rune",
            Self::UntypedFloat => "untyped float",
            Self::UntypedComplex => "untyped complex",
            Self::UntypedString => "untyped string",
            Self::UntypedNil => "untyped nil",
        }
    }

    /// The kind an untyped constant takes when it needs a concrete type.
    ///
    /// Typed kinds and untyped nil map to themselves.
    pub fn default_kind(self) -> Self {
        match self {
            Self::UntypedBool => Self::Bool,
            Self::UntypedInt => Self::Int,
            Self::UntypedRune => Self::Int32,
            Self::UntypedFloat => Self::Float64,
            Self::UntypedComplex => Self::Complex128,
            Self::UntypedString => Self::String,
            other => other,
        }
    }

    pub fn is_untyped(self) -> bool {
        matches!(
            self,
            Self::UntypedBool
                | Self::UntypedInt
                | Self::UntypedRune
                | Self::UntypedFloat
                | Self::UntypedComplex
                | Self::UntypedString
                | Self::UntypedNil
        )
    }

    pub fn is_boolean(self) -> bool {
        matches!(self, Self::Bool | Self::UntypedBool)
    }

    pub fn is_integer(self) -> bool {
        matches!(
            self,
            Self::Int
                | Self::Int8
                | Self::Int16
                | Self::Int32
                | Self::Int64
                | Self::Uint
                | Self::Uint8
                | Self::Uint16
                | Self::Uint32
                | Self::Uint64
                | Self::Uintptr
                | Self::UntypedInt
                | Self::UntypedRune
        )
    }

    pub fn is_unsigned(self) -> bool {
        matches!(
            self,
            Self::Uint | Self::Uint8 | Self::Uint16 | Self::Uint32 | Self::Uint64 | Self::Uintptr
        )
    }

    pub fn is_float(self) -> bool {
        matches!(self, Self::Float32 | Self::Float64 | Self::UntypedFloat)
    }

    pub fn is_complex(self) -> bool {
        matches!(
            self,
            Self::Complex64 | Self::Complex128 | Self::UntypedComplex
        )
    }

    pub fn is_numeric(self) -> bool {
        self.is_integer() || self.is_float() || self.is_complex()
    }

    pub fn is_string(self) -> bool {
        matches!(self, Self::String | Self::UntypedString)
    }

    /// 64-bit integers need a two-word wrapper in the target runtime.
    pub fn is_64bit(self) -> bool {
        matches!(self, Self::Int64 | Self::Uint64)
    }
}

/// Channel direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ChanDir {
    #[default]
    Both,
    SendOnly,
    RecvOnly,
}

/// A struct field.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Field {
    pub name: String,
    pub ty: Type,
    /// Raw tag string, without the surrounding backquotes.
    pub tag: String,
    /// Embedded (anonymous) field.
    pub embedded: bool,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: Type) -> Self {
        Self {
            name: name.into(),
            ty,
            tag: String::new(),
            embedded: false,
        }
    }

    pub fn embedded(name: impl Into<String>, ty: Type) -> Self {
        Self {
            embedded: true,
            ..Self::new(name, ty)
        }
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn is_exported(&self) -> bool {
        is_exported(&self.name)
    }
}

/// Structural struct type.
///
/// Identity follows the source language: `pkg` takes part in equality
/// and hashing only when some field is unexported.
#[derive(Clone, Debug, Default)]
pub struct StructType {
    /// Package that spelled the struct; qualifies unexported fields.
    pub pkg: String,
    pub fields: Vec<Field>,
}

impl StructType {
    pub fn new(pkg: impl Into<String>, fields: Vec<Field>) -> Self {
        Self {
            pkg: pkg.into(),
            fields,
        }
    }

    pub fn field(&self, index: usize) -> &Field {
        &self.fields[index]
    }

    fn identity_pkg(&self) -> Option<&str> {
        let qualified = self.fields.iter().any(|f| !f.is_exported());
        qualified.then_some(self.pkg.as_str())
    }
}

impl PartialEq for StructType {
    fn eq(&self, other: &Self) -> bool {
        self.fields == other.fields && self.identity_pkg() == other.identity_pkg()
    }
}

impl Eq for StructType {}

impl Hash for StructType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.fields.hash(state);
        self.identity_pkg().hash(state);
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Method {
    pub name: String,
    pub sig: Signature,
}

/// Method-set interface type. Identity rules match `StructType`.
#[derive(Clone, Debug, Default)]
pub struct InterfaceType {
    /// Package that spelled the interface; qualifies unexported methods.
    pub pkg: String,
    pub methods: Vec<Method>,
}

impl InterfaceType {
    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }

    fn identity_pkg(&self) -> Option<&str> {
        let qualified = self.methods.iter().any(|m| !is_exported(&m.name));
        qualified.then_some(self.pkg.as_str())
    }
}

impl PartialEq for InterfaceType {
    fn eq(&self, other: &Self) -> bool {
        self.methods == other.methods && self.identity_pkg() == other.identity_pkg()
    }
}

impl Eq for InterfaceType {}

impl Hash for InterfaceType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.methods.hash(state);
        self.identity_pkg().hash(state);
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Signature {
    pub params: Vec<Type>,
    pub results: Vec<Type>,
    /// The last parameter is a slice collecting trailing arguments.
    pub variadic: bool,
}

impl Signature {
    pub fn new(params: Vec<Type>, results: Vec<Type>) -> Self {
        Self {
            params,
            results,
            variadic: false,
        }
    }

    pub fn variadic(mut self) -> Self {
        self.variadic = true;
        self
    }
}

/// A source-language type.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Type {
    Basic(BasicKind),
    /// A declared type, identified by its type-name object.
    Named(ObjId),
    Array { elem: Box<Type>, len: u64 },
    Slice(Box<Type>),
    Map { key: Box<Type>, elem: Box<Type> },
    Struct(StructType),
    Interface(InterfaceType),
    Signature(Signature),
    Pointer(Box<Type>),
    Chan { elem: Box<Type>, dir: ChanDir },
    /// Result list of a multi-valued expression. Never a value type.
    Tuple(Vec<Type>),
}

impl Type {
    pub fn basic(kind: BasicKind) -> Self {
        Self::Basic(kind)
    }

    pub fn array(elem: Type, len: u64) -> Self {
        Self::Array {
            elem: Box::new(elem),
            len,
        }
    }

    pub fn slice(elem: Type) -> Self {
        Self::Slice(Box::new(elem))
    }

    pub fn map(key: Type, elem: Type) -> Self {
        Self::Map {
            key: Box::new(key),
            elem: Box::new(elem),
        }
    }

    pub fn pointer(elem: Type) -> Self {
        Self::Pointer(Box::new(elem))
    }

    pub fn chan(elem: Type, dir: ChanDir) -> Self {
        Self::Chan {
            elem: Box::new(elem),
            dir,
        }
    }

    pub fn empty_interface() -> Self {
        Self::Interface(InterfaceType::default())
    }

    pub fn as_basic(&self) -> Option<BasicKind> {
        match self {
            Self::Basic(kind) => Some(*kind),
            _ => None,
        }
    }

    pub fn is_named(&self) -> bool {
        matches!(self, Self::Named(_))
    }
}
