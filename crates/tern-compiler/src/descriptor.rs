//! Runtime type descriptors.
//!
//! Every type the emitted code refers to at runtime has a descriptor
//! expression: `$Int` and friends for basic kinds, the declared name for
//! named types, and a package-level variable initialized with
//! `$<kind>Type(...)` for each distinct anonymous type. Anonymous
//! descriptors are deduplicated structurally; the first request allocates
//! the variable, later ones reuse it.

use tern_core::{BasicKind, ChanDir, Signature, Type, TypeOracle};

use crate::UnitContext;
use crate::invariants;
use crate::naming::{RESERVED_WORDS, field_name};
use crate::post::encode_string;
use crate::unit::Dependency;

/// Runtime name of a basic kind, without the `$` prefix.
///
/// Untyped constants use their default kind.
pub fn basic_descriptor(kind: BasicKind) -> &'static str {
    match kind.default_kind() {
        BasicKind::Bool => "Bool",
        BasicKind::Int => "Int",
        BasicKind::Int8 => "Int8",
        BasicKind::Int16 => "Int16",
        BasicKind::Int32 => "Int32",
        BasicKind::Int64 => "Int64",
        BasicKind::Uint => "Uint",
        BasicKind::Uint8 => "Uint8",
        BasicKind::Uint16 => "Uint16",
        BasicKind::Uint32 => "Uint32",
        BasicKind::Uint64 => "Uint64",
        BasicKind::Uintptr => "Uintptr",
        BasicKind::Float32 => "Float32",
        BasicKind::Float64 => "Float64",
        BasicKind::Complex64 => "Complex64",
        BasicKind::Complex128 => "Complex128",
        BasicKind::String => "String",
        BasicKind::UnsafePointer => "UnsafePointer",
        // default_kind() leaves only nil untyped
        _ => "UntypedNil",
    }
}

/// Lowercase kind used in anonymous descriptor names and constructors.
fn anon_kind(ty: &Type) -> &'static str {
    match ty {
        Type::Array { .. } => "array",
        Type::Chan { .. } => "chan",
        Type::Interface(_) => "interface",
        Type::Map { .. } => "map",
        Type::Pointer(_) => "ptr",
        Type::Signature(_) => "func",
        Type::Slice(_) => "slice",
        Type::Struct(_) => "struct",
        Type::Basic(_) | Type::Named(_) | Type::Tuple(_) => {
            invariants::unhandled_type("anonymous descriptor", ty)
        }
    }
}

/// Runtime kind constant (`$kindInt`, `$kindStruct`, ...) of a type's underlying form.
pub fn type_kind(oracle: &dyn TypeOracle, ty: &Type) -> String {
    let kind = match oracle.underlying(ty) {
        Type::Basic(kind) => basic_descriptor(*kind),
        Type::Array { .. } => "Array",
        Type::Chan { .. } => "Chan",
        Type::Interface(_) => "Interface",
        Type::Map { .. } => "Map",
        Type::Pointer(_) => "Ptr",
        Type::Signature(_) => "Func",
        Type::Slice(_) => "Slice",
        Type::Struct(_) => "Struct",
        other => invariants::unhandled_type("type kind", other),
    };
    format!("$kind{kind}")
}

/// Whether values of `ty` are boxed in a wrapper object when stored in an
/// interface.
pub fn is_wrapped(oracle: &dyn TypeOracle, ty: &Type) -> bool {
    match oracle.underlying(ty) {
        Type::Basic(kind) => {
            !kind.is_64bit() && !kind.is_complex() && *kind != BasicKind::UntypedNil
        }
        Type::Array { .. } | Type::Map { .. } | Type::Signature(_) => true,
        Type::Pointer(elem) => matches!(oracle.underlying(elem), Type::Array { .. }),
        _ => false,
    }
}

impl UnitContext<'_> {
    /// Descriptor expression for `ty`.
    pub fn type_name(&mut self, ty: &Type) -> String {
        match ty {
            Type::Basic(kind) => return format!("${}", basic_descriptor(*kind)),
            Type::Named(id) => {
                if self.oracle.is_error_type(*id) {
                    return "$error".to_string();
                }
                return self.object_name(*id);
            }
            Type::Interface(iface) if iface.is_empty() => {
                return "$emptyInterface".to_string();
            }
            Type::Tuple(_) => invariants::unhandled_type("type name", ty),
            _ => {}
        }

        if let Some(name) = self.anon_types.get(ty) {
            let name = name.clone();
            self.dependencies.insert(Dependency::AnonType(name.clone()));
            return name;
        }

        // Components first, so their descriptors are declared earlier.
        self.init_args(ty);
        let name = self.new_variable_with_level(&format!("{}Type", anon_kind(ty)), true);
        log::debug!("anonymous descriptor {name} for {ty:?}");
        self.anon_types.insert(ty.clone(), name.clone());
        self.dependencies.insert(Dependency::AnonType(name.clone()));
        name
    }

    /// Constructor arguments of an anonymous descriptor.
    pub fn init_args(&mut self, ty: &Type) -> String {
        match ty {
            Type::Array { elem, len } => format!("{}, {len}", self.type_name(elem)),
            Type::Chan { elem, dir } => format!(
                "{}, {}, {}",
                self.type_name(elem),
                *dir == ChanDir::SendOnly,
                *dir == ChanDir::RecvOnly
            ),
            Type::Interface(iface) => {
                let methods: Vec<String> = iface
                    .methods
                    .iter()
                    .map(|method| {
                        let prop = if RESERVED_WORDS.contains(&method.name.as_str()) {
                            format!("{}$", method.name)
                        } else {
                            method.name.clone()
                        };
                        let pkg = if tern_core::is_exported(&method.name) {
                            ""
                        } else {
                            iface.pkg.as_str()
                        };
                        format!(
                            "{{prop: \"{prop}\", name: \"{}\", pkg: \"{pkg}\", typ: $funcType({})}}",
                            method.name,
                            self.signature_args(&method.sig)
                        )
                    })
                    .collect();
                format!("[{}]", methods.join(", "))
            }
            Type::Map { key, elem } => {
                format!("{}, {}", self.type_name(key), self.type_name(elem))
            }
            Type::Pointer(elem) | Type::Slice(elem) => self.type_name(elem),
            Type::Signature(sig) => self.signature_args(sig),
            Type::Struct(st) => {
                let mut pkg_path = "";
                let mut fields = Vec::with_capacity(st.fields.len());
                for (i, field) in st.fields.iter().enumerate() {
                    if !field.is_exported() {
                        pkg_path = st.pkg.as_str();
                    }
                    fields.push(format!(
                        "{{prop: \"{}\", name: {}, embedded: {}, exported: {}, typ: {}, tag: {}}}",
                        field_name(st, i),
                        encode_string(&field.name),
                        field.embedded,
                        field.is_exported(),
                        self.type_name(&field.ty),
                        encode_string(&field.tag)
                    ));
                }
                format!("\"{pkg_path}\", [{}]", fields.join(", "))
            }
            Type::Basic(_) | Type::Named(_) | Type::Tuple(_) => {
                invariants::unhandled_type("descriptor arguments", ty)
            }
        }
    }

    fn signature_args(&mut self, sig: &Signature) -> String {
        let params: Vec<String> = sig.params.iter().map(|p| self.type_name(p)).collect();
        let results: Vec<String> = sig.results.iter().map(|r| self.type_name(r)).collect();
        format!(
            "[{}], [{}], {}",
            params.join(", "),
            results.join(", "),
            sig.variadic
        )
    }

    /// One `name = $<kind>Type(args);` line per anonymous descriptor, in
    /// registration order.
    pub fn anon_type_decls(&mut self) -> Vec<u8> {
        let entries: Vec<(Type, String)> = self
            .anon_types
            .iter()
            .map(|(ty, name)| (ty.clone(), name.clone()))
            .collect();
        self.catch_output(0, |unit| {
            for (ty, name) in &entries {
                let args = unit.init_args(ty);
                unit.printf(format_args!("{name} = ${}Type({args});", anon_kind(ty)));
            }
        })
    }
}
