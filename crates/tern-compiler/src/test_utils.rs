//! Shared fixtures for unit tests.

use std::ops::{Deref, DerefMut};

use tern_core::{Constant, ObjId, ObjKind, Object, Type, Universe};

use crate::{Config, ExprTranslator, Operand, UnitContext};

pub const PKG: &str = "example.com/app";

/// A `Universe` for the package under test, with shorthand declarations.
pub struct TestUniverse(Universe);

impl TestUniverse {
    pub fn new() -> Self {
        Self(Universe::new(PKG))
    }

    /// Function-local variable.
    pub fn local(&mut self, name: &str) -> ObjId {
        self.declare(Object::new(name, ObjKind::Var, PKG))
    }

    /// Package-level variable.
    pub fn global(&mut self, name: &str) -> ObjId {
        self.declare(Object::new(name, ObjKind::Var, PKG).package_level())
    }

    /// Package-level object from another package.
    pub fn foreign(&mut self, pkg: &str, name: &str, kind: ObjKind) -> ObjId {
        self.declare(Object::new(name, kind, pkg).package_level())
    }

    /// Package-level declared type.
    pub fn named(&mut self, name: &str, underlying: Type) -> Type {
        let obj = Object::new(name, ObjKind::TypeName, PKG).package_level();
        Type::Named(self.declare_type(obj, underlying))
    }

    /// Pointer to the interop object type, declaring it on first use.
    pub fn interop_ptr(&mut self) -> Type {
        let id = match tern_core::TypeOracle::interop_object(&self.0) {
            Some(id) => id,
            None => self.declare_interop_object("github.com/gopherjs/gopherjs/js"),
        };
        Type::pointer(Type::Named(id))
    }

    pub fn operand(&mut self, ty: Type) -> Operand {
        Operand::Expr(self.expr(ty))
    }

    pub fn constant(&mut self, ty: Type, value: Constant) -> Operand {
        Operand::Expr(self.constant_expr(ty, value))
    }

    pub fn blocking(&mut self, ty: Type) -> Operand {
        Operand::Expr(self.blocking_expr(ty))
    }

    pub fn unit(&self) -> UnitContext<'_> {
        UnitContext::new(&self.0, Config::new())
    }

    pub fn minified_unit(&self) -> UnitContext<'_> {
        UnitContext::new(&self.0, Config::new().minify(true))
    }
}

impl Deref for TestUniverse {
    type Target = Universe;

    fn deref(&self) -> &Universe {
        &self.0
    }
}

impl DerefMut for TestUniverse {
    fn deref_mut(&mut self) -> &mut Universe {
        &mut self.0
    }
}

/// Renders expression `n` as `e<n>` and synthetic operands as their code.
///
/// Conversions with cloning are spelled `$clone(<code>, <T>)`.
pub struct EchoTranslator;

impl ExprTranslator for EchoTranslator {
    fn translate_expr(&mut self, _unit: &mut UnitContext<'_>, operand: &Operand) -> String {
        match operand {
            Operand::Expr(id) => format!("e{}", id.as_u32()),
            Operand::Synthetic { code, .. } => code.clone(),
        }
    }

    fn translate_implicit_conversion(
        &mut self,
        unit: &mut UnitContext<'_>,
        operand: &Operand,
        target: &Type,
        clone: bool,
    ) -> String {
        let code = self.translate_expr(unit, operand);
        if clone {
            return format!("$clone({code}, {})", unit.type_name(target));
        }
        code
    }
}

/// Emitted bytes as text, with markers shown as `<@pos>`.
pub fn text(bytes: &[u8]) -> String {
    let mut out = String::new();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == crate::emit::POS_MARKER && i + 5 <= bytes.len() {
            let pos = u32::from_be_bytes([bytes[i + 1], bytes[i + 2], bytes[i + 3], bytes[i + 4]]);
            out.push_str(&format!("<@{pos}>"));
            i += 5;
            continue;
        }
        out.push(bytes[i] as char);
        i += 1;
    }
    out
}
