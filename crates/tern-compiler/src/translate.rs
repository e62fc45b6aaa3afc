//! The seam to the expression translator.
//!
//! Lowering helpers do not translate expressions themselves. They hand
//! operands to an `ExprTranslator` supplied by the caller and splice the
//! returned code into what they emit.

use tern_core::{ExprId, Type, TypeOracle};

use crate::UnitContext;

/// A value to translate: a source expression, or code the helpers already
/// produced (such as one element of a spilled tuple).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Operand {
    Expr(ExprId),
    Synthetic { code: String, ty: Type },
}

impl Operand {
    pub fn synthetic(code: impl Into<String>, ty: Type) -> Self {
        Self::Synthetic {
            code: code.into(),
            ty,
        }
    }

    pub fn ty<'a>(&'a self, oracle: &'a dyn TypeOracle) -> &'a Type {
        match self {
            Self::Expr(id) => oracle.expr_type(*id),
            Self::Synthetic { ty, .. } => ty,
        }
    }

    pub fn is_constant(&self, oracle: &dyn TypeOracle) -> bool {
        match self {
            Self::Expr(id) => oracle.constant(*id).is_some(),
            Self::Synthetic { .. } => false,
        }
    }

    pub fn is_blocking(&self, oracle: &dyn TypeOracle) -> bool {
        match self {
            Self::Expr(id) => oracle.is_blocking(*id),
            Self::Synthetic { .. } => false,
        }
    }
}

/// Expression translation, provided by the caller.
pub trait ExprTranslator {
    /// Translate an operand in its own type.
    fn translate_expr(&mut self, unit: &mut UnitContext<'_>, operand: &Operand) -> String;

    /// Translate an operand converted to `target`, copying value-typed
    /// aggregates when `clone` is set.
    fn translate_implicit_conversion(
        &mut self,
        unit: &mut UnitContext<'_>,
        operand: &Operand,
        target: &Type,
        clone: bool,
    ) -> String;
}
