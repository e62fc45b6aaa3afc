use tern_core::{BasicKind, Constant, Type};

use crate::invariants;
use crate::post::encode_string;
use crate::{ExprTranslator, Operand, UnitContext};

impl UnitContext<'_> {
    /// Expression for the zero value of `ty`.
    pub fn zero_value(&mut self, ty: &Type) -> String {
        let oracle = self.oracle;
        if oracle.is_interop_object(ty) {
            return "null".to_string();
        }

        match oracle.underlying(ty) {
            Type::Basic(kind) => {
                let kind = kind.default_kind();
                if kind.is_boolean() {
                    "false".to_string()
                } else if kind.is_64bit() || kind.is_complex() {
                    format!("new {}(0, 0)", self.type_name(ty))
                } else if kind.is_numeric() || kind == BasicKind::UnsafePointer {
                    "0".to_string()
                } else if kind.is_string() {
                    "\"\"".to_string()
                } else {
                    invariants::zero_value_of_untyped_nil()
                }
            }
            Type::Array { .. } => format!("{}.zero()", self.type_name(ty)),
            Type::Signature(_) => "$throwNilPointerError".to_string(),
            Type::Slice(_) => format!("{}.nil", self.type_name(ty)),
            Type::Struct(_) => format!("new {}.ptr()", self.type_name(ty)),
            Type::Map { .. } => "false".to_string(),
            Type::Interface(_) => "$ifaceNil".to_string(),
            Type::Pointer(_) | Type::Chan { .. } => format!("{}.nil", self.type_name(ty)),
            other => invariants::unhandled_type("zero value", other),
        }
    }

    /// Canonical map key for `operand` stored under `key_type`.
    ///
    /// Equal source keys always produce equal target keys. Constant float
    /// keys are folded to the string the runtime helper would compute.
    pub fn make_key(
        &mut self,
        translator: &mut dyn ExprTranslator,
        operand: &Operand,
        key_type: &Type,
    ) -> String {
        let oracle = self.oracle;
        match oracle.underlying(key_type) {
            Type::Array { .. } | Type::Struct(_) => {
                let descriptor = self.type_name(key_type);
                let value = translator.translate_expr(self, operand);
                format!("(new {descriptor}({value})).$key()")
            }
            Type::Basic(kind) if kind.is_64bit() || kind.is_complex() => {
                format!("{}.$key()", translator.translate_expr(self, operand))
            }
            Type::Basic(kind) if kind.is_float() => {
                if let Some(key) = self.constant_float_key(operand, *kind) {
                    return key;
                }
                format!("$floatKey({})", translator.translate_expr(self, operand))
            }
            Type::Chan { .. } | Type::Pointer(_) | Type::Interface(_) => {
                let value = translator.translate_implicit_conversion(self, operand, key_type, false);
                format!("{value}.$key()")
            }
            _ => translator.translate_implicit_conversion(self, operand, key_type, false),
        }
    }

    fn constant_float_key(&self, operand: &Operand, kind: BasicKind) -> Option<String> {
        let Operand::Expr(id) = operand else {
            return None;
        };
        let value = match self.oracle.constant(*id)? {
            Constant::Float(f) => *f,
            Constant::Int(i) => *i as f64,
            _ => return None,
        };
        let value = if kind == BasicKind::Float32 {
            value as f32 as f64
        } else {
            value
        };
        float_key(value).map(encode_string)
    }

    /// Hand a value to foreign code.
    ///
    /// Interop objects and narrow numbers are already native; untyped nil
    /// becomes `null`. Anything else goes through the runtime converter.
    pub fn externalize(&mut self, code: &str, ty: &Type) -> String {
        let oracle = self.oracle;
        if oracle.is_interop_object(ty) {
            return code.to_string();
        }
        if let Type::Basic(kind) = oracle.underlying(ty) {
            if kind.is_numeric() && !kind.is_64bit() && !kind.is_complex() {
                return code.to_string();
            }
            if *kind == BasicKind::UntypedNil {
                return "null".to_string();
            }
        }
        format!("$externalize({code}, {})", self.type_name(ty))
    }
}

/// Map key of a float, as the runtime helper computes it.
///
/// `None` for NaN: every NaN key is distinct, so the runtime must mint a
/// fresh key each time.
pub fn float_key(value: f64) -> Option<String> {
    if value.is_nan() {
        return None;
    }
    Some(js_number_to_string(value))
}

/// Target-language `Number#toString` of a double.
pub fn js_number_to_string(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    if value.is_infinite() {
        let sign = if value < 0.0 { "-" } else { "" };
        return format!("{sign}Infinity");
    }
    if value < 0.0 {
        return format!("-{}", js_number_to_string(-value));
    }

    // Shortest round-trip digits and decimal exponent.
    let sci = format!("{value:e}");
    let (mantissa, exp) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exp: i32 = exp.parse().unwrap_or(0);
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let k = digits.len() as i32;
    let n = exp + 1;

    if k <= n && n <= 21 {
        return format!("{digits}{}", "0".repeat((n - k) as usize));
    }
    if 0 < n && n <= 21 {
        let (int, frac) = digits.split_at(n as usize);
        return format!("{int}.{frac}");
    }
    if -6 < n && n <= 0 {
        return format!("0.{}{digits}", "0".repeat((-n) as usize));
    }

    let sign = if n - 1 < 0 { '-' } else { '+' };
    let (first, rest) = digits.split_at(1);
    if rest.is_empty() {
        format!("{first}e{sign}{}", (n - 1).abs())
    } else {
        format!("{first}.{rest}e{sign}{}", (n - 1).abs())
    }
}
