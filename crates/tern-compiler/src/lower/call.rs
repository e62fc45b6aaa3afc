use std::borrow::Cow;

use tern_core::{Signature, Type};

use crate::invariants;
use crate::{ExprTranslator, Operand, UnitContext};

impl UnitContext<'_> {
    /// Lower call arguments to one expression per parameter.
    ///
    /// A single tuple-valued argument is spilled into `_tuple` and expanded.
    /// When any later argument may block, earlier non-constant arguments are
    /// first assigned to `_arg` temporaries so they keep their source order.
    /// Unless the call spreads a slice with `ellipsis`, trailing variadic
    /// arguments are packed into a new slice.
    pub fn translate_args(
        &mut self,
        translator: &mut dyn ExprTranslator,
        sig: &Signature,
        args: &[Operand],
        ellipsis: bool,
        clone: bool,
    ) -> Vec<String> {
        let oracle = self.oracle;

        let mut args = Cow::Borrowed(args);
        if let [single] = args.as_ref() {
            if let Type::Tuple(elems) = single.ty(oracle) {
                let tuple_var = self.new_variable("_tuple");
                let value = translator.translate_expr(self, single);
                self.printf(format_args!("{tuple_var} = {value};"));
                let expanded = elems
                    .iter()
                    .enumerate()
                    .map(|(i, ty)| Operand::synthetic(format!("{tuple_var}[{i}]"), ty.clone()))
                    .collect();
                args = Cow::Owned(expanded);
            }
        }

        let params_len = sig.params.len();
        let variadic = (sig.variadic && !ellipsis).then(|| {
            let slice = &sig.params[params_len - 1];
            match oracle.underlying(slice) {
                Type::Slice(elem) => (slice, elem.as_ref()),
                other => invariants::variadic_param_not_slice(other),
            }
        });

        let preserve_order = args.iter().skip(1).any(|arg| arg.is_blocking(oracle));

        let mut out = Vec::with_capacity(args.len());
        for (i, arg) in args.iter().enumerate() {
            let param = match variadic {
                Some((_, elem)) if i >= params_len - 1 => elem,
                _ => &sig.params[i],
            };
            let mut code = translator.translate_implicit_conversion(self, arg, param, clone);
            if preserve_order && !arg.is_constant(oracle) {
                let temp = self.new_variable("_arg");
                self.printf(format_args!("{temp} = {code};"));
                code = temp;
            }
            out.push(code);
        }

        if let Some((slice, _)) = variadic {
            let tail = out.split_off((params_len - 1).min(out.len()));
            let descriptor = self.type_name(slice);
            out.push(format!("new {descriptor}([{}])", tail.join(", ")));
        }

        out
    }
}
