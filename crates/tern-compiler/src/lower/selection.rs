use tern_core::{Pos, Type, tag};

use crate::diagnostics::{DiagnosticKind, Span};
use crate::invariants;
use crate::naming::field_name;
use crate::UnitContext;

/// Struct tag key that redirects an embedded field to a foreign property.
pub const INTEROP_TAG: &str = "js";

/// A field selection: the receiver type and the field index at each
/// embedding level, outermost first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selection {
    pub recv: Type,
    pub path: Vec<usize>,
}

impl Selection {
    pub fn new(recv: Type, path: Vec<usize>) -> Self {
        Self { recv, path }
    }
}

/// Resolved selection.
///
/// With `interop_tag` set, `fields` leads to the interop object and the
/// tag names the foreign property to read from it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionPath {
    pub fields: Vec<String>,
    pub interop_tag: Option<String>,
}

impl SelectionPath {
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.interop_tag.is_none()
    }
}

impl UnitContext<'_> {
    /// Property chain for a field selection.
    ///
    /// Records a soft error at `pos` and returns an empty path when an
    /// interop-tagged field never reaches the interop object type.
    pub fn translate_selection(&mut self, sel: &Selection, pos: Pos) -> SelectionPath {
        let oracle = self.oracle;
        let mut fields = Vec::with_capacity(sel.path.len());
        let mut t = &sel.recv;

        for &index in &sel.path {
            if let Type::Pointer(elem) = oracle.underlying(t) {
                t = elem;
            }
            let mut s = match oracle.underlying(t) {
                Type::Struct(s) => s,
                other => invariants::selection_through_non_struct(other),
            };

            let interop_tag = tag::lookup(&s.field(index).tag, INTEROP_TAG)
                .filter(|value| !value.is_empty());
            if let Some(interop_tag) = interop_tag {
                let tagged_field = &s.field(index).name;
                loop {
                    fields.push(field_name(s, 0));
                    let ft = &s.field(0).ty;
                    if oracle.is_interop_object(ft) {
                        return SelectionPath {
                            fields,
                            interop_tag: Some(interop_tag),
                        };
                    }

                    let mut ft = oracle.underlying(ft);
                    if let Type::Pointer(elem) = ft {
                        ft = oracle.underlying(elem);
                    }
                    match ft {
                        Type::Struct(next) if !next.fields.is_empty() => s = next,
                        _ => {
                            self.diagnostics
                                .report(DiagnosticKind::InteropFieldNotFound, Span::at(pos))
                                .message(tagged_field.as_str())
                                .emit();
                            return SelectionPath::default();
                        }
                    }
                }
            }

            fields.push(field_name(s, index));
            t = &s.field(index).ty;
        }

        SelectionPath {
            fields,
            interop_tag: None,
        }
    }
}
