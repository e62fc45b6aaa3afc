use tern_core::Pos;

/// What went wrong while lowering a unit.
///
/// Every kind is recoverable: lowering continues and the unit is rejected
/// when it is finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DiagnosticKind {
    /// An interop-tagged embedded field never reaches the opaque object type.
    InteropFieldNotFound,
}

impl DiagnosticKind {
    /// Text used when the reporter names no field.
    pub fn summary(self) -> &'static str {
        match self {
            Self::InteropFieldNotFound => "could not find the interop object field",
        }
    }

    /// Text naming the offending field.
    pub fn describe(self, field: &str) -> String {
        match self {
            Self::InteropFieldNotFound => {
                format!("could not find field with type *js.Object for 'js' tag of field '{field}'")
            }
        }
    }

    pub fn hint(self) -> Option<&'static str> {
        match self {
            Self::InteropFieldNotFound => {
                Some("the first field of each embedded struct must lead to a *js.Object")
            }
        }
    }
}

/// Byte range `start..end` into the unit's source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: Pos,
    pub end: Pos,
}

impl Span {
    pub fn new(start: Pos, end: Pos) -> Self {
        Self { start, end }
    }

    pub fn at(pos: Pos) -> Self {
        Self::new(pos, pos)
    }

    /// Byte range inside `source`, on char boundaries and at least one
    /// character wide when the source allows it so the caret stays visible.
    pub(crate) fn clamped(self, source: &str) -> std::ops::Range<usize> {
        let start = floor_boundary(source, self.start as usize);
        let end = floor_boundary(source, self.end as usize).max(start);
        if start < end {
            return start..end;
        }
        match source[start..].chars().next() {
            Some(c) => start..start + c.len_utf8(),
            None => start..start,
        }
    }
}

fn floor_boundary(source: &str, at: usize) -> usize {
    let mut at = at.min(source.len());
    while !source.is_char_boundary(at) {
        at -= 1;
    }
    at
}

/// One recorded soft error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoftError {
    pub(crate) kind: DiagnosticKind,
    pub(crate) span: Span,
    pub(crate) text: String,
    pub(crate) hints: Vec<String>,
}

impl SoftError {
    pub(crate) fn new(kind: DiagnosticKind, span: Span) -> Self {
        Self {
            kind,
            span,
            text: kind.summary().to_string(),
            hints: kind.hint().into_iter().map(String::from).collect(),
        }
    }

    pub fn kind(&self) -> DiagnosticKind {
        self.kind
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn message(&self) -> &str {
        &self.text
    }

    pub fn hints(&self) -> &[String] {
        &self.hints
    }
}

impl std::fmt::Display for SoftError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Span { start, end } = self.span;
        write!(f, "error at {start}..{end}: {}", self.text)?;
        self.hints
            .iter()
            .try_for_each(|hint| write!(f, " (hint: {hint})"))
    }
}
