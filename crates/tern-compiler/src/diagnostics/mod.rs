//! Soft-error collection.
//!
//! Soft errors never abort translation. They accumulate on the unit and
//! suppress its output once, when the unit is finished.

mod message;
mod printer;


pub use message::{DiagnosticKind, SoftError, Span};
pub use printer::SourceReport;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    errors: Vec<SoftError>,
}

/// A soft error being assembled. Nothing is recorded until `emit`.
#[must_use = "soft error is dropped unless .emit() is called"]
pub struct Report<'a> {
    sink: &'a mut Vec<SoftError>,
    error: SoftError,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a soft error of `kind` at `span`, carrying the kind's summary
    /// text and hint until the builder says otherwise.
    pub fn report(&mut self, kind: DiagnosticKind, span: Span) -> Report<'_> {
        Report {
            sink: &mut self.errors,
            error: SoftError::new(kind, span),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SoftError> {
        self.errors.iter()
    }

    pub fn as_slice(&self) -> &[SoftError] {
        &self.errors
    }

    pub fn extend(&mut self, other: Diagnostics) {
        self.errors.extend(other.errors);
    }

    /// Render against the unit's source text, uncolored.
    pub fn render(&self, source: &str) -> String {
        SourceReport::new(self, source).render()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a SoftError;
    type IntoIter = std::slice::Iter<'a, SoftError>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// One line per error, no source excerpt.
impl std::fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

impl Report<'_> {
    /// Name the offending field in the error text.
    pub fn message(mut self, field: impl AsRef<str>) -> Self {
        self.error.text = self.error.kind.describe(field.as_ref());
        self
    }

    pub fn hint(mut self, hint: impl Into<String>) -> Self {
        self.error.hints.push(hint.into());
        self
    }

    pub fn emit(self) {
        log::debug!("soft error: {}", self.error);
        self.sink.push(self.error);
    }
}
