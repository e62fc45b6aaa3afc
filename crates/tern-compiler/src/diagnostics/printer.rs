//! Source-annotated rendering of soft errors.

use annotate_snippets::{AnnotationKind, Group, Level, Renderer, Snippet};

use super::{Diagnostics, SoftError};

/// Renders each soft error as an excerpt of the unit source with a caret
/// under the offending span.
pub struct SourceReport<'d, 's> {
    diagnostics: &'d Diagnostics,
    source: &'s str,
    path: Option<&'s str>,
    renderer: Renderer,
}

impl<'d, 's> SourceReport<'d, 's> {
    pub fn new(diagnostics: &'d Diagnostics, source: &'s str) -> Self {
        Self {
            diagnostics,
            source,
            path: None,
            renderer: Renderer::plain(),
        }
    }

    /// File name shown in the excerpt header.
    pub fn path(mut self, path: &'s str) -> Self {
        self.path = Some(path);
        self
    }

    pub fn colored(mut self, colored: bool) -> Self {
        self.renderer = if colored {
            Renderer::styled()
        } else {
            Renderer::plain()
        };
        self
    }

    pub fn render(&self) -> String {
        self.diagnostics
            .iter()
            .map(|error| self.renderer.render(&[self.group(error)]).to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn group<'a>(&'a self, error: &'a SoftError) -> Group<'a> {
        let annotation = AnnotationKind::Primary
            .span(error.span.clamped(self.source))
            .label(error.message());
        let mut excerpt = Snippet::source(self.source)
            .line_start(1)
            .annotation(annotation);
        if let Some(path) = self.path {
            excerpt = excerpt.path(path);
        }

        error.hints.iter().fold(
            Level::ERROR.primary_title(error.message()).element(excerpt),
            |group, hint| group.element(Level::HELP.message(hint.as_str())),
        )
    }
}
