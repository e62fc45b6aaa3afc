//! Configuration for one compilation unit.

/// Configuration for code emission.
#[derive(Clone, Debug)]
pub struct Config {
    /// Counter-derived names and whitespace stripping
    pub(crate) minify: bool,
    /// Whether `set_pos` records debug-position markers
    pub(crate) positions: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            minify: false,
            positions: true,
        }
    }
}

impl Config {
    /// Create a new Config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether to minify names and output.
    pub fn minify(mut self, value: bool) -> Self {
        self.minify = value;
        self
    }

    /// Set whether to interleave source-position markers.
    pub fn positions(mut self, value: bool) -> Self {
        self.positions = value;
        self
    }

    pub fn is_minify(&self) -> bool {
        self.minify
    }
}
