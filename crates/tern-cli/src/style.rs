//! ANSI styling for command output.

use std::fmt;

/// What a piece of output is, which decides its color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    /// Counts and line:column coordinates (dim).
    Meta,
    /// Byte offsets into the original source (blue).
    Offset,
    /// Emitted string literals (green).
    Literal,
}

impl Role {
    fn sgr(self) -> &'static str {
        match self {
            Role::Meta => "2",
            Role::Offset => "34",
            Role::Literal => "32",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Style {
    enabled: bool,
}

impl Style {
    pub const PLAIN: Self = Self { enabled: false };

    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn paint<T: fmt::Display>(self, role: Role, value: T) -> Painted<T> {
        Painted {
            role: self.enabled.then_some(role),
            value,
        }
    }
}

/// A value that renders wrapped in its role's escape codes when styling is on.
pub struct Painted<T> {
    role: Option<Role>,
    value: T,
}

impl<T: fmt::Display> fmt::Display for Painted<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.role {
            Some(role) => write!(f, "\x1b[{}m{}\x1b[0m", role.sgr(), self.value),
            None => write!(f, "{}", self.value),
        }
    }
}
