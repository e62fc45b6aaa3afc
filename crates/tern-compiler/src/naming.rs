//! Identifier allocation.
//!
//! Every emitted variable goes through a `NameRegistry`, which counts how
//! often each base name has been handed out. The first use of a base name
//! gets it verbatim, later uses get `base$n`. Since `$` never survives
//! sanitization, suffixed names cannot collide with a base name.

use std::collections::HashMap;

use tern_core::{ObjId, ObjKind, StructType};

use crate::UnitContext;
use crate::invariants;

/// Words the target language reserves, plus globals emitted code must not shadow.
pub const RESERVED_WORDS: &[&str] = &[
    "abstract", "arguments", "boolean", "break", "byte", "case", "catch", "char", "class",
    "const", "continue", "debugger", "default", "delete", "do", "double", "else", "enum", "eval",
    "export", "extends", "false", "final", "finally", "float", "for", "function", "goto", "if",
    "implements", "import", "in", "instanceof", "int", "interface", "let", "long", "native",
    "new", "null", "package", "private", "protected", "public", "return", "short", "static",
    "super", "switch", "synchronized", "this", "throw", "throws", "transient", "true", "try",
    "typeof", "undefined", "var", "void", "volatile", "while", "with", "yield",
];

/// Substitute for a source name that is not a valid target identifier.
pub const NON_ASCII_NAME: &str = "nonAsciiName";

/// Per-frame name-use counts.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NameRegistry {
    counts: HashMap<String, u32>,
}

impl NameRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// How many times `name` has been handed out (0 = free).
    pub fn count(&self, name: &str) -> u32 {
        self.counts.get(name).copied().unwrap_or(0)
    }

    /// Make `name` unavailable in verbatim form.
    pub fn reserve(&mut self, name: &str) {
        self.raise(name, 1);
    }

    /// Take the next slot for `name`, returning how many uses preceded it.
    pub(crate) fn bump(&mut self, name: &str) -> u32 {
        let n = self.count(name);
        self.counts.insert(name.to_string(), n + 1);
        n
    }

    /// Raise the count for `name` to at least `count`.
    pub(crate) fn raise(&mut self, name: &str, count: u32) {
        let entry = self.counts.entry(name.to_string()).or_insert(0);
        *entry = (*entry).max(count);
    }
}

/// The `index`-th minified name: bijective base-26 over `a..z`, or `A..Z`
/// for package-level names (`a`, ..., `z`, `aa`, `ab`, ...).
pub fn minified_name(index: usize, package_level: bool) -> String {
    let first = if package_level { b'A' } else { b'a' };
    let mut digits = Vec::new();
    let mut n = index + 1;
    while n > 0 {
        n -= 1;
        digits.push(first + (n % 26) as u8);
        n /= 26;
    }
    digits.reverse();
    String::from_utf8_lossy(&digits).into_owned()
}

/// Source names outside `[A-Za-z0-9_]` collapse to a fixed placeholder.
pub fn sanitize(name: &str) -> &str {
    let valid = name
        .bytes()
        .all(|b| b.is_ascii_alphanumeric() || b == b'_');
    if valid { name } else { NON_ASCII_NAME }
}

/// Target property name for field `index` of `st`.
///
/// Blank and reserved field names get the field index appended so they
/// neither collide nor break property access.
pub fn field_name(st: &StructType, index: usize) -> String {
    let name = &st.field(index).name;
    if name == "_" || RESERVED_WORDS.contains(&name.as_str()) {
        return format!("{name}${index}");
    }
    name.clone()
}

impl UnitContext<'_> {
    /// Allocate a fresh function-local variable derived from `name`.
    pub fn new_variable(&mut self, name: &str) -> String {
        self.new_variable_with_level(name, false)
    }

    /// Allocate a fresh variable.
    ///
    /// Function-local names are recorded for the frame's `var` declaration.
    /// Package-level names are additionally reserved in every enclosing
    /// frame so later siblings never reuse them.
    pub fn new_variable_with_level(&mut self, name: &str, package_level: bool) -> String {
        if name.is_empty() {
            invariants::empty_variable_name();
        }

        let minify = self.config.minify;
        let frame = self.ensure_frame_mut();
        let base = if minify {
            let mut index = 0;
            loop {
                let candidate = minified_name(index, package_level);
                if frame.names.count(&candidate) == 0 {
                    break candidate;
                }
                index += 1;
            }
        } else {
            sanitize(name).to_string()
        };

        let n = frame.names.bump(&base);
        let var_name = if n > 0 {
            format!("{base}${n}")
        } else {
            base.clone()
        };

        if package_level {
            let last = self.frames.len() - 1;
            for frame in &mut self.frames[..last] {
                frame.names.raise(&base, n + 1);
            }
            log::trace!("package-level name {var_name} for {name:?}");
            return var_name;
        }

        self.ensure_frame_mut().local_vars.push(var_name.clone());
        var_name
    }

    /// Reference to an object from the current position.
    ///
    /// Foreign objects are reached through their package's alias, exported
    /// package-level variables and constants through `$pkg`. Everything
    /// else gets one name for the whole unit, boxed access (`name[0]`) once
    /// the variable is known to escape.
    pub fn object_name(&mut self, id: ObjId) -> String {
        let oracle = self.oracle;
        let obj = oracle.object(id);
        let foreign = obj.pkg != oracle.package_path();

        if foreign || obj.package_level {
            self.dependencies.insert(crate::Dependency::Object(id));
        }

        if foreign {
            let alias = match self.package_aliases.get(&obj.pkg) {
                Some(alias) => alias.clone(),
                None => format!("$packages[\"{}\"]", obj.pkg),
            };
            return format!("{alias}.{}", obj.name);
        }

        let exported_value = matches!(obj.kind, ObjKind::Var | ObjKind::Const)
            && obj.package_level
            && obj.is_exported();
        if exported_value {
            return format!("$pkg.{}", obj.name);
        }

        let name = match self.object_names.get(&id) {
            Some(name) => name.clone(),
            None => {
                let name = self.new_variable_with_level(&obj.name, obj.package_level);
                self.object_names.insert(id, name.clone());
                name
            }
        };

        if obj.is_var() && self.escaping.contains(&id) {
            return format!("{name}[0]");
        }
        name
    }

    /// Memoized name of the pointer wrapper for a variable.
    pub fn var_ptr_name(&mut self, id: ObjId) -> String {
        if let Some(name) = self.var_ptr_names.get(&id) {
            return name.clone();
        }
        let oracle = self.oracle;
        let obj = oracle.object(id);
        let base = format!("{}_ptr", obj.name);
        let name = self.new_variable_with_level(&base, obj.package_level);
        self.var_ptr_names.insert(id, name.clone());
        name
    }

    /// Allocate a package-level alias for an imported package.
    ///
    /// Later references to the package's objects go through the alias
    /// instead of the `$packages` table.
    pub fn import_package(&mut self, path: &str, name: &str) -> String {
        if let Some(alias) = self.package_aliases.get(path) {
            return alias.clone();
        }
        let alias = self.new_variable_with_level(name, true);
        self.package_aliases.insert(path.to_string(), alias.clone());
        alias
    }
}
