//! Per-unit and per-function translation state.
//!
//! A `UnitContext` is created for each compilation unit and driven by the
//! statement and expression translators. It owns a stack of `FuncContext`
//! frames; the bottom frame is the package scope. Everything unit-wide
//! (object names, descriptor registry, dependencies, escaping set, soft
//! errors) lives on the unit itself.

use std::collections::{HashMap, HashSet};

use indexmap::{IndexMap, IndexSet};
use tern_core::{ObjId, Pos, Type, TypeOracle};

use crate::diagnostics::Diagnostics;
use crate::naming::{NameRegistry, RESERVED_WORDS};
use crate::post::minify;
use crate::{Config, Error, Result};

/// A package-level entity the unit's output refers to.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Dependency {
    /// A package-level or foreign object.
    Object(ObjId),
    /// A synthesized anonymous type descriptor, by its variable name.
    AnonType(String),
}

/// State of the function currently being emitted.
#[derive(Clone, Debug, Default)]
pub struct FuncContext {
    pub(crate) names: NameRegistry,
    pub(crate) local_vars: Vec<String>,
    pub(crate) output: Vec<u8>,
    pub(crate) delayed_output: Vec<u8>,
    pub(crate) indentation: usize,
    pub(crate) pending_pos: Option<Pos>,
}

impl FuncContext {
    fn package_scope() -> Self {
        let mut names = NameRegistry::new();
        for word in RESERVED_WORDS {
            names.reserve(word);
        }
        Self {
            names,
            ..Self::default()
        }
    }

    /// A nested frame sees every name its parent has allocated so far.
    fn nested(&self) -> Self {
        Self {
            names: self.names.clone(),
            indentation: self.indentation,
            ..Self::default()
        }
    }
}

/// What a function frame produced once it is left.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FuncOutput {
    pub code: Vec<u8>,
    /// Names that need a `var` declaration at the top of the function.
    pub local_vars: Vec<String>,
}

/// Result of a unit that finished without soft errors.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UnitOutput {
    /// Package-level code.
    pub code: Vec<u8>,
    /// Initializers for synthesized anonymous type descriptors.
    pub type_decls: Vec<u8>,
    /// Package-level names that need a `var` declaration.
    pub vars: Vec<String>,
    pub dependencies: Vec<Dependency>,
}

pub struct UnitContext<'o> {
    pub(crate) oracle: &'o dyn TypeOracle,
    pub(crate) config: Config,
    pub(crate) object_names: HashMap<ObjId, String>,
    pub(crate) var_ptr_names: HashMap<ObjId, String>,
    pub(crate) package_aliases: HashMap<String, String>,
    /// Anonymous type -> descriptor variable, in registration order.
    pub(crate) anon_types: IndexMap<Type, String>,
    pub(crate) dependencies: IndexSet<Dependency>,
    pub(crate) escaping: HashSet<ObjId>,
    pub(crate) diagnostics: Diagnostics,
    pub(crate) frames: Vec<FuncContext>,
}

impl<'o> UnitContext<'o> {
    pub fn new(oracle: &'o dyn TypeOracle, config: Config) -> Self {
        Self {
            oracle,
            config,
            object_names: HashMap::new(),
            var_ptr_names: HashMap::new(),
            package_aliases: HashMap::new(),
            anon_types: IndexMap::new(),
            dependencies: IndexSet::new(),
            escaping: HashSet::new(),
            diagnostics: Diagnostics::new(),
            frames: vec![FuncContext::package_scope()],
        }
    }

    pub fn oracle(&self) -> &'o dyn TypeOracle {
        self.oracle
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn diagnostics_mut(&mut self) -> &mut Diagnostics {
        &mut self.diagnostics
    }

    pub fn dependencies(&self) -> impl Iterator<Item = &Dependency> {
        self.dependencies.iter()
    }

    /// Nesting depth; 0 is the package scope.
    pub fn depth(&self) -> usize {
        self.frames.len() - 1
    }

    /// Output of the current frame so far.
    pub fn output(&self) -> &[u8] {
        &self.ensure_frame().output
    }

    /// Open a function frame that inherits the current names and indentation.
    pub fn enter_func(&mut self) {
        let frame = self.ensure_frame().nested();
        self.frames.push(frame);
        log::trace!("enter function frame at depth {}", self.depth());
    }

    /// Close the current function frame and hand back what it produced.
    pub fn leave_func(&mut self) -> FuncOutput {
        self.ensure_nested_frame();
        self.write_pos();
        let frame = self.frames.pop().unwrap_or_default();
        log::trace!(
            "leave function frame with {} locals, {} bytes",
            frame.local_vars.len(),
            frame.output.len()
        );
        FuncOutput {
            code: frame.output,
            local_vars: frame.local_vars,
        }
    }

    pub fn with_func<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> (R, FuncOutput) {
        self.enter_func();
        let result = f(self);
        (result, self.leave_func())
    }

    /// Complete the unit.
    ///
    /// Fails with every collected soft error when there are any; otherwise
    /// returns the package-level code, descriptor initializers and
    /// dependencies, minified when the configuration asks for it.
    pub fn finish(mut self) -> Result<UnitOutput> {
        self.ensure_balanced_frames();
        if !self.diagnostics.is_empty() {
            log::debug!("unit failed with {} soft errors", self.diagnostics.len());
            return Err(Error::UnitFailed(self.diagnostics));
        }

        self.write_pos();
        let type_decls = self.anon_type_decls();
        let root = self.frames.pop().unwrap_or_default();
        let (code, type_decls) = if self.config.minify {
            (minify(&root.output), minify(&type_decls))
        } else {
            (root.output, type_decls)
        };

        let mut vars = root.local_vars;
        vars.extend(self.anon_types.values().cloned());
        Ok(UnitOutput {
            code,
            type_decls,
            vars,
            dependencies: self.dependencies.into_iter().collect(),
        })
    }
}
