use std::collections::HashSet;

use tern_core::{EscapeOracle, NodeId, ObjId};

use crate::UnitContext;

/// The escaping set as it was before a subtree was entered.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[must_use = "restore the snapshot once the subtree is emitted"]
pub struct EscapeSnapshot(HashSet<ObjId>);

impl UnitContext<'_> {
    /// Box the variables that escape within `node`.
    ///
    /// Emits `x = [x];` for each newly escaping variable, sorted by name,
    /// and from then on refers to it as `x[0]`. Returns the previous set for
    /// `restore_escaping`.
    pub fn handle_escaping_vars(
        &mut self,
        escapes: &dyn EscapeOracle,
        node: NodeId,
    ) -> EscapeSnapshot {
        let snapshot = EscapeSnapshot(self.escaping.clone());

        let mut names = Vec::new();
        for id in escapes.escaping_objects(node) {
            if self.escaping.contains(&id) {
                continue;
            }
            names.push(self.object_name(id));
            self.escaping.insert(id);
        }
        names.sort();
        names.dedup();

        for name in &names {
            log::trace!("boxing escaping variable {name}");
            self.printf(format_args!("{name} = [{name}];"));
        }
        snapshot
    }

    /// Reinstate the escaping set saved by `handle_escaping_vars`.
    pub fn restore_escaping(&mut self, snapshot: EscapeSnapshot) {
        self.escaping = snapshot.0;
    }
}
