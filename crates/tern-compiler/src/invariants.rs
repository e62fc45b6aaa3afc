//! Invariant checks excluded from coverage reports.
//!
//! Everything here is unreachable for a well-typed unit driven through a
//! balanced sequence of calls. Reaching one means an upstream contract was
//! broken, so the unit is aborted rather than recovered.

#![cfg_attr(coverage_nightly, coverage(off))]

use tern_core::Type;

use crate::unit::{FuncContext, UnitContext};

impl UnitContext<'_> {
    pub(crate) fn ensure_frame(&self) -> &FuncContext {
        self.frames
            .last()
            .unwrap_or_else(|| panic!("UnitContext: no function context on the stack"))
    }

    pub(crate) fn ensure_frame_mut(&mut self) -> &mut FuncContext {
        self.frames
            .last_mut()
            .unwrap_or_else(|| panic!("UnitContext: no function context on the stack"))
    }

    pub(crate) fn ensure_nested_frame(&self) {
        assert!(
            self.frames.len() > 1,
            "UnitContext: leave_func called on the package-level context"
        );
    }

    pub(crate) fn ensure_balanced_frames(&self) {
        assert!(
            self.frames.len() == 1,
            "UnitContext: finished with {} function contexts still open",
            self.frames.len() - 1
        );
    }
}

pub(crate) fn empty_variable_name() -> ! {
    panic!("new_variable: empty name")
}

pub(crate) fn zero_value_of_untyped_nil() -> ! {
    panic!("zero value requested for untyped nil")
}

pub(crate) fn unhandled_type(what: &str, ty: &Type) -> ! {
    panic!("{what}: unhandled type {ty:?}")
}

pub(crate) fn selection_through_non_struct(ty: &Type) -> ! {
    panic!("selection: receiver {ty:?} is not a struct")
}

pub(crate) fn variadic_param_not_slice(ty: &Type) -> ! {
    panic!("call arguments: variadic parameter {ty:?} is not a slice")
}
