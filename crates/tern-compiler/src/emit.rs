//! Output writer for the current function frame.
//!
//! Source positions are interleaved into the byte stream as 5-byte markers:
//! `POS_MARKER` followed by the position as a big-endian `u32`. A position
//! set with `set_pos` is written lazily, right before the next bytes, so a
//! run of writes without intervening positions shares one marker.

use std::fmt;

use tern_core::Pos;

use crate::UnitContext;

/// Sentinel byte that opens a position marker. Never produced by the
/// literal encoder, so it cannot appear inside emitted string literals.
pub const POS_MARKER: u8 = 0x08;

/// Marker sentinel plus a 4-byte position.
pub const MARKER_LEN: usize = 5;

impl UnitContext<'_> {
    /// Append raw bytes to the current frame.
    pub fn write(&mut self, bytes: impl AsRef<[u8]>) {
        self.write_pos();
        self.ensure_frame_mut()
            .output
            .extend_from_slice(bytes.as_ref());
    }

    /// Write one indented line, then flush any delayed output.
    ///
    /// ```ignore
    /// unit.printf(format_args!("{} = {};", name, value));
    /// ```
    pub fn printf(&mut self, args: fmt::Arguments<'_>) {
        let indentation = self.ensure_frame().indentation;
        let line = format!("{}{}\n", "\t".repeat(indentation), args);
        self.write(line);

        let delayed = std::mem::take(&mut self.ensure_frame_mut().delayed_output);
        if !delayed.is_empty() {
            self.write(delayed);
        }
    }

    /// Emit `on_true`, or `on_false` with `on_true` kept as a comment.
    pub fn print_cond(&mut self, cond: bool, on_true: &str, on_false: &str) {
        if cond {
            self.printf(format_args!("{on_true}"));
            return;
        }
        let commented = on_true.replace("*/", "<star>/");
        self.printf(format_args!("/* {commented} */ {on_false}"));
    }

    /// Record the source position of the next bytes written.
    pub fn set_pos(&mut self, pos: Pos) {
        if self.config.positions {
            self.ensure_frame_mut().pending_pos = Some(pos);
        }
    }

    /// Flush a pending position as a marker.
    pub(crate) fn write_pos(&mut self) {
        let frame = self.ensure_frame_mut();
        if let Some(pos) = frame.pending_pos.take() {
            frame.output.push(POS_MARKER);
            frame.output.extend_from_slice(&pos.to_be_bytes());
        }
    }

    /// Run `f` one indentation level deeper.
    pub fn indent<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        self.ensure_frame_mut().indentation += 1;
        let result = f(self);
        self.ensure_frame_mut().indentation -= 1;
        result
    }

    /// Run `f` with a fresh output buffer and return what it wrote.
    ///
    /// The frame's previous output is restored afterwards. A position set
    /// inside `f` that was never followed by a write is flushed into the
    /// captured bytes.
    pub fn catch_output(&mut self, indent: usize, f: impl FnOnce(&mut Self)) -> Vec<u8> {
        let frame = self.ensure_frame_mut();
        let saved = std::mem::take(&mut frame.output);
        frame.indentation += indent;

        f(self);
        self.write_pos();

        let frame = self.ensure_frame_mut();
        frame.indentation -= indent;
        std::mem::replace(&mut frame.output, saved)
    }

    /// Capture `f`'s output and emit it after the next `printf` line.
    pub fn delayed(&mut self, f: impl FnOnce(&mut Self)) {
        let captured = self.catch_output(0, f);
        self.ensure_frame_mut().delayed_output = captured;
    }
}
