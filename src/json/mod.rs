//! Purpose: Internal JSON parsing boundary shared by the load flows.
//! Exports: `parse` module with decode helpers.
//! Role: Single seam for parser details so callsites avoid ad hoc decode logic.
//! Invariants: Helper APIs stay small and deterministic (no hidden global state).

pub(crate) mod parse;
