use thiserror::Error;

/// Errors surfaced to the user-facing layer.
///
/// Stale ids and out-of-range move targets are deliberately absent:
/// those are benign UI races, handled as silent no-ops (or clamping)
/// inside the store and the reorder session.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportError {
    #[error("An export is already in progress")]
    Busy,

    #[error("Nothing to export: the list is empty")]
    NoItems,
}
