//! Upload-list state core for the document tools
//!
//! Every tool page (merge, image-to-PDF, compress, sign, background
//! removal) keeps a user-reorderable list of uploaded files. This crate
//! owns that state: stable item identity, an ordered store with
//! append/remove/move, the drag-reorder state machine, and the busy gate
//! around long-running exports.
//!
//! Payloads are opaque handles owned by the browser side; no file bytes
//! are read and no document processing happens here. The WASM app wraps
//! these types in per-tool session objects.

pub mod error;
pub mod export;
pub mod ident;
pub mod reorder;
pub mod store;

pub use error::ExportError;
pub use export::ExportGate;
pub use ident::{IdAllocator, ItemId};
pub use reorder::{DragState, ReorderSession};
pub use store::{Item, ItemStore};
