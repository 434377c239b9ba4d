//! WASM bindings for the document tools' upload lists
//!
//! This module provides a stateful, session-based API for the tool
//! pages (merge PDF, image to PDF, compress, sign, background removal).
//! All list state is held in Rust, minimizing JavaScript complexity.
//!
//! ## Architecture
//!
//! - List state, drag reordering, and export gating in Rust via
//!   `UploadSession`
//! - JavaScript only handles DOM events, object URL creation, and the
//!   processing libraries (pdf-lib, jsPDF, background removal)
//! - At export time JavaScript iterates the snapshot in final order
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { UploadSession, ListMode } from './pkg/doctools_wasm.js';
//!
//! await init();
//!
//! const session = new UploadSession(ListMode.Ordered, "merged.pdf");
//! for (const file of input.files) {
//!   session.addFile(file.name, URL.createObjectURL(file));
//! }
//!
//! // Drag handlers
//! tile.ondragstart = () => session.beginDrag(id);
//! tile.ondragenter = () => { session.hoverOver(id); render(session.snapshot()); };
//! tile.ondragend   = () => session.endDrag();
//!
//! // Export
//! const files = session.beginExport();
//! try {
//!   await mergeWithPdfLib(files, session.downloadName("pdf"));
//! } finally {
//!   session.finishExport();
//! }
//! ```

pub mod session;

use wasm_bindgen::prelude::*;

// Re-export main types for JavaScript
pub use session::{FileEntry, ListMode, UploadSession};

/// Initialize the WASM module
/// Called automatically by wasm-bindgen
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Get the library version
#[wasm_bindgen]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Append `extension` to `name` unless it already ends with it
/// (case-insensitive). Empty input falls back to "download".
#[wasm_bindgen(js_name = ensureExtension)]
pub fn ensure_extension(name: &str, extension: &str) -> String {
    let extension = extension.trim_start_matches('.');
    let name = name.trim();
    if name.is_empty() {
        return format!("download.{}", extension);
    }
    let suffix = format!(".{}", extension.to_lowercase());
    if name.to_lowercase().ends_with(&suffix) {
        name.to_string()
    } else {
        format!("{}.{}", name, extension)
    }
}
