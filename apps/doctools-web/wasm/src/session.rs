//! Stateful upload-list session management
//!
//! One session per tool page, holding the file list, drag state, export
//! busy flag, and output filename in Rust. JavaScript forwards DOM
//! events and object URLs, renders from `snapshot()`, and hands the
//! snapshot to the processing libraries at export time.

use doctools_core::{ExportError, ExportGate, Item, ItemId, ItemStore, ReorderSession};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// One uploaded file: display name plus the object URL serving as the
/// payload handle. The bytes stay on the JavaScript side; the session
/// only owns the handle and revokes it when the entry is detached.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileEntry {
    pub name: String,
    pub url: String,
}

/// List behavior, per tool
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListMode {
    /// A new upload replaces the current file (signing tool)
    Single,
    /// Uploads append and the list is drag-reorderable (merge, image-to-PDF)
    Ordered,
}

/// Per-tool session: upload list, reorder gesture, export gate, filename
#[wasm_bindgen]
pub struct UploadSession {
    mode: ListMode,
    store: ItemStore<FileEntry>,
    reorder: ReorderSession,
    gate: ExportGate,
    filename: String,
}

#[wasm_bindgen]
impl UploadSession {
    /// Create a session for one tool page with its default output
    /// filename (e.g. "merged.pdf")
    #[wasm_bindgen(constructor)]
    pub fn new(mode: ListMode, default_filename: &str) -> Self {
        Self {
            mode,
            store: ItemStore::new(),
            reorder: ReorderSession::new(),
            gate: ExportGate::new(),
            filename: default_filename.to_string(),
        }
    }

    /// Get the session mode
    #[wasm_bindgen(getter)]
    pub fn mode(&self) -> ListMode {
        self.mode
    }

    /// Internal add (testable without a JS runtime): returns the new id
    /// plus any entries displaced by Single-mode replacement, whose
    /// handles the caller must release.
    fn add_file_internal(&mut self, name: &str, url: &str) -> (ItemId, Vec<FileEntry>) {
        let displaced = match self.mode {
            ListMode::Single => self.detach_all(),
            ListMode::Ordered => Vec::new(),
        };
        let id = self.store.append(FileEntry {
            name: name.to_string(),
            url: url.to_string(),
        });
        (id, displaced)
    }

    /// Accept a file from the upload handler. `url` is the object URL
    /// created for it; the session owns revocation from here on.
    /// Returns the new entry's id.
    #[wasm_bindgen(js_name = addFile)]
    pub fn add_file(&mut self, name: &str, url: &str) -> u64 {
        let (id, displaced) = self.add_file_internal(name, url);
        for entry in displaced {
            revoke_object_url(&entry.url);
        }
        id.as_u64()
    }

    /// Internal remove: detaches the entry and cancels the drag gesture
    /// if it was the one being dragged. `None` for a stale id.
    fn remove_file_internal(&mut self, id: ItemId) -> Option<FileEntry> {
        let item = self.store.remove(id)?;
        self.reorder.note_removed(id);
        Some(item.payload)
    }

    /// Remove an entry and release its object URL. Safe to call with a
    /// stale id (fast double-clicks on the remove button are expected).
    #[wasm_bindgen(js_name = removeFile)]
    pub fn remove_file(&mut self, id: u64) {
        if let Some(entry) = self.remove_file_internal(ItemId::from_u64(id)) {
            revoke_object_url(&entry.url);
        }
    }

    /// Start dragging an entry. Returns false if the id is stale, a drag
    /// is already active, or the list is not reorderable.
    #[wasm_bindgen(js_name = beginDrag)]
    pub fn begin_drag(&mut self, id: u64) -> bool {
        if self.mode != ListMode::Ordered {
            return false;
        }
        self.reorder.begin_drag(&self.store, ItemId::from_u64(id))
    }

    /// Pointer moved over another entry: commits the eager reorder.
    /// Returns whether the order changed.
    #[wasm_bindgen(js_name = hoverOver)]
    pub fn hover_over(&mut self, id: u64) -> bool {
        self.reorder.hover(&mut self.store, ItemId::from_u64(id))
    }

    /// Drop: finalize the current order
    #[wasm_bindgen(js_name = endDrag)]
    pub fn end_drag(&mut self) {
        self.reorder.end_drag();
    }

    /// Abort the gesture (pointer left the window, Escape, ...)
    #[wasm_bindgen(js_name = cancelDrag)]
    pub fn cancel_drag(&mut self) {
        self.reorder.cancel();
    }

    #[wasm_bindgen(js_name = isDragging)]
    pub fn is_dragging(&self) -> bool {
        self.reorder.is_dragging()
    }

    /// Relocate an entry directly (non-drag reordering surfaces).
    /// The target index is clamped; a stale id is a no-op.
    #[wasm_bindgen(js_name = moveFile)]
    pub fn move_file(&mut self, id: u64, target_index: usize) -> bool {
        self.store.move_to(ItemId::from_u64(id), target_index)
    }

    /// Number of entries in the list
    #[wasm_bindgen(js_name = fileCount)]
    pub fn file_count(&self) -> usize {
        self.store.len()
    }

    /// Output filename for the download link
    #[wasm_bindgen(getter)]
    pub fn filename(&self) -> String {
        self.filename.clone()
    }

    #[wasm_bindgen(setter)]
    pub fn set_filename(&mut self, filename: String) {
        self.filename = filename;
    }

    /// Filename with the given extension guaranteed (the download
    /// attribute value)
    #[wasm_bindgen(js_name = downloadName)]
    pub fn download_name(&self, extension: &str) -> String {
        crate::ensure_extension(&self.filename, extension)
    }

    /// Current order as an array of `{id, name, url}` records, for
    /// rendering and for export iteration
    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(self.store.snapshot())
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }

    /// Snapshot as JSON (for debugging/persistence)
    #[wasm_bindgen(js_name = snapshotJson)]
    pub fn snapshot_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(self.store.snapshot())
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }

    /// Whether the export action should be enabled
    #[wasm_bindgen(js_name = canExport)]
    pub fn can_export(&self) -> bool {
        !self.store.is_empty() && !self.gate.is_busy()
    }

    /// Internal export start (testable without JsValue)
    fn begin_export_internal(&mut self) -> Result<&[Item<FileEntry>], ExportError> {
        if self.store.is_empty() {
            return Err(ExportError::NoItems);
        }
        self.gate.begin()?;
        Ok(self.store.snapshot())
    }

    /// Claim the export gate and return the snapshot to process, in
    /// final order. Rejects with a message while busy or empty; the
    /// collection is left untouched either way.
    #[wasm_bindgen(js_name = beginExport)]
    pub fn begin_export(&mut self) -> Result<JsValue, JsValue> {
        let snapshot = self
            .begin_export_internal()
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        serde_wasm_bindgen::to_value(snapshot)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }

    /// Release the export gate. Call from both the success and the
    /// failure path so the tool stays retryable.
    #[wasm_bindgen(js_name = finishExport)]
    pub fn finish_export(&mut self) {
        self.gate.finish();
    }

    #[wasm_bindgen(js_name = isBusy)]
    pub fn is_busy(&self) -> bool {
        self.gate.is_busy()
    }

    /// Internal teardown: cancels any gesture and detaches every entry
    fn detach_all(&mut self) -> Vec<FileEntry> {
        self.reorder.cancel();
        self.store
            .clear()
            .into_iter()
            .map(|item| item.payload)
            .collect()
    }

    /// Tear the list down (navigating away), releasing every object URL
    pub fn clear(&mut self) {
        for entry in self.detach_all() {
            revoke_object_url(&entry.url);
        }
    }
}

/// Release a temporary object URL created by the upload handler
fn revoke_object_url(url: &str) {
    let _ = web_sys::Url::revoke_object_url(url);
}
