//! Drag-based reordering state machine
//!
//! Makes the drag gesture explicit: one `Dragging` state at a time, and
//! an eager store move committed on every hover so the list always shows
//! the order a drop would produce. `endDrag` finalizes without touching
//! the store; cancellation is a plain transition back to `Idle`.

use crate::ident::ItemId;
use crate::store::ItemStore;

/// Current gesture state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragState {
    Idle,
    Dragging { dragged: ItemId, origin: usize },
}

/// Tracks one drag gesture over an [`ItemStore`].
///
/// The session holds no reference to the store; callers pass it into
/// each transition, which keeps both sides independently testable.
#[derive(Debug, Clone)]
pub struct ReorderSession {
    state: DragState,
    // Order at the moment the drag began. Hover targets resolve against
    // these slots, so a tile keeps one target position for the whole
    // gesture even as the live order shifts underneath it.
    slots: Vec<ItemId>,
}

impl Default for ReorderSession {
    fn default() -> Self {
        Self {
            state: DragState::Idle,
            slots: Vec::new(),
        }
    }
}

impl ReorderSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Id of the item being dragged, if a gesture is active.
    pub fn dragged_id(&self) -> Option<ItemId> {
        match self.state {
            DragState::Dragging { dragged, .. } => Some(dragged),
            DragState::Idle => None,
        }
    }

    /// Index the dragged item had when the gesture began.
    pub fn origin_index(&self) -> Option<usize> {
        match self.state {
            DragState::Dragging { origin, .. } => Some(origin),
            DragState::Idle => None,
        }
    }

    /// Start dragging `id`. No transition if the id is stale or a
    /// gesture is already active; returns whether the drag started.
    pub fn begin_drag<P>(&mut self, store: &ItemStore<P>, id: ItemId) -> bool {
        if self.is_dragging() {
            return false;
        }
        let origin = match store.index_of(id) {
            Some(origin) => origin,
            None => return false,
        };
        self.slots = store.order();
        self.state = DragState::Dragging {
            dragged: id,
            origin,
        };
        true
    }

    /// Pointer moved over `over`: eagerly commit a store move placing the
    /// dragged item at the hovered item's slot. Silent no-op when idle,
    /// when hovering the dragged item itself, or when `over` is stale.
    /// Returns whether the store was asked to move.
    pub fn hover<P>(&mut self, store: &mut ItemStore<P>, over: ItemId) -> bool {
        let dragged = match self.state {
            DragState::Dragging { dragged, .. } => dragged,
            DragState::Idle => return false,
        };
        if over == dragged || !store.contains(over) {
            return false;
        }
        // Items appended mid-drag have no slot; use their live position.
        let target = self
            .slots
            .iter()
            .position(|&id| id == over)
            .or_else(|| store.index_of(over));
        match target {
            Some(target) => store.move_to(dragged, target),
            None => false,
        }
    }

    /// Drop: the eager hover moves already applied the final order, so
    /// this only closes the gesture.
    pub fn end_drag(&mut self) {
        self.reset();
    }

    /// Abort the gesture without any further store mutation.
    pub fn cancel(&mut self) {
        self.reset();
    }

    /// Called after an item was removed from the store; cancels the
    /// gesture if it was the one being dragged.
    pub fn note_removed(&mut self, id: ItemId) {
        if self.dragged_id() == Some(id) {
            self.cancel();
        }
    }

    fn reset(&mut self) {
        self.state = DragState::Idle;
        self.slots.clear();
    }
}
