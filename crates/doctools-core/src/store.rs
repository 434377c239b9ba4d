//! Ordered collection of uniquely-identified items
//!
//! Holds the reorderable upload list backing a tool page. The store owns
//! ordering and identity only; payloads are opaque handles (object URLs,
//! file references) owned by the browser side.
//!
//! All operations are synchronous and leave the sequence and the
//! id-to-index map consistent before returning, so every caller observes
//! a fully-applied state.

use std::collections::HashMap;

use serde::Serialize;

use crate::ident::{IdAllocator, ItemId};

/// A payload handle plus its stable id.
///
/// The id is assigned on append and never changes; the payload is never
/// inspected by the store. Serializes flat (`{id, ...payload fields}`)
/// for snapshot consumers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Item<P> {
    pub id: ItemId,
    #[serde(flatten)]
    pub payload: P,
}

/// Ordered sequence of items with O(1) membership lookup.
#[derive(Debug, Clone)]
pub struct ItemStore<P> {
    allocator: IdAllocator,
    items: Vec<Item<P>>,
    index: HashMap<ItemId, usize>,
}

impl<P> Default for ItemStore<P> {
    fn default() -> Self {
        Self {
            allocator: IdAllocator::new(),
            items: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<P> ItemStore<P> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.index.contains_key(&id)
    }

    /// Current position of `id`, if present.
    pub fn index_of(&self, id: ItemId) -> Option<usize> {
        self.index.get(&id).copied()
    }

    pub fn get(&self, id: ItemId) -> Option<&Item<P>> {
        self.index_of(id).map(|pos| &self.items[pos])
    }

    /// Append a payload at the end of the sequence under a fresh id.
    pub fn append(&mut self, payload: P) -> ItemId {
        let id = self.allocator.allocate();
        self.index.insert(id, self.items.len());
        self.items.push(Item { id, payload });
        id
    }

    /// Remove the item with the given id and hand it back so the caller
    /// can release its payload handle. Returns `None` (and changes
    /// nothing) if the id is stale; relative order of the remainder is
    /// preserved.
    pub fn remove(&mut self, id: ItemId) -> Option<Item<P>> {
        let pos = self.index.remove(&id)?;
        let item = self.items.remove(pos);
        self.reindex_from(pos);
        Some(item)
    }

    /// Relocate `id` to `target`, shifting the items in between by one.
    /// The target is clamped to the valid range; a stale id is a silent
    /// no-op (`false`). No item is ever duplicated or lost.
    pub fn move_to(&mut self, id: ItemId, target: usize) -> bool {
        let pos = match self.index_of(id) {
            Some(pos) => pos,
            None => return false,
        };
        let target = target.min(self.items.len() - 1);
        if pos != target {
            let item = self.items.remove(pos);
            self.items.insert(target, item);
            self.reindex_from(pos.min(target));
        }
        true
    }

    /// The current order, for rendering or export iteration.
    pub fn snapshot(&self) -> &[Item<P>] {
        &self.items
    }

    /// Ids in current order.
    pub fn order(&self) -> Vec<ItemId> {
        self.items.iter().map(|item| item.id).collect()
    }

    /// Tear down the collection, handing back every item so the caller
    /// can release the payload handles. The allocator is kept, so ids
    /// are not reused across a clear.
    pub fn clear(&mut self) -> Vec<Item<P>> {
        self.index.clear();
        std::mem::take(&mut self.items)
    }

    fn reindex_from(&mut self, from: usize) {
        for (pos, item) in self.items.iter().enumerate().skip(from) {
            self.index.insert(item.id, pos);
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn store_with(payloads: &[&'static str]) -> (ItemStore<&'static str>, Vec<ItemId>) {
        let mut store = ItemStore::new();
        let ids = payloads.iter().map(|p| store.append(*p)).collect();
        (store, ids)
    }

    fn payloads(store: &ItemStore<&'static str>) -> Vec<&'static str> {
        store.snapshot().iter().map(|item| item.payload).collect()
    }

    #[test]
    fn test_new_store_is_empty() {
        let store: ItemStore<&str> = ItemStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert!(store.snapshot().is_empty());
    }

    #[test]
    fn test_append_places_item_last() {
        let (mut store, _) = store_with(&["a", "b"]);
        let id = store.append("c");
        assert_eq!(store.index_of(id), Some(2));
        assert_eq!(payloads(&store), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_remove_preserves_relative_order() {
        let (mut store, ids) = store_with(&["a", "b", "c", "d"]);
        let removed = store.remove(ids[1]).unwrap();
        assert_eq!(removed.payload, "b");
        assert_eq!(payloads(&store), vec!["a", "c", "d"]);
        assert_eq!(store.index_of(ids[2]), Some(1));
        assert_eq!(store.index_of(ids[3]), Some(2));
    }

    #[test]
    fn test_remove_is_idempotent() {
        let (mut store, ids) = store_with(&["a", "b"]);
        assert!(store.remove(ids[0]).is_some());
        assert!(store.remove(ids[0]).is_none());
        assert_eq!(payloads(&store), vec!["b"]);
    }

    #[test]
    fn test_append_after_remove_keeps_surviving_ids() {
        let (mut store, ids) = store_with(&["a", "b"]);
        store.remove(ids[0]);
        assert_eq!(payloads(&store), vec!["b"]);

        let x = store.append("x");
        assert_eq!(payloads(&store), vec!["b", "x"]);
        assert_eq!(store.order(), vec![ids[1], x]);
        // The freed id is not reused
        assert_ne!(x, ids[0]);
    }

    #[test]
    fn test_move_to_places_item_at_target() {
        let (mut store, ids) = store_with(&["a", "b", "c", "d"]);
        assert!(store.move_to(ids[0], 2));
        assert_eq!(payloads(&store), vec!["b", "c", "a", "d"]);
        assert_eq!(store.index_of(ids[0]), Some(2));
    }

    #[test]
    fn test_move_to_front() {
        let (mut store, ids) = store_with(&["a", "b", "c"]);
        assert!(store.move_to(ids[2], 0));
        assert_eq!(payloads(&store), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_move_to_clamps_out_of_range_target() {
        let (mut store, ids) = store_with(&["a", "b", "c"]);
        assert!(store.move_to(ids[0], 99));
        assert_eq!(payloads(&store), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_move_to_same_position_is_noop() {
        let (mut store, ids) = store_with(&["a", "b", "c"]);
        assert!(store.move_to(ids[1], 1));
        assert_eq!(payloads(&store), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_move_to_stale_id_is_silent_noop() {
        let (mut store, ids) = store_with(&["a", "b"]);
        store.remove(ids[0]);
        assert!(!store.move_to(ids[0], 1));
        assert_eq!(payloads(&store), vec!["b"]);
    }

    #[test]
    fn test_move_keeps_relative_order_of_others() {
        let (mut store, ids) = store_with(&["a", "b", "c", "d", "e"]);
        store.move_to(ids[3], 1);
        assert_eq!(payloads(&store), vec!["a", "d", "b", "c", "e"]);
        // a, b, c, e keep their relative order
        let others: Vec<_> = store
            .order()
            .into_iter()
            .filter(|id| *id != ids[3])
            .collect();
        assert_eq!(others, vec![ids[0], ids[1], ids[2], ids[4]]);
    }

    #[test]
    fn test_index_map_stays_consistent_after_mutations() {
        let (mut store, ids) = store_with(&["a", "b", "c", "d"]);
        store.move_to(ids[0], 3);
        store.remove(ids[2]);
        store.append("e");
        for (pos, item) in store.snapshot().iter().enumerate() {
            assert_eq!(store.index_of(item.id), Some(pos));
        }
    }

    #[test]
    fn test_clear_returns_all_items_in_order() {
        let (mut store, ids) = store_with(&["a", "b", "c"]);
        let drained = store.clear();
        assert!(store.is_empty());
        assert_eq!(
            drained.iter().map(|item| item.id).collect::<Vec<_>>(),
            ids
        );
        // Ids keep advancing after a clear
        let fresh = store.append("x");
        assert!(!ids.contains(&fresh));
    }

    #[test]
    fn test_get_returns_payload_by_id() {
        let (store, ids) = store_with(&["a", "b"]);
        assert_eq!(store.get(ids[1]).unwrap().payload, "b");
        assert!(store.get(ItemId::from_u64(999)).is_none());
    }
}
