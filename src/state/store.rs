use crate::types::{Archetype, FeatureId};

/// The two pieces of mutable truth behind the map.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionState {
    pub selected_id: Option<FeatureId>, // at most one selected city
    pub active_filter: Option<Archetype>, // None shows every archetype
}

impl SelectionState {
    #[inline]
    pub fn is_selected(&self, id: FeatureId) -> bool { self.selected_id == Some(id) }
}

/// Sole owner of `SelectionState`; every change goes through a named operation.
///
/// Mutators return `true` if the state changed. The store performs no
/// validation: callers pass ids taken from the current collection.
#[derive(Debug, Clone, Default)]
pub struct SelectionStore {
    state: SelectionState,
}

impl SelectionStore {
    pub fn new() -> Self { Self::default() }

    #[inline] pub fn state(&self) -> &SelectionState { &self.state }

    #[inline] pub fn selected_id(&self) -> Option<FeatureId> { self.state.selected_id }

    #[inline] pub fn active_filter(&self) -> Option<Archetype> { self.state.active_filter }

    pub fn select_city(&mut self, id: FeatureId) -> bool {
        replace(&mut self.state.selected_id, Some(id))
    }

    pub fn clear_selection(&mut self) -> bool {
        replace(&mut self.state.selected_id, None)
    }

    /// Restrict visibility to one archetype. Re-applying the active one is a no-op.
    pub fn apply_filter(&mut self, archetype: Archetype) -> bool {
        replace(&mut self.state.active_filter, Some(archetype))
    }

    pub fn clear_filter(&mut self) -> bool {
        replace(&mut self.state.active_filter, None)
    }

    /// Drop all state, e.g. when a new collection invalidates the old ids.
    pub fn reset(&mut self) -> bool {
        let changed = self.state != SelectionState::default();
        self.state = SelectionState::default();
        changed
    }
}

fn replace<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value { return false }
    *slot = value;
    true
}

#[cfg(test)]
mod tests {
    use super::{SelectionState, SelectionStore};
    use crate::types::Archetype;

    #[test]
    fn starts_empty() {
        let store = SelectionStore::new();
        assert_eq!(*store.state(), SelectionState { selected_id: None, active_filter: None });
    }

    #[test]
    fn select_and_clear() {
        let mut store = SelectionStore::new();
        assert!(store.select_city(4));
        assert!(store.state().is_selected(4));
        assert!(!store.select_city(4));
        assert!(store.select_city(7));
        assert_eq!(store.selected_id(), Some(7));

        assert!(store.clear_selection());
        assert!(!store.clear_selection());
        assert_eq!(store.selected_id(), None);
    }

    #[test]
    fn apply_filter_is_idempotent() {
        let mut store = SelectionStore::new();
        assert!(store.apply_filter(Archetype::Risk));
        assert!(!store.apply_filter(Archetype::Risk));
        assert_eq!(store.active_filter(), Some(Archetype::Risk));
        assert!(store.clear_filter());
        assert_eq!(store.active_filter(), None);
    }

    #[test]
    fn filter_and_selection_are_independent() {
        let mut store = SelectionStore::new();
        store.select_city(2);
        store.apply_filter(Archetype::Origin);
        store.clear_filter();
        assert_eq!(store.selected_id(), Some(2));
        store.apply_filter(Archetype::Destination);
        store.clear_selection();
        assert_eq!(store.active_filter(), Some(Archetype::Destination));
    }

    #[test]
    fn reset_clears_both() {
        let mut store = SelectionStore::new();
        assert!(!store.reset());
        store.select_city(1);
        store.apply_filter(Archetype::Risk);
        assert!(store.reset());
        assert_eq!(*store.state(), SelectionState::default());
    }
}
