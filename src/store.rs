//! Single authoritative holder of the loaded collection, the current
//! selection, and the loading flag, each independently observable.

use crate::models::Place;
use crate::reactive::{Scheduler, Signal};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::warn;

/// The place store. Clones share state; only the store mutates `selection`
/// and the collection is written once per session.
#[derive(Clone)]
pub struct PlaceStore {
    collection: Signal<Arc<Vec<Place>>>,
    selection: Signal<Option<Place>>,
    loading: Signal<bool>,
    loaded: Arc<AtomicBool>,
    scheduler: Scheduler,
}

impl PlaceStore {
    pub fn new(scheduler: &Scheduler) -> Self {
        Self {
            collection: Signal::new(scheduler, Arc::new(Vec::new())),
            selection: Signal::new(scheduler, None),
            loading: Signal::new(scheduler, true),
            loaded: Arc::new(AtomicBool::new(false)),
            scheduler: scheduler.clone(),
        }
    }

    /// Observable collection of normalized places.
    pub fn collection(&self) -> &Signal<Arc<Vec<Place>>> {
        &self.collection
    }

    /// Observable current selection.
    pub fn selection(&self) -> &Signal<Option<Place>> {
        &self.selection
    }

    /// Observable loading flag. Starts true and ends false whether ingestion
    /// succeeds or fails.
    pub fn loading(&self) -> &Signal<bool> {
        &self.loading
    }

    /// Mark ingestion as started. Idempotent.
    pub fn begin_load(&self) {
        self.loading.set_if_changed(true);
    }

    /// Install the loaded collection and clear the loading flag in one
    /// observable transition. A second call after success is a no-op.
    pub fn complete_load(&self, places: Vec<Place>) {
        if self.loaded.swap(true, Ordering::SeqCst) {
            warn!("complete_load called again after a successful load; ignoring");
            return;
        }
        self.scheduler.batch(|| {
            self.collection.set(Arc::new(places));
            self.loading.set_if_changed(false);
        });
    }

    /// Mark ingestion as failed: loading ends, the collection stays empty.
    /// The error itself stays with the caller.
    pub fn fail_load(&self) {
        self.loading.set_if_changed(false);
    }

    /// Set or clear the selection. Selecting a place that is not part of the
    /// collection is legal but logged as an anomaly.
    pub fn select(&self, place: Option<Place>) {
        if let Some(p) = &place {
            let collection = self.collection.get();
            if !collection.iter().any(|c| c.id == p.id) {
                warn!(id = p.id, "selected place is not in the loaded collection");
            }
        }
        self.selection.set(place);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LocalizedName, Place, PlaceKind};

    fn sample_place(id: u32, kind: PlaceKind, name: &str) -> Place {
        Place {
            id,
            kind,
            name: LocalizedName::uniform(name),
            address: String::new(),
            postal_code: String::new(),
            municipality: String::new(),
            province: String::new(),
            phone: String::new(),
            email: String::new(),
            website: String::new(),
            rating: 0,
            coordinates: (0.0, 0.0),
            image: String::new(),
        }
    }

    #[test]
    fn load_cycle_flips_loading_once() {
        let scheduler = Scheduler::new();
        let store = PlaceStore::new(&scheduler);
        assert!(store.loading().get());

        store.begin_load();
        store.begin_load();
        assert!(store.loading().get());

        store.complete_load(vec![sample_place(1, PlaceKind::Hotel, "A")]);
        assert!(!store.loading().get());
        assert_eq!(store.collection().get().len(), 1);
    }

    #[test]
    fn second_complete_load_is_a_no_op() {
        let scheduler = Scheduler::new();
        let store = PlaceStore::new(&scheduler);
        store.complete_load(vec![sample_place(1, PlaceKind::Hotel, "A")]);
        store.complete_load(vec![
            sample_place(2, PlaceKind::Restaurant, "B"),
            sample_place(3, PlaceKind::Restaurant, "C"),
        ]);

        let collection = store.collection().get();
        assert_eq!(collection.len(), 1);
        assert_eq!(collection[0].id, 1);
    }

    #[test]
    fn fail_load_leaves_collection_empty() {
        let scheduler = Scheduler::new();
        let store = PlaceStore::new(&scheduler);
        store.begin_load();
        store.fail_load();
        assert!(!store.loading().get());
        assert!(store.collection().get().is_empty());
    }

    #[test]
    fn select_and_clear() {
        let scheduler = Scheduler::new();
        let store = PlaceStore::new(&scheduler);
        let place = sample_place(1, PlaceKind::Hotel, "A");
        store.complete_load(vec![place.clone()]);

        store.select(Some(place.clone()));
        assert_eq!(store.selection().get(), Some(place));
        store.select(None);
        assert_eq!(store.selection().get(), None);
    }

    #[test]
    fn selecting_outside_collection_is_legal() {
        let scheduler = Scheduler::new();
        let store = PlaceStore::new(&scheduler);
        store.complete_load(vec![sample_place(1, PlaceKind::Hotel, "A")]);

        let stray = sample_place(99, PlaceKind::Restaurant, "Stray");
        store.select(Some(stray.clone()));
        assert_eq!(store.selection().get(), Some(stray));
    }
}
