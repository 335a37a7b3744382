//! Reactive derivation of the filtered place subset from the store plus the
//! user-driven query inputs.

use crate::models::{Language, Place, PlaceKind};
use crate::reactive::{Scheduler, Signal, SubscriptionId};
use crate::store::PlaceStore;
use std::sync::Arc;

/// User-selected kind restriction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeFilter {
    All,
    Hotel,
    Restaurant,
}

impl TypeFilter {
    pub fn matches(&self, kind: PlaceKind) -> bool {
        match self {
            Self::All => true,
            Self::Hotel => kind == PlaceKind::Hotel,
            Self::Restaurant => kind == PlaceKind::Restaurant,
        }
    }
}

/// One consistent snapshot of the derived view: the filtered places plus the
/// per-kind counters partitioned from the same pass.
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredView {
    pub places: Vec<Place>,
    pub hotel_count: usize,
    pub restaurant_count: usize,
}

impl FilteredView {
    fn empty() -> Self {
        Self {
            places: Vec::new(),
            hotel_count: 0,
            restaurant_count: 0,
        }
    }
}

/// Pure filter pass. A place is kept when the type filter matches its kind
/// and the search term is a case-insensitive substring of its localized name,
/// municipality, or province. Order follows the input collection.
pub fn filter_places(
    places: &[Place],
    term: &str,
    filter: TypeFilter,
    language: Language,
) -> Vec<Place> {
    let needle = term.to_lowercase();
    places
        .iter()
        .filter(|p| {
            filter.matches(p.kind)
                && (p.name.get(language).to_lowercase().contains(&needle)
                    || p.municipality.to_lowercase().contains(&needle)
                    || p.province.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

fn derive_view(
    places: &[Place],
    term: &str,
    filter: TypeFilter,
    language: Language,
) -> FilteredView {
    let filtered = filter_places(places, term, filter, language);
    let hotel_count = filtered.iter().filter(|p| p.kind == PlaceKind::Hotel).count();
    let restaurant_count = filtered.len() - hotel_count;
    FilteredView {
        places: filtered,
        hotel_count,
        restaurant_count,
    }
}

/// Holds the query inputs and keeps [`QueryEngine::filtered`] consistent with
/// them and with the store collection. Recomputation is scheduled on any
/// input change; batched input changes recompute once.
pub struct QueryEngine {
    search_term: Signal<String>,
    type_filter: Signal<TypeFilter>,
    language: Signal<Language>,
    filtered: Signal<Arc<FilteredView>>,
    subscription: SubscriptionId,
    scheduler: Scheduler,
}

impl QueryEngine {
    pub fn new(scheduler: &Scheduler, store: &PlaceStore) -> Self {
        let search_term = Signal::new(scheduler, String::new());
        let type_filter = Signal::new(scheduler, TypeFilter::All);
        let language = Signal::new(scheduler, Language::Es);
        let filtered = Signal::new(scheduler, Arc::new(FilteredView::empty()));

        let collection = store.collection().clone();
        let recompute = {
            let search_term = search_term.clone();
            let type_filter = type_filter.clone();
            let language = language.clone();
            let filtered = filtered.clone();
            let collection = collection.clone();
            move || {
                let view = derive_view(
                    &collection.get(),
                    &search_term.get(),
                    type_filter.get(),
                    language.get(),
                );
                filtered.set(Arc::new(view));
            }
        };

        let subscription = scheduler.register(recompute);
        collection.subscribe(subscription);
        search_term.subscribe(subscription);
        type_filter.subscribe(subscription);
        language.subscribe(subscription);

        let engine = Self {
            search_term,
            type_filter,
            language,
            filtered,
            subscription,
            scheduler: scheduler.clone(),
        };
        engine.recompute_now(store);
        engine
    }

    fn recompute_now(&self, store: &PlaceStore) {
        let view = derive_view(
            &store.collection().get(),
            &self.search_term.get(),
            self.type_filter.get(),
            self.language.get(),
        );
        self.filtered.set(Arc::new(view));
    }

    /// Observable derived view.
    pub fn filtered(&self) -> &Signal<Arc<FilteredView>> {
        &self.filtered
    }

    pub fn search_term(&self) -> String {
        self.search_term.get()
    }

    pub fn type_filter(&self) -> TypeFilter {
        self.type_filter.get()
    }

    pub fn language(&self) -> Language {
        self.language.get()
    }

    pub fn set_search_term(&self, term: impl Into<String>) {
        self.search_term.set(term.into());
    }

    pub fn set_type_filter(&self, filter: TypeFilter) {
        self.type_filter.set(filter);
    }

    pub fn set_language(&self, language: Language) {
        self.language.set(language);
    }

    /// Apply several input changes as one logical action: the derived view
    /// recomputes once at the end.
    pub fn update(&self, f: impl FnOnce(&Self)) {
        self.scheduler.batch(|| f(self));
    }
}

impl Drop for QueryEngine {
    fn drop(&mut self) {
        self.scheduler.unregister(self.subscription);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LocalizedName;

    fn place(id: u32, kind: PlaceKind, name: &str, municipality: &str, province: &str) -> Place {
        Place {
            id,
            kind,
            name: LocalizedName::uniform(name),
            address: String::new(),
            postal_code: String::new(),
            municipality: municipality.to_string(),
            province: province.to_string(),
            phone: String::new(),
            email: String::new(),
            website: String::new(),
            rating: 0,
            coordinates: (0.0, 0.0),
            image: String::new(),
        }
    }

    fn sample_collection() -> Vec<Place> {
        vec![
            place(1, PlaceKind::Hotel, "Hotel Sol", "Alcalá", "Madrid"),
            place(2, PlaceKind::Restaurant, "Casa Mar", "El Puerto", "Cádiz"),
        ]
    }

    #[test]
    fn search_matches_province_case_insensitively() {
        let filtered = filter_places(&sample_collection(), "mad", TypeFilter::All, Language::Es);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 1);
    }

    #[test]
    fn type_filter_restricts_kind() {
        let filtered = filter_places(&sample_collection(), "", TypeFilter::Restaurant, Language::Es);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 2);
    }

    #[test]
    fn empty_term_matches_everything_in_collection_order() {
        let filtered = filter_places(&sample_collection(), "", TypeFilter::All, Language::Es);
        let ids: Vec<u32> = filtered.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn derivation_is_idempotent() {
        let collection = sample_collection();
        let first = filter_places(&collection, "a", TypeFilter::All, Language::Es);
        let second = filter_places(&collection, "a", TypeFilter::All, Language::Es);
        assert_eq!(first, second);
    }

    #[test]
    fn counters_partition_the_filtered_view() {
        let scheduler = Scheduler::new();
        let store = PlaceStore::new(&scheduler);
        let engine = QueryEngine::new(&scheduler, &store);
        store.complete_load(sample_collection());

        let view = engine.filtered().get();
        assert_eq!(view.places.len(), view.hotel_count + view.restaurant_count);
        assert_eq!(view.hotel_count, 1);
        assert_eq!(view.restaurant_count, 1);

        engine.set_type_filter(TypeFilter::Hotel);
        let view = engine.filtered().get();
        assert_eq!(view.restaurant_count, 0);
        assert_eq!(view.hotel_count, view.places.len());
    }

    #[test]
    fn searching_mad_finds_only_the_madrid_hotel() {
        let scheduler = Scheduler::new();
        let store = PlaceStore::new(&scheduler);
        let engine = QueryEngine::new(&scheduler, &store);
        store.complete_load(sample_collection());

        engine.set_search_term("mad");
        let view = engine.filtered().get();
        assert_eq!(view.places.len(), 1);
        assert_eq!(view.places[0].name.get(Language::Es), "Hotel Sol");
        assert_eq!(view.hotel_count, 1);
        assert_eq!(view.restaurant_count, 0);
    }

    #[test]
    fn view_reacts_to_collection_arrival() {
        let scheduler = Scheduler::new();
        let store = PlaceStore::new(&scheduler);
        let engine = QueryEngine::new(&scheduler, &store);
        assert!(engine.filtered().get().places.is_empty());

        store.complete_load(sample_collection());
        assert_eq!(engine.filtered().get().places.len(), 2);
    }

    #[test]
    fn batched_input_changes_recompute_once() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        let scheduler = Scheduler::new();
        let store = PlaceStore::new(&scheduler);
        let engine = QueryEngine::new(&scheduler, &store);
        store.complete_load(sample_collection());

        let runs = Arc::new(AtomicUsize::new(0));
        let runs2 = Arc::clone(&runs);
        let probe = scheduler.register(move || {
            runs2.fetch_add(1, Ordering::SeqCst);
        });
        engine.filtered().subscribe(probe);

        engine.update(|q| {
            q.set_search_term("casa");
            q.set_type_filter(TypeFilter::Restaurant);
        });
        assert_eq!(runs.load(Ordering::SeqCst), 1);

        let view = engine.filtered().get();
        assert_eq!(view.places.len(), 1);
        assert_eq!(view.places[0].id, 2);
    }
}
