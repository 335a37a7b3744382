//! Keeps an external marker-rendering surface consistent with the filtered
//! view and relays marker clicks back into the store as a selection.

pub mod traits;
pub mod types;

pub use traits::{MarkerClickHandler, MarkerSurface};
pub use types::{Marker, MarkerStyle, Viewport};

use crate::models::PlaceId;
use crate::query::{FilteredView, QueryEngine};
use crate::reactive::{Scheduler, Signal, SubscriptionId};
use crate::store::PlaceStore;
use std::sync::Arc;
use tracing::debug;

fn markers_for(view: &FilteredView) -> Vec<Marker> {
    view.places
        .iter()
        .map(|p| Marker {
            id: p.id,
            kind: p.kind,
            coordinates: p.coordinates,
            style: MarkerStyle::for_kind(p.kind),
        })
        .collect()
}

/// Drives a [`MarkerSurface`]: full-replaces its marker set on every change
/// to the filtered view and turns marker clicks into store selections.
///
/// Attaching initializes the surface with the default viewport regardless of
/// whether data has arrived; an empty marker set is a valid state. Dropping
/// the synchronizer unsubscribes it and detaches the surface.
pub struct MapSynchronizer {
    surface: Arc<dyn MarkerSurface>,
    subscription: SubscriptionId,
    scheduler: Scheduler,
}

impl MapSynchronizer {
    pub fn attach(
        scheduler: &Scheduler,
        store: &PlaceStore,
        engine: &QueryEngine,
        surface: Arc<dyn MarkerSurface>,
    ) -> Self {
        surface.set_viewport(Viewport::default());

        let filtered = engine.filtered().clone();

        let refresh = {
            let surface = Arc::clone(&surface);
            let filtered = filtered.clone();
            move || {
                let view = filtered.get();
                surface.set_markers(&markers_for(&view));
            }
        };
        let subscription = scheduler.register(refresh);
        filtered.subscribe(subscription);

        {
            let store = store.clone();
            let filtered = filtered.clone();
            surface.on_marker_click(Box::new(move |id| {
                Self::relay_click(&store, &filtered, id);
            }));
        }

        // Push whatever the view currently holds, markers or none.
        surface.set_markers(&markers_for(&filtered.get()));

        Self {
            surface,
            subscription,
            scheduler: scheduler.clone(),
        }
    }

    fn relay_click(store: &PlaceStore, filtered: &Signal<Arc<FilteredView>>, id: PlaceId) {
        let view = filtered.get();
        match view.places.iter().find(|p| p.id == id) {
            Some(place) => store.select(Some(place.clone())),
            None => {
                // Stale hit: the marker left the view between render and
                // click. Treated as a miss, selection stays as it was.
                debug!(id, "click resolved to a marker outside the current view");
            }
        }
    }
}

impl Drop for MapSynchronizer {
    fn drop(&mut self) {
        self.scheduler.unregister(self.subscription);
        self.surface.detach();
    }
}
