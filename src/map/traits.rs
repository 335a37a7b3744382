use crate::map::types::{Marker, Viewport};
use crate::models::PlaceId;

/// Handler invoked when the surface resolves a click to a marker id.
pub type MarkerClickHandler = Box<dyn Fn(PlaceId) + Send + Sync>;

/// The external point-rendering surface the synchronizer drives.
///
/// Implementations own the basemap and the marker drawing; the synchronizer
/// only tells them which markers exist and learns which one was clicked.
/// When two markers overlap the surface reports a single deterministic hit
/// (the reference toolkit reports the topmost feature).
pub trait MarkerSurface: Send + Sync {
    /// Position the initial camera. Called once at attach time.
    fn set_viewport(&self, viewport: Viewport);

    /// Replace the displayed marker set with exactly this one.
    fn set_markers(&self, markers: &[Marker]);

    /// Register the click relay. Clicks that resolve to no marker must not
    /// invoke the handler.
    fn on_marker_click(&self, handler: MarkerClickHandler);

    /// Release the surface at teardown.
    fn detach(&self);
}
