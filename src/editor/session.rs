use crate::editor::markers::MarkerSet;
use crate::geofile::feature::Feature;
use crate::geofile::store::FeatureStore;
use crate::geometry::builder::DrawMode;
use crate::map::{MapCanvas, MapViewport, PointerEvent, Redraw};

/// What the editing session is currently doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditState {
    /// No active geometry. Taps inspect, double taps select or start drawing.
    Browsing,
    /// Placing the vertices of a new feature.
    Drawing,
    /// Re-editing a feature lifted out of the store.
    EditingExisting,
}

/// Whether the host should keep routing an event to the map beneath the
/// editing overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventFlow {
    Consumed,
    Propagate,
}

/// The editing session: a state machine over classified pointer events.
///
/// All geometry mutation funnels through `handle_pointer` and the explicit
/// commands (`finalize`, `switch_mode`, `set_title`). Each mutation
/// recomputes the preview geometry and requests a redraw before control
/// returns to the host, so the canvas never renders stale state.
pub struct Editor<C: MapCanvas> {
    store: FeatureStore,
    markers: MarkerSet,
    state: EditState,
    mode: DrawMode,
    title: String,
    properties: geojson::JsonObject,
    /// Whether the newest marker follows drag movement.
    tracking: bool,
    preview: Option<geo::Geometry>,
    canvas: C,
}

impl<C: MapCanvas> Editor<C> {
    pub fn new(store: FeatureStore, canvas: C) -> Self {
        Self {
            store,
            markers: MarkerSet::new(),
            state: EditState::Browsing,
            mode: DrawMode::Polygon,
            title: String::new(),
            properties: geojson::JsonObject::new(),
            tracking: false,
            preview: None,
            canvas,
        }
    }

    pub fn store(&self) -> &FeatureStore {
        &self.store
    }

    pub fn markers(&self) -> &MarkerSet {
        &self.markers
    }

    pub fn state(&self) -> EditState {
        self.state
    }

    pub fn mode(&self) -> DrawMode {
        self.mode
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Geometry of the in-progress feature, recomputed after every mutation.
    pub fn preview(&self) -> Option<&geo::Geometry> {
        self.preview.as_ref()
    }

    /// Single entry point for pointer input. Events landing outside the
    /// viewport, and events the session has no use for, propagate to the map
    /// so panning keeps working.
    pub fn handle_pointer(
        &mut self,
        event: PointerEvent,
        viewport: &impl MapViewport,
    ) -> EventFlow {
        if !viewport.contains(event.position()) {
            return EventFlow::Propagate;
        }
        match (self.state, event) {
            (EditState::Browsing, PointerEvent::DoubleTap(pos)) => {
                let coord = viewport.screen_to_coord(pos);
                match self.store.find_containing(coord).cloned() {
                    Some(feature) => self.edit_feature(feature),
                    None => self.begin_drawing(coord),
                }
                EventFlow::Consumed
            }
            (EditState::Browsing, PointerEvent::SingleTap(pos)) => {
                let coord = viewport.screen_to_coord(pos);
                match self.store.find_containing(coord) {
                    Some(feature) => log::info!("Feature under pointer: '{}'", feature.title()),
                    None => log::debug!("No feature under pointer"),
                }
                EventFlow::Propagate
            }
            (EditState::Browsing, _) => EventFlow::Propagate,
            (_, PointerEvent::DoubleTap(pos)) => {
                if self.markers.remove_at(pos, viewport) {
                    self.tracking = false;
                    self.sync_preview(Redraw::Relayout);
                } else {
                    self.add_vertex(viewport.screen_to_coord(pos));
                }
                EventFlow::Consumed
            }
            (_, PointerEvent::SingleTap(pos)) => {
                self.add_vertex(viewport.screen_to_coord(pos));
                EventFlow::Consumed
            }
            (_, PointerEvent::DragMove(pos)) => {
                if !self.tracking {
                    return EventFlow::Propagate;
                }
                self.markers.update_last(viewport.screen_to_coord(pos));
                self.sync_preview(Redraw::Reposition);
                EventFlow::Consumed
            }
            (_, PointerEvent::DragRelease(_)) => {
                if !self.tracking {
                    return EventFlow::Propagate;
                }
                self.tracking = false;
                EventFlow::Consumed
            }
        }
    }

    /// Commit the current geometry to the store and reset to browsing. With
    /// no vertices placed there is nothing to commit, but the session still
    /// resets.
    pub fn finalize(&mut self) {
        if let Some(geometry) = self.markers.to_geometry(self.mode) {
            let mut properties = std::mem::take(&mut self.properties);
            properties.insert(
                "title".to_string(),
                serde_json::Value::String(self.title.clone()),
            );
            log::info!(
                "Committing {:?} feature '{}' with {} vertices",
                self.mode,
                self.title,
                self.markers.len()
            );
            self.store.add(Feature {
                geometry: Some(geometry),
                properties,
            });
        }
        self.markers.clear();
        self.title.clear();
        self.properties.clear();
        self.state = EditState::Browsing;
        self.tracking = false;
        self.sync_preview(Redraw::Relayout);
    }

    /// Toggle between polygon and line drawing. While a geometry is active
    /// the toggle finalizes it instead, leaving the mode alone.
    pub fn switch_mode(&mut self) {
        if self.state != EditState::Browsing {
            self.finalize();
            return;
        }
        self.mode = match self.mode {
            DrawMode::Polygon => DrawMode::Line,
            DrawMode::Line => DrawMode::Polygon,
        };
        log::info!("Draw mode set to {:?}", self.mode);
    }

    /// Name the feature being drawn or edited. Ignored while browsing, where
    /// there is no active feature to name.
    pub fn set_title(&mut self, title: &str) {
        if self.state == EditState::Browsing {
            return;
        }
        self.title = title.to_string();
    }

    fn begin_drawing(&mut self, coord: geo::Coord) {
        self.state = EditState::Drawing;
        log::debug!("Started drawing at {:?}", coord);
        self.add_vertex(coord);
    }

    /// Lift `feature` out of the store and re-enter it for editing. Its
    /// vertices become markers; its title and remaining properties carry
    /// over and are written back on finalize.
    fn edit_feature(&mut self, feature: Feature) {
        self.store.remove(&feature);
        if let Some(geo::Geometry::Polygon(polygon)) = &feature.geometry {
            self.markers.seed_from_ring(polygon.exterior());
        }
        self.title = feature.title().to_string();
        self.properties = feature.properties;
        // Only polygons are selectable, so re-finalizing must produce a
        // polygon no matter which mode was active while browsing.
        self.mode = DrawMode::Polygon;
        self.state = EditState::EditingExisting;
        self.tracking = false;
        log::info!("Editing feature '{}'", self.title);
        self.sync_preview(Redraw::Relayout);
    }

    fn add_vertex(&mut self, coord: geo::Coord) {
        self.markers.add(coord);
        self.tracking = true;
        self.sync_preview(Redraw::Relayout);
    }

    fn sync_preview(&mut self, kind: Redraw) {
        self.preview = self.markers.to_geometry(self.mode);
        self.canvas.request_redraw(kind);
    }
}
