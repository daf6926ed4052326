use crate::geometry::builder::{DrawMode, GeometryBuilder};
use crate::map::{MapViewport, ScreenPos};

/// Identifier of a vertex marker, unique within one `MarkerSet`.
pub type MarkerId = u64;

/// Half the side length of a marker's square screen hit box, in pixels.
const MARKER_HALF_EXTENT_PX: f64 = 12.0;

/// A draggable vertex handle. Plain data: the marker knows its geographic
/// coordinate and nothing about the render layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    pub id: MarkerId,
    pub coord: geo::Coord,
}

/// Vertex markers paired with the in-progress geometry.
///
/// The set owns the `GeometryBuilder`, so markers and vertices can only
/// change together; the two sequences always have the same length and order.
#[derive(Debug)]
pub struct MarkerSet {
    markers: Vec<Marker>,
    builder: GeometryBuilder,
    next_id: MarkerId,
}

impl MarkerSet {
    pub fn new() -> Self {
        Self {
            markers: Vec::new(),
            builder: GeometryBuilder::new(),
            next_id: 0,
        }
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn vertices(&self) -> &[geo::Coord] {
        self.builder.vertices()
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    /// Append a marker for `coord` and return its id.
    pub fn add(&mut self, coord: geo::Coord) -> MarkerId {
        let id = self.next_id;
        self.next_id += 1;
        self.markers.push(Marker { id, coord });
        self.builder.append(coord);
        id
    }

    /// Move the newest marker and its vertex to `coord`. Does nothing when
    /// the set is empty.
    pub fn update_last(&mut self, coord: geo::Coord) {
        let last_index = match self.markers.len() {
            0 => return,
            len => len - 1,
        };
        self.markers[last_index].coord = coord;
        self.builder.update(last_index, coord);
    }

    /// Remove the first marker whose screen hit box contains `pos`. Returns
    /// whether a marker was hit.
    pub fn remove_at(&mut self, pos: ScreenPos, viewport: &impl MapViewport) -> bool {
        let hit = self.markers.iter().position(|marker| {
            let marker_pos = viewport.coord_to_screen(marker.coord);
            (pos.x - marker_pos.x).abs() <= MARKER_HALF_EXTENT_PX
                && (pos.y - marker_pos.y).abs() <= MARKER_HALF_EXTENT_PX
        });
        match hit {
            Some(index) => {
                self.markers.remove(index);
                self.builder.remove(index);
                true
            }
            None => false,
        }
    }

    /// Rebuild the set from a polygon's outer ring. The closing duplicate
    /// vertex is dropped so the markers match the vertices that were drawn.
    pub fn seed_from_ring(&mut self, ring: &geo::LineString) {
        self.clear();
        let mut coords: &[geo::Coord] = &ring.0;
        if coords.len() > 1 && coords.first() == coords.last() {
            coords = &coords[..coords.len() - 1];
        }
        for coord in coords {
            self.add(*coord);
        }
    }

    /// Drop all markers and vertices.
    pub fn clear(&mut self) {
        self.markers.clear();
        self.builder.clear();
    }

    /// Geometry of the current vertex sequence, `None` when empty.
    pub fn to_geometry(&self, mode: DrawMode) -> Option<geo::Geometry> {
        self.builder.to_geometry(mode)
    }
}
