/// Kind of geometry being drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawMode {
    Polygon,
    Line,
}

/// Ordered vertex sequence of the feature being drawn or edited.
///
/// The builder holds vertices exactly as placed. Conversion to a polygon
/// closes the outer ring (a geo::Polygon ring always ends on its first
/// vertex); conversion to a line keeps the sequence as is. Degenerate one or
/// two vertex polygons are allowed, they simply render degenerately.
#[derive(Debug)]
pub struct GeometryBuilder {
    vertices: Vec<geo::Coord>,
}

impl GeometryBuilder {
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
        }
    }

    pub fn vertices(&self) -> &[geo::Coord] {
        &self.vertices
    }

    pub fn append(&mut self, coord: geo::Coord) {
        self.vertices.push(coord);
    }

    /// Move the vertex at `index` to `coord`. Out of range indices are
    /// ignored.
    pub fn update(&mut self, index: usize, coord: geo::Coord) {
        if let Some(vertex) = self.vertices.get_mut(index) {
            *vertex = coord;
        }
    }

    /// Remove the vertex at `index`, shifting later vertices down. Out of
    /// range indices are ignored.
    pub fn remove(&mut self, index: usize) {
        if index < self.vertices.len() {
            self.vertices.remove(index);
        }
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    /// Geometry of the current vertex sequence, or `None` when nothing has
    /// been placed yet.
    pub fn to_geometry(&self, mode: DrawMode) -> Option<geo::Geometry> {
        if self.vertices.is_empty() {
            return None;
        }
        let line = geo::LineString::new(self.vertices.clone());
        let geometry = match mode {
            DrawMode::Polygon => geo::Geometry::Polygon(geo::Polygon::new(line, Vec::new())),
            DrawMode::Line => geo::Geometry::LineString(line),
        };
        Some(geometry)
    }
}

#[cfg(test)]
mod tests {
    use super::{DrawMode, GeometryBuilder};

    #[test]
    fn test_polygon_ring_is_closed() {
        let mut builder = GeometryBuilder::new();
        builder.append((0.0, 0.0).into());
        builder.append((4.0, 0.0).into());
        builder.append((4.0, 4.0).into());

        let geometry = builder.to_geometry(DrawMode::Polygon).unwrap();
        let expected_ring: geo::LineString =
            vec![(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 0.0)].into();
        match geometry {
            geo::Geometry::Polygon(polygon) => assert_eq!(&expected_ring, polygon.exterior()),
            other => panic!("Expected a polygon, got {:?}", other),
        }
    }

    #[test]
    fn test_line_keeps_vertices_as_placed() {
        let mut builder = GeometryBuilder::new();
        builder.append((0.0, 0.0).into());
        builder.append((4.0, 0.0).into());
        builder.append((4.0, 4.0).into());

        let geometry = builder.to_geometry(DrawMode::Line).unwrap();
        let expected_line: geo::LineString = vec![(0.0, 0.0), (4.0, 0.0), (4.0, 4.0)].into();
        assert_eq!(geo::Geometry::LineString(expected_line), geometry);
    }

    #[test]
    fn test_empty_builder_has_no_geometry() {
        let builder = GeometryBuilder::new();
        assert_eq!(None, builder.to_geometry(DrawMode::Polygon));
        assert_eq!(None, builder.to_geometry(DrawMode::Line));
    }

    #[test]
    fn test_update_moves_one_vertex() {
        let mut builder = GeometryBuilder::new();
        builder.append((0.0, 0.0).into());
        builder.append((1.0, 1.0).into());

        builder.update(1, (2.0, 2.0).into());
        let expected_vertices: Vec<geo::Coord> = vec![(0.0, 0.0).into(), (2.0, 2.0).into()];
        assert_eq!(expected_vertices.as_slice(), builder.vertices());

        // Out of range updates change nothing.
        builder.update(7, (9.0, 9.0).into());
        assert_eq!(expected_vertices.as_slice(), builder.vertices());
    }

    #[test]
    fn test_remove_shifts_later_vertices() {
        let mut builder = GeometryBuilder::new();
        builder.append((0.0, 0.0).into());
        builder.append((1.0, 1.0).into());
        builder.append((2.0, 2.0).into());

        builder.remove(0);
        let expected_vertices: Vec<geo::Coord> = vec![(1.0, 1.0).into(), (2.0, 2.0).into()];
        assert_eq!(expected_vertices.as_slice(), builder.vertices());

        // Out of range removals change nothing.
        builder.remove(5);
        assert_eq!(expected_vertices.as_slice(), builder.vertices());
    }

    #[test]
    fn test_clear_empties_the_builder() {
        let mut builder = GeometryBuilder::new();
        builder.append((0.0, 0.0).into());
        builder.clear();
        assert!(builder.vertices().is_empty());
        assert_eq!(None, builder.to_geometry(DrawMode::Polygon));
    }
}
