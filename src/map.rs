/// Position in window pixels, origin at the top left, y growing downward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPos {
    pub x: f64,
    pub y: f64,
}

impl ScreenPos {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Pointer input after gesture classification by the windowing host.
/// Exactly one variant is delivered per input event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// A tap that is not the second tap of a double tap.
    SingleTap(ScreenPos),
    DoubleTap(ScreenPos),
    /// Pointer moved with the button or finger still down.
    DragMove(ScreenPos),
    DragRelease(ScreenPos),
}

impl PointerEvent {
    pub fn position(&self) -> ScreenPos {
        match self {
            PointerEvent::SingleTap(pos)
            | PointerEvent::DoubleTap(pos)
            | PointerEvent::DragMove(pos)
            | PointerEvent::DragRelease(pos) => *pos,
        }
    }
}

/// The screen region the map occupies, and the projection between window
/// pixels and geographic coordinates.
pub trait MapViewport {
    fn contains(&self, pos: ScreenPos) -> bool;
    fn screen_to_coord(&self, pos: ScreenPos) -> geo::Coord;
    fn coord_to_screen(&self, coord: geo::Coord) -> ScreenPos;
}

/// How much re-rendering a change to the edited geometry needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Redraw {
    /// Vertices were added or removed; the overlay layout must be rebuilt.
    Relayout,
    /// Only positions changed; the existing layout can be moved.
    Reposition,
}

/// Render surface for the editing overlay. Rendering happens elsewhere; the
/// editor only signals that the overlay is stale.
pub trait MapCanvas {
    fn request_redraw(&mut self, kind: Redraw);
}

/// Equirectangular viewport: degrees scale linearly with pixels around a
/// center coordinate. Latitude grows upward while screen y grows downward.
#[derive(Debug, Clone)]
pub struct FlatViewport {
    width_px: f64,
    height_px: f64,
    center: geo::Coord,
    degrees_per_pixel: f64,
}

impl FlatViewport {
    pub fn new(width_px: f64, height_px: f64, center: geo::Coord, degrees_per_pixel: f64) -> Self {
        Self {
            width_px,
            height_px,
            center,
            degrees_per_pixel,
        }
    }
}

impl MapViewport for FlatViewport {
    fn contains(&self, pos: ScreenPos) -> bool {
        pos.x >= 0.0 && pos.x <= self.width_px && pos.y >= 0.0 && pos.y <= self.height_px
    }

    fn screen_to_coord(&self, pos: ScreenPos) -> geo::Coord {
        geo::Coord {
            x: self.center.x + (pos.x - self.width_px / 2.0) * self.degrees_per_pixel,
            y: self.center.y - (pos.y - self.height_px / 2.0) * self.degrees_per_pixel,
        }
    }

    fn coord_to_screen(&self, coord: geo::Coord) -> ScreenPos {
        ScreenPos::new(
            self.width_px / 2.0 + (coord.x - self.center.x) / self.degrees_per_pixel,
            self.height_px / 2.0 - (coord.y - self.center.y) / self.degrees_per_pixel,
        )
    }
}
