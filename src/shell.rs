use std::io::{self, BufRead, Write};
use std::path::Path;

use geo::CoordsIter;

use crate::editor::session::{EditState, Editor, EventFlow};
use crate::geofile::feature::Feature;
use crate::geofile::geojson::write_feature_collection;
use crate::geofile::store::FeatureStore;
use crate::map::{FlatViewport, MapCanvas, PointerEvent, Redraw, ScreenPos};

const DEFAULT_DEGREES_PER_PIXEL: f64 = 0.005;

/// Canvas standing in for a windowed map: redraw requests are only logged.
pub struct ShellCanvas;

impl MapCanvas for ShellCanvas {
    fn request_redraw(&mut self, kind: Redraw) {
        log::debug!("Redraw requested: {:?}", kind);
    }
}

/// Viewport centered on the first coordinate of the collection, or on the
/// null island origin when the collection is empty.
pub fn initial_viewport(store: &FeatureStore, width_px: f64, height_px: f64) -> FlatViewport {
    let center = store
        .all()
        .iter()
        .filter_map(|feature| feature.geometry.as_ref())
        .flat_map(|geometry| geometry.coords_iter())
        .next()
        .unwrap_or(geo::Coord { x: 0.0, y: 0.0 });
    FlatViewport::new(width_px, height_px, center, DEFAULT_DEGREES_PER_PIXEL)
}

/// Drive the editor from stdin, one command per line, until `quit` or end of
/// input. `help` lists the commands.
pub fn run(
    mut editor: Editor<ShellCanvas>,
    viewport: &FlatViewport,
    geojson_filepath: &Path,
) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut last_pointer = ScreenPos::new(0.0, 0.0);

    print_help();
    prompt(editor.state())?;
    for line in stdin.lock().lines() {
        let line = line?;
        let trimmed = line.trim();
        let (command, rest) = match trimmed.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (trimmed, ""),
        };
        match command {
            "" => {}
            "tap" | "double" | "drag" => match parse_position(rest) {
                Some(pos) => {
                    last_pointer = pos;
                    let event = match command {
                        "tap" => PointerEvent::SingleTap(pos),
                        "double" => PointerEvent::DoubleTap(pos),
                        _ => PointerEvent::DragMove(pos),
                    };
                    if editor.handle_pointer(event, viewport) == EventFlow::Propagate {
                        log::debug!("Event passed through to the map");
                    }
                }
                None => println!("Expected: {} X Y", command),
            },
            "release" => {
                editor.handle_pointer(PointerEvent::DragRelease(last_pointer), viewport);
            }
            "finish" => editor.finalize(),
            "mode" => editor.switch_mode(),
            "title" => editor.set_title(rest),
            "save" => match write_feature_collection(editor.store().all(), geojson_filepath) {
                Ok(()) => log::info!(
                    "Saved {} features to {:?}",
                    editor.store().len(),
                    geojson_filepath
                ),
                Err(error) => log::error!("Could not save to {:?}: {:?}", geojson_filepath, error),
            },
            "features" => print_features(&editor),
            "help" => print_help(),
            "quit" => break,
            _ => println!("Unknown command '{}', try 'help'", command),
        }
        prompt(editor.state())?;
    }
    Ok(())
}

fn parse_position(rest: &str) -> Option<ScreenPos> {
    let mut parts = rest.split_whitespace();
    let x = parts.next()?.parse().ok()?;
    let y = parts.next()?.parse().ok()?;
    Some(ScreenPos::new(x, y))
}

fn prompt(state: EditState) -> anyhow::Result<()> {
    print!("[{:?}] > ", state);
    io::stdout().flush()?;
    Ok(())
}

fn print_features(editor: &Editor<ShellCanvas>) {
    if editor.store().is_empty() {
        println!("No features");
        return;
    }
    for (index, feature) in editor.store().all().iter().enumerate() {
        println!("{:3}  {:8} '{}'", index, geometry_kind(feature), feature.title());
    }
}

fn geometry_kind(feature: &Feature) -> &'static str {
    match &feature.geometry {
        Some(geo::Geometry::Polygon(_)) => "polygon",
        Some(geo::Geometry::LineString(_)) => "line",
        Some(_) => "other",
        None => "empty",
    }
}

fn print_help() {
    println!("Commands:");
    println!("  tap X Y     single tap at window pixels (X, Y)");
    println!("  double X Y  double tap: select a feature, start drawing, or delete a marker");
    println!("  drag X Y    drag with the pointer held down");
    println!("  release     release the pointer");
    println!("  finish      commit the current geometry");
    println!("  mode        toggle polygon/line drawing (commits first when active)");
    println!("  title TEXT  set the title of the feature being drawn or edited");
    println!("  save        write the collection back to the GeoJSON file");
    println!("  features    list committed features");
    println!("  help        show this help");
    println!("  quit        exit without saving");
}
