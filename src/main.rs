extern crate log;
pub mod editor;
pub mod geofile;
pub mod geometry;
pub mod map;
pub mod shell;
use crate::editor::session::Editor;
use crate::geofile::geojson::read_feature_collection;
use crate::geofile::store::FeatureStore;
use crate::shell::{initial_viewport, ShellCanvas};
use clap::Parser;
use std::path::PathBuf;

/// Interactive editor for GeoJSON feature collections over a slippy map.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the GeoJSON file to edit. Created on save when missing.
    geojson_filepath: PathBuf,

    /// Path to an MBTiles file to use as the basemap.
    #[arg(short, long)]
    mbtiles_filepath: Option<PathBuf>,
}

const VIEWPORT_WIDTH_PX: f64 = 800.0;
const VIEWPORT_HEIGHT_PX: f64 = 600.0;

fn try_main() -> anyhow::Result<()> {
    let args = Args::try_parse()?;
    if let Some(mbtiles_filepath) = &args.mbtiles_filepath {
        log::info!("Using basemap tiles from {:?}", mbtiles_filepath);
    }

    let features = read_feature_collection(&args.geojson_filepath);
    log::info!(
        "Loaded {} features from {:?}",
        features.len(),
        &args.geojson_filepath
    );
    let mut store = FeatureStore::new();
    store.replace_all(features);

    let viewport = initial_viewport(&store, VIEWPORT_WIDTH_PX, VIEWPORT_HEIGHT_PX);
    let editor = Editor::new(store, ShellCanvas);
    shell::run(editor, &viewport, &args.geojson_filepath)
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if let Err(e) = try_main() {
        eprintln!("Error: {:?}", e);
        std::process::exit(1)
    }
}
