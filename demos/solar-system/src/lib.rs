use wasm_bindgen::prelude::*;

use orrery_engine::*;

mod bodies;
mod constellations;
mod game;
mod meteors;
mod scenery;
mod ufo;

use game::SolarSystem;

orrery_web::export_game!(SolarSystem, "solar-system");

/// Clickable-body catalog (names, kinds, descriptions) as JSON for the
/// DOM info panel.
#[wasm_bindgen]
pub fn get_catalog_json() -> String {
    bodies::catalog_json()
}
