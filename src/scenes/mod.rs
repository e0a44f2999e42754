//! The scene catalog.
//!
//! Each scene is a plain builder function; [`SCENES`] is the ordered list a
//! viewer walks through.

mod common;
mod fantasy;
mod geometric;
mod industrial;
mod interior;
mod nature;
mod space;
mod urban;

use std::collections::HashSet;

use crate::error::{CatalogError, Result};
use crate::scene::SceneBuilder;

/// Builds one scene into the given builder
pub type SceneFn = fn(&mut SceneBuilder);

#[derive(Clone, Copy)]
pub struct SceneEntry {
    pub name: &'static str,
    pub build: SceneFn,
}

impl SceneEntry {
    pub const fn new(name: &'static str, build: SceneFn) -> Self {
        Self { name, build }
    }

    /// Lowercase, dash-separated form of the name, e.g. `bamboo-forest`.
    pub fn slug(&self) -> String {
        slugify(self.name)
    }
}

impl std::fmt::Debug for SceneEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SceneEntry").field("name", &self.name).finish()
    }
}

fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

pub const SCENE_COUNT: usize = 100;

pub static SCENES: [SceneEntry; SCENE_COUNT] = [
    // Nature
    SceneEntry::new("Bamboo Forest", nature::bamboo_forest),
    SceneEntry::new("Sunflower Maze", nature::sunflower_maze),
    SceneEntry::new("Cherry Blossom Grove", nature::cherry_blossom_grove),
    SceneEntry::new("Mushroom Glade", nature::mushroom_glade),
    SceneEntry::new("Autumn Lake", nature::autumn_lake),
    SceneEntry::new("Desert Oasis", nature::desert_oasis),
    SceneEntry::new("Coral Reef", nature::coral_reef),
    SceneEntry::new("Kelp Forest", nature::kelp_forest),
    SceneEntry::new("Alpine Meadow", nature::alpine_meadow),
    SceneEntry::new("Rainforest Canopy", nature::rainforest_canopy),
    SceneEntry::new("Firefly Marsh", nature::firefly_marsh),
    SceneEntry::new("Tundra Aurora", nature::tundra_aurora),
    SceneEntry::new("Volcanic Caldera", nature::volcanic_caldera),
    SceneEntry::new("Tidal Pools", nature::tidal_pools),
    SceneEntry::new("Savanna Dusk", nature::savanna_dusk),
    // Urban
    SceneEntry::new("Cyberpunk Alley", urban::cyberpunk_alley),
    SceneEntry::new("Neon Rooftops", urban::neon_rooftops),
    SceneEntry::new("Rainy Bus Stop", urban::rainy_bus_stop),
    SceneEntry::new("Night Market", urban::night_market),
    SceneEntry::new("Subway Platform", urban::subway_platform),
    SceneEntry::new("Harbor Cranes", urban::harbor_cranes),
    SceneEntry::new("Suburban Cul-de-sac", urban::suburban_cul_de_sac),
    SceneEntry::new("Parking Garage", urban::parking_garage),
    SceneEntry::new("Skyscraper Canyon", urban::skyscraper_canyon),
    SceneEntry::new("Lantern Festival", urban::lantern_festival),
    SceneEntry::new("Ramen Stall", urban::ramen_stall),
    SceneEntry::new("Abandoned Mall", urban::abandoned_mall),
    SceneEntry::new("Elevated Highway", urban::elevated_highway),
    SceneEntry::new("Laundromat at Midnight", urban::laundromat_at_midnight),
    SceneEntry::new("Water Tower District", urban::water_tower_district),
    // Space
    SceneEntry::new("Dyson Sphere Fragment", space::dyson_sphere_fragment),
    SceneEntry::new("Asteroid Mining Rig", space::asteroid_mining_rig),
    SceneEntry::new("Orbital Ring Station", space::orbital_ring_station),
    SceneEntry::new("Binary Star System", space::binary_star_system),
    SceneEntry::new("Nebula Nursery", space::nebula_nursery),
    SceneEntry::new("Lunar Base", space::lunar_base),
    SceneEntry::new("Martian Dunes", space::martian_dunes),
    SceneEntry::new("Ringed Gas Giant", space::ringed_gas_giant),
    SceneEntry::new("Comet Tail", space::comet_tail),
    SceneEntry::new("Space Elevator", space::space_elevator),
    SceneEntry::new("Derelict Freighter", space::derelict_freighter),
    SceneEntry::new("Pulsar Beacon", space::pulsar_beacon),
    SceneEntry::new("Black Hole Accretion", space::black_hole_accretion),
    SceneEntry::new("Satellite Swarm", space::satellite_swarm),
    SceneEntry::new("Starship Hangar", space::starship_hangar),
    // Fantasy
    SceneEntry::new("Floating Islands", fantasy::floating_islands),
    SceneEntry::new("Wizard Tower", fantasy::wizard_tower),
    SceneEntry::new("Crystal Cavern", fantasy::crystal_cavern),
    SceneEntry::new("Dragon Hoard", fantasy::dragon_hoard),
    SceneEntry::new("Enchanted Library", fantasy::enchanted_library),
    SceneEntry::new("Fairy Ring", fantasy::fairy_ring),
    SceneEntry::new("Elven Bridge", fantasy::elven_bridge),
    SceneEntry::new("Sky Whale Migration", fantasy::sky_whale_migration),
    SceneEntry::new("Runestone Circle", fantasy::runestone_circle),
    SceneEntry::new("Cursed Graveyard", fantasy::cursed_graveyard),
    SceneEntry::new("Alchemist Workshop", fantasy::alchemist_workshop),
    SceneEntry::new("Gnome Village", fantasy::gnome_village),
    SceneEntry::new("Portal Nexus", fantasy::portal_nexus),
    SceneEntry::new("Mage Duel Arena", fantasy::mage_duel_arena),
    SceneEntry::new("Sunken Temple", fantasy::sunken_temple),
    // Geometric
    SceneEntry::new("Escher Staircase", geometric::escher_staircase),
    SceneEntry::new("Infinite Cubes", geometric::infinite_cubes),
    SceneEntry::new("Fractal Tree", geometric::fractal_tree),
    SceneEntry::new("Mobius Ribbon", geometric::mobius_ribbon),
    SceneEntry::new("Voronoi Pillars", geometric::voronoi_pillars),
    SceneEntry::new("Sine Wave Field", geometric::sine_wave_field),
    SceneEntry::new("Tesseract Shadow", geometric::tesseract_shadow),
    SceneEntry::new("Cube Galaxy", geometric::cube_galaxy),
    SceneEntry::new("Kaleidoscope Tunnel", geometric::kaleidoscope_tunnel),
    SceneEntry::new("Op Art Checkerboard", geometric::op_art_checkerboard),
    SceneEntry::new("Lissajous Garden", geometric::lissajous_garden),
    SceneEntry::new("Golden Spiral", geometric::golden_spiral),
    SceneEntry::new("Hexagon Hive", geometric::hexagon_hive),
    SceneEntry::new("Pendulum Wave", geometric::pendulum_wave),
    SceneEntry::new("Torus Knot Shrine", geometric::torus_knot_shrine),
    // Interior
    SceneEntry::new("Cozy Cabin", interior::cozy_cabin),
    SceneEntry::new("Grand Ballroom", interior::grand_ballroom),
    SceneEntry::new("Server Room", interior::server_room),
    SceneEntry::new("Greenhouse", interior::greenhouse),
    SceneEntry::new("Aquarium Tunnel", interior::aquarium_tunnel),
    SceneEntry::new("Clockmaker Shop", interior::clockmaker_shop),
    SceneEntry::new("Concert Hall", interior::concert_hall),
    SceneEntry::new("Museum Atrium", interior::museum_atrium),
    SceneEntry::new("Bowling Alley", interior::bowling_alley),
    SceneEntry::new("Arcade Parlor", interior::arcade_parlor),
    SceneEntry::new("Candlelit Chapel", interior::candlelit_chapel),
    SceneEntry::new("Library Stacks", interior::library_stacks),
    SceneEntry::new("Observatory Dome", interior::observatory_dome),
    SceneEntry::new("Submarine Bridge", interior::submarine_bridge),
    SceneEntry::new("Train Carriage", interior::train_carriage),
    // Industrial
    SceneEntry::new("Steampunk Foundry", industrial::steampunk_foundry),
    SceneEntry::new("Wind Farm", industrial::wind_farm),
    SceneEntry::new("Oil Rig Storm", industrial::oil_rig_storm),
    SceneEntry::new("Shipyard Dry Dock", industrial::shipyard_dry_dock),
    SceneEntry::new("Particle Accelerator", industrial::particle_accelerator),
    SceneEntry::new("Solar Array", industrial::solar_array),
    SceneEntry::new("Hydroelectric Dam", industrial::hydroelectric_dam),
    SceneEntry::new("Junkyard Robots", industrial::junkyard_robots),
    SceneEntry::new("Lighthouse Storm", industrial::lighthouse_storm),
    SceneEntry::new("Mining Tunnel", industrial::mining_tunnel),
];

pub fn catalog() -> &'static [SceneEntry] {
    &SCENES
}

/// Looks a scene up by display name or slug, ignoring case.
pub fn find(name: &str) -> Result<&'static SceneEntry> {
    let wanted = slugify(name);
    SCENES
        .iter()
        .find(|entry| entry.name.eq_ignore_ascii_case(name) || entry.slug() == wanted)
        .ok_or_else(|| CatalogError::UnknownScene(name.to_string()))
}

/// Checks that every entry has a non-empty name and that names and slugs
/// are unique.
pub fn validate(entries: &[SceneEntry]) -> Result<()> {
    let mut seen = HashSet::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        if entry.name.trim().is_empty() {
            return Err(CatalogError::EmptyName(index));
        }
        if !seen.insert(entry.slug()) {
            return Err(CatalogError::DuplicateScene(entry.name.to_string()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_collapses_punctuation() {
        assert_eq!(slugify("Suburban Cul-de-sac"), "suburban-cul-de-sac");
        assert_eq!(slugify("  Laundromat at Midnight! "), "laundromat-at-midnight");
    }

    #[test]
    fn find_accepts_slug_and_name() {
        assert_eq!(find("bamboo-forest").map(|e| e.name).ok(), Some("Bamboo Forest"));
        assert_eq!(find("DYSON SPHERE FRAGMENT").map(|e| e.name).ok(), Some("Dyson Sphere Fragment"));
        assert!(matches!(find("Atlantis"), Err(CatalogError::UnknownScene(_))));
    }

    #[test]
    fn validate_rejects_empty_and_duplicates() {
        fn noop(_: &mut SceneBuilder) {}
        let empty = [SceneEntry::new(" ", noop)];
        assert!(matches!(validate(&empty), Err(CatalogError::EmptyName(0))));

        let dup = [SceneEntry::new("Pier", noop), SceneEntry::new("pier", noop)];
        assert!(matches!(validate(&dup), Err(CatalogError::DuplicateScene(_))));
    }
}
