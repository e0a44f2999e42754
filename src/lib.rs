pub mod ambient;
pub mod animate;
pub mod cli;
pub mod config;
pub mod error;
pub mod gpu;
pub mod graph;
pub mod layout;
pub mod math;
pub mod particles;
pub mod report;
pub mod runner;
pub mod scene;
pub mod scenes;
pub mod timeline;
pub mod types;

pub use ambient::{AmbientScope, AmbientState, Stage};
pub use error::{CatalogError, Result};
pub use particles::{Motion, ParticleSpec, ParticleSystem};
pub use scene::{scene_rng, MountedScene, SceneBuilder, SceneRng, SceneStats};
pub use scenes::{catalog, find, validate, SceneEntry};
