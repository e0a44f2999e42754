// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::PlaybackConfig;

#[derive(Parser, Debug, Clone)]
#[command(name = "scene-catalog")]
#[command(about = "Procedural scene catalog: list, run and inspect scenes", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print every scene with its index and slug
    List {
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Mount a scene and step it through a fixed timeline
    Run(RunArgs),
    /// Mount a scene and print graph statistics without stepping
    Inspect {
        /// Scene name or slug, e.g. "bamboo-forest"
        scene: String,
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// Scene name or slug, e.g. "bamboo-forest"
    pub scene: String,

    /// Number of frames to step
    #[arg(long)]
    pub frames: Option<u64>,

    /// Timeline rate in frames per second
    #[arg(long)]
    pub fps: Option<f32>,

    /// Seed for reproducible layouts and particles
    #[arg(long)]
    pub seed: Option<u64>,

    /// Upload dirty instance batches to a headless GPU device every frame
    #[arg(long)]
    pub gpu: bool,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    /// JSON playback config; flags given here override it
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl RunArgs {
    /// Playback values taken from flags only.
    pub fn playback(&self) -> PlaybackConfig {
        PlaybackConfig {
            fps: self.fps,
            frames: self.frames,
            seed: self.seed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_run_flags() {
        let cli = Cli::parse_from(["scene-catalog", "run", "bamboo-forest", "--frames", "30", "--seed", "9", "--gpu"]);
        let Command::Run(args) = cli.command else {
            panic!("expected run");
        };
        assert_eq!(args.scene, "bamboo-forest");
        assert_eq!(args.playback(), PlaybackConfig { fps: None, frames: Some(30), seed: Some(9) });
        assert!(args.gpu);
        assert!(!args.json);
    }

    #[test]
    fn parses_list_json() {
        let cli = Cli::parse_from(["scene-catalog", "list", "--json"]);
        assert!(matches!(cli.command, Command::List { json: true }));
    }

    #[test]
    fn run_requires_scene() {
        assert!(Cli::try_parse_from(["scene-catalog", "run"]).is_err());
    }
}
