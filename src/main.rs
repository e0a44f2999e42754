use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use serde::Serialize;

use scene_catalog::ambient::Stage;
use scene_catalog::cli::{Cli, Command, RunArgs};
use scene_catalog::config::PlaybackConfig;
use scene_catalog::gpu::GpuContext;
use scene_catalog::scene::{scene_rng, MountedScene, SceneStats};
use scene_catalog::{runner, scenes};

#[derive(Serialize)]
struct ListedScene {
    index: usize,
    name: &'static str,
    slug: String,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    scenes::validate(scenes::catalog()).context("scene registry is inconsistent")?;

    match cli.command {
        Command::List { json } => list(json),
        Command::Run(args) => run(&args),
        Command::Inspect { scene, seed } => inspect(&scene, seed),
    }
}

fn list(json: bool) -> Result<()> {
    let listed: Vec<ListedScene> = scenes::catalog()
        .iter()
        .enumerate()
        .map(|(index, entry)| ListedScene {
            index,
            name: entry.name,
            slug: entry.slug(),
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&listed)?);
    } else {
        for scene in &listed {
            println!("{:>3}  {:<32} {}", scene.index, scene.name, scene.slug);
        }
    }
    Ok(())
}

fn run(args: &RunArgs) -> Result<()> {
    let entry = scenes::find(&args.scene)?;

    let file = match &args.config {
        Some(path) => PlaybackConfig::load(path).with_context(|| format!("failed to load config {}", path.display()))?,
        None => PlaybackConfig::default(),
    };
    let playback = file.merged(args.playback());

    let stage = Stage::new();
    let report = if args.gpu {
        let gpu = GpuContext::headless_blocking().context("failed to create headless GPU context")?;
        runner::play(&stage, entry, playback, Some(&gpu))
    } else {
        runner::play::<GpuContext>(&stage, entry, playback, None)
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{report}");
    }
    Ok(())
}

fn inspect(name: &str, seed: Option<u64>) -> Result<()> {
    let entry = scenes::find(name)?;
    let stage = Stage::new();
    let mut rng = scene_rng(seed);
    let scene = MountedScene::mount(&stage, entry, &mut rng);

    let SceneStats { meshes, groups, lights, batches, instances, animators } = scene.stats();
    let ambient = stage.ambient();
    println!("{} ({})", entry.name, entry.slug());
    println!("  meshes:     {meshes}");
    println!("  groups:     {groups}");
    println!("  lights:     {lights}");
    println!("  batches:    {batches} ({instances} instances)");
    println!("  animators:  {animators}");
    match ambient.background {
        Some(color) => println!("  background: #{:06x}", color.to_hex()),
        None => println!("  background: none"),
    }
    match ambient.fog {
        Some(fog) => println!("  fog:        {fog:?}"),
        None => println!("  fog:        none"),
    }
    for (index, batch) in scene.graph().batches().iter().enumerate() {
        println!("  batch {index:>2}: {:>4} x {:?}", batch.buffer.len(), batch.shape);
    }

    scene.unmount();
    Ok(())
}
