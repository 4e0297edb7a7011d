use anyhow::bail;
use clap::Parser;
use log::info;
use registry::floors::load_registry;
use rfidcore::model::FloorRegistry;
use rfidcore::telemetry::RunRecorder;
use std::path::PathBuf;
use workflow::runner::Runner;

mod registry;
mod render;
mod store;
mod workflow;

#[derive(Parser)]
#[command(author, version, about = "Offline driver for RFID floor-coverage maps")]
struct Args {
    /// Floor key to operate on (see --list)
    #[arg(long)]
    floor: Option<String>,
    /// Render the coverage overlay for the selected floor
    #[arg(long, default_value_t = false)]
    render: bool,
    /// Render the coverage overlay for every floor in the registry
    #[arg(long, default_value_t = false)]
    render_all: bool,
    /// Ingest a drawing-surface dump (JSON) as the working reader list
    #[arg(long)]
    annotations: Option<PathBuf>,
    /// Persist the working reader list to the floor's record
    #[arg(long, default_value_t = false)]
    save: bool,
    /// Emit the downscaled edit-mode background to this path
    #[arg(long)]
    background: Option<PathBuf>,
    /// Load the floor registry from YAML instead of the built-in listing
    #[arg(long)]
    floors: Option<PathBuf>,
    #[arg(long, default_value = "floor_layouts")]
    layout_dir: PathBuf,
    #[arg(long, default_value = "floor_data")]
    data_dir: PathBuf,
    #[arg(long, default_value = "coverage_maps")]
    out_dir: PathBuf,
    /// Print the floor registry and exit
    #[arg(long, default_value_t = false)]
    list: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let registry = match args.floors {
        Some(ref path) => load_registry(path)?,
        None => FloorRegistry::builtin(),
    };
    info!("floor registry with {} floors", registry.len());

    if args.list {
        for floor in registry.iter() {
            println!("{:<12} {}", floor.key, floor.name);
        }
        return Ok(());
    }

    let runner = Runner::new(registry, args.layout_dir, args.data_dir, args.out_dir);

    if args.render_all {
        let recorder = RunRecorder::new();
        runner.render_all(&recorder);
        let (rendered, errors) = recorder.snapshot();
        println!("Rendered {rendered} floors, {errors} errors");
        return Ok(());
    }

    let Some(floor_key) = args.floor else {
        bail!("no floor selected; pass --floor <key> or --render-all (see --list)");
    };

    if args.render {
        let out = runner.render_floor(&floor_key)?;
        println!("Wrote: {}", out.display());
    } else if args.annotations.is_some() || args.background.is_some() {
        let readers = runner.edit_floor(
            &floor_key,
            args.annotations.as_deref(),
            args.save,
            args.background.as_deref(),
        )?;
        println!("{}", serde_json::to_string_pretty(&readers)?);
    } else {
        bail!("nothing to do; pass --render, --annotations <dump.json>, or --background <out.png>");
    }

    Ok(())
}
