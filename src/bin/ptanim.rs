use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Transform PTGui project files into animations.
#[derive(Parser, Debug)]
#[command(name = "ptanim", version)]
struct Cli {
    /// Input PTGui project (`.pts`).
    project: PathBuf,

    /// Transform script JSON.
    #[arg(long)]
    transforms: PathBuf,

    /// Output resolution (width height) re-applied to every generated project.
    #[arg(long, num_args = 2, value_names = ["WIDTH", "HEIGHT"])]
    resolution: Option<Vec<u32>>,

    /// Directory generated projects and batch lists are written to.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Keep seam finding enabled (it is disabled by default to prevent flicker).
    #[arg(long, default_value_t = false)]
    keep_seam_blend: bool,

    /// Log every written snapshot.
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let resolution = match cli.resolution.as_deref() {
        Some(&[w, h]) => Some(ptanim::Resolution::new(w, h)?),
        Some(other) => anyhow::bail!("--resolution takes 2 values, got {}", other.len()),
        None => None,
    };

    let script = ptanim::TransformScript::from_path(&cli.transforms)
        .with_context(|| format!("load transform script '{}'", cli.transforms.display()))?;
    let mut project = ptanim::PtguiProject::from_path(&cli.project)
        .with_context(|| format!("load project '{}'", cli.project.display()))?
        .with_output_dir(&cli.out_dir);

    if !cli.keep_seam_blend {
        project.set_seam_blend(false)?;
    }

    let engine = ptanim::TransformEngine::new(ptanim::RunConfig {
        resolution,
        ..ptanim::RunConfig::default()
    });
    let mut batch = ptanim::PtgBatchWriter::new(&cli.out_dir);

    let manifests = engine
        .run_script(&script, &mut project, &mut batch)
        .with_context(|| format!("run transform script '{}'", script.name))?;

    let written: usize = manifests.iter().map(|m| m.len()).sum();
    eprintln!(
        "wrote {written} projects for '{}' into {}",
        script.name,
        cli.out_dir.display()
    );
    Ok(())
}
