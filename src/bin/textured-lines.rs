use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use rand::{SeedableRng, rngs::StdRng};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "textured-lines", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the built-in demo scenes as PNGs.
    Demo(DemoArgs),
    /// Render a JSON scene file as a PNG.
    Render(RenderArgs),
}

#[derive(Parser, Debug)]
struct DemoArgs {
    /// Directory the PNGs are written to.
    #[arg(long, default_value = "outputs")]
    out_dir: PathBuf,

    /// Which scene to render.
    #[arg(long, value_enum, default_value_t = SceneChoice::All)]
    scene: SceneChoice,

    /// Seed for the scatter noise. Random when omitted.
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Seed for the scatter noise. Random when omitted.
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SceneChoice {
    All,
    StraightLines,
    CurvedLine,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Demo(args) => cmd_demo(args),
        Command::Render(args) => cmd_render(args),
    }
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

fn cmd_demo(args: DemoArgs) -> anyhow::Result<()> {
    let scenes: &[textured_lines::DemoScene] = match args.scene {
        SceneChoice::All => &textured_lines::DemoScene::ALL,
        SceneChoice::StraightLines => &[textured_lines::DemoScene::StraightLines],
        SceneChoice::CurvedLine => &[textured_lines::DemoScene::CurvedLine],
    };

    let params = textured_lines::PlotParams::default();
    let mut rng = make_rng(args.seed);
    let written = textured_lines::render_demos(&args.out_dir, &params, scenes, &mut rng)
        .with_context(|| format!("render demos into '{}'", args.out_dir.display()))?;

    for path in written {
        eprintln!("wrote {}", path.display());
    }
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let scene = textured_lines::SceneFile::from_path(&args.in_path)?;
    let mut rng = make_rng(args.seed);

    let frame = scene
        .build(&mut rng)
        .with_context(|| format!("build scene '{}'", args.in_path.display()))?
        .render()?;
    textured_lines::save_png(&frame, &args.out)?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}
