use std::{
    io::Read as _,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "epicycles", version)]
struct Cli {
    /// Log at debug level.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play one full period and write the final frame.
    Play(PlayArgs),
    /// Print the built epicycle chain as JSON.
    Inspect(InputArgs),
    /// Print the exact traced point at normalized time `t` as JSON.
    Sample(SampleArgs),
}

#[derive(Parser, Debug)]
struct InputArgs {
    /// Coefficient text file (`-` for stdin).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Optional JSON playback configuration.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Map non-numeric tokens to NaN instead of failing.
    #[arg(long)]
    lenient: bool,
}

#[derive(Parser, Debug)]
struct PlayArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Length of one period in milliseconds.
    #[arg(long, default_value_t = epicycles::DEFAULT_DURATION_MS)]
    duration_ms: f64,

    /// Pace frames against the wall clock instead of running headless.
    #[arg(long)]
    realtime: bool,

    /// Write the final frame as SVG.
    #[arg(long)]
    svg: Option<PathBuf>,

    /// Write the final frame as PNG.
    #[arg(long)]
    png: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct SampleArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Normalized time in periods.
    #[arg(long)]
    t: f64,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Play(args) => cmd_play(args),
        Command::Inspect(args) => cmd_inspect(args),
        Command::Sample(args) => cmd_sample(args),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn read_input(path: &Path) -> anyhow::Result<String> {
    if path == Path::new("-") {
        let mut s = String::new();
        std::io::stdin()
            .read_to_string(&mut s)
            .context("read coefficients from stdin")?;
        return Ok(s);
    }
    std::fs::read_to_string(path)
        .with_context(|| format!("read coefficients '{}'", path.display()))
}

fn load_config(args: &InputArgs) -> anyhow::Result<epicycles::PlaybackConfig> {
    let mut cfg = match &args.config {
        Some(path) => epicycles::PlaybackConfig::load(path)?,
        None => epicycles::PlaybackConfig::default(),
    };
    if args.lenient {
        cfg.parse_mode = epicycles::ParseMode::Lenient;
    }
    Ok(cfg)
}

fn load_chain(
    args: &InputArgs,
    cfg: &epicycles::PlaybackConfig,
) -> anyhow::Result<epicycles::EpicycleChain> {
    let text = read_input(&args.in_path)?;
    let parsed = epicycles::parse_coefficients(&text, cfg.parse_mode)
        .with_context(|| format!("parse coefficients '{}'", args.in_path.display()))?;
    let chain = epicycles::EpicycleChain::build(&parsed.coefficients, cfg.max_epicycles)?;
    Ok(chain)
}

fn ensure_parent_dir(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}

fn cmd_play(args: PlayArgs) -> anyhow::Result<()> {
    let cfg = load_config(&args.input)?;
    let chain = load_chain(&args.input, &cfg)?;

    let mut playback =
        epicycles::Playback::start(chain, epicycles::Scene::new(), args.duration_ms, &cfg)?;
    let summary = if args.realtime {
        playback.run(&mut epicycles::SystemClock)?
    } else {
        playback.run(&mut epicycles::ManualClock::new())?
    };
    let (_, scene) = playback.into_parts();
    let style = epicycles::SceneStyle::default();

    if let Some(path) = &args.svg {
        ensure_parent_dir(path)?;
        std::fs::write(path, scene.to_svg(cfg.canvas, &style))
            .with_context(|| format!("write svg '{}'", path.display()))?;
        eprintln!("wrote {}", path.display());
    }

    if let Some(path) = &args.png {
        ensure_parent_dir(path)?;
        let frame = epicycles::rasterize_scene(&scene, cfg.canvas, &style)?;
        image::save_buffer_with_format(
            path,
            &frame.data,
            frame.width,
            frame.height,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )
        .with_context(|| format!("write png '{}'", path.display()))?;
        eprintln!("wrote {}", path.display());
    }

    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

#[derive(serde::Serialize)]
struct EpicycleRow {
    index: usize,
    speed: i64,
    radius: f64,
    re: f64,
    im: f64,
}

#[derive(serde::Serialize)]
struct ChainReport {
    epicycles: Vec<EpicycleRow>,
    truncated: usize,
}

fn cmd_inspect(args: InputArgs) -> anyhow::Result<()> {
    let cfg = load_config(&args)?;
    let chain = load_chain(&args, &cfg)?;
    let report = ChainReport {
        epicycles: chain
            .epicycles()
            .iter()
            .enumerate()
            .map(|(index, e)| EpicycleRow {
                index,
                speed: e.angular_speed(),
                radius: e.radius(),
                re: e.coefficient().0.x,
                im: e.coefficient().0.y,
            })
            .collect(),
        truncated: chain.truncated(),
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn cmd_sample(args: SampleArgs) -> anyhow::Result<()> {
    anyhow::ensure!(args.t.is_finite(), "t must be finite");
    let cfg = load_config(&args.input)?;
    let chain = load_chain(&args.input, &cfg)?;
    let p = chain.sample_at(args.t);
    println!(
        "{}",
        serde_json::json!({ "t": args.t, "x": p.x, "y": p.y })
    );
    Ok(())
}
