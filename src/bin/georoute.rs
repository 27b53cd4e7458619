use std::{
    fs::File,
    io::{BufReader, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use rand::{SeedableRng, rngs::StdRng};

#[derive(Parser, Debug)]
#[command(name = "georoute", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a seeded scene snapshot as standalone SVG.
    Scene(SceneArgs),
    /// Simulate frames and dump marker updates as JSON lines.
    Run(RunArgs),
}

#[derive(Parser, Debug)]
struct SceneArgs {
    /// Engine configuration JSON; defaults apply when omitted.
    #[arg(long = "config")]
    config_path: Option<PathBuf>,

    /// Sampling seed; random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Frames to advance before taking the snapshot.
    #[arg(long, default_value_t = 0)]
    frames: u64,

    /// Output SVG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct RunArgs {
    /// Engine configuration JSON; defaults apply when omitted.
    #[arg(long = "config")]
    config_path: Option<PathBuf>,

    /// Sampling seed; random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Frames to simulate.
    #[arg(long, default_value_t = 300)]
    frames: u64,

    /// Output path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Scene(args) => cmd_scene(args),
        Command::Run(args) => cmd_run(args),
    }
}

fn read_config(path: Option<&Path>) -> anyhow::Result<georoute::EngineConfig> {
    let Some(path) = path else {
        return Ok(georoute::EngineConfig::default());
    };
    let f = File::open(path).with_context(|| format!("open config '{}'", path.display()))?;
    let r = BufReader::new(f);
    let config: georoute::EngineConfig =
        serde_json::from_reader(r).with_context(|| "parse config JSON")?;
    Ok(config)
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

fn cmd_scene(args: SceneArgs) -> anyhow::Result<()> {
    let config = read_config(args.config_path.as_deref())?;
    let mut rng = make_rng(args.seed);

    let mut engine = georoute::Engine::start(config, &mut rng)?;
    let mut markers = Vec::new();
    for _ in 0..args.frames {
        markers = engine.tick();
    }

    let svg = georoute::svg::write_scene_svg(engine.scene(), engine.config(), &markers);

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(&args.out, svg)
        .with_context(|| format!("write svg '{}'", args.out.display()))?;

    engine.dispose();
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

#[derive(serde::Serialize)]
struct FrameRecord<'a> {
    frame: u64,
    updates: &'a [georoute::MarkerUpdate],
}

fn cmd_run(args: RunArgs) -> anyhow::Result<()> {
    let config = read_config(args.config_path.as_deref())?;
    let mut rng = make_rng(args.seed);

    let mut engine = georoute::Engine::start(config, &mut rng)?;

    let stdout = std::io::stdout();
    let mut sink: Box<dyn std::io::Write> = match &args.out {
        Some(path) => {
            let f = File::create(path)
                .with_context(|| format!("create output '{}'", path.display()))?;
            Box::new(std::io::BufWriter::new(f))
        }
        None => Box::new(stdout.lock()),
    };

    for frame in 0..args.frames {
        let updates = engine.tick();
        let record = FrameRecord {
            frame,
            updates: &updates,
        };
        let line = serde_json::to_string(&record).with_context(|| "serialize frame record")?;
        writeln!(sink, "{line}")?;
    }
    sink.flush()?;

    engine.dispose();
    if let Some(path) = &args.out {
        eprintln!("wrote {}", path.display());
    }
    Ok(())
}
