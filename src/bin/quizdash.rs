use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context as _, bail};
use clap::{Parser, Subcommand};

use quizdash::{
    Animate, Course, DriveStats, Driver, Fps, JsonLinesSink, RaceConfig, RaceSession, SessionOpts,
    SharedRaceConfig,
};

#[derive(Parser, Debug)]
#[command(name = "quizdash", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate a race headlessly and stream frames as JSON lines.
    Race(RaceArgs),
    /// Evaluate the cricket delivery demo and stream frames as JSON lines.
    Cricket(CricketArgs),
}

#[derive(Parser, Debug)]
struct RaceArgs {
    /// Configuration JSON with independently sized per-player sequences.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Configuration JSON using the shared-question-count shape.
    #[arg(long = "shared-config")]
    shared_config: Option<PathBuf>,

    /// Query-string configuration, e.g. "players=2&p1=5&C,C,W,C,C&p2=5&C,W,W,C,W".
    #[arg(long)]
    query: Option<String>,

    /// Frames per second of the emitted timeline.
    #[arg(long, default_value_t = 30)]
    fps: u32,

    /// Seconds between round boundaries.
    #[arg(long, default_value_t = 2.0)]
    round_interval: f64,

    /// Output path for JSON lines ('-' for stdout).
    #[arg(long, default_value = "-")]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct CricketArgs {
    /// Frames per second of the emitted timeline.
    #[arg(long, default_value_t = 30)]
    fps: u32,

    /// Output path for JSON lines ('-' for stdout).
    #[arg(long, default_value = "-")]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Race(args) => cmd_race(args),
        Command::Cricket(args) => cmd_cricket(args),
    }
}

fn cmd_race(args: RaceArgs) -> anyhow::Result<()> {
    let config = load_config(&args)?;
    let opts = SessionOpts {
        round_interval_secs: args.round_interval,
        ..SessionOpts::default()
    };
    let mut session = RaceSession::new(&config, Course::default_maze(), opts)?;

    let stats = drive_to_jsonl(&mut session, args.fps, &args.out)?;

    if let Some(standings) = session.standings() {
        let names: Vec<&str> = standings
            .winners
            .iter()
            .map(|p| config.player_name(p.0))
            .collect();
        if names.len() == 1 {
            eprintln!("winner: {} ({} correct)", names[0], standings.top_correct);
        } else {
            eprintln!(
                "tie: {} ({} correct each)",
                names.join(", "),
                standings.top_correct
            );
        }
        if let Some(loser) = standings.loser {
            eprintln!("caught by the ghosts: {}", config.player_name(loser.0));
        }
    }
    eprintln!("wrote {} frames", stats.frames_emitted);
    Ok(())
}

fn cmd_cricket(args: CricketArgs) -> anyhow::Result<()> {
    let mut timeline = quizdash::CricketTimeline::new();
    let stats = drive_to_jsonl(&mut timeline, args.fps, &args.out)?;
    eprintln!("wrote {} frames", stats.frames_emitted);
    Ok(())
}

fn load_config(args: &RaceArgs) -> anyhow::Result<RaceConfig> {
    match (&args.config, &args.shared_config, &args.query) {
        (Some(path), None, None) => {
            let file = File::open(path)
                .with_context(|| format!("open config '{}'", path.display()))?;
            let config: RaceConfig = serde_json::from_reader(file)
                .with_context(|| format!("parse config '{}'", path.display()))?;
            config.validate()?;
            Ok(config)
        }
        (None, Some(path), None) => {
            let file = File::open(path)
                .with_context(|| format!("open config '{}'", path.display()))?;
            let config: SharedRaceConfig = serde_json::from_reader(file)
                .with_context(|| format!("parse config '{}'", path.display()))?;
            Ok(config.into_race_config()?)
        }
        (None, None, Some(query)) => Ok(quizdash::parse_query(query)?),
        _ => bail!("provide exactly one of --config, --shared-config, --query"),
    }
}

fn drive_to_jsonl<A: Animate>(anim: &mut A, fps: u32, out: &Path) -> anyhow::Result<DriveStats> {
    let driver = Driver::new(Fps::new(fps, 1)?);

    let writer: Box<dyn Write> = if out == Path::new("-") {
        Box::new(io::stdout().lock())
    } else {
        if let Some(parent) = out.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create output dir '{}'", parent.display()))?;
        }
        let file =
            File::create(out).with_context(|| format!("create output '{}'", out.display()))?;
        Box::new(BufWriter::new(file))
    };

    let mut sink = JsonLinesSink::new(writer);
    let stats = driver.run(anim, &mut sink)?;
    Ok(stats)
}
