use std::{fs::File, io::BufWriter, path::PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "geomotion", version)]
struct Cli {
    /// Log solver and scenario progress at debug level.
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a scenario JSON and write its result as JSON.
    Run(RunArgs),
    /// Evolve a cellular automaton and print its population history.
    Life(LifeArgs),
}

#[derive(Parser, Debug)]
struct RunArgs {
    /// Input scenario JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output JSON path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,

    /// Indent the output JSON.
    #[arg(long)]
    pretty: bool,
}

#[derive(Parser, Debug)]
struct LifeArgs {
    /// Rule in B/S notation (`B3/S23`) or a preset name.
    #[arg(long, default_value = "labyrinth")]
    rule: geomotion::Rule,

    /// Grid side in cells.
    #[arg(long, default_value_t = 48)]
    size: usize,

    /// Number of generations to evolve.
    #[arg(long, default_value_t = 100)]
    generations: u64,

    /// Random seed for the initial grid.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Probability of a cell starting alive.
    #[arg(long, default_value_t = 0.5)]
    density: f64,

    /// Start from the three-cell manual seed instead of a random grid.
    #[arg(long, conflicts_with_all = ["seed", "density"])]
    manual: bool,

    /// Glue opposite edges together.
    #[arg(long)]
    wrap: bool,

    /// Cells that birth counts apply to.
    #[arg(long, value_enum, default_value_t = BirthModeChoice::DeadOnly)]
    birth_mode: BirthModeChoice,

    /// Write the final grid as a PNG.
    #[arg(long)]
    png: Option<PathBuf>,

    /// Pixels per cell in the PNG.
    #[arg(long, default_value_t = 8)]
    cell_px: u32,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum BirthModeChoice {
    /// Births only revive dead cells.
    DeadOnly,
    /// Birth counts also keep live cells alive.
    AnyCell,
}

impl From<BirthModeChoice> for geomotion::BirthMode {
    fn from(value: BirthModeChoice) -> Self {
        match value {
            BirthModeChoice::DeadOnly => geomotion::BirthMode::DeadOnly,
            BirthModeChoice::AnyCell => geomotion::BirthMode::AnyCell,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Run(args) => cmd_run(args),
        Command::Life(args) => cmd_life(args),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_run(args: RunArgs) -> anyhow::Result<()> {
    let scenario = geomotion::Scenario::from_path(&args.in_path)?;
    let output = scenario
        .run()
        .with_context(|| format!("run scenario '{}'", args.in_path.display()))?;

    match &args.out {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            let f = File::create(path)
                .with_context(|| format!("create output '{}'", path.display()))?;
            write_json(BufWriter::new(f), &output, args.pretty)
                .with_context(|| format!("write output '{}'", path.display()))?;
            eprintln!("wrote {}", path.display());
        }
        None => {
            let stdout = std::io::stdout();
            write_json(stdout.lock(), &output, args.pretty).context("write output to stdout")?;
        }
    }
    Ok(())
}

fn cmd_life(args: LifeArgs) -> anyhow::Result<()> {
    let boundary = if args.wrap {
        geomotion::Boundary::Wrap
    } else {
        geomotion::Boundary::Dead
    };
    let birth_mode = geomotion::BirthMode::from(args.birth_mode);
    let mut life = geomotion::GameOfLife::new(args.rule, args.size, args.size)?
        .with_boundary(boundary)
        .with_birth_mode(birth_mode);
    if args.manual {
        life.seed_manual()?;
    } else {
        life.seed_random(args.seed, args.density)?;
    }

    let mut population = vec![life.state().population()];
    population.extend(life.run(args.generations));

    let report = serde_json::json!({
        "rule": args.rule,
        "size": args.size,
        "boundary": boundary,
        "birth_mode": birth_mode,
        "generations": args.generations,
        "population": population,
    });
    let stdout = std::io::stdout();
    write_json(stdout.lock(), &report, false).context("write population to stdout")?;

    if let Some(path) = &args.png {
        geomotion::save_png(life.state(), args.cell_px, path)?;
        eprintln!("wrote {}", path.display());
    }
    Ok(())
}

fn write_json<W: std::io::Write, T: serde::Serialize>(
    mut w: W,
    value: &T,
    pretty: bool,
) -> anyhow::Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut w, value)?;
    } else {
        serde_json::to_writer(&mut w, value)?;
    }
    w.write_all(b"\n")?;
    w.flush()?;
    Ok(())
}
