use std::{
    io::{Read as _, Write as _},
    path::PathBuf,
};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "galaxy-plot", version)]
struct Cli {
    /// Settings JSON (glyphs, colors, max_extent).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// More log output on stderr (-v info, -vv debug, -vvv trace). RUST_LOG wins when set.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the dump as a glyph grid on stdout.
    Text(TextArgs),
    /// Write the dump as a raster image.
    Image(ImageArgs),
    /// Print bounds, center and point counts of the dump.
    Stats(StatsArgs),
}

#[derive(Args, Debug)]
struct DumpArg {
    /// State dump text. Read from stdin when omitted or `-`.
    #[arg(allow_hyphen_values = true)]
    dump: Option<String>,
}

#[derive(Args, Debug)]
struct TextArgs {
    #[command(flatten)]
    input: DumpArg,

    /// Glyph for occupied cells.
    #[arg(long)]
    filled: Option<char>,

    /// Glyph for empty cells.
    #[arg(long)]
    blank: Option<char>,
}

#[derive(Args, Debug)]
struct ImageArgs {
    #[command(flatten)]
    input: DumpArg,

    /// Output image path; the extension picks the format (png, bmp, ppm, tiff, tga, qoi).
    #[arg(long, short)]
    out: PathBuf,
}

#[derive(Args, Debug)]
struct StatsArgs {
    #[command(flatten)]
    input: DumpArg,

    /// Emit the summary as JSON.
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let settings = match &cli.config {
        Some(path) => galaxy_plot::PlotSettings::from_json_file(path)
            .with_context(|| format!("load settings '{}'", path.display()))?,
        None => galaxy_plot::PlotSettings::default(),
    };

    match cli.cmd {
        Command::Text(args) => cmd_text(args, settings),
        Command::Image(args) => cmd_image(args, &settings),
        Command::Stats(args) => cmd_stats(args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_dump(arg: DumpArg) -> anyhow::Result<String> {
    match arg.dump {
        Some(s) if s != "-" => Ok(s),
        _ => {
            let mut s = String::new();
            std::io::stdin()
                .read_to_string(&mut s)
                .context("read dump from stdin")?;
            Ok(s)
        }
    }
}

fn cmd_text(args: TextArgs, mut settings: galaxy_plot::PlotSettings) -> anyhow::Result<()> {
    if let Some(c) = args.filled {
        settings.filled_glyph = c;
    }
    if let Some(c) = args.blank {
        settings.blank_glyph = c;
    }
    settings.validate()?;

    let raw = read_dump(args.input)?;
    let rows = galaxy_plot::plot_text(&raw, &settings).context("plot dump as text")?;

    let mut out = std::io::stdout().lock();
    for row in rows {
        writeln!(out, "{row}").context("write grid to stdout")?;
    }
    out.flush().context("flush stdout")?;
    Ok(())
}

fn cmd_image(args: ImageArgs, settings: &galaxy_plot::PlotSettings) -> anyhow::Result<()> {
    let raw = read_dump(args.input)?;
    let summary = galaxy_plot::plot_to_file(&raw, &args.out, settings)
        .with_context(|| format!("write image '{}'", args.out.display()))?;

    eprintln!(
        "wrote {} ({}x{})",
        args.out.display(),
        summary.width,
        summary.height
    );
    Ok(())
}

fn cmd_stats(args: StatsArgs) -> anyhow::Result<()> {
    let raw = read_dump(args.input)?;
    let s = galaxy_plot::summarize(&raw).context("summarize dump")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&s)?);
        return Ok(());
    }

    println!("min: {}, {}", s.bounds.min_x, s.bounds.min_y);
    println!("max: {}, {}", s.bounds.max_x, s.bounds.max_y);
    println!("center: {}, {}", s.center.0, s.center.1);
    println!("extent: {}x{}", s.width, s.height);
    println!("points: {} (distinct {})", s.points, s.distinct_points);
    Ok(())
}
