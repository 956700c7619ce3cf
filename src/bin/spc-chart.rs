use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use spc_chart::{ChartType, ControlLimits, RenderOutcome, Surface, render, storage};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "spc-chart",
    version,
    about = "Render SPC control charts (G/I/T) from grouped JSON data"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a chart to a PNG file (and optionally export the series as CSV).
    Render(RenderArgs),
    /// List the group keys available in a dataset.
    Groups(GroupsArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ChartTypeArg {
    G,
    I,
    T,
}

impl From<ChartTypeArg> for ChartType {
    fn from(arg: ChartTypeArg) -> Self {
        match arg {
            ChartTypeArg::G => ChartType::G,
            ChartTypeArg::I => ChartType::I,
            ChartTypeArg::T => ChartType::T,
        }
    }
}

#[derive(Args, Debug)]
struct RenderArgs {
    /// Dataset JSON (groupMapping / dataRowMapping schema).
    #[arg(short, long)]
    input: PathBuf,
    /// Output PNG path.
    #[arg(short, long)]
    out: PathBuf,
    /// Group key to plot.
    #[arg(short, long, default_value = "NO_GROUP")]
    group: String,
    /// Control-chart convention.
    #[arg(short = 't', long, value_enum, default_value = "g")]
    chart_type: ChartTypeArg,
    /// Also export the series and limits as CSV.
    #[arg(long)]
    csv: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct GroupsArgs {
    /// Dataset JSON (groupMapping / dataRowMapping schema).
    #[arg(short, long)]
    input: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Groups(args) => cmd_groups(args),
    }
}

fn cmd_render(args: RenderArgs) -> Result<()> {
    let dataset = storage::load_dataset(&args.input)?;
    let chart_type = ChartType::from(args.chart_type);

    let mut surface = Surface::new();
    match render(&dataset, &args.group, chart_type, &mut surface)? {
        RenderOutcome::Drawn => {}
        RenderOutcome::Skipped => anyhow::bail!(
            "group `{}` not present in {}",
            args.group,
            args.input.display()
        ),
    }
    storage::save_png(&surface, &args.out)?;
    eprintln!("Wrote chart to {}", args.out.display());

    if let Some(csv_path) = args.csv.as_ref() {
        // Extraction cannot fail here: the render above already walked the
        // same categories.
        if let Some(series) = dataset.series_for(&args.group)? {
            let limits = ControlLimits::for_chart(chart_type, &series.values);
            storage::save_series_csv(&series, &limits, csv_path)?;
            eprintln!("Saved {} rows to {}", series.len(), csv_path.display());
        }
    }

    Ok(())
}

fn cmd_groups(args: GroupsArgs) -> Result<()> {
    let dataset = storage::load_dataset(&args.input)?;
    for key in dataset.group_keys() {
        println!("{key}");
    }
    Ok(())
}
