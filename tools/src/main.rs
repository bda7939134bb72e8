use anyhow::Result;
use clap::Parser;

use mania_tools::apply::{apply, ApplyArgs};
use mania_tools::config::CommonArgs;
use mania_tools::edit::{edit, EditArgs};
use mania_tools::inspect::{inspect, InspectArgs};
use mania_tools::telemetry;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
enum Cli {
    Edit(EditArgs),
    Apply(ApplyArgs),
    Inspect(InspectArgs),
}

impl Cli {
    fn common(&self) -> &CommonArgs {
        match self {
            Cli::Edit(args) => &args.common,
            Cli::Apply(args) => &args.common,
            Cli::Inspect(args) => &args.common,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse_from(wild::args());
    telemetry::initialise(cli.common().log_filter())?;

    match cli {
        Cli::Edit(args) => edit(args),
        Cli::Apply(args) => apply(args),
        Cli::Inspect(args) => inspect(&args),
    }
}
