//! The `apply` subcommand

use crate::{
    config::CommonArgs,
    session::{load, validate_path, write},
    utils::display_name,
};
use anyhow::{Context, Result};
use clap::Args;
use mania::order::ColumnOrder;
use std::path::PathBuf;

/// Arguments for the `apply` subcommand
#[derive(Args)]
#[clap(author, version, about = "Rearrange the columns of a single chart", long_about = None)]
pub struct ApplyArgs {
    /// The chart to rearrange
    path: PathBuf,

    /// The new column order, e.g. "2143" to swap hands on 4K
    order: String,

    #[clap(flatten)]
    pub common: CommonArgs,
}

/// Rearrange the columns of a single chart, writing the result next to it
pub fn apply(args: ApplyArgs) -> Result<()> {
    let path = validate_path(&args.path)?;
    let (chart, columns) = load(&path, args.common.range()?)?;

    let order = ColumnOrder::parse(&args.order, columns).with_context(|| {
        format!(
            "Invalid column order for {columns}, try e.g. {}",
            ColumnOrder::example(columns)
        )
    })?;

    let output = write(&path, &chart, &order)?;
    println!("Wrote {}", display_name(&output));

    Ok(())
}
