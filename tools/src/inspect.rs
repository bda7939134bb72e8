use crate::{
    config::CommonArgs,
    session::{load, validate_path},
    utils::display_name,
};
use anyhow::Result;
use clap::Args;
use mania::order::ColumnOrder;
use std::path::PathBuf;

#[derive(Args)]
#[clap(author, version, about = "Show the column count and notes of a chart", long_about = None)]
pub struct InspectArgs {
    /// The path to the chart to inspect
    path: PathBuf,

    #[clap(flatten)]
    pub common: CommonArgs,
}

pub fn inspect(args: &InspectArgs) -> Result<()> {
    let path = validate_path(&args.path)?;
    let (chart, columns) = load(&path, args.common.range()?)?;

    println!("{}", display_name(&path));
    println!("  {:<12}{}", "Columns", columns);
    println!("  {:<12}{}", "Difficulty", chart.version().unwrap_or("-"));
    println!("  {:<12}{}", "Notes", chart.hit_object_count());
    println!("  {:<12}{}", "Example", ColumnOrder::example(columns));

    Ok(())
}
