//! Options shared by every subcommand

use anyhow::{Context, Result};
use clap::Args;
use mania::columns::ColumnRange;

/// Options every subcommand accepts
#[derive(Args, Debug)]
pub struct CommonArgs {
    /// The smallest column count that is supported
    #[clap(long, value_name = "N", default_value_t = ColumnRange::default().min())]
    min_columns: u8,

    /// The largest column count that is supported (at most 9)
    #[clap(long, value_name = "N", default_value_t = ColumnRange::default().max())]
    max_columns: u8,

    /// Which log events to print to stderr, e.g. "debug" or "mania=trace"
    #[clap(long, value_name = "FILTER", default_value = "warn")]
    log: String,
}

impl CommonArgs {
    /// The range of column counts charts are checked against
    pub fn range(&self) -> Result<ColumnRange> {
        ColumnRange::new(self.min_columns, self.max_columns)
            .context("Invalid --min-columns/--max-columns")
    }

    /// The tracing filter directive
    pub fn log_filter(&self) -> &str {
        &self.log
    }
}
