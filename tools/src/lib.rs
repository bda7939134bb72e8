//! # Mania Tools
//!
//! [osu!mania](https://osu.ppy.sh/wiki/en/Game_mode/osu%21mania) is the piano-style game mode of
//! the rhythm game osu!, where notes fall down a number of columns, one per key. Players often want
//! to play an existing chart with its columns rearranged: mirrored, with hands swapped, or with a
//! single awkward column moved. This crate provides a command-line utility that writes such
//! rearranged copies of `.osu` charts, next to the original.
//!
//! Column orders are written as one digit per column, left to right, each being the column that
//! column should move to. `/` and spaces may be used as separators, so `21/43` is the same as
//! `2143`.
//!
//! ## Edit
//!
//! ```console
//! mania-tools-edit 0.1.0
//! Interactively rearrange the columns of charts
//!
//! USAGE:
//!     mania-tools edit [OPTIONS] [PATH]
//!
//! ARGS:
//!     <PATH>    A chart to open right away
//!
//! OPTIONS:
//!     -h, --help                   Print help information
//!         --log <FILTER>           Which log events to print to stderr [default: warn]
//!         --max-columns <N>        The largest column count that is supported (at most 9) [default: 9]
//!         --min-columns <N>        The smallest column count that is supported [default: 3]
//!     -V, --version                Print version information
//! ```
//!
//! ### Example
//!
//! ```console
//! 4ntler@mbp > mania-tools edit
//! === Column Editor for osu!mania ===
//! Drag and drop .osu file onto this window...
//!
//! File path: "/Users/4ntler/osu!/Songs/1234 artist - title/artist - title (mapper) [Hard].osu"
//! File found: artist - title (mapper) [Hard].osu
//! Detected column count: 4K
//! Enter new column order (e.g., for 4K = 2134) or 'new' for different file: 4321
//! Applying column order: 4321
//! Successfully created: artist - title (mapper) [Hard] [4321].osu
//!
//! File path: exit
//! Thank you for using Column Editor!
//! ```
//!
//! ## Apply
//!
//! ```console
//! mania-tools-apply 0.1.0
//! Rearrange the columns of a single chart
//!
//! USAGE:
//!     mania-tools apply [OPTIONS] <PATH> <ORDER>
//!
//! ARGS:
//!     <PATH>     The chart to rearrange
//!     <ORDER>    The new column order, e.g. "2143" to swap hands on 4K
//! ```
//!
//! ### Example
//!
//! ```console
//! 4ntler@mbp > mania-tools apply "title (mapper) [7K Insane].osu" 1237654
//! Wrote title (mapper) [7K Insane] [1237654].osu
//! ```
//!
//! ## Inspect
//!
//! ```console
//! 4ntler@mbp > mania-tools inspect "title (mapper) [7K Insane].osu"
//! title (mapper) [7K Insane].osu
//!   Columns     7K
//!   Difficulty  7K Insane
//!   Notes       2318
//!   Example     2134567
//! ```

pub mod apply;
pub mod config;
pub mod edit;
pub mod inspect;
pub mod session;
pub mod telemetry;
pub mod terminal;
pub(crate) mod utils;
