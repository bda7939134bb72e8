//! The `edit` subcommand

use crate::{
    config::CommonArgs,
    session::{Message, Session, Step},
    terminal::Console,
};
use anyhow::{Context, Result};
use clap::Args;
use std::{
    io::{stdin, BufRead},
    path::PathBuf,
};

/// Arguments for the `edit` subcommand
#[derive(Args)]
#[clap(author, version, about = "Interactively rearrange the columns of charts", long_about = None)]
pub struct EditArgs {
    /// A chart to open right away
    path: Option<PathBuf>,

    #[clap(flatten)]
    pub common: CommonArgs,
}

/// Interactively rearrange the columns of charts, until the user types `exit`
pub fn edit(args: EditArgs) -> Result<()> {
    let console = Console::new();
    let mut session = Session::new(args.common.range()?);

    console.print_all(&[
        Message::info("=== Column Editor for osu!mania ==="),
        Message::info("Drag and drop .osu file onto this window..."),
        Message::plain(""),
    ])?;

    if let Some(path) = &args.path {
        console.print_all(&session.open(path).messages)?;
    }

    let mut input = stdin().lock();
    let mut line = Vec::new();

    loop {
        console.prompt(&session.prompt())?;

        // Bytes that aren't UTF-8 are replaced, not rejected
        line.clear();
        let read = input
            .read_until(b'\n', &mut line)
            .context("Could not read terminal input")?;

        // End of input
        if read == 0 {
            console.print(&Message::plain(""))?;
            break;
        }

        let reply = session.submit(&String::from_utf8_lossy(&line));
        console.print_all(&reply.messages)?;

        if reply.step == Step::Exit {
            break;
        }
    }

    console.print(&Message::info("Thank you for using Column Editor!"))?;

    Ok(())
}
