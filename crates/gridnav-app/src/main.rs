//! gridnav desktop entry point.
//!
//! Loads a grid layout and replays a sequence of remote-control presses
//! against it, printing where the selection lands after each one.
//! Set `RUST_LOG=debug` to trace accepted moves.

mod replay;

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;

use gridnav_core::{GridFocus, GridLayout};

#[derive(Parser, Debug)]
#[command(author, version, about = "Replay D-pad navigation over a grid layout")]
struct Args {
    /// Layout file (.toml or .json). Falls back to $GRIDNAV_LAYOUT.
    #[arg(value_name = "LAYOUT")]
    layout: Option<PathBuf>,

    /// Directions to replay, comma or space separated (e.g. "down,right,up").
    #[arg(short, long, default_value = "")]
    keys: String,

    /// Start from this cell index instead of the layout's initial cell.
    #[arg(long, value_name = "INDEX")]
    start: Option<usize>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let path = match args
        .layout
        .or_else(|| std::env::var_os("GRIDNAV_LAYOUT").map(PathBuf::from))
    {
        Some(p) => p,
        None => bail!("no layout given (pass LAYOUT or set GRIDNAV_LAYOUT)"),
    };
    let layout = GridLayout::load(&path)
        .with_context(|| format!("failed to load layout {}", path.display()))?;

    let keys = replay::parse_keys(&args.keys)?;

    let mut focus = GridFocus::from_layout(&layout);
    if let Some(start) = args.start {
        if start >= layout.cells.len() {
            bail!(
                "start index {start} out of range for {} cells",
                layout.cells.len()
            );
        }
        focus.select(start);
    }
    log::info!(
        "Replaying {} keys over '{}' from cell {:?}",
        keys.len(),
        layout.name,
        focus.selected()
    );

    let steps = replay::run(&mut focus, &keys)?;
    for line in replay::report(&layout, &steps) {
        println!("{line}");
    }
    Ok(())
}
