use std::path::PathBuf;

use clap::{Args, Subcommand};

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Show one track's release table, after staging any given actions
    Table(TableArgs),

    /// Replay promote/undo/revert actions and show what would be released
    Stage(StageArgs),

    /// List the tracks in the release data
    Tracks(BoardArgs),
}

#[derive(Args)]
pub(crate) struct BoardArgs {
    /// Release data (JSON: tracks, archs, released_channels, options)
    #[arg(long, short = 'i')]
    pub(crate) input: PathBuf,
}

#[derive(Args)]
pub(crate) struct SessionArgs {
    #[command(flatten)]
    pub(crate) board: BoardArgs,
    /// Track to show (defaults to options.default_track, then the first track)
    #[arg(long)]
    pub(crate) track: Option<String>,
    /// Turn promote affordances off regardless of the release data options
    #[arg(long)]
    pub(crate) disable_promotion: bool,
    /// Emit JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args)]
pub(crate) struct TableArgs {
    #[command(flatten)]
    pub(crate) session: SessionArgs,
    /// Actions to stage before drawing the table (same forms as `stage`)
    #[arg(value_name = "ACTION")]
    pub(crate) actions: Vec<String>,
}

#[derive(Args)]
pub(crate) struct StageArgs {
    #[command(flatten)]
    pub(crate) session: SessionArgs,
    /// Print the commit request instead of the pending summary
    #[arg(long)]
    pub(crate) commit: bool,
    /// Actions, applied in order: promote:TRACK/RISK:ARCH, undo:TRACK/RISK:ARCH, revert
    #[arg(value_name = "ACTION")]
    pub(crate) actions: Vec<String>,
}
