use anyhow::{Context, Result};

use relstage::board::ReleaseBoard;
use relstage::eligibility::{CellState, ChannelRow};
use relstage::session::{Action, ActionOutcome, Session};

use crate::cli_commands::{BoardArgs, Commands, SessionArgs, StageArgs, TableArgs};

pub(crate) fn handle_command(command: Commands) -> Result<()> {
    match command {
        Commands::Table(args) => handle_table_command(args),
        Commands::Stage(args) => handle_stage_command(args),
        Commands::Tracks(args) => handle_tracks_command(args),
    }
}

fn open_session(args: &SessionArgs) -> Result<(ReleaseBoard, Session)> {
    let board = ReleaseBoard::load(&args.board.input)?;
    let mut session = board.session()?;
    if let Some(track) = &args.track {
        session.select_track(track)?;
    }
    if args.disable_promotion {
        session.set_promotion_enabled(false);
    }
    Ok((board, session))
}

// Applies actions in order, echoing each outcome to stderr.
fn replay(
    board: &ReleaseBoard,
    session: &mut Session,
    actions: &[String],
) -> Result<Vec<ActionOutcome>> {
    let actions = actions
        .iter()
        .map(|a| a.parse::<Action>().with_context(|| format!("parse action `{}`", a)))
        .collect::<Result<Vec<_>>>()?;

    let mut outcomes: Vec<ActionOutcome> = Vec::with_capacity(actions.len());
    for action in &actions {
        let outcome = session.apply(&board.released_channels, action);
        eprintln!("{}", outcome);
        outcomes.push(outcome);
    }
    Ok(outcomes)
}

fn handle_table_command(args: TableArgs) -> Result<()> {
    let (board, mut session) = open_session(&args.session)?;
    replay(&board, &mut session, &args.actions)?;
    let rows = session.rows(&board.released_channels);

    if args.session.json {
        let out = serde_json::json!({
            "track": session.current_track(),
            "archs": session.archs(),
            "rows": rows,
            "summary": session.pending_summary(),
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&out).context("serialize table json")?
        );
        return Ok(());
    }

    print!("{}", format_table(session.current_track(), session.archs(), &rows));
    let summary = session.pending_summary();
    if summary.count > 0 {
        println!("{}", summary);
    }
    Ok(())
}

fn handle_stage_command(args: StageArgs) -> Result<()> {
    let (board, mut session) = open_session(&args.session)?;
    let outcomes = replay(&board, &mut session, &args.actions)?;

    if args.commit {
        let request = session.commit_request()?;
        println!(
            "{}",
            serde_json::to_string_pretty(&request).context("serialize commit request")?
        );
        return Ok(());
    }

    let summary = session.pending_summary();
    if args.session.json {
        let out = serde_json::json!({
            "outcomes": outcomes,
            "summary": summary,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&out).context("serialize stage json")?
        );
    } else {
        println!("{}", summary);
    }
    Ok(())
}

fn handle_tracks_command(args: BoardArgs) -> Result<()> {
    let session = ReleaseBoard::load(&args.input)?.session()?;
    for track in session.tracks() {
        println!("{}", track);
    }
    Ok(())
}

fn format_cell(state: &CellState) -> String {
    let mut out = state
        .previous
        .as_ref()
        .map(|r| r.version.clone())
        .unwrap_or_else(|| "-".to_string());
    if state.has_pending_release
        && let Some(next) = &state.displayed
    {
        out.push_str(" -> ");
        out.push_str(&next.version);
    }
    if state.can_be_promoted {
        out.push_str(" ^");
    }
    if state.has_pending_release {
        out.push_str(" *");
    }
    out
}

fn format_table(track: &str, archs: &[String], rows: &[ChannelRow]) -> String {
    let mut grid: Vec<Vec<String>> = Vec::with_capacity(rows.len() + 1);
    let mut header = vec![track.to_string()];
    header.extend(archs.iter().cloned());
    grid.push(header);
    for row in rows {
        let mut line = vec![row.channel.to_string()];
        line.extend(row.cells.iter().map(|c| format_cell(&c.state)));
        grid.push(line);
    }

    let columns = grid.iter().map(Vec::len).max().unwrap_or(0);
    let widths: Vec<usize> = (0..columns)
        .map(|i| grid.iter().filter_map(|l| l.get(i)).map(|s| s.len()).max().unwrap_or(0))
        .collect();

    let mut out = String::new();
    for line in grid {
        let padded: Vec<String> = line
            .iter()
            .zip(&widths)
            .map(|(s, w)| format!("{:<width$}", s, width = w))
            .collect();
        out.push_str(padded.join("  ").trim_end());
        out.push('\n');
    }
    out
}
