//! One operator's staging session over a track's release ladder.

use std::fmt;
use std::str::FromStr;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::eligibility::{Cell, CellState, ChannelRow, Evaluator};
use crate::error::{ParseActionError, SessionError};
use crate::model::{Channel, ReleaseMatrix, Revision};
use crate::pending::PendingReleases;
use crate::projection::project;
use crate::summary::{CommitRequest, PendingSummary};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionOptions {
    /// Operator-level switch for promote affordances. Undo stays available.
    #[serde(default = "default_true")]
    pub release_ui_enabled: bool,

    #[serde(default = "default_track")]
    pub default_track: String,
}

fn default_true() -> bool {
    true
}

fn default_track() -> String {
    "latest".to_string()
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            release_ui_enabled: true,
            default_track: default_track(),
        }
    }
}

/// An operator action against one cell, or against the whole store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Promote(Cell),
    Undo(Cell),
    RevertAll,
}

impl FromStr for Action {
    type Err = ParseActionError;

    /// `promote:track/risk:arch`, `undo:track/risk:arch` or `revert`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "revert" {
            return Ok(Action::RevertAll);
        }
        let (verb, cell) = s
            .split_once(':')
            .ok_or_else(|| ParseActionError::MissingCell(s.to_string()))?;
        match verb {
            "promote" => Ok(Action::Promote(cell.parse()?)),
            "undo" => Ok(Action::Undo(cell.parse()?)),
            _ => Err(ParseActionError::UnknownVerb(verb.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    NothingDisplayed,
    AlreadyStable,
    TargetHasPendingRelease,
    TargetAlreadyHasRevision,
    PromotionDisabled,
    NoPendingRelease,
    ArchNotBuilt,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RejectReason::NothingDisplayed => "no revision in this cell",
            RejectReason::AlreadyStable => "stable cannot be promoted",
            RejectReason::TargetHasPendingRelease => "target already has a pending release",
            RejectReason::TargetAlreadyHasRevision => "target already has this revision",
            RejectReason::PromotionDisabled => "promotion is disabled",
            RejectReason::NoPendingRelease => "nothing pending in this cell",
            RejectReason::ArchNotBuilt => "revision is not built for this architecture",
        };
        f.write_str(s)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ActionOutcome {
    Staged { revision: Revision, channel: Channel },
    Undone { revision: Revision, channel: Channel },
    Reverted { dropped: usize },
    Rejected { cell: String, reason: RejectReason },
}

impl fmt::Display for ActionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionOutcome::Staged { revision, channel } => {
                write!(f, "staged {} -> {}", revision.label(), channel)
            }
            ActionOutcome::Undone { revision, channel } => {
                write!(f, "undid {} in {}", revision.label(), channel)
            }
            ActionOutcome::Reverted { dropped } => write!(f, "reverted {} pending", dropped),
            ActionOutcome::Rejected { cell, reason } => write!(f, "rejected {}: {}", cell, reason),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Session {
    tracks: Vec<String>,
    archs: Vec<String>,
    current_track: String,
    options: SessionOptions,
    pending: PendingReleases,
}

impl Session {
    /// Starts on `options.default_track` when listed, else the first track.
    pub fn new(
        tracks: Vec<String>,
        archs: Vec<String>,
        options: SessionOptions,
    ) -> Result<Self, SessionError> {
        let current_track = if tracks.contains(&options.default_track) {
            options.default_track.clone()
        } else {
            tracks.first().cloned().ok_or(SessionError::NoTracks)?
        };
        Ok(Self {
            tracks,
            archs,
            current_track,
            options,
            pending: PendingReleases::new(),
        })
    }

    pub fn tracks(&self) -> &[String] {
        &self.tracks
    }

    pub fn archs(&self) -> &[String] {
        &self.archs
    }

    pub fn current_track(&self) -> &str {
        &self.current_track
    }

    pub fn pending(&self) -> &PendingReleases {
        &self.pending
    }

    pub fn set_promotion_enabled(&mut self, enabled: bool) {
        self.options.release_ui_enabled = enabled;
    }

    /// Scopes which track's ladder is shown. Pending releases are untouched.
    pub fn select_track(&mut self, track: &str) -> Result<(), SessionError> {
        if !self.tracks.iter().any(|t| t == track) {
            return Err(SessionError::UnknownTrack {
                track: track.to_string(),
                available: self.tracks.join(", "),
            });
        }
        debug!(track, "selected track");
        self.current_track = track.to_string();
        Ok(())
    }

    pub fn next_state(&self, current: &ReleaseMatrix) -> ReleaseMatrix {
        project(current, &self.pending)
    }

    pub fn evaluate(&self, current: &ReleaseMatrix, cell: &Cell) -> CellState {
        let next = self.next_state(current);
        Evaluator::new(current, &next, self.options.release_ui_enabled).evaluate(cell)
    }

    /// Rows of the selected track over the session's architectures.
    pub fn rows(&self, current: &ReleaseMatrix) -> Vec<ChannelRow> {
        let next = self.next_state(current);
        Evaluator::new(current, &next, self.options.release_ui_enabled)
            .track_rows(&self.current_track, &self.archs)
    }

    pub fn promote(&mut self, current: &ReleaseMatrix, cell: &Cell) -> ActionOutcome {
        let state = self.evaluate(current, cell);
        let (Some(revision), Some(target), true) =
            (state.displayed, state.target, state.can_be_promoted)
        else {
            let reason = self.promote_rejection(current, cell);
            return self.reject(cell, reason);
        };

        self.pending = self.pending.promote(&revision, target.clone());
        info!(revision = %revision.revision, %cell, %target, "promotion staged");
        ActionOutcome::Staged {
            revision,
            channel: target,
        }
    }

    pub fn undo(&mut self, current: &ReleaseMatrix, cell: &Cell) -> ActionOutcome {
        let state = self.evaluate(current, cell);
        let (Some(revision), true) = (state.displayed, state.has_pending_release) else {
            return self.reject(cell, RejectReason::NoPendingRelease);
        };

        // Undo cancels the promotion that put the revision in this cell.
        let channel = cell.channel();
        self.pending = self.pending.undo(revision.revision, &channel);
        info!(revision = %revision.revision, %channel, "promotion undone");
        ActionOutcome::Undone { revision, channel }
    }

    pub fn revert_all(&mut self) -> ActionOutcome {
        let dropped = self.pending.len();
        self.pending = self.pending.clear();
        info!(dropped, "reverted pending releases");
        ActionOutcome::Reverted { dropped }
    }

    pub fn apply(&mut self, current: &ReleaseMatrix, action: &Action) -> ActionOutcome {
        match action {
            Action::Promote(cell) => self.promote(current, cell),
            Action::Undo(cell) => self.undo(current, cell),
            Action::RevertAll => self.revert_all(),
        }
    }

    pub fn pending_summary(&self) -> PendingSummary {
        PendingSummary::from_pending(&self.pending)
    }

    pub fn commit_request(&self) -> Result<Option<CommitRequest>> {
        CommitRequest::build_now(&self.pending)
    }

    fn reject(&self, cell: &Cell, reason: RejectReason) -> ActionOutcome {
        debug!(%cell, %reason, "action rejected");
        ActionOutcome::Rejected {
            cell: cell.to_string(),
            reason,
        }
    }

    // Re-derives why the evaluator said no, for reporting only.
    fn promote_rejection(&self, current: &ReleaseMatrix, cell: &Cell) -> RejectReason {
        let Some(target) = cell.target() else {
            return RejectReason::AlreadyStable;
        };
        let next = self.next_state(current);
        let enabled = Evaluator::new(current, &next, true);
        let here = enabled.evaluate(cell);
        let Some(shown) = &here.displayed else {
            return RejectReason::NothingDisplayed;
        };
        if !shown.builds_for(&cell.arch) {
            return RejectReason::ArchNotBuilt;
        }
        if here.can_be_promoted {
            return RejectReason::PromotionDisabled;
        }
        if enabled.evaluate(&target).has_pending_release {
            RejectReason::TargetHasPendingRelease
        } else {
            RejectReason::TargetAlreadyHasRevision
        }
    }
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
