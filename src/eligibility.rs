//! Per-cell promotion decisions.
//!
//! A cell is one (track, risk, architecture) slot of the release table. The
//! evaluator reads the real matrix and the projected next state and answers
//! two questions for it: does it differ from what is released, and may the
//! revision it shows be promoted one rung toward `stable`.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::ParseCellError;
use crate::ladder;
use crate::model::{Channel, ReleaseMatrix, Revision, Risk, same_revision};

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub track: String,
    pub risk: Risk,
    pub arch: String,
}

impl Cell {
    pub fn new(track: impl Into<String>, risk: Risk, arch: impl Into<String>) -> Self {
        Self {
            track: track.into(),
            risk,
            arch: arch.into(),
        }
    }

    pub fn channel(&self) -> Channel {
        Channel::new(self.track.clone(), self.risk)
    }

    /// The cell one rung up the ladder, same track and arch.
    pub fn target(&self) -> Option<Cell> {
        self.risk
            .promotion_target()
            .map(|risk| Cell::new(self.track.clone(), risk, self.arch.clone()))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}:{}", self.track, self.risk, self.arch)
    }
}

impl FromStr for Cell {
    type Err = ParseCellError;

    /// `track/risk:arch`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (channel, arch) = s
            .rsplit_once(':')
            .filter(|(_, arch)| !arch.is_empty())
            .ok_or_else(|| ParseCellError::MissingArch(s.to_string()))?;
        let channel: Channel = channel.parse()?;
        Ok(Cell::new(channel.track, channel.risk, arch))
    }
}

/// Everything the presentation layer needs to draw one cell.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CellState {
    /// Pending revision if one is staged here, else the released one.
    pub displayed: Option<Revision>,
    /// What is actually released here.
    pub previous: Option<Revision>,
    pub has_pending_release: bool,
    pub can_be_promoted: bool,

    /// Channel a promotion from this cell would stage into.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<Channel>,
}

/// One ladder row of a track: a channel and its cells in arch order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ChannelRow {
    pub channel: Channel,
    pub cells: Vec<ArchCell>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ArchCell {
    pub arch: String,

    #[serde(flatten)]
    pub state: CellState,
}

pub struct Evaluator<'a> {
    current: &'a ReleaseMatrix,
    next: &'a ReleaseMatrix,
    promotion_enabled: bool,
}

impl<'a> Evaluator<'a> {
    pub fn new(
        current: &'a ReleaseMatrix,
        next: &'a ReleaseMatrix,
        promotion_enabled: bool,
    ) -> Self {
        Self {
            current,
            next,
            promotion_enabled,
        }
    }

    fn displayed(&self, channel: &Channel, arch: &str) -> Option<&'a Revision> {
        self.next
            .get(channel, arch)
            .or_else(|| self.current.get(channel, arch))
    }

    fn has_pending(displayed: Option<&Revision>, previous: Option<&Revision>) -> bool {
        displayed.is_some() && !same_revision(displayed, previous)
    }

    pub fn evaluate(&self, cell: &Cell) -> CellState {
        let channel = cell.channel();
        let displayed = self.displayed(&channel, &cell.arch);
        let previous = self.current.get(&channel, &cell.arch);
        let has_pending_release = Self::has_pending(displayed, previous);

        let target = channel.promotion_target();
        let mut can_be_promoted = match &target {
            // Already stable: nowhere to go.
            None => false,
            Some(target) => {
                let target_displayed = self.displayed(target, &cell.arch);
                let target_previous = self.current.get(target, &cell.arch);
                let target_has_pending_release =
                    Self::has_pending(target_displayed, target_previous);

                // A revision can only be staged into slots it was built for.
                displayed.is_some_and(|r| r.builds_for(&cell.arch))
                    && !target_has_pending_release
                    && !same_revision(target_displayed, displayed)
            }
        };

        if !self.promotion_enabled {
            can_be_promoted = false;
        }

        CellState {
            displayed: displayed.cloned(),
            previous: previous.cloned(),
            has_pending_release,
            can_be_promoted,
            target,
        }
    }

    /// Every ladder channel of `track`, one cell per arch in the given order.
    pub fn track_rows(&self, track: &str, archs: &[String]) -> Vec<ChannelRow> {
        ladder::track_channels(track)
            .into_iter()
            .map(|channel| {
                let cells = archs
                    .iter()
                    .map(|arch| {
                        let cell = Cell::new(channel.track.clone(), channel.risk, arch.clone());
                        ArchCell {
                            arch: arch.clone(),
                            state: self.evaluate(&cell),
                        }
                    })
                    .collect();
                ChannelRow { channel, cells }
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "tests/eligibility_tests.rs"]
mod tests;
