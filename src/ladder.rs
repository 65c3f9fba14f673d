//! Promotion direction.
//!
//! The ladder is fixed: `stable`, `candidate`, `beta`, `edge`. A revision is
//! only ever promoted one rung toward `stable`, and nothing is promoted out of
//! `stable`.

use crate::model::{Channel, Risk};

/// Ladder order, most stable first.
pub const RISKS: [Risk; 4] = [Risk::Stable, Risk::Candidate, Risk::Beta, Risk::Edge];

impl Risk {
    /// The next more-stable risk, or `None` for `stable`.
    pub fn promotion_target(self) -> Option<Risk> {
        match self {
            Risk::Stable => None,
            Risk::Candidate => Some(Risk::Stable),
            Risk::Beta => Some(Risk::Candidate),
            Risk::Edge => Some(Risk::Beta),
        }
    }
}

impl Channel {
    /// Same track, one rung toward `stable`.
    pub fn promotion_target(&self) -> Option<Channel> {
        self.risk
            .promotion_target()
            .map(|risk| Channel::new(self.track.clone(), risk))
    }
}

pub fn next(risk: Risk) -> Option<Risk> {
    risk.promotion_target()
}

/// Every channel of `track`, in ladder order.
pub fn track_channels(track: &str) -> Vec<Channel> {
    RISKS.iter().map(|risk| Channel::new(track, *risk)).collect()
}

#[cfg(test)]
#[path = "tests/ladder_tests.rs"]
mod tests;
