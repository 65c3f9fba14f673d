use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::model::ReleaseMatrix;
use crate::session::{Session, SessionOptions};

/// Release data handed to a staging session: what is released where, and
/// which tracks and architectures the table covers.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ReleaseBoard {
    /// Display order. Defaults to `["latest"]`.
    #[serde(default)]
    pub tracks: Vec<String>,

    /// Display order. Defaults to every architecture in the matrix, sorted.
    #[serde(default)]
    pub archs: Vec<String>,

    #[serde(default)]
    pub released_channels: ReleaseMatrix,

    #[serde(default)]
    pub options: SessionOptions,
}

impl ReleaseBoard {
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = fs::read(path).with_context(|| format!("read {}", path.display()))?;
        let board = Self::from_slice(&bytes).with_context(|| format!("parse {}", path.display()))?;
        debug!(
            path = %path.display(),
            tracks = board.tracks.len(),
            archs = board.archs.len(),
            "loaded release board"
        );
        Ok(board)
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let mut board: ReleaseBoard =
            serde_json::from_slice(bytes).context("parse release board json")?;
        board.fill_defaults();
        board.check_architectures()?;
        Ok(board)
    }

    fn fill_defaults(&mut self) {
        if self.tracks.is_empty() {
            self.tracks.push("latest".to_string());
        }
        if self.archs.is_empty() {
            self.archs = self.released_channels.architectures();
        }
    }

    // A slot must hold a revision built for that slot's architecture, or a
    // promotion from it would stage an entry the projection never shows.
    fn check_architectures(&self) -> Result<()> {
        for (channel, archs) in self.released_channels.iter() {
            for (arch, revision) in archs {
                if !revision.builds_for(arch) {
                    bail!(
                        "{} released to {}:{} does not list `{}` in its architectures",
                        revision.label(),
                        channel,
                        arch,
                        arch
                    );
                }
            }
        }
        Ok(())
    }

    pub fn session(&self) -> Result<Session> {
        let session = Session::new(self.tracks.clone(), self.archs.clone(), self.options.clone())?;
        Ok(session)
    }
}

#[cfg(test)]
#[path = "tests/board_tests.rs"]
mod tests;
