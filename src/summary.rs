use std::fmt;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::model::{Channel, RevisionId};
use crate::pending::PendingReleases;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingSummaryItem {
    pub revision: RevisionId,
    pub version: String,
    pub architectures: Vec<String>,
    pub channels: Vec<Channel>,
}

/// What a confirmation view shows before anything is applied.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingSummary {
    pub count: usize,
    pub releases: Vec<PendingSummaryItem>,
}

impl PendingSummary {
    pub fn from_pending(pending: &PendingReleases) -> Self {
        let releases: Vec<PendingSummaryItem> = pending
            .iter()
            .map(|entry| PendingSummaryItem {
                revision: entry.revision.revision,
                version: entry.revision.version.clone(),
                architectures: entry.revision.architectures.clone(),
                channels: entry.channels.iter().cloned().collect(),
            })
            .collect();
        Self {
            count: releases.len(),
            releases,
        }
    }
}

impl fmt::Display for PendingSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.count == 0 {
            return write!(f, "No revisions to release");
        }
        write!(
            f,
            "{} revision{} to release",
            self.count,
            if self.count > 1 { "s" } else { "" }
        )?;
        for item in &self.releases {
            let channels: Vec<String> = item.channels.iter().map(|c| c.to_string()).collect();
            write!(
                f,
                "\n  {} ({}) {} to {}",
                item.version,
                item.revision,
                item.architectures.join(", "),
                channels.join(", ")
            )?;
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitRelease {
    pub revision: RevisionId,
    pub version: String,
    pub channels: Vec<Channel>,
}

/// The payload an apply step would send. Built here, executed nowhere.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitRequest {
    pub version: u32,
    pub id: String,
    pub created_at: String,
    pub releases: Vec<CommitRelease>,
}

impl CommitRequest {
    /// `None` when nothing is staged.
    pub fn build(pending: &PendingReleases, created_at: &str) -> Option<Self> {
        if pending.is_empty() {
            return None;
        }
        let releases: Vec<CommitRelease> = pending
            .iter()
            .map(|entry| CommitRelease {
                revision: entry.revision.revision,
                version: entry.revision.version.clone(),
                channels: entry.channels.iter().cloned().collect(),
            })
            .collect();
        let id = compute_commit_id(&releases, created_at);
        Some(Self {
            version: 1,
            id,
            created_at: created_at.to_string(),
            releases,
        })
    }

    pub fn build_now(pending: &PendingReleases) -> Result<Option<Self>> {
        let created_at = now_rfc3339()?;
        Ok(Self::build(pending, &created_at))
    }
}

pub fn compute_commit_id(releases: &[CommitRelease], created_at: &str) -> String {
    let mut hasher = blake3::Hasher::new();
    hasher.update(created_at.as_bytes());
    for release in releases {
        hasher.update(b"\n");
        hasher.update(release.revision.to_string().as_bytes());
        // Channels come from an ordered set, so the digest is stable.
        for channel in &release.channels {
            hasher.update(b" ");
            hasher.update(channel.to_string().as_bytes());
        }
    }
    hasher.finalize().to_hex().to_string()
}

pub fn now_rfc3339() -> Result<String> {
    time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .context("format timestamp")
}

#[cfg(test)]
#[path = "tests/summary_tests.rs"]
mod tests;
