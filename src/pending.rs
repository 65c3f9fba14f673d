//! Staged, not yet applied promotions.
//!
//! Every operation returns a fresh store and leaves the receiver untouched, so
//! a caller holding an earlier store never observes later staging.

use std::collections::BTreeSet;

use serde::Serialize;
use tracing::debug;

use crate::model::{Channel, Revision, RevisionId};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PendingRelease {
    pub revision: Revision,

    /// Never empty while the entry is in a store.
    pub channels: BTreeSet<Channel>,
}

impl PendingRelease {
    pub fn id(&self) -> RevisionId {
        self.revision.revision
    }
}

/// Pending releases keyed by revision id, in the order they were first staged.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PendingReleases {
    entries: Vec<PendingRelease>,
}

impl PendingReleases {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stage `revision` into `channel`. Staging the same pair twice has no
    /// further effect.
    #[must_use]
    pub fn promote(&self, revision: &Revision, channel: Channel) -> Self {
        let mut entries = self.entries.clone();
        match entries.iter_mut().find(|e| e.id() == revision.revision) {
            Some(entry) => {
                if !entry.channels.insert(channel.clone()) {
                    debug!(revision = %revision.revision, %channel, "promotion already staged");
                }
            }
            None => entries.push(PendingRelease {
                revision: revision.clone(),
                channels: BTreeSet::from([channel.clone()]),
            }),
        }
        debug!(
            revision = %revision.revision,
            %channel,
            pending = entries.len(),
            "staged promotion"
        );
        Self { entries }
    }

    /// Unstage `channel` for `revision`. Entries left without channels are
    /// dropped; unknown pairs are ignored.
    #[must_use]
    pub fn undo(&self, revision: RevisionId, channel: &Channel) -> Self {
        let mut entries = self.entries.clone();
        let Some(pos) = entries.iter().position(|e| e.id() == revision) else {
            debug!(%revision, %channel, "nothing staged for revision");
            return Self { entries };
        };

        if !entries[pos].channels.remove(channel) {
            debug!(%revision, %channel, "channel was not staged");
            return Self { entries };
        }
        if entries[pos].channels.is_empty() {
            entries.remove(pos);
        }
        debug!(%revision, %channel, pending = entries.len(), "undid promotion");
        Self { entries }
    }

    #[must_use]
    pub fn clear(&self) -> Self {
        debug!(dropped = self.entries.len(), "cleared pending releases");
        Self::new()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct staged revisions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn get(&self, revision: RevisionId) -> Option<&PendingRelease> {
        self.entries.iter().find(|e| e.id() == revision)
    }

    pub fn is_staged(&self, revision: RevisionId, channel: &Channel) -> bool {
        self.get(revision)
            .is_some_and(|e| e.channels.contains(channel))
    }

    /// Entries in staging order.
    pub fn iter(&self) -> impl Iterator<Item = &PendingRelease> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a PendingReleases {
    type Item = &'a PendingRelease;
    type IntoIter = std::slice::Iter<'a, PendingRelease>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
#[path = "tests/pending_tests.rs"]
mod tests;
