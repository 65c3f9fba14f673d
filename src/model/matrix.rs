use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::channel::Channel;
use super::revision::Revision;

/// Architecture -> revision released there.
pub type ArchReleases = BTreeMap<String, Revision>;

/// What is released per channel and architecture. Also the shape of the
/// projected next-state view.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReleaseMatrix {
    channels: BTreeMap<Channel, ArchReleases>,
}

impl ReleaseMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    /// Absent channel or arch is "no revision".
    pub fn get(&self, channel: &Channel, arch: &str) -> Option<&Revision> {
        self.channels.get(channel).and_then(|archs| archs.get(arch))
    }

    pub fn insert(
        &mut self,
        channel: Channel,
        arch: impl Into<String>,
        revision: Revision,
    ) -> Option<Revision> {
        self.channels
            .entry(channel)
            .or_default()
            .insert(arch.into(), revision)
    }

    #[must_use]
    pub fn with(mut self, channel: Channel, arch: impl Into<String>, revision: Revision) -> Self {
        self.insert(channel, arch, revision);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Channel, &ArchReleases)> {
        self.channels.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.channels.values().all(|archs| archs.is_empty())
    }

    /// Sorted, deduplicated architectures present in any channel.
    pub fn architectures(&self) -> Vec<String> {
        let mut out: Vec<String> = self
            .channels
            .values()
            .flat_map(|archs| archs.keys().cloned())
            .collect();
        out.sort();
        out.dedup();
        out
    }
}
