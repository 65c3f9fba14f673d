use std::collections::HashMap;

use tracing::{debug, warn};

use crate::model::{Channel, ReleaseMatrix, RevisionId};
use crate::pending::PendingReleases;

/// Overlay every pending release on a copy of `current`.
///
/// `current` is never modified. When two entries target the same channel and
/// architecture, the entry created later wins. Staging more channels for an
/// existing entry does not move it.
pub fn project(current: &ReleaseMatrix, pending: &PendingReleases) -> ReleaseMatrix {
    let mut next = current.clone();
    let mut written: HashMap<(Channel, String), RevisionId> = HashMap::new();

    for entry in pending {
        for channel in &entry.channels {
            for arch in &entry.revision.architectures {
                let slot = (channel.clone(), arch.clone());
                if let Some(earlier) = written.insert(slot, entry.id())
                    && earlier != entry.id()
                {
                    warn!(
                        %channel,
                        arch = %arch,
                        earlier = %earlier,
                        later = %entry.id(),
                        "pending releases collide; later-staged entry wins"
                    );
                }
                next.insert(channel.clone(), arch.clone(), entry.revision.clone());
            }
        }
    }

    debug!(pending = pending.len(), slots = written.len(), "projected next state");
    next
}

#[cfg(test)]
#[path = "tests/projection_tests.rs"]
mod tests;
