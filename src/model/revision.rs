use serde::{Deserialize, Serialize};

use super::ids::RevisionId;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Revision {
    pub revision: RevisionId,
    pub version: String,

    /// Architectures this build targets. A pending promotion fills one
    /// matrix slot per entry.
    pub architectures: Vec<String>,
}

impl Revision {
    pub fn new(
        revision: u64,
        version: impl Into<String>,
        architectures: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            revision: RevisionId(revision),
            version: version.into(),
            architectures: architectures.into_iter().map(Into::into).collect(),
        }
    }

    pub fn id(&self) -> RevisionId {
        self.revision
    }

    pub fn builds_for(&self, arch: &str) -> bool {
        self.architectures.iter().any(|a| a == arch)
    }

    /// `version (revision)`, the label used in summaries and cell tooltips.
    pub fn label(&self) -> String {
        format!("{} ({})", self.version, self.revision)
    }
}

/// True when both sides hold a revision with the same id.
pub fn same_revision(a: Option<&Revision>, b: Option<&Revision>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a.revision == b.revision,
        _ => false,
    }
}
