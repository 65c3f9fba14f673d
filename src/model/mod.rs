mod channel;
mod ids;
mod matrix;
mod revision;

pub use self::channel::{Channel, Risk};
pub use self::ids::RevisionId;
pub use self::matrix::{ArchReleases, ReleaseMatrix};
pub use self::revision::{Revision, same_revision};
