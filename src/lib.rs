pub mod board;
pub mod eligibility;
pub mod error;
pub mod ladder;
pub mod model;
pub mod pending;
pub mod projection;
pub mod session;
pub mod summary;
