use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{ParseChannelError, ParseRiskError};

/// Stability tier of a channel. Declaration order is ladder order, most
/// stable first, so the derived `Ord` sorts `stable` before `edge`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Risk {
    Stable,
    Candidate,
    Beta,
    Edge,
}

impl Risk {
    pub fn as_str(self) -> &'static str {
        match self {
            Risk::Stable => "stable",
            Risk::Candidate => "candidate",
            Risk::Beta => "beta",
            Risk::Edge => "edge",
        }
    }
}

impl fmt::Display for Risk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Risk {
    type Err = ParseRiskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "stable" => Ok(Risk::Stable),
            "candidate" => Ok(Risk::Candidate),
            "beta" => Ok(Risk::Beta),
            "edge" => Ok(Risk::Edge),
            other => Err(ParseRiskError(other.to_string())),
        }
    }
}

impl Serialize for Risk {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Risk {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A (track, risk) pair, written `track/risk`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Channel {
    pub track: String,
    pub risk: Risk,
}

impl Channel {
    pub fn new(track: impl Into<String>, risk: Risk) -> Self {
        Self {
            track: track.into(),
            risk,
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.track, self.risk)
    }
}

impl FromStr for Channel {
    type Err = ParseChannelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Split on the last separator; the risk never contains one.
        let (track, risk) = s
            .rsplit_once('/')
            .ok_or_else(|| ParseChannelError::MissingSeparator(s.to_string()))?;
        if track.is_empty() {
            return Err(ParseChannelError::EmptyTrack(s.to_string()));
        }
        let risk = risk.parse().map_err(|source| ParseChannelError::Risk {
            channel: s.to_string(),
            source,
        })?;
        Ok(Self::new(track, risk))
    }
}

impl Serialize for Channel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Channel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[path = "../tests/model/channel_tests.rs"]
mod tests;
