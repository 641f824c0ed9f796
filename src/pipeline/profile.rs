//! Performance profiles.
//!
//! A profile is a static lookup: it decides which stages are disabled and
//! whether files are processed sequentially or on a worker pool.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::traits::Stage;
use crate::errors::{LemmatizerError, Result};

/// How files are scheduled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionMode {
    /// One file after another on the calling thread
    Sequential,
    /// One task per file on a fixed-size worker pool
    Parallel,
}

/// The five numbered performance profiles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Profile {
    Basic,
    Moderate,
    Balanced,
    High,
    Extreme,
}

impl Profile {
    pub const ALL: [Profile; 5] = [
        Profile::Basic,
        Profile::Moderate,
        Profile::Balanced,
        Profile::High,
        Profile::Extreme,
    ];

    /// The numeric selector, `"1"` through `"5"`
    pub fn selector(&self) -> &'static str {
        match self {
            Profile::Basic => "1",
            Profile::Moderate => "2",
            Profile::Balanced => "3",
            Profile::High => "4",
            Profile::Extreme => "5",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Profile::Basic => "Basic",
            Profile::Moderate => "Moderate",
            Profile::Balanced => "Balanced",
            Profile::High => "High",
            Profile::Extreme => "Extreme",
        }
    }

    /// Menu text shown by the interactive prompt
    pub fn description(&self) -> &'static str {
        match self {
            Profile::Basic => "Suitable for low-power devices like Raspberry Pi",
            Profile::Moderate => "Suitable for older laptops/PCs",
            Profile::Balanced => "Suitable for modern PCs",
            Profile::High => "Suitable for high-end PCs and workstations",
            Profile::Extreme => "Suitable for servers and cloud environments",
        }
    }

    /// Stages switched off under this profile
    pub fn disabled_stages(&self) -> Vec<Stage> {
        match self {
            Profile::Basic | Profile::Moderate => vec![Stage::Lemmatizer],
            Profile::Balanced | Profile::High | Profile::Extreme => Vec::new(),
        }
    }

    pub fn execution_mode(&self) -> ExecutionMode {
        match self {
            Profile::High | Profile::Extreme => ExecutionMode::Parallel,
            _ => ExecutionMode::Sequential,
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.selector(), self.name())
    }
}

impl FromStr for Profile {
    type Err = LemmatizerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "1" | "basic" => Ok(Profile::Basic),
            "2" | "moderate" => Ok(Profile::Moderate),
            "3" | "balanced" => Ok(Profile::Balanced),
            "4" | "high" => Ok(Profile::High),
            "5" | "extreme" => Ok(Profile::Extreme),
            other => Err(LemmatizerError::config(format!(
                "unsupported profile '{}' (expected 1-5)",
                other
            ))),
        }
    }
}

impl TryFrom<String> for Profile {
    type Error = LemmatizerError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Profile> for String {
    fn from(profile: Profile) -> Self {
        profile.selector().to_string()
    }
}
