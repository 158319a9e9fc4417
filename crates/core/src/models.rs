use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::UnknownModel;

const MOVINET_A0_URL: &str =
    "https://tfhub.dev/tensorflow/movinet/a0/base/kinetics-600/classification/3";
const I3D_URL: &str = "https://tfhub.dev/deepmind/i3d-kinetics-400/1";

/// One of the two pre-trained action-recognition models on offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelChoice {
    MoViNetA0,
    I3D,
}

impl ModelChoice {
    pub const ALL: [ModelChoice; 2] = [ModelChoice::MoViNetA0, ModelChoice::I3D];

    /// Map a line of menu input (`1` or `2`, surrounding whitespace ignored).
    pub fn from_menu_input(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(ModelChoice::MoViNetA0),
            "2" => Some(ModelChoice::I3D),
            _ => None,
        }
    }

    pub fn menu_key(&self) -> &'static str {
        match self {
            ModelChoice::MoViNetA0 => "1",
            ModelChoice::I3D => "2",
        }
    }

    /// Name accepted on the command line.
    pub fn cli_name(&self) -> &'static str {
        match self {
            ModelChoice::MoViNetA0 => "movinet",
            ModelChoice::I3D => "i3d",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ModelChoice::MoViNetA0 => "MoViNet A0",
            ModelChoice::I3D => "I3D",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ModelChoice::MoViNetA0 => "Fast, efficient (recommended for real-time)",
            ModelChoice::I3D => "More accurate, slower",
        }
    }

    pub fn dataset(&self) -> &'static str {
        match self {
            ModelChoice::MoViNetA0 => "Kinetics-600",
            ModelChoice::I3D => "Kinetics-400",
        }
    }

    pub fn url(&self) -> &'static str {
        match self {
            ModelChoice::MoViNetA0 => MOVINET_A0_URL,
            ModelChoice::I3D => I3D_URL,
        }
    }
}

impl fmt::Display for ModelChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for ModelChoice {
    type Err = UnknownModel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        ModelChoice::ALL
            .into_iter()
            .find(|c| c.cli_name() == wanted || c.menu_key() == wanted)
            .ok_or_else(|| UnknownModel(s.to_string()))
    }
}

/// A successfully loaded hub module.
#[derive(Debug, Clone)]
pub struct ModelHandle {
    pub url: String,
    pub path: PathBuf,
    pub size_bytes: u64,
    pub from_cache: bool,
    pub fetched_at: chrono::DateTime<chrono::Utc>,
}
