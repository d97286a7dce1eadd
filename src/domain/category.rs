use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Coarse classification bucket of a catalog. Closed set: descriptors pick one
/// of these, they never add their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Variable,
    XRay,
    Infrared,
    Radio,
    Galaxy,
    Quasar,
    ClusterAndNebula,
    Star,
    Others,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::Variable,
        Category::XRay,
        Category::Infrared,
        Category::Radio,
        Category::Galaxy,
        Category::Quasar,
        Category::ClusterAndNebula,
        Category::Star,
        Category::Others,
    ];

    /// First segment of every folder path.
    pub fn folder_name(&self) -> &'static str {
        match self {
            Category::Variable => "variable",
            Category::XRay => "xray",
            Category::Infrared => "infrared",
            Category::Radio => "radio",
            Category::Galaxy => "galaxy",
            Category::Quasar => "qso",
            Category::ClusterAndNebula => "cluster_nebula",
            Category::Star => "star",
            Category::Others => "others",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Variable => "Variable Stars",
            Category::XRay => "X-ray Sources",
            Category::Infrared => "Infrared Sources",
            Category::Radio => "Radio Sources",
            Category::Galaxy => "Galaxies",
            Category::Quasar => "Quasars and UV-excess Objects",
            Category::ClusterAndNebula => "Clusters and Nebulae",
            Category::Star => "Stars",
            Category::Others => "Others",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::ALL
            .iter()
            .copied()
            .find(|c| {
                c.folder_name().eq_ignore_ascii_case(wanted) || c.label().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| format!("unknown category: {}", wanted))
    }
}
