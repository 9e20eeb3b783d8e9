use serde::{Deserialize, Serialize};
use strum::{EnumString, IntoStaticStr};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
pub enum ChartKind {
    /// A song's steps
    #[strum(serialize = "steps")]
    Steps,
    /// A course's trail
    #[strum(serialize = "trail")]
    Trail,
}

/// Chart identifier (song + steps, or course + trail)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ChartKey {
    pub kind: ChartKind,
    /// Song or course identifier
    pub group: String,
    /// Steps or trail identifier within the group
    pub key: String,
}

impl ChartKey {
    pub fn steps(song: impl Into<String>, chart: impl Into<String>) -> Self {
        Self {
            kind: ChartKind::Steps,
            group: song.into(),
            key: chart.into(),
        }
    }

    pub fn trail(course: impl Into<String>, trail: impl Into<String>) -> Self {
        Self {
            kind: ChartKind::Trail,
            group: course.into(),
            key: trail.into(),
        }
    }

    pub fn is_course(&self) -> bool {
        self.kind == ChartKind::Trail
    }
}

impl std::fmt::Display for ChartKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind: &'static str = self.kind.into();
        write!(f, "{}:{}/{}", kind, self.group, self.key)
    }
}
