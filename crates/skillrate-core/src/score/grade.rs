use serde::{Deserialize, Serialize};
use strum::{EnumCount, FromRepr, IntoStaticStr};

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
    Default,
    EnumCount,
    FromRepr,
    IntoStaticStr,
)]
#[repr(u8)]
pub enum Grade {
    #[default]
    #[strum(serialize = "-")]
    NoData = 0,
    #[strum(serialize = "F")]
    Failed = 1,
    D = 2,
    C = 3,
    B = 4,
    A = 5,
    #[strum(serialize = "AA")]
    Aa = 6,
    #[strum(serialize = "AAA")]
    Aaa = 7,
    #[strum(serialize = "AAAA")]
    Aaaa = 8,
}

impl Grade {
    pub fn from_u8(value: u8) -> Option<Self> {
        Self::from_repr(value)
    }

    /// Grade for a passed attempt at the given normalized accuracy (0.0..=1.0)
    pub fn from_accuracy(accuracy: f32) -> Self {
        if accuracy >= 0.9997 {
            Self::Aaaa
        } else if accuracy >= 0.9975 {
            Self::Aaa
        } else if accuracy >= 0.93 {
            Self::Aa
        } else if accuracy >= 0.8 {
            Self::A
        } else if accuracy >= 0.7 {
            Self::B
        } else if accuracy >= 0.6 {
            Self::C
        } else {
            Self::D
        }
    }

    pub fn is_failing(&self) -> bool {
        matches!(self, Self::Failed)
    }

    pub fn short_name(&self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_name())
    }
}
