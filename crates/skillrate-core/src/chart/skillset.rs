use std::ops::{Index, IndexMut};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{EnumCount, EnumIter, EnumString, FromRepr, IntoEnumIterator, IntoStaticStr};

use crate::error::{Error, Result};

pub const NUM_SKILLSETS: usize = Skillset::COUNT;

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
    FromRepr,
    EnumCount,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
#[repr(u8)]
pub enum Skillset {
    Overall = 0,
    Stream = 1,
    Jumpstream = 2,
    Handstream = 3,
    Stamina = 4,
    #[strum(to_string = "JackSpeed", serialize = "jack")]
    JackSpeed = 5,
    Chordjack = 6,
    #[strum(to_string = "Technical", serialize = "tech")]
    Technical = 7,
}

impl Skillset {
    /// Scripting-boundary lookup; out-of-range indices yield `None`.
    pub fn from_index(index: usize) -> Option<Self> {
        u8::try_from(index).ok().and_then(Self::from_repr)
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(&self) -> &'static str {
        self.into()
    }

    pub fn parse_name(name: &str) -> Result<Self> {
        Self::from_str(name).map_err(|_| Error::UnknownSkillset(name.to_string()))
    }
}

impl std::fmt::Display for Skillset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One value per skillset, indexed by `Skillset`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SkillsetRatings([f32; NUM_SKILLSETS]);

impl SkillsetRatings {
    pub const ZERO: Self = Self([0.0; NUM_SKILLSETS]);

    pub fn new(values: [f32; NUM_SKILLSETS]) -> Self {
        Self(values)
    }

    pub fn splat(value: f32) -> Self {
        Self([value; NUM_SKILLSETS])
    }

    pub fn get(&self, skillset: Skillset) -> f32 {
        self.0[skillset.index()]
    }

    pub fn set(&mut self, skillset: Skillset, value: f32) {
        self.0[skillset.index()] = value;
    }

    pub fn clear(&mut self) {
        self.0 = [0.0; NUM_SKILLSETS];
    }

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&v| v == 0.0)
    }

    /// Non-finite values replaced by zero.
    pub fn sanitized(self) -> Self {
        Self(self.0.map(|v| if v.is_finite() { v } else { 0.0 }))
    }

    pub fn mean(&self) -> f32 {
        self.0.iter().sum::<f32>() / NUM_SKILLSETS as f32
    }

    pub fn iter(&self) -> impl Iterator<Item = (Skillset, f32)> + '_ {
        Skillset::iter().map(|ss| (ss, self.get(ss)))
    }

    pub fn as_array(&self) -> &[f32; NUM_SKILLSETS] {
        &self.0
    }
}

impl Index<Skillset> for SkillsetRatings {
    type Output = f32;

    fn index(&self, skillset: Skillset) -> &f32 {
        &self.0[skillset.index()]
    }
}

impl IndexMut<Skillset> for SkillsetRatings {
    fn index_mut(&mut self, skillset: Skillset) -> &mut f32 {
        &mut self.0[skillset.index()]
    }
}

impl From<[f32; NUM_SKILLSETS]> for SkillsetRatings {
    fn from(values: [f32; NUM_SKILLSETS]) -> Self {
        Self(values)
    }
}
