//! Arena stage definition.

/// Stage the match is fought on. Hazard descriptions are display strings.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stage {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub color: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub hazards: Vec<String>,
}

impl Stage {
    pub fn has_hazards(&self) -> bool {
        !self.hazards.is_empty()
    }
}
