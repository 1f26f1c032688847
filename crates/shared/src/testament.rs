use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

#[derive(Display, Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Testament {
    #[strum(serialize = "OT")]
    #[serde(rename = "OT")]
    Old,
    #[strum(serialize = "NT")]
    #[serde(rename = "NT")]
    New,
}

/// Which part of the canon a plan covers.
#[derive(
    EnumString,
    Display,
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum TestamentScope {
    #[strum(serialize = "OT")]
    #[serde(rename = "OT")]
    Old,
    #[strum(serialize = "NT")]
    #[serde(rename = "NT")]
    New,
    #[default]
    #[strum(serialize = "BOTH")]
    #[serde(rename = "BOTH")]
    Both,
}

impl TestamentScope {
    /// Parses `OT`, `NT` or `BOTH`. Anything else is rejected rather than
    /// falling back to [`TestamentScope::Both`].
    pub fn parse(value: &str) -> crate::Result<Self> {
        match value.trim().parse() {
            Ok(scope) => Ok(scope),
            Err(_) => crate::invalid!("unknown testament scope: {value:?}"),
        }
    }

    pub fn includes(&self, testament: Testament) -> bool {
        match self {
            TestamentScope::Old => testament == Testament::Old,
            TestamentScope::New => testament == Testament::New,
            TestamentScope::Both => true,
        }
    }
}

impl From<Testament> for TestamentScope {
    fn from(value: Testament) -> Self {
        match value {
            Testament::Old => TestamentScope::Old,
            Testament::New => TestamentScope::New,
        }
    }
}
