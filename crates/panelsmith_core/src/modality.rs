//! Response modalities.

use serde::{Deserialize, Serialize};

/// Kind of content the service is allowed to return.
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
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Modality {
    /// Narrative text
    Text,
    /// Inline image bytes
    Image,
}
