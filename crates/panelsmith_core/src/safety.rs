//! Safety thresholds forwarded to the generation service.
//!
//! Nothing here is enforced locally. The service owns the policy.

use serde::{Deserialize, Serialize};

/// Harm category a threshold applies to.
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
pub enum HarmCategory {
    /// Harassment
    #[serde(rename = "HARM_CATEGORY_HARASSMENT")]
    #[strum(serialize = "HARM_CATEGORY_HARASSMENT")]
    Harassment,
    /// Hate speech
    #[serde(rename = "HARM_CATEGORY_HATE_SPEECH")]
    #[strum(serialize = "HARM_CATEGORY_HATE_SPEECH")]
    HateSpeech,
    /// Sexually explicit content
    #[serde(rename = "HARM_CATEGORY_SEXUALLY_EXPLICIT")]
    #[strum(serialize = "HARM_CATEGORY_SEXUALLY_EXPLICIT")]
    SexuallyExplicit,
    /// Dangerous content
    #[serde(rename = "HARM_CATEGORY_DANGEROUS_CONTENT")]
    #[strum(serialize = "HARM_CATEGORY_DANGEROUS_CONTENT")]
    DangerousContent,
    /// Civic integrity
    #[serde(rename = "HARM_CATEGORY_CIVIC_INTEGRITY")]
    #[strum(serialize = "HARM_CATEGORY_CIVIC_INTEGRITY")]
    CivicIntegrity,
}

/// Blocking threshold for a harm category.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum HarmBlockThreshold {
    /// Block low probability of harm and above
    BlockLowAndAbove,
    /// Block medium probability of harm and above
    BlockMediumAndAbove,
    /// Block only high probability of harm
    BlockOnlyHigh,
    /// Never block, still report
    BlockNone,
    /// Safety filter disabled
    Off,
}

/// One category→threshold pair.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_getters::Getters,
)]
pub struct SafetySetting {
    /// Category the threshold applies to
    category: HarmCategory,
    /// Threshold for the category
    threshold: HarmBlockThreshold,
}

impl SafetySetting {
    /// Creates a new safety setting.
    pub fn new(category: HarmCategory, threshold: HarmBlockThreshold) -> Self {
        Self {
            category,
            threshold,
        }
    }

    /// The four categories the intro comic disables.
    pub fn all_off() -> Vec<Self> {
        [
            HarmCategory::HateSpeech,
            HarmCategory::DangerousContent,
            HarmCategory::SexuallyExplicit,
            HarmCategory::Harassment,
        ]
        .into_iter()
        .map(|category| Self::new(category, HarmBlockThreshold::Off))
        .collect()
    }
}
