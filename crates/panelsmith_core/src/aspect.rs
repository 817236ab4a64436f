//! Image aspect ratios accepted by the generation service.

use serde::{Deserialize, Serialize};

/// Output image aspect ratio, written on the wire as `W:H`.
///
/// # Examples
///
/// ```
/// use panelsmith_core::AspectRatio;
///
/// let ratio: AspectRatio = "16:9".parse().unwrap();
/// assert_eq!(ratio, AspectRatio::Widescreen);
/// assert_eq!(ratio.to_string(), "16:9");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
pub enum AspectRatio {
    /// 1:1
    #[default]
    #[serde(rename = "1:1")]
    #[strum(serialize = "1:1")]
    Square,
    /// 2:3
    #[serde(rename = "2:3")]
    #[strum(serialize = "2:3")]
    Portrait2x3,
    /// 3:2
    #[serde(rename = "3:2")]
    #[strum(serialize = "3:2")]
    Landscape3x2,
    /// 3:4
    #[serde(rename = "3:4")]
    #[strum(serialize = "3:4")]
    Portrait3x4,
    /// 4:3
    #[serde(rename = "4:3")]
    #[strum(serialize = "4:3")]
    Landscape4x3,
    /// 4:5
    #[serde(rename = "4:5")]
    #[strum(serialize = "4:5")]
    Portrait4x5,
    /// 5:4
    #[serde(rename = "5:4")]
    #[strum(serialize = "5:4")]
    Landscape5x4,
    /// 9:16
    #[serde(rename = "9:16")]
    #[strum(serialize = "9:16")]
    Tall,
    /// 16:9
    #[serde(rename = "16:9")]
    #[strum(serialize = "16:9")]
    Widescreen,
    /// 21:9
    #[serde(rename = "21:9")]
    #[strum(serialize = "21:9")]
    Ultrawide,
}
