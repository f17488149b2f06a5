//! Caller-facing style knobs for a humanization request.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

/// Rewrite purpose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Paraphrase,
    Rewrite,
}

/// Target reading level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Readability {
    Simple,
    #[default]
    Standard,
    Advanced,
}

/// How aggressively the remote service rewrites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strength {
    Low,
    #[default]
    Medium,
    High,
}

/// Accepted for API compatibility; not forwarded to the remote service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Conservativeness {
    Low,
    #[default]
    Medium,
    High,
}

/// Voice used by the local fallback rewrite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Default,
    Academic,
    Casual,
    Creative,
    Formal,
    Friendly,
    Professional,
}

/// Options for a humanization call. Every field is optional; absent and
/// unrecognized values fall back to the documented defaults.
///
/// ```rust
/// use humanize_client::types::{HumanizeOptions, Readability, Tone};
///
/// let opts: HumanizeOptions =
///     serde_json::from_str(r#"{"readability":"advanced","tone":"shouty"}"#).unwrap();
/// assert_eq!(opts.readability, Some(Readability::Advanced));
/// assert_eq!(opts.tone, None);
/// assert_eq!(opts.tone_or_default(), Tone::Default);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HumanizeOptions {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub mode: Option<Mode>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub readability: Option<Readability>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub strength: Option<Strength>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub conservativeness: Option<Conservativeness>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub tone: Option<Tone>,
}

impl HumanizeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = Some(mode);
        self
    }

    pub fn with_readability(mut self, readability: Readability) -> Self {
        self.readability = Some(readability);
        self
    }

    pub fn with_strength(mut self, strength: Strength) -> Self {
        self.strength = Some(strength);
        self
    }

    pub fn with_conservativeness(mut self, conservativeness: Conservativeness) -> Self {
        self.conservativeness = Some(conservativeness);
        self
    }

    pub fn with_tone(mut self, tone: Tone) -> Self {
        self.tone = Some(tone);
        self
    }

    pub fn tone_or_default(&self) -> Tone {
        self.tone.unwrap_or_default()
    }
}

// Unknown strings collapse to `None` instead of failing the whole payload.
fn lenient<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw.and_then(|v| serde_json::from_value(v).ok()))
}
