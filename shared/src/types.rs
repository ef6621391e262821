//! Common types used across the platform

use serde::{Deserialize, Deserializer, Serialize};

/// Supported presentation languages
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    English,
    Tamil,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Tamil => "ta",
        }
    }

    /// Parse a language from a form value or code, case-insensitively
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "english" | "en" => Some(Language::English),
            "tamil" | "ta" => Some(Language::Tamil),
            _ => None,
        }
    }
}

/// Unrecognized values fall back to English
impl<'de> Deserialize<'de> for Language {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(Language::parse(&value).unwrap_or_default())
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Language::English => write!(f, "English"),
            Language::Tamil => write!(f, "Tamil"),
        }
    }
}

/// Inclusive numeric range a simulated value is held to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}
