// src/core/types.rs
use crate::core::engine::TranslateError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Regional scripts with a character table in the normalizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Script {
    Devanagari,
    Telugu,
    Gujarati,
}

/// One of the two sign systems with a letter-image catalog.
/// ASL carries a reserved space image; ISL does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignSystem {
    Asl,
    Isl,
}

/// The sign-language convention selected for output. Regional targets
/// spell through the ISL letter set after script normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetSystem {
    Asl,
    Isl,
    Hindi,
    Telugu,
    Gujarati,
}

impl TargetSystem {
    /// Which letter-image catalog this target spells against.
    pub fn sign_system(self) -> SignSystem {
        match self {
            TargetSystem::Asl => SignSystem::Asl,
            _ => SignSystem::Isl,
        }
    }

    /// The regional script table to consult, if any.
    pub fn script(self) -> Option<Script> {
        match self {
            TargetSystem::Hindi => Some(Script::Devanagari),
            TargetSystem::Telugu => Some(Script::Telugu),
            TargetSystem::Gujarati => Some(Script::Gujarati),
            TargetSystem::Asl | TargetSystem::Isl => None,
        }
    }
}

impl FromStr for TargetSystem {
    type Err = TranslateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asl" => Ok(TargetSystem::Asl),
            "isl" => Ok(TargetSystem::Isl),
            "hindi" => Ok(TargetSystem::Hindi),
            "telugu" => Ok(TargetSystem::Telugu),
            "gujarati" => Ok(TargetSystem::Gujarati),
            other => Err(TranslateError::UnknownTarget(other.to_string())),
        }
    }
}

impl fmt::Display for TargetSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TargetSystem::Asl => "asl",
            TargetSystem::Isl => "isl",
            TargetSystem::Hindi => "hindi",
            TargetSystem::Telugu => "telugu",
            TargetSystem::Gujarati => "gujarati",
        };
        f.write_str(name)
    }
}

/// Outcome of a script-table lookup. `Silent` marks glyphs that carry no
/// independent sound (the virama) and must be dropped without an asset;
/// this is distinct from the glyph being absent from the table, which
/// falls through to the plain letter/digit path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharMapping {
    Letter(char),
    Silent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    Video,
    Image,
}

/// One entry in a translation result: a playable clip or a static
/// finger-spelling image, with its catalog-relative path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignAsset {
    pub kind: AssetKind,
    pub path: String,
}

impl SignAsset {
    pub fn video(path: impl Into<String>) -> Self {
        Self { kind: AssetKind::Video, path: path.into() }
    }

    pub fn image(path: impl Into<String>) -> Self {
        Self { kind: AssetKind::Image, path: path.into() }
    }
}

/// Whether a catalog category came up at startup, decided once during the
/// scan and checked by callers instead of probing directories again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Capability {
    Available { entries: usize },
    Unavailable { reason: String },
}

impl Capability {
    pub fn is_available(&self) -> bool {
        matches!(self, Capability::Available { .. })
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Capability::Available { entries } => write!(f, "available ({} entries)", entries),
            Capability::Unavailable { reason } => write!(f, "unavailable: {}", reason),
        }
    }
}
