//! This module defines the canonical, type-safe representation of the content-type
//! labels that index the benchmark tables.

use crate::error::EasyCompressError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The kind of data being compressed, as classified by the benchmark corpus.
///
/// The string labels are part of the public contract: they appear verbatim in
/// profile files and catalog documents, and matching is case-sensitive.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ContentType {
    #[serde(rename = "text")]
    Text,
    #[serde(rename = "play")]
    Play,
    #[serde(rename = "html")]
    Html,
    #[serde(rename = "Csrc")]
    Csrc,
    #[serde(rename = "list")]
    List,
    #[serde(rename = "Excl")]
    Excl,
    #[serde(rename = "tech")]
    Tech,
    #[serde(rename = "poem")]
    Poem,
    #[serde(rename = "fax")]
    Fax,
    #[serde(rename = "SPRC")]
    Sprc,
    #[serde(rename = "man")]
    Man,
}

impl ContentType {
    /// Every supported label, in benchmark column order.
    pub const ALL: [ContentType; 11] = [
        Self::Text,
        Self::Play,
        Self::Html,
        Self::Csrc,
        Self::List,
        Self::Excl,
        Self::Tech,
        Self::Poem,
        Self::Fax,
        Self::Sprc,
        Self::Man,
    ];

    /// Returns the canonical label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Play => "play",
            Self::Html => "html",
            Self::Csrc => "Csrc",
            Self::List => "list",
            Self::Excl => "Excl",
            Self::Tech => "tech",
            Self::Poem => "poem",
            Self::Fax => "fax",
            Self::Sprc => "SPRC",
            Self::Man => "man",
        }
    }

    /// Returns `true` if `label` names a supported content type.
    pub fn is_valid_label(label: &str) -> bool {
        label.parse::<ContentType>().is_ok()
    }
}

impl FromStr for ContentType {
    type Err = EasyCompressError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|ct| ct.as_str() == label)
            .ok_or_else(|| EasyCompressError::UnknownContentType(label.to_string()))
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
