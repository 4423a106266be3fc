//! Output formats for parsed captions
//!
//! Every caption becomes a [`CaptionRecord`], which is written as JSON, YAML
//! or the XML-like tag format (see [`tag`]).

pub mod tag;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::ast::CaptionTree;
use crate::error::ParseFailure;
use crate::normalize::normalize;
use crate::parser::CaptionParser;

pub use tag::{serialize_record as serialize_record_tag, serialize_tag};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("unknown output format '{0}' (expected one of: json, yaml, tag)")]
    UnknownFormat(String),
    #[error("serialization error: {0}")]
    Serialization(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    Json,
    Yaml,
    Tag,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 3] = [OutputFormat::Json, OutputFormat::Yaml, OutputFormat::Tag];

    pub fn name(self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
            OutputFormat::Tag => "tag",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OutputFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OutputFormat::ALL
            .into_iter()
            .find(|format| format.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| FormatError::UnknownFormat(s.to_string()))
    }
}

/// The outcome of parsing one caption, ready to be written out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaptionRecord {
    /// The caption as read, without its line ending
    pub caption: String,
    pub normalized: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tree: Option<CaptionTree>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CaptionRecord {
    pub fn new(caption: &str, result: Result<CaptionTree, ParseFailure>) -> Self {
        let caption = caption.trim_end_matches(['\r', '\n']).to_string();
        match result {
            Ok(tree) => Self {
                normalized: normalize(&caption),
                caption,
                tree: Some(tree),
                error: None,
            },
            Err(failure) => Self {
                caption,
                error: Some(failure.to_string()),
                normalized: failure.normalized,
                tree: None,
            },
        }
    }

    /// Parse `caption` and record the outcome.
    pub fn parse(parser: &CaptionParser, caption: &str) -> Self {
        Self::new(caption, parser.parse(caption))
    }

    pub fn is_parsed(&self) -> bool {
        self.tree.is_some()
    }
}

/// Render one record. JSON is a single line unless `pretty`; YAML starts a
/// new document; tag output ends with a newline.
pub fn render(
    record: &CaptionRecord,
    format: OutputFormat,
    pretty: bool,
) -> Result<String, FormatError> {
    match format {
        OutputFormat::Json => {
            let json = if pretty {
                serde_json::to_string_pretty(record)
            } else {
                serde_json::to_string(record)
            };
            json.map(|s| s + "\n")
                .map_err(|err| FormatError::Serialization(err.to_string()))
        }
        OutputFormat::Yaml => serde_yaml::to_string(record)
            .map(|s| format!("---\n{s}"))
            .map_err(|err| FormatError::Serialization(err.to_string())),
        OutputFormat::Tag => Ok(tag::serialize_record(record) + "\n"),
    }
}
