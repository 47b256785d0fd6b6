use std::{fs, io};
use std::io::ErrorKind;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::util::toml_date::TomlDate;

pub mod parsing_utils;
pub mod front_matter_renderer;

pub const DELIMITER: &str = "+++";

/// Front matter of a Hugo post
///
/// Only the keys the blog uses are modelled. Anything else in the block is accepted
/// and ignored, Hugo knows what to do with it.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct FrontMatter {
    pub title: String,
    pub date: TomlDate,
    #[serde(default)]
    pub draft: bool,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub howto: Option<HowTo>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub faqs: Vec<Faq>,
}

/// Structured how-to section, rendered by the theme as a schema.org HowTo
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct HowTo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_time: Option<String>,
    #[serde(default)]
    pub steps: Vec<HowToStep>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct HowToStep {
    pub name: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

impl FrontMatter {
    pub fn new(title: &str, date: TomlDate) -> FrontMatter {
        FrontMatter {
            title: title.to_string(),
            date,
            draft: false,
            tags: vec![],
            description: None,
            author: None,
            howto: None,
            faqs: vec![],
        }
    }

    pub fn from_file(file_name: &Path) -> io::Result<FrontMatter> {
        let content = fs::read_to_string(file_name).map_err(|e| {
            io::Error::new(e.kind(), format!("Error reading {}: {}", file_name.display(), e))
        })?;
        let (front_matter, _body) = parsing_utils::parse_front_matter(file_name, &content)?;
        Ok(front_matter)
    }

    pub fn from_toml(file_name: &Path, block: &str) -> io::Result<FrontMatter> {
        toml::from_str::<FrontMatter>(block).map_err(|e| {
            io::Error::new(
                ErrorKind::InvalidData,
                format!("Invalid front matter - file={}: {}", file_name.display(), e.message()),
            )
        })
    }
}
