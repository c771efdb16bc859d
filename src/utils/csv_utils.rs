use std::fmt::Display;

use anyhow::Error;
use regex::Regex;

/// Characters that break a quoted, line oriented CSV cell.
pub const UNSAFE_CHARACTERS: [char; 2] = ['\n', '"'];

pub const TAG_SEPARATOR: &str = "|";
pub const NO_TAGS_SENTINEL: &str = "[none]";

/// Quotes single values for embedding in a CSV row.
#[derive(Debug, Clone)]
pub struct Sanitizer {
    unsafe_characters: Regex,
}

impl Sanitizer {
    pub fn new(unsafe_characters: &[char]) -> Result<Sanitizer, Error> {
        let class: String = unsafe_characters
            .iter()
            .map(|c| regex::escape(&c.to_string()))
            .collect();

        let unsafe_characters = Regex::new(&format!("[{}]", class))?;

        Ok(Sanitizer { unsafe_characters })
    }

    pub fn prepare_feature<T: Display>(&self, feature: T) -> String {
        let text = feature.to_string();
        format!("\"{}\"", self.unsafe_characters.replace_all(&text, ""))
    }

    pub fn prepare_flag(&self, flag: bool) -> String {
        self.prepare_feature(if flag { "True" } else { "False" })
    }

    pub fn prepare_tags(&self, tags: &[String]) -> String {
        if tags.is_empty() {
            self.prepare_feature(NO_TAGS_SENTINEL)
        } else {
            self.prepare_feature(tags.join(TAG_SEPARATOR))
        }
    }

    pub fn prepare_row<T: Display>(&self, features: &[T]) -> String {
        features
            .iter()
            .map(|feature| self.prepare_feature(feature))
            .collect::<Vec<String>>()
            .join(",")
    }
}
