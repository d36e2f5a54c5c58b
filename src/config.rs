// src/config.rs
// The six feature flags, one per optional behavior. Field names are
// snake_case in Rust; the serde renames keep the persisted JSON keys
// identical to the flag names the host UI uses.

use serde::{Deserialize, Serialize};

/// Flag names as the host and the persisted blob spell them.
pub mod flags {
    pub const AUTO_COPY: &str = "autoCopy";
    pub const CLEAN_ALL_LINEBREAKS: &str = "cleanAllLinebreaks";
    pub const AUTO_ADD_LINEBREAKS: &str = "autoAddLinebreaks";
    pub const REMOVE_SPACES_BETWEEN_CHINESE: &str = "removeSpacesBetweenChinese";
    pub const ADD_SPACE_BETWEEN_CHINESE_AND_ENGLISH: &str = "addSpaceBetweenChineseAndEnglish";
    pub const USE_FULL_WIDTH_PUNCTUATION_MARKS: &str = "useFullWidthPunctuationMarks";

    pub const ALL: [&str; 6] = [
        AUTO_COPY,
        CLEAN_ALL_LINEBREAKS,
        AUTO_ADD_LINEBREAKS,
        REMOVE_SPACES_BETWEEN_CHINESE,
        ADD_SPACE_BETWEEN_CHINESE_AND_ENGLISH,
        USE_FULL_WIDTH_PUNCTUATION_MARKS,
    ];
}

/// Per-run normalization settings.
///
/// Each flag independently enables one optional stage; flags never change
/// the stage order. `auto_copy` gates no stage at all — it is carried for
/// the host, which performs the clipboard write after normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    pub auto_copy: bool,
    pub clean_all_linebreaks: bool,
    pub auto_add_linebreaks: bool,
    pub remove_spaces_between_chinese: bool,
    pub add_space_between_chinese_and_english: bool,
    pub use_full_width_punctuation_marks: bool,
}

impl Config {
    /// Look a flag up by its external name. `None` for unknown names.
    pub fn get(&self, flag: &str) -> Option<bool> {
        match flag {
            flags::AUTO_COPY => Some(self.auto_copy),
            flags::CLEAN_ALL_LINEBREAKS => Some(self.clean_all_linebreaks),
            flags::AUTO_ADD_LINEBREAKS => Some(self.auto_add_linebreaks),
            flags::REMOVE_SPACES_BETWEEN_CHINESE => Some(self.remove_spaces_between_chinese),
            flags::ADD_SPACE_BETWEEN_CHINESE_AND_ENGLISH => {
                Some(self.add_space_between_chinese_and_english)
            }
            flags::USE_FULL_WIDTH_PUNCTUATION_MARKS => {
                Some(self.use_full_width_punctuation_marks)
            }
            _ => None,
        }
    }

    /// Set a flag by its external name. Returns `false` (and changes
    /// nothing) for unknown names.
    pub fn set(&mut self, flag: &str, value: bool) -> bool {
        match flag {
            flags::AUTO_COPY => self.auto_copy = value,
            flags::CLEAN_ALL_LINEBREAKS => self.clean_all_linebreaks = value,
            flags::AUTO_ADD_LINEBREAKS => self.auto_add_linebreaks = value,
            flags::REMOVE_SPACES_BETWEEN_CHINESE => self.remove_spaces_between_chinese = value,
            flags::ADD_SPACE_BETWEEN_CHINESE_AND_ENGLISH => {
                self.add_space_between_chinese_and_english = value
            }
            flags::USE_FULL_WIDTH_PUNCTUATION_MARKS => {
                self.use_full_width_punctuation_marks = value
            }
            _ => return false,
        }
        true
    }

    /// Parse a persisted settings blob. Missing keys fall back to `false`;
    /// an unparsable blob is treated as no prior settings at all.
    pub fn from_json(blob: &str) -> Option<Self> {
        serde_json::from_str(blob).ok()
    }

    pub fn to_json(&self) -> String {
        // Serialization of a field-only struct cannot fail.
        serde_json::to_string(self).unwrap_or_default()
    }
}
