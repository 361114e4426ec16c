//! Optional cleanup of the rendered Markdown body.

use crate::error::{Error, Result};
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// Cleanup preset levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CleanupPreset {
    /// Unicode NFC normalization only
    Minimal,
    /// NFC + replacement char removal + line trimming + blank line capping
    #[default]
    Standard,
}

/// Options for body cleanup.
#[derive(Debug, Clone)]
pub struct CleanupOptions {
    /// Normalize Unicode to NFC form
    pub normalize_unicode: bool,

    /// Remove Unicode replacement character (U+FFFD)
    pub remove_replacement_char: bool,

    /// Strip trailing spaces and tabs from every line
    pub trim_line_ends: bool,

    /// Maximum consecutive blank lines (0 = unlimited)
    pub max_blank_lines: u8,
}

impl CleanupOptions {
    /// Create options from a preset.
    pub fn from_preset(preset: CleanupPreset) -> Self {
        match preset {
            CleanupPreset::Minimal => Self::minimal(),
            CleanupPreset::Standard => Self::standard(),
        }
    }

    /// Minimal cleanup options.
    pub fn minimal() -> Self {
        Self {
            normalize_unicode: true,
            remove_replacement_char: false,
            trim_line_ends: false,
            max_blank_lines: 0,
        }
    }

    /// Standard cleanup options.
    pub fn standard() -> Self {
        Self {
            normalize_unicode: true,
            remove_replacement_char: true,
            trim_line_ends: true,
            max_blank_lines: 1,
        }
    }
}

impl Default for CleanupOptions {
    fn default() -> Self {
        Self::standard()
    }
}

/// Body cleanup pipeline. Front matter is never passed through it.
pub struct CleanupPipeline {
    options: CleanupOptions,
    line_end_regex: Regex,
}

impl CleanupPipeline {
    /// Create a new cleanup pipeline with the given options.
    pub fn new(options: CleanupOptions) -> Self {
        Self {
            options,
            line_end_regex: Regex::new(r"(?m)[ \t]+$").unwrap(),
        }
    }

    /// Create a pipeline from a preset.
    pub fn from_preset(preset: CleanupPreset) -> Self {
        Self::new(CleanupOptions::from_preset(preset))
    }

    /// Process body text. A non-empty result keeps a single trailing newline.
    pub fn process(&self, text: &str) -> Result<String> {
        let mut result = text.to_string();

        if self.options.normalize_unicode {
            result = result.nfc().collect();
        }

        if self.options.remove_replacement_char {
            result = result.replace('\u{FFFD}', "");
        }

        if self.options.trim_line_ends {
            result = self.line_end_regex.replace_all(&result, "").into_owned();
        }

        if self.options.max_blank_lines > 0 {
            result = self.limit_blank_lines(&result)?;
        }

        let trimmed = result.trim_end();
        if trimmed.is_empty() {
            Ok(String::new())
        } else {
            Ok(format!("{}\n", trimmed))
        }
    }

    fn limit_blank_lines(&self, text: &str) -> Result<String> {
        let max_newlines = self.options.max_blank_lines as usize + 1;
        let pattern = format!(r"\n{{{},}}", max_newlines + 1);
        let re = Regex::new(&pattern).map_err(|e| Error::Render(e.to_string()))?;
        Ok(re
            .replace_all(text, "\n".repeat(max_newlines).as_str())
            .into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nfc_normalization() {
        let pipeline = CleanupPipeline::from_preset(CleanupPreset::Minimal);
        // "e" + combining acute accent
        let result = pipeline.process("caf\u{0065}\u{0301}\n").unwrap();
        assert_eq!(result, "caf\u{00e9}\n");
    }

    #[test]
    fn test_remove_replacement_char() {
        let pipeline = CleanupPipeline::from_preset(CleanupPreset::Standard);
        assert_eq!(pipeline.process("Hello\u{FFFD}World").unwrap(), "HelloWorld\n");
    }

    #[test]
    fn test_blank_lines_capped() {
        let pipeline = CleanupPipeline::from_preset(CleanupPreset::Standard);
        assert_eq!(pipeline.process("a\n\n\n\nb\n").unwrap(), "a\n\nb\n");
    }

    #[test]
    fn test_trailing_spaces_trimmed_but_indent_kept() {
        let pipeline = CleanupPipeline::from_preset(CleanupPreset::Standard);
        assert_eq!(
            pipeline.process("- a   \n  - b\t\n").unwrap(),
            "- a\n  - b\n"
        );
    }

    #[test]
    fn test_empty_input() {
        let pipeline = CleanupPipeline::from_preset(CleanupPreset::Standard);
        assert_eq!(pipeline.process("").unwrap(), "");
    }
}
