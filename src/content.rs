use std::fs;
use std::path::Path;

use anyhow::{Context, bail};

pub const HEADER_TITLE: &str = "You Light Up My World!";
pub const FOOTER_TEXT: &str = "Made with love to brighten your day.";

/// Captions are paired with images in file order, cycling when the
/// directory holds more images than captions.
pub const CAPTIONS: &[&str] = &[
    "Your Smile is My Sunshine!",
    "You Make My Heart Skip a Beat!",
    "The World is Better with You!",
];

pub const QUOTES: &[&str] = &[
    "Every moment with you is like a beautiful dream.",
    "You're the one who makes my heart smile.",
    "Love is not just what I feel, it's what I live with you.",
    "You're my favorite place to go when my mind searches for peace.",
    "My love for you is a journey, starting at forever and ending at never.",
];

pub fn default_quotes() -> Vec<String> {
    QUOTES.iter().map(|q| q.to_string()).collect()
}

/// Loads quotes from a plain text file, one per line, skipping blanks.
pub fn load_quotes(path: &Path) -> anyhow::Result<Vec<String>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read quotes file {:?}", path))?;
    let quotes: Vec<String> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();
    if quotes.is_empty() {
        bail!("quotes file {:?} contains no quotes", path);
    }
    Ok(quotes)
}

pub fn caption_for(index: usize) -> &'static str {
    CAPTIONS[index % CAPTIONS.len()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn captions_cycle_past_the_list_end() {
        assert_eq!(caption_for(0), CAPTIONS[0]);
        assert_eq!(caption_for(CAPTIONS.len()), CAPTIONS[0]);
        assert_eq!(caption_for(CAPTIONS.len() + 1), CAPTIONS[1]);
    }

    #[test]
    fn quotes_file_skips_blank_lines() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "first quote\n\n  second quote  \n").unwrap();
        let quotes = load_quotes(file.path()).unwrap();
        assert_eq!(quotes, vec!["first quote", "second quote"]);
    }

    #[test]
    fn empty_quotes_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "\n   \n").unwrap();
        assert!(load_quotes(file.path()).is_err());
    }

    #[test]
    fn default_quotes_are_non_empty() {
        assert!(!default_quotes().is_empty());
    }
}
