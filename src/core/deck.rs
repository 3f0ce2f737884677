//! # Deck
//!
//! The fixed, ordered list of slides shown in one session.
//!
//! A deck file is plain Markdown. Slides are separated by a line that holds
//! nothing but `---`:
//!
//! ```text
//! # First slide
//! Some text.
//!
//! ---
//!
//! # Second slide
//! ```
//!
//! Separators inside fenced code blocks don't split. Chunks that are only
//! whitespace are skipped, so a leading or doubled separator is harmless.
//!
//! Once built, a `Deck` is never mutated: it has no `push`/`remove` and hands
//! out shared references only.

use log::{debug, info};
use std::fmt;
use std::fs;
use std::path::Path;

include!(concat!(env!("OUT_DIR"), "/builtin_decks.rs"));

/// Name of the deck used when none is given on the command line or in config.
pub const DEFAULT_DECK: &str = "orientation";

const SLIDE_SEPARATOR: &str = "---";

/// One opaque unit of slide content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    /// Text of the first heading, or "Slide N" when there is none.
    pub title: String,
    /// Markdown source.
    pub body: String,
}

impl Slide {
    fn from_markdown(position: usize, body: &str) -> Self {
        let body = body.trim().to_string();
        let title = first_heading(&body).unwrap_or_else(|| format!("Slide {}", position + 1));
        Self { title, body }
    }
}

#[derive(Debug, Clone)]
pub struct Deck {
    slides: Vec<Slide>,
}

#[derive(Debug)]
pub enum DeckError {
    Io(std::io::Error),
    Empty,
    UnknownBuiltin(String),
}

impl fmt::Display for DeckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeckError::Io(e) => write!(f, "deck I/O error: {e}"),
            DeckError::Empty => write!(f, "deck contains no slides"),
            DeckError::UnknownBuiltin(name) => {
                write!(f, "no built-in deck named '{name}' (available: {})", builtin_names().join(", "))
            }
        }
    }
}

impl std::error::Error for DeckError {}

impl Deck {
    /// Parse Markdown source into a deck. Fails only if no slide survives.
    pub fn parse(source: &str) -> Result<Self, DeckError> {
        let slides: Vec<Slide> = split_slides(source)
            .into_iter()
            .filter(|chunk| !chunk.trim().is_empty())
            .enumerate()
            .map(|(position, chunk)| Slide::from_markdown(position, &chunk))
            .collect();

        if slides.is_empty() {
            return Err(DeckError::Empty);
        }
        debug!("Parsed deck with {} slides", slides.len());
        Ok(Self { slides })
    }

    pub fn load(path: &Path) -> Result<Self, DeckError> {
        let source = fs::read_to_string(path).map_err(DeckError::Io)?;
        let deck = Self::parse(&source)?;
        info!("Loaded deck from {} ({} slides)", path.display(), deck.len());
        Ok(deck)
    }

    /// Look up a deck embedded at build time from `decks/`.
    pub fn builtin(name: &str) -> Result<Self, DeckError> {
        let (_, source) = BUILTIN_DECKS
            .iter()
            .find(|(builtin, _)| *builtin == name)
            .ok_or_else(|| DeckError::UnknownBuiltin(name.to_string()))?;
        let deck = Self::parse(source)?;
        info!("Loaded built-in deck '{}' ({} slides)", name, deck.len());
        Ok(deck)
    }

    /// Resolve a deck argument. Anything that looks like a path (an existing
    /// file, a path separator, or a `.md` extension) is loaded from disk;
    /// everything else names a built-in deck.
    pub fn open(arg: &str) -> Result<Self, DeckError> {
        let path = Path::new(arg);
        if looks_like_path(path) {
            Self::load(path)
        } else {
            Self::builtin(arg)
        }
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Always false for a constructed deck.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }
}

fn looks_like_path(path: &Path) -> bool {
    path.is_file()
        || path.components().count() > 1
        || path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("md"))
}

pub fn builtin_names() -> Vec<&'static str> {
    BUILTIN_DECKS.iter().map(|(name, _)| *name).collect()
}

/// Split on separator lines, ignoring separators inside fenced code.
fn split_slides(source: &str) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut open_fence: Option<&str> = None;

    for line in source.lines() {
        let trimmed = line.trim();

        if let Some(fence) = open_fence {
            if trimmed.starts_with(fence) {
                open_fence = None;
            }
        } else if trimmed.starts_with("```") {
            open_fence = Some("```");
        } else if trimmed.starts_with("~~~") {
            open_fence = Some("~~~");
        } else if trimmed == SLIDE_SEPARATOR {
            chunks.push(std::mem::take(&mut current));
            continue;
        }

        current.push_str(line);
        current.push('\n');
    }
    chunks.push(current);
    chunks
}

/// First ATX heading outside fenced code, with the `#` markers stripped.
fn first_heading(body: &str) -> Option<String> {
    let mut in_fence = false;
    for line in body.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```") || trimmed.starts_with("~~~") {
            in_fence = !in_fence;
            continue;
        }
        if in_fence || !trimmed.starts_with('#') {
            continue;
        }
        let text = trimmed.trim_start_matches('#');
        // "#hashtag" is a paragraph, not a heading
        if !text.is_empty() && !text.starts_with(' ') {
            continue;
        }
        let text = text.trim().trim_end_matches('#').trim();
        if !text.is_empty() {
            return Some(text.to_string());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_separator_lines() {
        let deck = Deck::parse("# One\nbody\n---\n# Two\n---\n# Three").unwrap();
        assert_eq!(deck.len(), 3);
        let titles: Vec<&str> = deck.slides().iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["One", "Two", "Three"]);
    }

    #[test]
    fn separator_inside_code_fence_does_not_split() {
        let source = "# Code\n```yaml\n---\nkey: value\n```\n---\n# After";
        let deck = Deck::parse(source).unwrap();
        assert_eq!(deck.len(), 2);
        assert!(deck.get(0).unwrap().body.contains("key: value"));
        assert!(deck.get(0).unwrap().body.contains("---"));
    }

    #[test]
    fn tilde_fence_is_respected() {
        let deck = Deck::parse("~~~\n---\n~~~\n").unwrap();
        assert_eq!(deck.len(), 1);
    }

    #[test]
    fn whitespace_chunks_are_skipped() {
        let deck = Deck::parse("---\n\n# Only\n---\n   \n---\n").unwrap();
        assert_eq!(deck.len(), 1);
        assert_eq!(deck.get(0).unwrap().title, "Only");
    }

    #[test]
    fn separator_with_surrounding_spaces_splits() {
        let deck = Deck::parse("# A\n  ---  \n# B").unwrap();
        assert_eq!(deck.len(), 2);
    }

    #[test]
    fn table_delimiter_row_is_not_a_separator() {
        let deck = Deck::parse("# T\n| a | b |\n| --- | --- |\n| 1 | 2 |").unwrap();
        assert_eq!(deck.len(), 1);
    }

    #[test]
    fn empty_source_is_an_error() {
        assert!(matches!(Deck::parse(""), Err(DeckError::Empty)));
        assert!(matches!(Deck::parse("---\n \n---"), Err(DeckError::Empty)));
    }

    #[test]
    fn untitled_slide_gets_positional_title() {
        let deck = Deck::parse("# Titled\n---\njust text").unwrap();
        assert_eq!(deck.get(1).unwrap().title, "Slide 2");
    }

    #[test]
    fn title_skips_kicker_paragraph_and_hashtags() {
        let deck = Deck::parse("**KICKER**\n\n#tag\n\n## Real Title ##\n").unwrap();
        assert_eq!(deck.get(0).unwrap().title, "Real Title");
    }

    #[test]
    fn heading_inside_code_is_not_a_title() {
        let deck = Deck::parse("```sh\n# comment\n```\n# Title").unwrap();
        assert_eq!(deck.get(0).unwrap().title, "Title");
    }

    #[test]
    fn builtin_orientation_deck_has_24_slides() {
        let deck = Deck::builtin(DEFAULT_DECK).unwrap();
        assert_eq!(deck.len(), 24);
        assert_eq!(deck.get(0).unwrap().title, "GTQ 1급 자격취득 포토샵 과정");
        assert!(deck.get(23).is_some());
        assert!(deck.get(24).is_none());
    }

    #[test]
    fn unknown_builtin_is_reported() {
        let err = Deck::builtin("nope").unwrap_err();
        assert!(err.to_string().contains("nope"));
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err = Deck::load(Path::new("/definitely/not/here.md")).unwrap_err();
        assert!(matches!(err, DeckError::Io(_)));
    }

    #[test]
    fn open_missing_markdown_file_is_io_error() {
        // A typo in a file name must not be reported as an unknown built-in
        let err = Deck::open("tlak.md").unwrap_err();
        assert!(
            matches!(&err, DeckError::Io(e) if e.kind() == std::io::ErrorKind::NotFound),
            "{err}"
        );
        let err = Deck::open("decks/missing").unwrap_err();
        assert!(matches!(err, DeckError::Io(_)));
    }

    #[test]
    fn open_bare_name_looks_up_builtin() {
        assert_eq!(Deck::open(DEFAULT_DECK).unwrap().len(), 24);
        assert!(matches!(
            Deck::open("missing-deck").unwrap_err(),
            DeckError::UnknownBuiltin(_)
        ));
    }
}
