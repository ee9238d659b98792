//! Chord Analyzer
//!
//! Conversion of space-separated chord progressions into Roman-numeral
//! analysis relative to a key.

use std::fmt::Display;
use thiserror::Error;

/// Number of letters in the diatonic note alphabet A..G
const NOTE_LETTERS: u8 = 7;

/// Scale-degree numerals, indexed by `degree - 1`
const NUMERALS: [&str; NOTE_LETTERS as usize] = ["i", "ii", "iii", "iv", "v", "vi", "vii"];

/// The glyph recognized as a diminished-quality marker in chord suffixes.
pub const DIMINISHED_SYMBOL: char = '°';

/// Chord quality read from a token's marker characters.
///
/// Quality only decides numeral casing; any marker text itself stays in the
/// token's suffix.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ChordQuality {
    /// Major chord (marker `M`, e.g. "CM")
    Major,
    /// Minor chord (marker `m`, e.g. "Am")
    Minor,
    /// Diminished chord (marker `°`, e.g. "B°")
    Diminished,
    /// No quality marker present
    Unspecified,
}

impl Display for ChordQuality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

/// Errors when converting a progression
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// The progression contained no chord tokens after trimming.
    #[error("chord progression is empty")]
    EmptyProgression,

    /// No key was supplied.
    #[error("key is empty")]
    EmptyKey,

    /// The key did not start with a note letter in A..G.
    #[error("key `{letter}` does not name a note A-G")]
    MalformedKey {
        /// The first character of the rejected key.
        letter: char,
    },

    /// A chord token could not be mapped to a scale degree.
    #[error("cannot map chord `{token}` to a scale degree")]
    MalformedChord {
        /// The offending whitespace-delimited token.
        token: String,
    },
}

/// A completed Roman-numeral analysis of one progression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RomanAnalysis {
    /// One converted chord symbol per input token, in input order.
    pub chords: Vec<String>,
    /// All converted symbols joined with single spaces.
    pub analysis: String,
    /// The first whitespace-delimited symbol of `analysis`.
    pub first: String,
}

/// Converts chord progressions into Roman-numeral analysis.
///
/// The analyzer holds no mutable state; conversions are pure, idempotent,
/// and independent of each other.
#[derive(Debug, Default, Copy, Clone)]
pub struct ChordAnalyzer;

impl ChordAnalyzer {
    /// Create an analyzer.
    pub fn new() -> Self {
        ChordAnalyzer
    }

    /// Convert a space-separated chord progression into Roman numerals
    /// relative to `key`.
    ///
    /// Scale degrees are letter distances within the A..G alphabet:
    /// accidentals on the key or on a chord root never shift the degree,
    /// only the surrounding text. Within each token the root substring (two
    /// characters when a `b` or `#` follows the letter, otherwise one) is
    /// replaced at its first occurrence only, so a root letter recurring
    /// later in the token (e.g. the second `d` position in "Add9") is left
    /// in place. A `M` marker upper-cases the numeral; `m`, `°`, or no
    /// marker leave it lower-case.
    ///
    /// Returns:
    /// - `Err(EmptyProgression)` / `Err(EmptyKey)` for blank inputs.
    /// - `Err(MalformedKey)` if the key does not start with A-G.
    /// - `Err(MalformedChord)` at the first token whose root is not A-G or
    ///   whose computed degree falls outside 1..=7; no partial result is
    ///   produced.
    pub fn convert(&self, progression: &str, key: &str) -> Result<RomanAnalysis, AnalysisError> {
        let progression = progression.trim();
        if progression.is_empty() {
            return Err(AnalysisError::EmptyProgression);
        }
        let key_letter = key.chars().next().ok_or(AnalysisError::EmptyKey)?;
        let key_index =
            alphabet_index(key_letter).ok_or(AnalysisError::MalformedKey { letter: key_letter })?;

        let mut chords = Vec::new();
        for token in progression.split(' ').filter(|t| !t.is_empty()) {
            chords.push(self.convert_token(token, key_index)?);
        }

        let analysis = chords.join(" ");
        let first = analysis.split_whitespace().next().unwrap_or("").to_string();

        Ok(RomanAnalysis {
            chords,
            analysis,
            first,
        })
    }

    /// Scale degree (1..=7) of `root` relative to `key`, by letter distance.
    ///
    /// Fails with `MalformedKey` when `key` is not a letter A-G, and with
    /// `MalformedChord` when `root` is not A-G or the wrapped distance
    /// falls outside 1..=7 (a root exactly one letter below the key).
    pub fn scale_degree(&self, root: char, key: char) -> Result<u8, AnalysisError> {
        let key_index = alphabet_index(key).ok_or(AnalysisError::MalformedKey { letter: key })?;
        degree_of(root, key_index).ok_or_else(|| AnalysisError::MalformedChord {
            token: root.to_string(),
        })
    }

    /// Read the quality marker out of a chord token.
    ///
    /// Containment checks in fixed order: `M` wins over `m`, which wins
    /// over `°`; a token carrying none of the three is `Unspecified`.
    pub fn classify_quality(&self, token: &str) -> ChordQuality {
        if token.contains('M') {
            ChordQuality::Major
        } else if token.contains('m') {
            ChordQuality::Minor
        } else if token.contains(DIMINISHED_SYMBOL) {
            ChordQuality::Diminished
        } else {
            ChordQuality::Unspecified
        }
    }

    /// Convert one whitespace-delimited chord token.
    fn convert_token(&self, token: &str, key_index: u8) -> Result<String, AnalysisError> {
        let malformed = || AnalysisError::MalformedChord {
            token: token.to_string(),
        };

        let root_letter = token.chars().next().ok_or_else(malformed)?;
        let degree = degree_of(root_letter, key_index).ok_or_else(malformed)?;
        // Range-checked above; a miss is an error, never a panic.
        let numeral: &str = NUMERALS
            .get(usize::from(degree) - 1)
            .copied()
            .ok_or_else(malformed)?;

        let numeral = match self.classify_quality(token) {
            ChordQuality::Major => numeral.to_uppercase(),
            _ => numeral.to_string(),
        };

        // Root substring is two chars when an accidental follows the letter.
        let root_len = match token.chars().nth(1) {
            Some('b' | '#') => root_letter.len_utf8() + 1,
            _ => root_letter.len_utf8(),
        };
        Ok(token.replacen(&token[..root_len], &numeral, 1))
    }
}

/// Position of a note letter within the A..G alphabet, 1-based.
fn alphabet_index(letter: char) -> Option<u8> {
    match letter.to_ascii_uppercase() {
        upper @ 'A'..='G' => Some(upper as u8 - b'A' + 1),
        _ => None,
    }
}

/// Letter distance from the key wrapped into 1..=7, or `None` when the
/// wrapped value still falls out of range.
fn degree_of(root: char, key_index: u8) -> Option<u8> {
    let root_index = alphabet_index(root)?;
    let mut degree = i16::from(root_index) - i16::from(key_index) + 1;
    if degree < 0 {
        degree += i16::from(NOTE_LETTERS);
    }
    if (1..=i16::from(NOTE_LETTERS)).contains(&degree) {
        Some(degree as u8)
    } else {
        None
    }
}
