//! Display State
//!
//! Engine-free display surface for a chord-analysis front-end: the current
//! analysis output plus transient, timestamped notice and error banners
//! that a renderer fades on its own schedule.

use crate::chord_analyzer::{AnalysisError, ChordAnalyzer, DIMINISHED_SYMBOL};
use std::time::{Duration, Instant};
use thiserror::Error;

/// Errors from display-level operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DisplayError {
    /// A copy was requested before any successful conversion.
    #[error("nothing to copy yet")]
    ResultEmpty,
}

/// Receiver of copied text.
///
/// Implement over the OS clipboard, a terminal escape writer, or a plain
/// buffer in tests; the display state never touches the OS itself.
pub trait ClipboardSink {
    /// Replace the sink's contents with `text`.
    fn set_text(&mut self, text: &str);
}

/// A transient banner message and the instant it was posted.
#[derive(Debug, Clone)]
pub struct Notice {
    text: String,
    posted: Instant,
}

impl Notice {
    fn now(text: String) -> Self {
        Notice {
            text,
            posted: Instant::now(),
        }
    }

    /// The banner text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// When the banner was posted.
    pub fn posted(&self) -> Instant {
        self.posted
    }

    /// How long the banner has been showing.
    pub fn age(&self) -> Duration {
        self.posted.elapsed()
    }
}

/// Reactive display state for one analysis panel.
///
/// Front-ends call the mutating operations from their input handlers and
/// render the four fields however they like; banner fade-out is the
/// renderer's business, driven by [`Notice::age`].
#[derive(Debug, Default)]
pub struct DisplayState {
    analyzer: ChordAnalyzer,
    analysis: String,
    first_chord: String,
    notice: Option<Notice>,
    error: Option<Notice>,
}

impl DisplayState {
    /// Create an empty panel.
    pub fn new() -> Self {
        Self::default()
    }

    /// Run a conversion and update the panel.
    ///
    /// On success the analysis and first-chord fields are replaced and any
    /// error banner is cleared. On failure the previous output is left
    /// untouched and the failure text is posted as a timestamped error
    /// banner; the error is also returned for callers that branch on it.
    pub fn submit(&mut self, progression: &str, key: &str) -> Result<(), AnalysisError> {
        match self.analyzer.convert(progression, key) {
            Ok(result) => {
                self.analysis = result.analysis;
                self.first_chord = result.first;
                self.error = None;
                Ok(())
            }
            Err(err) => {
                self.error = Some(Notice::now(err.to_string()));
                Err(err)
            }
        }
    }

    /// Push the full analysis string into `sink` and post a notice.
    ///
    /// Returns `Err(ResultEmpty)` when no conversion has succeeded yet.
    pub fn copy_analysis(&mut self, sink: &mut dyn ClipboardSink) -> Result<(), DisplayError> {
        if self.analysis.is_empty() {
            return Err(DisplayError::ResultEmpty);
        }
        sink.set_text(&self.analysis);
        self.notice = Some(Notice::now("analysis copied".to_string()));
        Ok(())
    }

    /// Push the diminished glyph `°` into `sink`, for pasting into chord
    /// input, and post a notice.
    pub fn copy_diminished_symbol(&mut self, sink: &mut dyn ClipboardSink) {
        sink.set_text(&DIMINISHED_SYMBOL.to_string());
        self.notice = Some(Notice::now(format!("`{DIMINISHED_SYMBOL}` copied")));
    }

    /// Clear the output fields and both banners.
    pub fn reset(&mut self) {
        self.analysis.clear();
        self.first_chord.clear();
        self.notice = None;
        self.error = None;
    }

    /// The joined analysis string; empty until a submit succeeds.
    pub fn analysis(&self) -> &str {
        &self.analysis
    }

    /// The first converted chord symbol; empty until a submit succeeds.
    pub fn first_chord(&self) -> &str {
        &self.first_chord
    }

    /// The current notice banner, if one is showing.
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// The current error banner, if one is showing.
    pub fn error(&self) -> Option<&Notice> {
        self.error.as_ref()
    }
}
