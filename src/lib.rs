//! # chord_analyzer
//!
//! Roman-numeral harmonic analysis of chord progressions: convert
//! space-separated chord symbols (e.g. "C Am F G") into scale-degree
//! numerals relative to a key.
//!
//! ## Example
//! ```rust
//! use chord_analyzer::{ChordAnalyzer, DisplayState};
//!
//! fn run() -> Result<(), Box<dyn std::error::Error>> {
//!     // 1) Convert a progression directly
//!     let analyzer = ChordAnalyzer::new();
//!     let result = analyzer.convert("C Am F G", "C")?;
//!     assert_eq!(result.analysis, "i vim iv v");
//!     assert_eq!(result.first, "i");
//!
//!     // 2) Or drive a front-end panel
//!     let mut panel = DisplayState::new();
//!     panel.submit("Dm G C", "C")?;
//!     assert_eq!(panel.analysis(), "iim v i");
//!
//!     Ok(())
//! }
//! ```
//!
//! Degrees are letter distances within the A..G alphabet; accidentals on
//! the key or a chord root never shift the degree, only the suffix text.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rust_2018_idioms)]
#![deny(clippy::all)]

/// High-level progression conversion API.
pub use chord_analyzer::{
    AnalysisError, ChordAnalyzer, ChordQuality, RomanAnalysis, DIMINISHED_SYMBOL,
};

/// Reactive display surface for front-ends.
pub use display::{ClipboardSink, DisplayError, DisplayState, Notice};

/// Conversion core module.
pub mod chord_analyzer;

/// Display state module.
pub mod display;
