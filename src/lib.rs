//! This crate removes unused entries from `.bib` files in pure, safe rust.
//!
//! Tools like [checkcites](https://ctan.org/pkg/checkcites) compare a `.bib`
//! file against the `\cite` commands of a document and report every entry
//! that is never referenced. Each unused entry shows up in the report on a
//! line like this:
//!
//! ```text
//! => knuth1973
//! ```
//!
//! Given such a report and the bibliography itself, this crate drops the
//! flagged entries and keeps everything else byte-for-byte. An entry is the
//! raw text following an `@` marker:
//!
//! ```tex
//! @book{knuth1973,
//!     author    = {Donald E. Knuth},
//!     title     = {The Art of Computer Programming},
//!     publisher = {Addison-Wesley},
//!     year      = {1973}
//! }
//! ```
//!
//! In this example, we call `knuth1973` the citation key. Only the key is
//! inspected; the rest of the entry body is treated as opaque text, so no
//! assumptions are made about field syntax. Text before the first `@`
//! (comments, preamble) is always preserved, and so is any `@` segment whose
//! key cannot be recognized.
//!
//! The API is one pure function over the two texts:
//!
//! ```rust
//! use bibprune::{strip, UnusedKeys};
//! use std::str::FromStr;
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let unused = UnusedKeys::from_str("=> smith2020")?;
//!     let bib = "% my refs\n@article{smith2020, title={X}}\n@book{lee2021, title={Y}}";
//!     let outcome = strip(&unused, bib);
//!     assert_eq!(outcome.bib, "% my refs\n@book{lee2021, title={Y}}");
//!     assert_eq!(outcome.removed, vec!["smith2020".to_string()]);
//!     Ok(())
//! }
//! ```
//!
//! The entire source string is kept in memory and filtered in one pass.

mod document;
mod filter;
mod report;

pub use crate::document::BibDocument;
pub use crate::filter::strip;
pub use crate::filter::StripOutcome;
pub use crate::report::UnusedKeys;
