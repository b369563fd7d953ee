use std::sync::OnceLock;

use regex::Regex;

/// Pattern recognizing the head of an entry body: the entry type (word
/// characters), an opening brace, then everything up to the first comma as
/// the citation key. Anchored, so a stray `@` followed by prose never
/// matches. Keys containing a comma are truncated at that comma.
const KEY_PATTERN: &str = r"^\s*\w+\s*\{\s*([^,]+)";

fn key_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(KEY_PATTERN).expect("KEY_PATTERN is a valid pattern"))
}

/// The raw text of one bibliography entry, i.e. everything between its
/// leading `@` (not included) and the next `@` (or end of input). Opaque
/// except for the citation key at its head.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawEntry<'s> {
    /// entry text, e.g. “book{knuth1973, year = {1973}}\n”
    pub body: &'s str,
}

impl<'s> RawEntry<'s> {
    /// Extract the citation key from the head of the entry body, e.g.
    /// “knuth1973” from “book{knuth1973, …”. Returns `None` for anything not
    /// shaped like `type{key` — a comment block, a stray `@`, a malformed
    /// entry.
    pub fn citation_key(&self) -> Option<&'s str> {
        key_pattern()
            .captures(self.body)
            .and_then(|caps| caps.get(1))
            .map(|key| key.as_str().trim())
    }
}

/// A bibliography text split at its `@` markers: a header (comments and
/// preamble before the first `@`, possibly empty) followed by the entry
/// bodies in source order. Splitting is lossless: the header plus every body
/// re-prefixed with `@` reproduces the source byte-for-byte.
#[derive(Debug, Clone)]
pub struct BibDocument<'s> {
    /// text before the first `@`; the whole source if there is no `@`
    pub header: &'s str,
    /// entry bodies in source order
    pub entries: Vec<RawEntry<'s>>,
}

impl<'s> BibDocument<'s> {
    /// Split a bibliography source into header and entry bodies.
    pub fn split(src: &'s str) -> BibDocument<'s> {
        let mut segments = src.split('@');
        // split() always yields at least one segment, even for ""
        let header = segments.next().unwrap_or("");
        let entries = segments.map(|body| RawEntry { body }).collect();
        BibDocument { header, entries }
    }
}
