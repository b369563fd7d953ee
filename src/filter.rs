use crate::document::BibDocument;
use crate::report::UnusedKeys;

/// Result of one filtering pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StripOutcome {
    /// the reassembled bibliography with the unused entries dropped
    pub bib: String,
    /// citation keys of the dropped entries, in source order
    pub removed: Vec<String>,
}

impl StripOutcome {
    /// Number of entries that were dropped.
    pub fn removed_count(&self) -> usize {
        self.removed.len()
    }
}

/// Drop every entry of `bib` whose citation key appears in `unused` and
/// reassemble the rest unchanged.
///
/// Entries without a recognizable key (comments, stray `@` markers,
/// malformed entries) are always kept. Kept entries stay byte-identical and
/// in source order; no separators are inserted, since each entry body still
/// carries its own trailing whitespace. With an empty key set the output
/// equals the input.
pub fn strip(unused: &UnusedKeys, bib: &str) -> StripOutcome {
    let doc = BibDocument::split(bib);

    let mut cleaned = String::with_capacity(bib.len());
    cleaned.push_str(doc.header);
    let mut removed = Vec::new();

    for entry in &doc.entries {
        match entry.citation_key() {
            Some(key) if unused.contains(key) => removed.push(key.to_string()),
            _ => {
                cleaned.push('@');
                cleaned.push_str(entry.body);
            }
        }
    }

    StripOutcome {
        bib: cleaned,
        removed,
    }
}
