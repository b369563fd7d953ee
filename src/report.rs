use std::collections::HashSet;
use std::fs;
use std::io;
use std::io::Read;
use std::path;
use std::str;

/// Lines of the report marking an entry as unused carry this prefix.
const UNUSED_MARKER: &str = "=> ";

/// The set of citation keys a checkcites report flags as unused.
///
/// Only lines whose trimmed form starts with `=> ` contribute a key; the key
/// is the last whitespace-separated token of such a line. Every other line
/// (summary text, warnings, blank lines) is ignored. An empty report is
/// valid and simply removes nothing.
#[derive(Debug, Clone, Default)]
pub struct UnusedKeys {
    keys: HashSet<String>,
}

impl UnusedKeys {
    /// Parse the report stored at `path`.
    pub fn from_file<P: AsRef<path::Path>>(path: P) -> Result<UnusedKeys, io::Error> {
        let mut fd = fs::File::open(path)?;
        let mut buf = String::new();
        fd.read_to_string(&mut buf)?;
        Ok(Self::from_string(buf))
    }

    /// Parse report text already held in memory.
    pub fn from_string(report: String) -> UnusedKeys {
        let mut keys = HashSet::new();
        for line in report.lines() {
            let trimmed = line.trim();
            if !trimmed.starts_with(UNUSED_MARKER) {
                continue;
            }
            if let Some(key) = trimmed.split_whitespace().last() {
                keys.insert(key.to_string());
            }
        }
        UnusedKeys { keys }
    }

    /// Is `key` flagged as unused?
    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    /// Number of distinct flagged keys.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl str::FromStr for UnusedKeys {
    type Err = io::Error;

    /// Parse report text. Never fails; the error type only mirrors the
    /// file-based constructor so both spell the same at the call site.
    fn from_str(report: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_string(report.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error;
    use std::str::FromStr;

    #[test]
    fn test_marked_lines_only() -> Result<(), Box<dyn error::Error>> {
        let keys = UnusedKeys::from_str("=> smith2020\nsome other line\n=> doe2019")?;
        assert_eq!(keys.len(), 2);
        assert!(keys.contains("smith2020"));
        assert!(keys.contains("doe2019"));
        assert!(!keys.contains("some"));
        Ok(())
    }

    #[test]
    fn test_last_token_wins() -> Result<(), Box<dyn error::Error>> {
        let keys = UnusedKeys::from_str("=> unused reference: knuth1973")?;
        assert_eq!(keys.len(), 1);
        assert!(keys.contains("knuth1973"));
        Ok(())
    }

    #[test]
    fn test_surrounding_whitespace() -> Result<(), Box<dyn error::Error>> {
        let keys = UnusedKeys::from_str("   => indented2001   \r\n=> windows1998\r\n")?;
        assert!(keys.contains("indented2001"));
        assert!(keys.contains("windows1998"));
        assert_eq!(keys.len(), 2);
        Ok(())
    }

    #[test]
    fn test_duplicates_collapse() -> Result<(), Box<dyn error::Error>> {
        let keys = UnusedKeys::from_str("=> twice2022\n=> twice2022")?;
        assert_eq!(keys.len(), 1);
        Ok(())
    }

    #[test]
    fn test_bare_marker_ignored() -> Result<(), Box<dyn error::Error>> {
        // “=> ” trims down to “=>” and no longer matches the marker
        let keys = UnusedKeys::from_str("=> \n=>\n=>key_without_space")?;
        assert!(keys.is_empty());
        Ok(())
    }

    #[test]
    fn test_empty_report() -> Result<(), Box<dyn error::Error>> {
        let keys = UnusedKeys::from_str("")?;
        assert!(keys.is_empty());
        assert_eq!(keys.len(), 0);
        Ok(())
    }
}
