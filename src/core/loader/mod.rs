//! Loading catalogs and completed-course lists from files

pub mod catalog_toml;

pub use catalog_toml::{load_catalog, parse_catalog_toml};

use std::collections::HashSet;
use std::error::Error;
use std::fs;
use std::path::Path;

/// Parse a completed-course list.
///
/// Codes are separated by commas, semicolons or newlines. Surrounding
/// whitespace is trimmed; blank entries and `#` comment lines are skipped.
#[must_use]
pub fn parse_completed(text: &str) -> HashSet<String> {
    text.lines()
        .map(|line| line.split('#').next().unwrap_or_default())
        .flat_map(|line| line.split([',', ';']))
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .map(str::to_string)
        .collect()
}

/// Load a completed-course list from a file (see [`parse_completed`])
///
/// # Errors
/// Returns an error if the file cannot be read
pub fn load_completed<P: AsRef<Path>>(path: P) -> Result<HashSet<String>, Box<dyn Error>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_completed(&content))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_completed_mixed_separators() {
        let completed = parse_completed("CS1800, CS2500;MATH1341\n\n  PHYS1151  \n");
        assert_eq!(completed.len(), 4);
        assert!(completed.contains("CS2500"));
        assert!(completed.contains("PHYS1151"));
    }

    #[test]
    fn test_parse_completed_comments_and_duplicates() {
        let completed = parse_completed("# finished in fall\nCS1800 # with honors\nCS1800\n");
        assert_eq!(completed.len(), 1);
        assert!(completed.contains("CS1800"));
    }

    #[test]
    fn test_parse_completed_empty() {
        assert!(parse_completed("").is_empty());
        assert!(parse_completed(" , ;\n").is_empty());
    }
}
