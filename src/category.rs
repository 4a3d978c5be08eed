//! Extension-based file categorization.
//!
//! Maps file extensions to named categories ("Documents", "Images", ...).
//! The table is an explicit list of (category name, extension set) pairs so
//! callers can replace it from configuration instead of patching code.
//!
//! # Examples
//!
//! ```
//! use sortdir::category::CategoryTable;
//!
//! let table = CategoryTable::default();
//! assert_eq!(table.classify("pdf"), "Documents");
//! assert_eq!(table.classify(".PNG"), "Images");
//! assert_eq!(table.classify("xyz"), "Others");
//! ```

use std::collections::HashSet;

/// Name of the fallback category for unrecognized extensions.
pub const OTHERS: &str = "Others";

/// A single named category with the extensions it claims.
#[derive(Debug, Clone)]
pub struct Category {
    /// Category name, also used as the subdirectory name.
    pub name: String,
    /// Lowercased extensions without the leading dot.
    extensions: HashSet<String>,
}

impl Category {
    /// Creates a category from a name and a list of extensions.
    ///
    /// Extensions are normalized: lowercased, leading dot stripped.
    pub fn new(name: &str, extensions: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            extensions: extensions
                .iter()
                .map(|ext| normalize_extension(ext))
                .collect(),
        }
    }

    /// Returns true if this category claims the given extension.
    pub fn matches(&self, ext: &str) -> bool {
        self.extensions.contains(&normalize_extension(ext))
    }
}

/// Strips a leading dot and lowercases an extension.
fn normalize_extension(ext: &str) -> String {
    ext.trim_start_matches('.').to_lowercase()
}

/// Ordered mapping from category name to extension set.
///
/// Immutable for the lifetime of a run. Lookup is linear over the
/// categories, which is fine for a table this size.
#[derive(Debug, Clone)]
pub struct CategoryTable {
    categories: Vec<Category>,
}

impl CategoryTable {
    /// Builds a table from explicit (name, extensions) pairs.
    ///
    /// The `Others` fallback is implicit and must not be listed.
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    /// Returns the category name for a file extension.
    ///
    /// Total and case-insensitive: unknown or empty extensions map to
    /// [`OTHERS`]. The extension may carry a leading dot or not.
    pub fn classify(&self, ext: &str) -> &str {
        self.categories
            .iter()
            .find(|category| category.matches(ext))
            .map(|category| category.name.as_str())
            .unwrap_or(OTHERS)
    }

    /// All category names in table order, with `Others` last.
    ///
    /// This is the set of subdirectories organize pre-creates and undo
    /// scans.
    pub fn category_names(&self) -> Vec<&str> {
        self.categories
            .iter()
            .map(|category| category.name.as_str())
            .chain(std::iter::once(OTHERS))
            .collect()
    }
}

impl Default for CategoryTable {
    /// The standard table: ten categories covering common desktop file types.
    fn default() -> Self {
        Self::new(vec![
            Category::new(
                "Documents",
                &["pdf", "doc", "docx", "txt", "rtf", "odt", "pages"],
            ),
            Category::new(
                "Images",
                &["jpg", "jpeg", "png", "gif", "bmp", "svg", "webp", "ico"],
            ),
            Category::new(
                "Videos",
                &["mp4", "avi", "mov", "wmv", "flv", "webm", "mkv", "m4v"],
            ),
            Category::new("Audio", &["mp3", "wav", "flac", "aac", "ogg", "wma", "m4a"]),
            Category::new("Archives", &["zip", "rar", "7z", "tar", "gz", "bz2", "xz"]),
            Category::new(
                "Executables",
                &["exe", "msi", "deb", "rpm", "dmg", "pkg", "app"],
            ),
            Category::new("Spreadsheets", &["xls", "xlsx", "csv", "ods"]),
            Category::new("Presentations", &["ppt", "pptx", "odp"]),
            Category::new(
                "Code",
                &["py", "js", "html", "css", "java", "cpp", "c", "php", "rb", "go"],
            ),
            Category::new("Ebooks", &["epub", "mobi", "azw", "azw3"]),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_known_extensions() {
        let table = CategoryTable::default();
        assert_eq!(table.classify("pdf"), "Documents");
        assert_eq!(table.classify("jpg"), "Images");
        assert_eq!(table.classify("mkv"), "Videos");
        assert_eq!(table.classify("flac"), "Audio");
        assert_eq!(table.classify("7z"), "Archives");
        assert_eq!(table.classify("epub"), "Ebooks");
    }

    #[test]
    fn test_classify_case_insensitive() {
        let table = CategoryTable::default();
        assert_eq!(table.classify("PDF"), "Documents");
        assert_eq!(table.classify("Pdf"), "Documents");
        assert_eq!(table.classify(".PDF"), table.classify(".pdf"));
    }

    #[test]
    fn test_classify_with_leading_dot() {
        let table = CategoryTable::default();
        assert_eq!(table.classify(".png"), "Images");
        assert_eq!(table.classify("png"), "Images");
    }

    #[test]
    fn test_classify_unknown_falls_back_to_others() {
        let table = CategoryTable::default();
        assert_eq!(table.classify("xyz"), OTHERS);
        assert_eq!(table.classify(""), OTHERS);
    }

    #[test]
    fn test_category_names_include_others_last() {
        let table = CategoryTable::default();
        let names = table.category_names();
        assert_eq!(names.first(), Some(&"Documents"));
        assert_eq!(names.last(), Some(&OTHERS));
        assert_eq!(names.len(), 11);
    }

    #[test]
    fn test_custom_table() {
        let table = CategoryTable::new(vec![Category::new("Raw", &["cr2", "nef"])]);
        assert_eq!(table.classify("CR2"), "Raw");
        assert_eq!(table.classify("pdf"), OTHERS);
        assert_eq!(table.category_names(), vec!["Raw", OTHERS]);
    }
}
