//! Downloadable health resources.
//!
//! Each category has a directory of PDFs under the resource root. Titles and
//! language labels are derived from the file names.

use crate::category::Category;
use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;
use tracing::warn;

/// One downloadable file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    pub title: String,

    /// Path relative to the static directory, e.g. `resources/dental/x.pdf`
    pub path: String,

    pub language_label_en: Option<&'static str>,
    pub language_label_zh: Option<&'static str>,
}

static WHITESPACE_REGEX: OnceLock<Regex> = OnceLock::new();

/// Human-friendly title from a file name: extension dropped, `_` and `-`
/// turned into spaces, whitespace collapsed.
pub fn format_resource_title(filename: &str) -> String {
    let stem = Path::new(filename)
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    let spaced = stem.replace(['_', '-'], " ");

    let regex = WHITESPACE_REGEX.get_or_init(|| Regex::new(r"\s+").unwrap());
    regex.replace_all(&spaced, " ").trim().to_string()
}

/// Language labels (English, Chinese) guessed from a file name.
pub fn infer_language_labels(filename: &str) -> Option<(&'static str, &'static str)> {
    let upper = filename.to_uppercase();

    if upper.contains("COMBINED")
        || upper.contains("BILINGUAL")
        || (upper.contains("ENG") && upper.contains("CHN"))
    {
        return Some(("English & Chinese", "中英文"));
    }
    if upper.contains("CHN") || upper.contains("CHINESE") || filename.contains("中文") {
        return Some(("Chinese", "中文"));
    }
    if upper.contains("ENG") || upper.contains("ENGLISH") {
        return Some(("English", "英文"));
    }
    None
}

/// All PDFs for `category`, sorted by file name. A missing directory is an
/// empty listing.
pub fn resources_for_category(resource_root: &Path, category: Category) -> Vec<Resource> {
    let directory = resource_root.join(category.id());
    if !directory.is_dir() {
        return Vec::new();
    }

    let entries = match std::fs::read_dir(&directory) {
        Ok(entries) => entries,
        Err(e) => {
            warn!("Could not list {}: {}", directory.display(), e);
            return Vec::new();
        }
    };

    let mut files: Vec<_> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .filter(|path| {
            path.extension()
                .is_some_and(|ext| ext.to_string_lossy().eq_ignore_ascii_case("pdf"))
        })
        .collect();
    files.sort();

    files
        .iter()
        .filter_map(|path| path.file_name().map(|name| name.to_string_lossy().into_owned()))
        .map(|name| {
            let labels = infer_language_labels(&name);
            Resource {
                title: format_resource_title(&name),
                path: format!("resources/{}/{}", category.id(), name),
                language_label_en: labels.map(|(en, _)| en),
                language_label_zh: labels.map(|(_, zh)| zh),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_format_resource_title() {
        assert_eq!(format_resource_title("Heart_Health-ENG.pdf"), "Heart Health ENG");
        assert_eq!(format_resource_title("a__b  -- c.pdf"), "a b c");
        assert_eq!(format_resource_title("_edge_.PDF"), "edge");
    }

    #[test]
    fn test_infer_bilingual() {
        assert_eq!(
            infer_language_labels("flu_combined.pdf"),
            Some(("English & Chinese", "中英文"))
        );
        assert_eq!(
            infer_language_labels("flu_ENG_CHN.pdf"),
            Some(("English & Chinese", "中英文"))
        );
    }

    #[test]
    fn test_infer_single_language() {
        assert_eq!(infer_language_labels("flu_chn.pdf"), Some(("Chinese", "中文")));
        assert_eq!(infer_language_labels("流感中文.pdf"), Some(("Chinese", "中文")));
        assert_eq!(infer_language_labels("flu_english.pdf"), Some(("English", "英文")));
        assert_eq!(infer_language_labels("flu.pdf"), None);
    }

    #[test]
    fn test_missing_category_directory() {
        let temp_dir = TempDir::new().unwrap();
        assert!(resources_for_category(temp_dir.path(), Category::Dental).is_empty());
    }

    #[test]
    fn test_lists_only_pdfs_sorted() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("dental");
        std::fs::create_dir_all(dir.join("nested.pdf")).unwrap();
        for name in ["b_Floss_CHN.pdf", "a_Brushing_ENG.PDF", "notes.txt"] {
            std::fs::write(dir.join(name), b"%PDF").unwrap();
        }

        let resources = resources_for_category(temp_dir.path(), Category::Dental);

        assert_eq!(resources.len(), 2);
        assert_eq!(resources[0].title, "a Brushing ENG");
        assert_eq!(resources[0].path, "resources/dental/a_Brushing_ENG.PDF");
        assert_eq!(resources[0].language_label_en, Some("English"));
        assert_eq!(resources[1].language_label_zh, Some("中文"));
    }
}
