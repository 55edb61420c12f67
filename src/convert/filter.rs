//! Input selection.

use std::path::{Path, PathBuf};

/// Extension of convertible files (with dot, compared case-sensitively).
pub const SVG_EXTENSION: &str = ".svg";

/// Keep file names whose extension is exactly `ext` (e.g. `".svg"`).
///
/// Order is preserved. Dot-files like `.svg` have no extension and are
/// dropped.
pub fn filter_files<S: AsRef<str>>(files: &[S], ext: &str) -> Vec<String> {
    let wanted = ext.strip_prefix('.').unwrap_or(ext);
    files
        .iter()
        .map(AsRef::<str>::as_ref)
        .filter(|name| {
            Path::new(name)
                .extension()
                .is_some_and(|e| e.to_str() == Some(wanted))
        })
        .map(str::to_owned)
        .collect()
}

/// An input file picked for conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Full path (source folder joined with the file name).
    pub path: PathBuf,
    /// File name without its final extension.
    pub base_name: String,
}

impl SourceFile {
    pub fn new(dir: &Path, file_name: &str) -> Self {
        Self {
            path: dir.join(file_name),
            base_name: base_name(file_name).to_owned(),
        }
    }
}

/// File name without the final extension (`a.b.svg` -> `a.b`).
pub fn base_name(file_name: &str) -> &str {
    Path::new(file_name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(file_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_is_case_sensitive() {
        let files = ["a.svg", "b.png", "c.SVG", "d.svg"];
        assert_eq!(filter_files(&files, SVG_EXTENSION), vec!["a.svg", "d.svg"]);
    }

    #[test]
    fn test_filter_edge_cases() {
        let files = [".svg", "svg", "a.svg.bak", "a.bak.svg", "a.svgz", "dir/x.svg"];
        assert_eq!(
            filter_files(&files, SVG_EXTENSION),
            vec!["a.bak.svg", "dir/x.svg"]
        );
    }

    #[test]
    fn test_filter_empty() {
        let files: [&str; 0] = [];
        assert!(filter_files(&files, SVG_EXTENSION).is_empty());
        assert!(filter_files(&["readme.md"], SVG_EXTENSION).is_empty());
    }

    #[test]
    fn test_filter_accepts_owned_names() {
        let files = vec!["x.svg".to_string(), "y.txt".to_string()];
        assert_eq!(filter_files(&files, ".svg"), vec!["x.svg"]);
    }

    #[test]
    fn test_base_name() {
        assert_eq!(base_name("icon.svg"), "icon");
        assert_eq!(base_name("icon.large.svg"), "icon.large");
        assert_eq!(base_name("arrow-left.svg"), "arrow-left");
    }

    #[test]
    fn test_source_file() {
        let file = SourceFile::new(Path::new("/icons"), "home.svg");
        assert_eq!(file.path, PathBuf::from("/icons/home.svg"));
        assert_eq!(file.base_name, "home");
    }
}
