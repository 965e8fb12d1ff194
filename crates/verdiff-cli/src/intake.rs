//! Local-filesystem intake: the CLI's stand-in for the extraction
//! collaborators. Reads a directory into a path-keyed tree and a text file
//! into form-feed-delimited pages.

use std::fs;
use std::path::Path;

use anyhow::Context;
use walkdir::WalkDir;

use verdiff_sdk::FileTree;

/// Default source-file allowlist, matched against file extensions. Bare
/// `README` files are always included.
pub const DEFAULT_EXTENSIONS: &[&str] = &[
    "py", "java", "js", "ts", "rs", "cpp", "c", "json", "yaml", "yml", "txt", "md",
];

/// Read a directory recursively into a tree keyed by `/`-separated relative
/// paths, keeping only files matching the extension allowlist.
pub fn read_tree(root: &Path, extensions: &[String]) -> anyhow::Result<FileTree> {
    anyhow::ensure!(root.is_dir(), "{} is not a directory", root.display());

    let mut tree = FileTree::new();
    for entry in WalkDir::new(root) {
        let entry = entry.with_context(|| format!("walking {}", root.display()))?;
        if !entry.file_type().is_file() || !is_selected(entry.path(), extensions) {
            continue;
        }

        let relative = entry
            .path()
            .strip_prefix(root)
            .expect("walked path is under root")
            .to_string_lossy()
            .replace('\\', "/");
        let content = fs::read(entry.path())
            .with_context(|| format!("reading {}", entry.path().display()))?;
        tree.insert(relative, content);
    }
    Ok(tree)
}

fn is_selected(path: &Path, extensions: &[String]) -> bool {
    if path.file_name().is_some_and(|name| name == "README") {
        return true;
    }
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.iter().any(|allowed| allowed == ext))
}

/// Read a document file and split it into pages on form feed bytes.
///
/// Returned pages are raw bytes; UTF-8 validation happens in the engine so
/// a binary page is reported with its page number.
pub fn read_pages(path: &Path) -> anyhow::Result<Vec<Vec<u8>>> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    if bytes.is_empty() {
        return Ok(Vec::new());
    }
    Ok(bytes.split(|b| *b == 0x0C).map(<[u8]>::to_vec).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn exts(list: &[&str]) -> Vec<String> {
        list.iter().map(|e| (*e).to_string()).collect()
    }

    #[test]
    fn reads_nested_files_with_relative_paths() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("src")).unwrap();
        fs::write(dir.path().join("main.py"), "print(1)\n").unwrap();
        fs::write(dir.path().join("src/util.py"), "x = 1\n").unwrap();

        let tree = read_tree(dir.path(), &exts(&["py"])).unwrap();
        assert_eq!(tree.len(), 2);
        assert_eq!(tree["main.py"], b"print(1)\n");
        assert_eq!(tree["src/util.py"], b"x = 1\n");
    }

    #[test]
    fn extension_filter_skips_other_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("keep.rs"), "fn main() {}\n").unwrap();
        fs::write(dir.path().join("skip.lock"), "ignored\n").unwrap();

        let tree = read_tree(dir.path(), &exts(&["rs"])).unwrap();
        assert_eq!(tree.len(), 1);
        assert!(tree.contains_key("keep.rs"));
    }

    #[test]
    fn bare_readme_is_always_included() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("README"), "docs\n").unwrap();

        let tree = read_tree(dir.path(), &exts(&["py"])).unwrap();
        assert!(tree.contains_key("README"));
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        assert!(read_tree(&missing, &exts(&["py"])).is_err());
    }

    #[test]
    fn splits_pages_on_form_feed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.txt");
        fs::write(&path, "page one\x0cpage two\x0cpage three").unwrap();

        let pages = read_pages(&path).unwrap();
        assert_eq!(pages.len(), 3);
        assert_eq!(pages[0], b"page one");
        assert_eq!(pages[2], b"page three");
    }

    #[test]
    fn single_page_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.txt");
        fs::write(&path, "just one page").unwrap();

        let pages = read_pages(&path).unwrap();
        assert_eq!(pages.len(), 1);
    }

    #[test]
    fn empty_document_has_no_pages() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.txt");
        fs::write(&path, "").unwrap();

        assert!(read_pages(&path).unwrap().is_empty());
    }
}
