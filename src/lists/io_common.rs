use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use snafu::prelude::*;

use crate::lists::*;

pub fn simplify_file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Hidden files start with a dot.
pub fn is_hidden(path: &Path) -> bool {
    simplify_file_name(path).starts_with('.')
}

// Follows symbolic links. A dangling link is not a regular file.
fn is_regular_file(path: &Path) -> bool {
    fs::metadata(path).map(|m| m.is_file()).unwrap_or(false)
}

/// The files of `folder` that hold candidate lists, and the number of
/// entries that were skipped.
///
/// Subfolders are not visited. The order is the one of the directory
/// listing, unless `sort` is set.
pub fn list_input_files(folder: &Path, sort: bool) -> ListResult<(Vec<PathBuf>, usize)> {
    let folder_p = folder.display().to_string();
    let entries = fs::read_dir(folder).context(ReadingDirectorySnafu {
        path: folder_p.clone(),
    })?;

    let mut files: Vec<PathBuf> = Vec::new();
    let mut skipped = 0;
    for entry_r in entries {
        let entry = entry_r.context(ReadingEntrySnafu {
            path: folder_p.clone(),
        })?;
        let path = entry.path();
        if !is_regular_file(&path) || is_hidden(&path) {
            debug!("Skipping file {}", path.display());
            skipped += 1;
            continue;
        }
        files.push(path);
    }
    if sort {
        files.sort();
    }
    Ok((files, skipped))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn hidden_names() {
        assert!(is_hidden(Path::new("/data/.listen.csv")));
        assert!(is_hidden(Path::new(".DS_Store")));
        assert!(!is_hidden(Path::new("/data/.config/liste.csv")));
        assert!(!is_hidden(Path::new("liste.csv")));
    }

    #[test]
    fn only_visible_regular_files() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("b.csv"), "B").unwrap();
        fs::write(dir.path().join("a.csv"), "A").unwrap();
        fs::write(dir.path().join(".versteckt.csv"), "C").unwrap();
        fs::create_dir(dir.path().join("unterordner")).unwrap();

        let (files, skipped) = list_input_files(dir.path(), true).unwrap();
        assert_eq!(
            files,
            vec![dir.path().join("a.csv"), dir.path().join("b.csv")]
        );
        assert_eq!(skipped, 2);
    }

    #[test]
    fn unsorted_has_same_files() {
        let dir = tempdir().unwrap();
        for name in ["c.csv", "a.csv", "b.csv"] {
            fs::write(dir.path().join(name), "x").unwrap();
        }
        let (mut files, _) = list_input_files(dir.path(), false).unwrap();
        files.sort();
        let (sorted, _) = list_input_files(dir.path(), true).unwrap();
        assert_eq!(files, sorted);
    }

    #[test]
    fn missing_folder() {
        let dir = tempdir().unwrap();
        let res = list_input_files(&dir.path().join("fehlt"), false);
        assert!(matches!(res, Err(ListError::ReadingDirectory { .. })));
    }
}
