//! Finding the documents a command should run over.

use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Expand the given paths into document files.
///
/// Files are taken as given, whatever their extension. Directories are searched recursively for
/// files whose extension is one of `extensions`. The result is sorted and free of duplicates.
///
/// # Errors
///
/// Returns an error if a path does not exist or a directory cannot be read.
pub fn find_documents(paths: Vec<PathBuf>, extensions: &[String]) -> io::Result<Vec<PathBuf>> {
    let mut found = BTreeSet::new();
    for path in paths {
        if path.is_dir() {
            collect_dir(&path, extensions, &mut found)?;
        } else if path.is_file() {
            found.insert(path);
        } else {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("No such file or directory: {}", path.display()),
            ));
        }
    }
    Ok(found.into_iter().collect())
}

fn collect_dir(dir: &Path, extensions: &[String], found: &mut BTreeSet<PathBuf>) -> io::Result<()> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            collect_dir(&path, extensions, found)?;
        } else if has_extension(&path, extensions) {
            found.insert(path);
        }
    }
    Ok(())
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.iter().any(|wanted| wanted == ext))
}

#[cfg(test)]
#[path = "tests/input.rs"]
mod tests;
