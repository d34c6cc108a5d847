//! Lazy selection of YAML definition files in a single directory

use crate::error::{Error, Result};
use std::fs::{self, File};
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use tracing::{debug, trace};
use walkdir::WalkDir;

const YAML_EXTENSION: &str = ".yml";

/// What a directory entry is, as seen without following links.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Symlink,
    Dir,
    File,
    Other,
}

impl From<fs::FileType> for EntryKind {
    fn from(file_type: fs::FileType) -> Self {
        if file_type.is_symlink() {
            EntryKind::Symlink
        } else if file_type.is_dir() {
            EntryKind::Dir
        } else if file_type.is_file() {
            EntryKind::File
        } else {
            EntryKind::Other
        }
    }
}

/// Why an entry was not selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    Hidden,
    Backup,
    Symlink,
    Directory,
    NotRegularFile,
    NotYaml,
    NotIncluded,
}

/// Decide whether a directory entry is a definition file.
///
/// Returns `None` when the entry should be loaded. Checks run in a fixed
/// order, so a hidden symlink is reported as hidden.
pub fn skip_reason(name: &str, kind: EntryKind, includes: &[String]) -> Option<SkipReason> {
    if name.starts_with('.') {
        // editor swap files
        return Some(SkipReason::Hidden);
    }
    if name.ends_with('~') {
        return Some(SkipReason::Backup);
    }
    match kind {
        EntryKind::Symlink => return Some(SkipReason::Symlink),
        EntryKind::Dir => return Some(SkipReason::Directory),
        EntryKind::Other => return Some(SkipReason::NotRegularFile),
        EntryKind::File => {}
    }

    let Some(stem) = name.strip_suffix(YAML_EXTENSION) else {
        let reason = if includes.is_empty() { SkipReason::NotYaml } else { SkipReason::NotIncluded };
        return Some(reason);
    };
    if includes.is_empty() || includes.iter().any(|item| item == stem) {
        None
    } else {
        Some(SkipReason::NotIncluded)
    }
}

/// An open definition file. Dropping it closes the handle.
#[derive(Debug)]
pub struct YamlSource {
    path: PathBuf,
    reader: BufReader<File>,
}

impl YamlSource {
    fn open(path: PathBuf) -> Result<Self> {
        let file = File::open(&path).map_err(|e| Error::io(&path, e))?;
        Ok(Self { path, reader: BufReader::new(file) })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole file, releasing the handle.
    pub fn read_to_string(mut self) -> Result<(PathBuf, String)> {
        let mut content = String::new();
        self.reader.read_to_string(&mut content).map_err(|e| Error::io(&self.path, e))?;
        Ok((self.path, content))
    }
}

/// Single-pass iterator over the definition files of one directory.
///
/// Entries come back in directory-listing order. A file is only opened when
/// the iterator is advanced to it.
pub struct YamlFileSelector {
    dir: PathBuf,
    includes: Vec<String>,
    entries: walkdir::IntoIter,
}

impl YamlFileSelector {
    /// Validate `dir` and prepare to walk its immediate entries.
    ///
    /// Fails before any file is touched when `dir` is a symlink, does not
    /// exist, or is not a directory.
    pub fn new(dir: &Path, includes: &[String]) -> Result<Self> {
        let is_symlink = fs::symlink_metadata(dir).map(|m| m.file_type().is_symlink());
        if is_symlink.unwrap_or(false) {
            return Err(Error::DirectoryIsSymlink { path: dir.to_path_buf() });
        }
        if !dir.is_dir() {
            return Err(Error::NotADirectory { path: dir.to_path_buf() });
        }

        let entries = WalkDir::new(dir).min_depth(1).max_depth(1).follow_links(false).into_iter();

        Ok(Self { dir: dir.to_path_buf(), includes: includes.to_vec(), entries })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl Iterator for YamlFileSelector {
    type Item = Result<YamlSource>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.entries.next()? {
                Ok(entry) => entry,
                Err(err) => {
                    let path =
                        err.path().map(Path::to_path_buf).unwrap_or_else(|| self.dir.clone());
                    return Some(Err(Error::io(path, err.into())));
                }
            };

            let Some(name) = entry.file_name().to_str() else {
                trace!("Skipping non UTF-8 entry: {}", entry.path().display());
                continue;
            };

            if let Some(reason) = skip_reason(name, entry.file_type().into(), &self.includes) {
                trace!("Skipping {} ({:?})", entry.path().display(), reason);
                continue;
            }

            debug!("Selected definition file: {}", entry.path().display());
            return Some(YamlSource::open(entry.into_path()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn names(selector: YamlFileSelector) -> Vec<String> {
        let mut names: Vec<String> = selector
            .map(|source| {
                let source = source.expect("open");
                source.path().file_name().unwrap().to_string_lossy().into_owned()
            })
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_skip_reason_precedence() {
        let none: Vec<String> = Vec::new();
        assert_eq!(skip_reason(".app.yml.swp", EntryKind::File, &none), Some(SkipReason::Hidden));
        assert_eq!(skip_reason(".hidden.yml", EntryKind::Symlink, &none), Some(SkipReason::Hidden));
        assert_eq!(skip_reason("app.yml~", EntryKind::File, &none), Some(SkipReason::Backup));
        assert_eq!(skip_reason("app.yml", EntryKind::Symlink, &none), Some(SkipReason::Symlink));
        assert_eq!(skip_reason("app.yml", EntryKind::Dir, &none), Some(SkipReason::Directory));
        assert_eq!(skip_reason("app.yml", EntryKind::Other, &none), Some(SkipReason::NotRegularFile));
        assert_eq!(skip_reason("app.yaml", EntryKind::File, &none), Some(SkipReason::NotYaml));
        assert_eq!(skip_reason("app.yml", EntryKind::File, &none), None);
    }

    #[test]
    fn test_includes_match_exact_base_name() {
        let includes = vec!["foo".to_string()];
        assert_eq!(skip_reason("foo.yml", EntryKind::File, &includes), None);
        assert_eq!(skip_reason("myfoo.yml", EntryKind::File, &includes), Some(SkipReason::NotIncluded));
        assert_eq!(skip_reason("foo.yml.bak", EntryKind::File, &includes), Some(SkipReason::NotIncluded));
        assert_eq!(skip_reason("foobar.yml", EntryKind::File, &includes), Some(SkipReason::NotIncluded));
        assert_eq!(skip_reason("bar.yml", EntryKind::File, &includes), Some(SkipReason::NotIncluded));
    }

    #[test]
    fn test_selects_only_eligible_files() {
        let tmp = TempDir::new().expect("tmp");
        let root = tmp.path();
        fs::write(root.join("wordpress.yml"), "a: {}").expect("write");
        fs::write(root.join("joomla.yml"), "b: {}").expect("write");
        fs::write(root.join(".swap.yml"), "c: {}").expect("write");
        fs::write(root.join("backup.yml~"), "d: {}").expect("write");
        fs::write(root.join("notes.txt"), "e").expect("write");
        fs::create_dir(root.join("nested.yml")).expect("mkdir");

        let selector = YamlFileSelector::new(root, &[]).expect("selector");
        assert_eq!(names(selector), vec!["joomla.yml", "wordpress.yml"]);
    }

    #[test]
    fn test_includes_restrict_selection() {
        let tmp = TempDir::new().expect("tmp");
        let root = tmp.path();
        fs::write(root.join("foo.yml"), "a: {}").expect("write");
        fs::write(root.join("myfoo.yml"), "b: {}").expect("write");
        fs::write(root.join("foo.yml.bak"), "c: {}").expect("write");
        fs::write(root.join("bar.yml"), "d: {}").expect("write");

        let selector = YamlFileSelector::new(root, &["foo".to_string()]).expect("selector");
        assert_eq!(names(selector), vec!["foo.yml"]);
    }

    #[test]
    fn test_missing_directory_is_rejected() {
        let tmp = TempDir::new().expect("tmp");
        let result = YamlFileSelector::new(&tmp.path().join("missing"), &[]);
        assert!(matches!(result, Err(Error::NotADirectory { .. })));
    }

    #[test]
    fn test_file_as_directory_is_rejected() {
        let tmp = TempDir::new().expect("tmp");
        let file = tmp.path().join("plain.yml");
        fs::write(&file, "a: {}").expect("write");
        let result = YamlFileSelector::new(&file, &[]);
        assert!(matches!(result, Err(Error::NotADirectory { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_directory_is_rejected() {
        let tmp = TempDir::new().expect("tmp");
        let real = tmp.path().join("real");
        fs::create_dir(&real).expect("mkdir");
        let link = tmp.path().join("link");
        std::os::unix::fs::symlink(&real, &link).expect("symlink");

        let result = YamlFileSelector::new(&link, &[]);
        assert!(matches!(result, Err(Error::DirectoryIsSymlink { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_files_are_skipped() {
        let tmp = TempDir::new().expect("tmp");
        let outside = tmp.path().join("outside.yml");
        fs::write(&outside, "a: {}").expect("write");
        let dir = tmp.path().join("defs");
        fs::create_dir(&dir).expect("mkdir");
        fs::write(dir.join("real.yml"), "b: {}").expect("write");
        std::os::unix::fs::symlink(&outside, dir.join("linked.yml")).expect("symlink");

        let selector = YamlFileSelector::new(&dir, &[]).expect("selector");
        assert_eq!(names(selector), vec!["real.yml"]);
    }

    #[test]
    fn test_read_to_string_returns_content() {
        let tmp = TempDir::new().expect("tmp");
        fs::write(tmp.path().join("app.yml"), "app: {}\n").expect("write");

        let mut selector = YamlFileSelector::new(tmp.path(), &[]).expect("selector");
        assert_eq!(selector.dir(), tmp.path());
        let source = selector.next().expect("one file").expect("open");
        let (path, content) = source.read_to_string().expect("read");
        assert!(path.ends_with("app.yml"));
        assert_eq!(content, "app: {}\n");
        assert!(selector.next().is_none());
    }
}
