use std::{
    fs::{self, ReadDir},
    path::{Path, PathBuf},
    time::SystemTime,
};

pub mod error {
    use std::{io, path::PathBuf};

    pub type Result<T> = std::result::Result<T, self::Error>;

    type Msg = &'static str;

    #[derive(Debug, thiserror::Error)]
    pub enum Error {
        #[error("{0} ({1}): {2}")]
        SingleIO(Msg, PathBuf, #[source] io::Error),

        #[error("No entry matched glob '{0}' in '{1}'")]
        NoEntryMatchedGlob(::glob::Pattern, PathBuf),
    }
}
pub use error::{Error, Result};

#[must_use]
pub fn write<P, C>(filepath: P, contents: C) -> Result<()>
where
    P: AsRef<Path>,
    C: AsRef<[u8]>,
{
    fs::write(&filepath, contents)
        .map_err(|e| Error::SingleIO("Cannot write file", filepath.as_ref().to_owned(), e))
}

#[must_use]
pub fn read_to_string(filepath: impl AsRef<Path>) -> Result<String> {
    fs::read_to_string(&filepath)
        .map_err(|e| Error::SingleIO("Cannot read file", filepath.as_ref().to_owned(), e))
}

#[must_use]
pub fn read_dir(dir: impl AsRef<Path>) -> Result<ReadDir> {
    fs::read_dir(&dir).map_err(|e| Error::SingleIO("Cannot read dir", dir.as_ref().to_owned(), e))
}

pub fn find_most_recently_modified_file(
    dir: impl AsRef<Path>,
    filename_pattern: &::glob::Pattern,
) -> Result<PathBuf> {
    let mut ans_filepath = None;
    let mut max_modified = SystemTime::UNIX_EPOCH;

    for entry in self::read_dir(&dir)?.filter_map(std::result::Result::ok) {
        let file_type = entry.file_type();
        let modified = entry.metadata().and_then(|info| info.modified());
        let (Ok(file_type), Ok(modified)) = (file_type, modified) else {
            continue
        };
        if file_type.is_dir() {
            continue;
        }
        let filename = entry.file_name();
        if filename_pattern.matches(filename.to_string_lossy().as_ref()) {
            if max_modified < modified {
                max_modified = modified;
                ans_filepath = Some(entry.path());
            }
        }
    }
    match ans_filepath {
        Some(filepath) => Ok(filepath),
        None => Err(self::Error::NoEntryMatchedGlob(
            filename_pattern.to_owned(),
            dir.as_ref().to_owned(),
        )),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::{thread, time::Duration};

    fn tempdir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("comp-fsutil-{}-{}", tag, std::process::id()));
        if dir.exists() {
            fs::remove_dir_all(&dir).unwrap();
        }
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn picks_most_recently_modified_regardless_of_name_order() {
        let dir = tempdir("mtime");
        // "z" first, "a" last: the winner must be decided by mtime, not name.
        for name in ["z.cpp", "m.cpp", "a.cpp"] {
            fs::write(dir.join(name), "int main() {}").unwrap();
            thread::sleep(Duration::from_millis(20));
        }
        fs::write(dir.join("notes.txt"), "not a source file").unwrap();

        let pattern = glob::Pattern::new("*.cpp").unwrap();
        let latest = find_most_recently_modified_file(&dir, &pattern).unwrap();
        assert_eq!(latest, dir.join("a.cpp"));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn errors_when_nothing_matches() {
        let dir = tempdir("empty");
        let pattern = glob::Pattern::new("*.cpp").unwrap();
        let err = find_most_recently_modified_file(&dir, &pattern).unwrap_err();
        assert!(matches!(err, Error::NoEntryMatchedGlob(_, _)));
        fs::remove_dir_all(&dir).unwrap();
    }
}
