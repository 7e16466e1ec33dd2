use std::fs;

use anyhow::{Context, anyhow};
use camino::{ReadDirUtf8, Utf8Path};

use crate::WardenStdError;

/// Interact with a file system
#[derive(Default, Copy, Clone)]
pub struct Fs {}

impl Fs {
    /// reads a file from disk, refusing empty files
    pub fn read_file<P>(path: P) -> Result<String, WardenStdError>
    where
        P: AsRef<Utf8Path>,
    {
        let path = path.as_ref();
        match fs::metadata(path) {
            Ok(metadata) => {
                if metadata.is_file() {
                    tracing::debug!("reading {} from disk", &path);
                    let contents = fs::read_to_string(path)
                        .with_context(|| format!("could not read {}", &path))?;
                    if contents.is_empty() {
                        Err(WardenStdError::EmptyFile {
                            empty_file: path.to_string(),
                        })
                    } else {
                        Ok(contents)
                    }
                } else {
                    Err(anyhow!("'{}' is not a file", path).into())
                }
            }
            Err(e) => Err(anyhow!("could not find '{}'", path).context(e).into()),
        }
    }

    /// writes a file to disk, creating any missing parent directories
    pub fn write_file<P, C>(path: P, contents: C) -> Result<(), WardenStdError>
    where
        P: AsRef<Utf8Path>,
        C: AsRef<[u8]>,
    {
        let path = path.as_ref();
        let parent = path
            .parent()
            .ok_or_else(|| anyhow!("cannot write file to root or prefix {path}"))?;
        if !parent.as_str().is_empty() {
            Self::create_dir_all(parent)?;
        }
        tracing::debug!("writing {} to disk", &path);
        fs::write(path, contents).with_context(|| format!("could not write {}", &path))?;
        Ok(())
    }

    /// creates a directory
    pub fn create_dir_all<P>(path: P) -> Result<(), WardenStdError>
    where
        P: AsRef<Utf8Path>,
    {
        let path = path.as_ref();
        tracing::debug!("creating {} directory", &path);
        fs::create_dir_all(path)
            .with_context(|| format!("could not create {} directory", &path))?;
        Ok(())
    }

    /// get contents of a directory
    pub fn get_dir_entries<D>(dir: D) -> Result<ReadDirUtf8, WardenStdError>
    where
        D: AsRef<Utf8Path>,
    {
        let dir = dir.as_ref();
        let entries = dir
            .read_dir_utf8()
            .with_context(|| format!("could not read entries of {}", dir))?;
        Ok(entries)
    }

    /// recursively removes directories
    pub fn remove_dir_all<D>(dir: D) -> Result<(), WardenStdError>
    where
        D: AsRef<Utf8Path>,
    {
        let dir = dir.as_ref();
        if Self::path_is_dir(dir)? {
            fs::remove_dir_all(dir).with_context(|| format!("could not remove {}", dir))?;
            Ok(())
        } else {
            Err(anyhow!("could not remove {} because it is not a directory", dir).into())
        }
    }

    /// checks if a path is a directory, errors if the path does not exist
    pub fn path_is_dir<D>(dir: D) -> Result<bool, WardenStdError>
    where
        D: AsRef<Utf8Path>,
    {
        let dir = dir.as_ref();
        let metadata =
            fs::metadata(dir).with_context(|| format!("could not find a file at {}", dir))?;
        Ok(metadata.is_dir())
    }
}

#[cfg(test)]
mod tests {
    use assert_fs::{TempDir, prelude::*};
    use camino::Utf8PathBuf;
    use speculoos::prelude::*;

    use super::*;

    fn utf8(temp: &TempDir) -> Utf8PathBuf {
        Utf8PathBuf::try_from(temp.path().to_path_buf()).unwrap()
    }

    #[test]
    fn it_can_write_and_read_a_file_in_a_new_directory() {
        let temp = TempDir::new().unwrap();
        let path = utf8(&temp).join("profiles").join("default").join(".sensitive");

        Fs::write_file(&path, "api_key = \"abc\"").unwrap();

        assert_that!(Fs::read_file(&path)).is_ok().is_equal_to("api_key = \"abc\"".to_string());
    }

    #[test]
    fn it_refuses_empty_files() {
        let temp = TempDir::new().unwrap();
        temp.child("empty").touch().unwrap();
        let path = utf8(&temp).join("empty");

        assert_that!(Fs::read_file(&path))
            .is_err()
            .matches(|err| matches!(err, WardenStdError::EmptyFile { .. }));
    }

    #[test]
    fn it_only_removes_directories() {
        let temp = TempDir::new().unwrap();
        temp.child("file").write_str("contents").unwrap();
        temp.child("dir/nested").create_dir_all().unwrap();
        let root = utf8(&temp);

        assert_that!(Fs::remove_dir_all(root.join("file"))).is_err();
        assert_that!(Fs::remove_dir_all(root.join("dir"))).is_ok();
        assert_that!(root.join("dir").exists()).is_false();
    }
}
