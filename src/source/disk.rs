// Copyright 2018-2022 Cargill Incorporated
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! File data backed by a file on disk.

use std::fs::{self, File};
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use crate::error::InternalError;

use super::FileData;

/// A [`FileData`] record whose content is stored in a file, typically a temporary file written
/// while the request was received.
///
/// The size is read from the file's metadata when the record is created.
#[derive(Debug)]
pub struct DiskFileData {
    path: PathBuf,
    name: String,
    content_type: String,
    size: u64,
}

impl DiskFileData {
    /// Creates a record for the file at `path`.
    ///
    /// # Arguments
    ///
    /// * `path` - the file holding the content
    /// * `name` - the original name of the file, as sent by the client
    /// * `content_type` - the content type of the file, as sent by the client
    pub fn new(path: PathBuf, name: &str, content_type: &str) -> Result<Self, InternalError> {
        let size = fs::metadata(&path)
            .map_err(|err| {
                InternalError::from_source_with_message(
                    Box::new(err),
                    format!("Unable to read metadata of {}", path.display()),
                )
            })?
            .len();

        Ok(Self {
            path,
            name: name.into(),
            content_type: content_type.into(),
            size,
        })
    }

    /// Returns the path of the file holding the content.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FileData for DiskFileData {
    fn name(&self) -> &str {
        &self.name
    }

    fn content_type(&self) -> &str {
        &self.content_type
    }

    fn size(&self) -> u64 {
        self.size
    }

    fn content(&self) -> Result<Box<dyn Read + Send>, InternalError> {
        let file = File::open(&self.path).map_err(|err| {
            InternalError::from_source_with_message(
                Box::new(err),
                format!("Unable to open {}", self.path.display()),
            )
        })?;
        Ok(Box::new(file))
    }

    fn delete_file(&self) -> Result<(), InternalError> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                debug!("Deleted uploaded file {}", self.path.display());
                Ok(())
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(InternalError::from_source_with_message(
                Box::new(err),
                format!("Unable to delete {}", self.path.display()),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::TempDir;

    use super::*;

    fn write_file(dir: &TempDir, content: &[u8]) -> PathBuf {
        let path = dir.path().join("upload.tmp");
        let mut file = File::create(&path).expect("create file");
        file.write_all(content).expect("write file");
        path
    }

    // Test that the size is taken from the file and the content is read back from disk.
    #[test]
    fn test_content() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = write_file(&temp_dir, b"hello");

        let file_data = DiskFileData::new(path, "a.txt", "text/plain").expect("file data");
        assert_eq!(file_data.name(), "a.txt");
        assert_eq!(file_data.content_type(), "text/plain");
        assert_eq!(file_data.size(), 5);

        let mut content = String::new();
        file_data
            .content()
            .expect("content")
            .read_to_string(&mut content)
            .expect("read content");
        assert_eq!(content, "hello");
    }

    // Test that a record cannot be created for a file that does not exist.
    #[test]
    fn test_missing_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("missing.tmp");

        if DiskFileData::new(path, "a.txt", "text/plain").is_ok() {
            panic!("new should have returned an error");
        }
    }

    // Test that delete_file removes the file, that deleting it again succeeds, and that the
    // content can no longer be opened.
    #[test]
    fn test_delete_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = write_file(&temp_dir, b"hello");

        let file_data = DiskFileData::new(path.clone(), "a.txt", "text/plain").expect("file data");
        file_data.delete_file().expect("delete file");
        assert!(!path.exists());

        file_data.delete_file().expect("delete file again");
        assert!(file_data.content().is_err());
    }
}
