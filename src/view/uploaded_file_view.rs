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

use std::convert::TryFrom;
use std::fmt;
use std::io::Read;
use std::sync::Arc;

use crate::error::{InvalidArgumentError, InvalidStateError};
use crate::params::{UploadedFile, UploadedFileError};
use crate::source::FileData;

/// An [`UploadedFile`] backed by a [`FileData`] record.
///
/// The name, content type and size of the record are copied when the view is created. Once the
/// view has been released, either explicitly with [`UploadedFile::release`] or by being dropped,
/// its content can no longer be read.
pub struct UploadedFileView {
    file_data: Option<Arc<dyn FileData>>,
    name: String,
    content_type: String,
    size: u64,
}

impl UploadedFileView {
    /// Creates a new `UploadedFileView` over `file_data`.
    pub fn new(file_data: Arc<dyn FileData>) -> Self {
        UploadedFileView {
            name: file_data.name().to_string(),
            content_type: file_data.content_type().to_string(),
            size: file_data.size(),
            file_data: Some(file_data),
        }
    }

    /// Returns true if the view has been released.
    pub fn is_cleared(&self) -> bool {
        self.file_data.is_none()
    }
}

impl TryFrom<Option<Arc<dyn FileData>>> for UploadedFileView {
    type Error = InvalidArgumentError;

    fn try_from(file_data: Option<Arc<dyn FileData>>) -> Result<Self, Self::Error> {
        file_data.map(UploadedFileView::new).ok_or_else(|| {
            InvalidArgumentError::new("file_data".into(), "file data cannot be null".into())
        })
    }
}

impl UploadedFile for UploadedFileView {
    fn content(&self) -> Result<Box<dyn Read + Send>, UploadedFileError> {
        let file_data = self.file_data.as_ref().ok_or_else(|| {
            InvalidStateError::with_message("file item has been already cleared".into())
        })?;
        Ok(file_data.content()?)
    }

    fn release(&mut self) {
        // TODO: call FileData::delete_file here once argument sources stop removing their own
        // temporary files at the end of the request.
        if self.file_data.take().is_some() {
            debug!("Released uploaded file {}", self.name);
        }
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn content_type(&self) -> &str {
        &self.content_type
    }

    fn size(&self) -> u64 {
        self.size
    }
}

impl Drop for UploadedFileView {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for UploadedFileView {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("UploadedFileView")
            .field("name", &self.name)
            .field("content_type", &self.content_type)
            .field("size", &self.size)
            .field("cleared", &self.is_cleared())
            .finish()
    }
}

impl fmt::Display for UploadedFileView {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "File {}, size={}, type={}",
            self.name, self.size, self.content_type
        )
    }
}
