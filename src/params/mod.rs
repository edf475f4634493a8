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

//! The request parameters consumed by form processing.
//!
//! A form is bound from a [`RequestParams`] instance: the names of the parameters sent with the
//! request, their string values, the files uploaded under them, and an optional error describing
//! why the request could not be fully processed. How the parameters were obtained is up to the
//! implementation.

mod error;

use std::io::Read;

pub use error::{RequestProcessingError, UploadedFileError};

/// A file uploaded with a request.
pub trait UploadedFile {
    /// Returns a readable handle to the content of the file.
    ///
    /// Fails with [`UploadedFileError::InvalidState`] once the file has been released with
    /// [`UploadedFile::release`].
    fn content(&self) -> Result<Box<dyn Read + Send>, UploadedFileError>;

    /// Releases the content of the file. Calling this more than once has no effect.
    fn release(&mut self);

    /// Returns the original name of the file, as sent by the client.
    fn name(&self) -> &str;

    /// Returns the content type of the file, as sent by the client.
    fn content_type(&self) -> &str;

    /// Returns the size of the file in bytes.
    fn size(&self) -> u64;
}

/// The parameters of a single request.
pub trait RequestParams {
    type File: UploadedFile;

    /// Returns the names of all parameters of the request.
    ///
    /// Each call starts a new pass over the names.
    fn names(&self) -> Box<dyn Iterator<Item = &str> + '_>;

    /// Returns the string values of the parameter with the given name.
    ///
    /// An unknown name results in an empty list.
    fn string_values(&self, name: &str) -> Vec<String>;

    /// Returns the files uploaded under the parameter with the given name.
    ///
    /// An unknown name results in an empty list.
    fn uploaded_files(&self, name: &str) -> Vec<Self::File>;

    /// Returns the error that occurred while the request was processed, if any.
    fn request_error(&self) -> Option<RequestProcessingError>;

    /// Returns the first string value of the parameter with the given name.
    fn string_value(&self, name: &str) -> Option<String> {
        self.string_values(name).into_iter().next()
    }

    /// Returns the first file uploaded under the parameter with the given name.
    fn uploaded_file(&self, name: &str) -> Option<Self::File> {
        self.uploaded_files(name).into_iter().next()
    }
}
