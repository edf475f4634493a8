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

use std::error::Error;
use std::fmt;

use crate::error::{InternalError, InvalidStateError};

/// An error describing why a request could not be fully processed.
///
/// These are reported to the form layer, which decides how to present them; they are not raised
/// while the parameters are read.
#[derive(Debug)]
pub enum RequestProcessingError {
    /// The whole request was larger than allowed.
    MaxRequestSizeExceeded { max_size: u64, actual_size: u64 },
    /// A single uploaded file was larger than allowed.
    MaxFileSizeExceeded {
        field_name: String,
        max_size: u64,
        actual_size: u64,
    },
    /// The request could not be decoded.
    BadEncoding(String),
}

impl fmt::Display for RequestProcessingError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RequestProcessingError::MaxRequestSizeExceeded {
                max_size,
                actual_size,
            } => write!(
                f,
                "request size {} exceeds the maximum of {} bytes",
                actual_size, max_size
            ),
            RequestProcessingError::MaxFileSizeExceeded {
                field_name,
                max_size,
                actual_size,
            } => write!(
                f,
                "file in {} of size {} exceeds the maximum of {} bytes",
                field_name, actual_size, max_size
            ),
            RequestProcessingError::BadEncoding(msg) => write!(f, "bad request encoding: {}", msg),
        }
    }
}

impl Error for RequestProcessingError {}

/// An error that may occur when reading an uploaded file.
#[derive(Debug)]
pub enum UploadedFileError {
    /// The file has already been released.
    InvalidState(InvalidStateError),
    /// The content could not be opened.
    Internal(InternalError),
}

impl fmt::Display for UploadedFileError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            UploadedFileError::InvalidState(err) => f.write_str(&err.to_string()),
            UploadedFileError::Internal(err) => f.write_str(&err.to_string()),
        }
    }
}

impl Error for UploadedFileError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            UploadedFileError::InvalidState(err) => Some(err),
            UploadedFileError::Internal(err) => Some(err),
        }
    }
}

impl From<InvalidStateError> for UploadedFileError {
    fn from(err: InvalidStateError) -> Self {
        UploadedFileError::InvalidState(err)
    }
}

impl From<InternalError> for UploadedFileError {
    fn from(err: InternalError) -> Self {
        UploadedFileError::Internal(err)
    }
}

impl From<std::io::Error> for UploadedFileError {
    fn from(err: std::io::Error) -> Self {
        UploadedFileError::Internal(InternalError::from_source(Box::new(err)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Test that the size limit errors name both limits in their display string.
    #[test]
    fn test_request_processing_error_display() {
        let err = RequestProcessingError::MaxRequestSizeExceeded {
            max_size: 10,
            actual_size: 20,
        };
        assert_eq!(
            err.to_string(),
            "request size 20 exceeds the maximum of 10 bytes"
        );

        let err = RequestProcessingError::MaxFileSizeExceeded {
            field_name: "attachment".into(),
            max_size: 10,
            actual_size: 20,
        };
        assert_eq!(
            err.to_string(),
            "file in attachment of size 20 exceeds the maximum of 10 bytes"
        );
    }

    // Test that io errors are reported as internal errors with the io error as the source.
    #[test]
    fn test_uploaded_file_error_from_io() {
        let err: UploadedFileError =
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing").into();
        match err {
            UploadedFileError::Internal(ref inner) => assert_eq!(inner.to_string(), "missing"),
            _ => panic!("expected an internal error, got {:?}", err),
        }
        assert!(err.source().is_some());
    }
}
