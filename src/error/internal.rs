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

//! Module containing InternalError implementation.

use std::error;
use std::fmt;

/// An error which is returned for reasons internal to the function.
///
/// This error is produced when a failure occurred within the function but the failure is due to an
/// internal implementation detail of the function, such as an I/O error while opening the content
/// of an uploaded file. The caller cannot do anything about it other than report it.
#[derive(Debug)]
pub struct InternalError {
    message: Option<String>,
    source: Option<Box<dyn error::Error + Send + Sync>>,
}

impl InternalError {
    /// Constructs a new `InternalError` from a specified source error.
    ///
    /// The implementation of `std::fmt::Display` for this error will simply pass through the
    /// display of the source message unmodified.
    ///
    /// # Examples
    ///
    /// ```
    /// use formio_args::error::InternalError;
    ///
    /// let io_err = std::io::Error::new(std::io::ErrorKind::Other, "io error");
    /// let internal_error = InternalError::from_source(Box::new(io_err));
    /// assert_eq!(format!("{}", internal_error), "io error");
    /// ```
    pub fn from_source(source: Box<dyn error::Error + Send + Sync>) -> Self {
        Self {
            message: None,
            source: Some(source),
        }
    }

    /// Constructs a new `InternalError` from a specified source error and message string.
    ///
    /// The implementation of `std::fmt::Display` for this error will be the message string
    /// provided.
    pub fn from_source_with_message(
        source: Box<dyn error::Error + Send + Sync>,
        message: String,
    ) -> Self {
        Self {
            message: Some(message),
            source: Some(source),
        }
    }

    /// Constructs a new `InternalError` with a specified message string.
    ///
    /// The implementation of `std::fmt::Display` for this error will be the message string
    /// provided.
    pub fn with_message(message: String) -> Self {
        Self {
            message: Some(message),
            source: None,
        }
    }
}

impl error::Error for InternalError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match &self.source {
            Some(s) => Some(&**s),
            None => None,
        }
    }
}

impl fmt::Display for InternalError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.message {
            Some(m) => write!(f, "{}", m),
            None => match &self.source {
                Some(s) => write!(f, "{}", s),
                None => write!(f, "{}", std::any::type_name::<InternalError>()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;
    use std::io;

    use super::*;

    /// Tests that errors constructed with `InternalError::from_source` return the source's
    /// display string and expose the source.
    #[test]
    fn test_display_from_source() {
        let msg = "test message";
        let err = InternalError::from_source(Box::new(io::Error::new(io::ErrorKind::Other, msg)));
        assert_eq!(format!("{}", err), msg);
        assert!(err.source().is_some());
    }

    /// Tests that errors constructed with `InternalError::from_source_with_message` return the
    /// message as the display string.
    #[test]
    fn test_display_from_source_with_message() {
        let msg = "test message";
        let err = InternalError::from_source_with_message(
            Box::new(io::Error::new(io::ErrorKind::Other, "io error")),
            msg.to_string(),
        );
        assert_eq!(format!("{}", err), msg);
        assert!(err.source().is_some());
    }

    /// Tests that errors constructed with `InternalError::with_message` return the message as the
    /// display string and have no source.
    #[test]
    fn test_display_with_message() {
        let msg = "test message";
        let err = InternalError::with_message(msg.to_string());
        assert_eq!(format!("{}", err), msg);
        assert!(err.source().is_none());
    }
}
