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

//! Module containing InvalidStateError implementation.

use std::error;
use std::fmt;

/// An error returned when an operation cannot be completed because the state of the underlying
/// struct is inconsistent.
///
/// This can be caused by a caller calling operations in the wrong order, such as reading the
/// content of an uploaded file after it has been released.
#[derive(Debug)]
pub struct InvalidStateError {
    message: String,
}

impl InvalidStateError {
    /// Constructs a new `InvalidStateError` with a specified message string.
    ///
    /// The message should be the reason the operation cannot be completed.
    ///
    /// # Examples
    ///
    /// ```
    /// use formio_args::error::InvalidStateError;
    ///
    /// let invalid_state_error = InvalidStateError::with_message(
    ///     "file item has been already cleared".to_string(),
    /// );
    /// assert_eq!(
    ///     format!("{}", invalid_state_error),
    ///     "file item has been already cleared",
    /// );
    /// ```
    pub fn with_message(message: String) -> Self {
        Self { message }
    }

    /// Returns the message for the error.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl error::Error for InvalidStateError {}

impl fmt::Display for InvalidStateError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests that error constructed with `InvalidStateError::with_message` return message as the
    /// display string.
    #[test]
    fn test_display_with_message() {
        let msg = "test message";
        let err = InvalidStateError::with_message(msg.to_string());
        assert_eq!(format!("{}", err), msg);
        assert_eq!(err.message(), msg);
    }
}
