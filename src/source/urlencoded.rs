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

//! Support for populating an argument source from `application/x-www-form-urlencoded` data.

use url::form_urlencoded;

use super::{ArgumentValue, MemoryArgumentSource};

impl MemoryArgumentSource {
    /// Creates a `MemoryArgumentSource` from a query string or url-encoded form body.
    ///
    /// Values are percent-decoded and kept in the order they appear; a name that appears more
    /// than once holds all of its values. A leading `?` is ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use formio_args::source::{ArgumentSource, MemoryArgumentSource};
    ///
    /// let source = MemoryArgumentSource::from_urlencoded("?tag=a&tag=b&q=hello+world");
    /// assert_eq!(source.size_of("tag"), 2);
    /// assert_eq!(source.size_of("q"), 1);
    /// ```
    pub fn from_urlencoded(input: &str) -> Self {
        let input = input.strip_prefix('?').unwrap_or(input);

        let mut source = MemoryArgumentSource::new();
        for (name, value) in form_urlencoded::parse(input.as_bytes()) {
            source.add_value(&name, Some(ArgumentValue::Text(value.into_owned())));
        }
        source
    }
}
