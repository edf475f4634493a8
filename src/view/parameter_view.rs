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

use crate::error::InvalidArgumentError;
use crate::params::{RequestParams, RequestProcessingError};
use crate::source::{ArgumentSource, ArgumentValue, ValueType};

use super::UploadedFileView;

/// [`RequestParams`] backed by an [`ArgumentSource`].
///
/// Values are read directly from the source on every call. The values of a name are fetched one
/// index at a time when the source reports how many there are; otherwise they are fetched in
/// bulk. Either way, empty entries are skipped, so the returned lists never contain gaps.
pub struct ParameterView<S> {
    source: S,
}

impl<S> ParameterView<S>
where
    S: ArgumentSource,
{
    /// Creates a new `ParameterView` reading from `source`.
    pub fn new(source: S) -> Self {
        ParameterView { source }
    }

    /// Returns the underlying argument source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Consumes the view, returning the underlying argument source.
    pub fn into_inner(self) -> S {
        self.source
    }

    fn values(&self, value_type: ValueType, name: &str) -> Vec<ArgumentValue> {
        let count = self.source.size_of(name);
        trace!(
            "Reading {:?} values of {} ({} reported by source)",
            value_type,
            name,
            count
        );

        if count > 0 {
            (0..count)
                .filter_map(|index| self.source.try_get(value_type, name, index))
                .collect()
        } else {
            self.source
                .try_get_all(value_type, name)
                .unwrap_or_default()
                .into_iter()
                .flatten()
                .collect()
        }
    }
}

impl<S> TryFrom<Option<S>> for ParameterView<S>
where
    S: ArgumentSource,
{
    type Error = InvalidArgumentError;

    fn try_from(source: Option<S>) -> Result<Self, Self::Error> {
        source.map(ParameterView::new).ok_or_else(|| {
            InvalidArgumentError::new(
                "argument_source".into(),
                "argument source cannot be null".into(),
            )
        })
    }
}

impl<S> RequestParams for ParameterView<S>
where
    S: ArgumentSource,
{
    type File = UploadedFileView;

    fn names(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        self.source.argument_names()
    }

    fn string_values(&self, name: &str) -> Vec<String> {
        self.values(ValueType::Text, name)
            .into_iter()
            .filter_map(ArgumentValue::into_text)
            .collect()
    }

    fn uploaded_files(&self, name: &str) -> Vec<UploadedFileView> {
        self.values(ValueType::File, name)
            .into_iter()
            .filter_map(ArgumentValue::into_file)
            .map(UploadedFileView::new)
            .collect()
    }

    fn request_error(&self) -> Option<RequestProcessingError> {
        // size limits and thresholds are enforced by the argument source
        None
    }
}
