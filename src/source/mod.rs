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

//! The argument source that request parameters are read from.
//!
//! An [`ArgumentSource`] is a keyed store populated by the surrounding request handling. Each
//! name may hold any number of values, and each value is either a string or a file-like record
//! ([`FileData`]). Individual value slots may be empty.
//!
//! Limits on request and file sizes are enforced by the source while it is populated, never by
//! the readers of the source.

#[cfg(feature = "disk")]
mod disk;
#[cfg(feature = "memory")]
mod memory;
#[cfg(feature = "urlencoded")]
mod urlencoded;

use std::fmt;
use std::io::Read;
use std::sync::Arc;

use crate::error::InternalError;

#[cfg(feature = "disk")]
pub use disk::DiskFileData;
#[cfg(feature = "memory")]
pub use memory::{MemoryArgumentSource, MemoryFileData};

/// The type of value requested from an [`ArgumentSource`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    Text,
    File,
}

/// A single value held by an [`ArgumentSource`].
#[derive(Clone)]
pub enum ArgumentValue {
    Text(String),
    File(Arc<dyn FileData>),
}

impl ArgumentValue {
    /// Returns the type of this value.
    pub fn value_type(&self) -> ValueType {
        match self {
            ArgumentValue::Text(_) => ValueType::Text,
            ArgumentValue::File(_) => ValueType::File,
        }
    }

    /// Returns the string, if this is a text value.
    pub fn into_text(self) -> Option<String> {
        match self {
            ArgumentValue::Text(text) => Some(text),
            ArgumentValue::File(_) => None,
        }
    }

    /// Returns the file-like record, if this is a file value.
    pub fn into_file(self) -> Option<Arc<dyn FileData>> {
        match self {
            ArgumentValue::Text(_) => None,
            ArgumentValue::File(file_data) => Some(file_data),
        }
    }
}

impl fmt::Debug for ArgumentValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ArgumentValue::Text(text) => f.debug_tuple("Text").field(text).finish(),
            ArgumentValue::File(file_data) => f
                .debug_struct("File")
                .field("name", &file_data.name())
                .field("content_type", &file_data.content_type())
                .field("size", &file_data.size())
                .finish(),
        }
    }
}

/// The data of one uploaded file.
pub trait FileData: Send + Sync {
    /// Returns the original name of the file.
    fn name(&self) -> &str;

    /// Returns the content type of the file.
    fn content_type(&self) -> &str;

    /// Returns the size of the content in bytes.
    fn size(&self) -> u64;

    /// Opens the content of the file for reading.
    fn content(&self) -> Result<Box<dyn Read + Send>, InternalError>;

    /// Removes any storage backing the file, such as a temporary file on disk.
    ///
    /// Records without such storage keep the default, which does nothing.
    fn delete_file(&self) -> Result<(), InternalError> {
        Ok(())
    }
}

/// A keyed, multi-valued store of request arguments.
pub trait ArgumentSource {
    /// Returns the names of all arguments held by the source.
    fn argument_names(&self) -> Box<dyn Iterator<Item = &str> + '_>;

    /// Returns the number of value slots held for `name`, or zero if `name` is unknown.
    ///
    /// A source may report zero for a name it can only return in bulk with
    /// [`ArgumentSource::try_get_all`].
    fn size_of(&self, name: &str) -> usize;

    /// Returns the value at `index` for `name`, converted to `value_type`.
    ///
    /// Returns `None` if there is no such value, the slot is empty, or the value cannot be
    /// converted.
    fn try_get(&self, value_type: ValueType, name: &str, index: usize) -> Option<ArgumentValue>;

    /// Returns all values for `name`, converted to `value_type`, in order.
    ///
    /// Returns `None` if `name` is unknown. Entries that are empty or cannot be converted are
    /// `None`.
    fn try_get_all(&self, value_type: ValueType, name: &str)
        -> Option<Vec<Option<ArgumentValue>>>;
}

impl<S> ArgumentSource for &S
where
    S: ArgumentSource + ?Sized,
{
    fn argument_names(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        (**self).argument_names()
    }

    fn size_of(&self, name: &str) -> usize {
        (**self).size_of(name)
    }

    fn try_get(&self, value_type: ValueType, name: &str, index: usize) -> Option<ArgumentValue> {
        (**self).try_get(value_type, name, index)
    }

    fn try_get_all(
        &self,
        value_type: ValueType,
        name: &str,
    ) -> Option<Vec<Option<ArgumentValue>>> {
        (**self).try_get_all(value_type, name)
    }
}

impl<S> ArgumentSource for Box<S>
where
    S: ArgumentSource + ?Sized,
{
    fn argument_names(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        (**self).argument_names()
    }

    fn size_of(&self, name: &str) -> usize {
        (**self).size_of(name)
    }

    fn try_get(&self, value_type: ValueType, name: &str, index: usize) -> Option<ArgumentValue> {
        (**self).try_get(value_type, name, index)
    }

    fn try_get_all(
        &self,
        value_type: ValueType,
        name: &str,
    ) -> Option<Vec<Option<ArgumentValue>>> {
        (**self).try_get_all(value_type, name)
    }
}

impl<S> ArgumentSource for Arc<S>
where
    S: ArgumentSource + ?Sized,
{
    fn argument_names(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        (**self).argument_names()
    }

    fn size_of(&self, name: &str) -> usize {
        (**self).size_of(name)
    }

    fn try_get(&self, value_type: ValueType, name: &str, index: usize) -> Option<ArgumentValue> {
        (**self).try_get(value_type, name, index)
    }

    fn try_get_all(
        &self,
        value_type: ValueType,
        name: &str,
    ) -> Option<Vec<Option<ArgumentValue>>> {
        (**self).try_get_all(value_type, name)
    }
}
