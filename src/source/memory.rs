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

//! An argument source held entirely in memory.

use std::io::{Cursor, Read};
use std::sync::Arc;

use crate::error::InternalError;

use super::{ArgumentSource, ArgumentValue, FileData, ValueType};

/// An [`ArgumentSource`] that keeps its arguments in memory, in the order the names were first
/// added.
///
/// When a text value is requested from a slot holding a file, the name of the file is returned.
/// A file requested from a slot holding text is not available.
#[derive(Clone, Debug, Default)]
pub struct MemoryArgumentSource {
    arguments: Vec<(String, Vec<Option<ArgumentValue>>)>,
}

impl MemoryArgumentSource {
    /// Create a new, empty `MemoryArgumentSource`
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a string value for `name`.
    pub fn with_text(mut self, name: &str, value: &str) -> Self {
        self.add_value(name, Some(ArgumentValue::Text(value.into())));
        self
    }

    /// Adds a file value for `name`.
    pub fn with_file(mut self, name: &str, file_data: Arc<dyn FileData>) -> Self {
        self.add_value(name, Some(ArgumentValue::File(file_data)));
        self
    }

    /// Adds an empty value slot for `name`.
    pub fn with_empty(mut self, name: &str) -> Self {
        self.add_value(name, None);
        self
    }

    /// Appends a value slot for `name`, adding the name if it does not already exist.
    pub fn add_value(&mut self, name: &str, value: Option<ArgumentValue>) {
        match self.arguments.iter_mut().find(|(key, _)| key == name) {
            Some((_, values)) => values.push(value),
            None => self.arguments.push((name.into(), vec![value])),
        }
    }

    fn values(&self, name: &str) -> Option<&[Option<ArgumentValue>]> {
        self.arguments
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, values)| values.as_slice())
    }
}

fn convert(value_type: ValueType, value: &ArgumentValue) -> Option<ArgumentValue> {
    match (value_type, value) {
        (ValueType::Text, ArgumentValue::Text(_)) | (ValueType::File, ArgumentValue::File(_)) => {
            Some(value.clone())
        }
        (ValueType::Text, ArgumentValue::File(file_data)) => {
            Some(ArgumentValue::Text(file_data.name().into()))
        }
        (ValueType::File, ArgumentValue::Text(_)) => None,
    }
}

impl ArgumentSource for MemoryArgumentSource {
    fn argument_names(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(self.arguments.iter().map(|(name, _)| name.as_str()))
    }

    fn size_of(&self, name: &str) -> usize {
        self.values(name).map(|values| values.len()).unwrap_or(0)
    }

    fn try_get(&self, value_type: ValueType, name: &str, index: usize) -> Option<ArgumentValue> {
        self.values(name)?
            .get(index)?
            .as_ref()
            .and_then(|value| convert(value_type, value))
    }

    fn try_get_all(
        &self,
        value_type: ValueType,
        name: &str,
    ) -> Option<Vec<Option<ArgumentValue>>> {
        self.values(name).map(|values| {
            values
                .iter()
                .map(|value| value.as_ref().and_then(|value| convert(value_type, value)))
                .collect()
        })
    }
}

/// A [`FileData`] record whose content is held in memory.
#[derive(Clone, Debug)]
pub struct MemoryFileData {
    name: String,
    content_type: String,
    data: Arc<[u8]>,
}

impl MemoryFileData {
    pub fn new(name: &str, content_type: &str, data: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            content_type: content_type.into(),
            data: data.into(),
        }
    }
}

impl FileData for MemoryFileData {
    fn name(&self) -> &str {
        &self.name
    }

    fn content_type(&self) -> &str {
        &self.content_type
    }

    fn size(&self) -> u64 {
        self.data.len() as u64
    }

    fn content(&self) -> Result<Box<dyn Read + Send>, InternalError> {
        Ok(Box::new(Cursor::new(self.data.clone())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(value: Option<ArgumentValue>) -> Option<String> {
        value.and_then(ArgumentValue::into_text)
    }

    // Test that names are returned in the order they were first added, and that adding a value to
    // an existing name does not add the name again.
    #[test]
    fn test_argument_names_in_insertion_order() {
        let source = MemoryArgumentSource::new()
            .with_text("b", "1")
            .with_text("a", "2")
            .with_text("b", "3");

        let names: Vec<&str> = source.argument_names().collect();
        assert_eq!(names, vec!["b", "a"]);
        assert_eq!(source.size_of("b"), 2);
        assert_eq!(source.size_of("a"), 1);
        assert_eq!(source.size_of("c"), 0);
    }

    // Test that empty slots are counted by size_of but are never returned as values.
    #[test]
    fn test_empty_slots() {
        let source = MemoryArgumentSource::new()
            .with_text("a", "x")
            .with_empty("a")
            .with_text("a", "y");

        assert_eq!(source.size_of("a"), 3);
        assert_eq!(text(source.try_get(ValueType::Text, "a", 0)), Some("x".into()));
        assert!(source.try_get(ValueType::Text, "a", 1).is_none());
        assert_eq!(text(source.try_get(ValueType::Text, "a", 2)), Some("y".into()));
        assert!(source.try_get(ValueType::Text, "a", 3).is_none());

        let all = source
            .try_get_all(ValueType::Text, "a")
            .expect("values for a");
        assert_eq!(all.len(), 3);
        assert!(all[1].is_none());
    }

    // Test the conversions between text and file values.
    #[test]
    fn test_value_conversion() {
        let file_data = Arc::new(MemoryFileData::new("a.txt", "text/plain", b"hello".to_vec()));
        let source = MemoryArgumentSource::new()
            .with_file("f", file_data)
            .with_text("t", "x");

        assert_eq!(
            text(source.try_get(ValueType::Text, "f", 0)),
            Some("a.txt".into())
        );
        assert!(source.try_get(ValueType::File, "t", 0).is_none());

        match source.try_get(ValueType::File, "f", 0) {
            Some(ArgumentValue::File(file_data)) => assert_eq!(file_data.name(), "a.txt"),
            other => panic!("expected a file value, got {:?}", other),
        }
    }

    // Test that unknown names report no values on both lookups.
    #[test]
    fn test_unknown_name() {
        let source = MemoryArgumentSource::new();
        assert!(source.try_get(ValueType::Text, "missing", 0).is_none());
        assert!(source.try_get_all(ValueType::Text, "missing").is_none());
    }

    // Test that every call to content returns a new reader over the full content.
    #[test]
    fn test_memory_file_data_content() {
        let file_data = MemoryFileData::new("a.txt", "text/plain", b"hello".to_vec());
        assert_eq!(file_data.size(), 5);

        for _ in 0..2 {
            let mut content = String::new();
            file_data
                .content()
                .expect("content")
                .read_to_string(&mut content)
                .expect("read content");
            assert_eq!(content, "hello");
        }
        assert!(file_data.delete_file().is_ok());
    }
}
