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

//! Request parameters for form processing, read from an argument source.
//!
//! The form layer reads the parameters of a request through the [`RequestParams`] and
//! [`UploadedFile`] traits. This library implements them on top of an [`ArgumentSource`], a
//! keyed store of string values and uploaded file data populated by the surrounding request
//! handling:
//!
//! ```
//! use std::sync::Arc;
//!
//! use formio_args::params::{RequestParams, UploadedFile};
//! use formio_args::source::{MemoryArgumentSource, MemoryFileData};
//! use formio_args::view::ParameterView;
//!
//! let source = MemoryArgumentSource::new()
//!     .with_text("title", "Report")
//!     .with_file(
//!         "attachment",
//!         Arc::new(MemoryFileData::new("a.txt", "text/plain", b"hello".to_vec())),
//!     );
//!
//! let params = ParameterView::new(source);
//! assert_eq!(params.string_values("title"), vec!["Report".to_string()]);
//!
//! let files = params.uploaded_files("attachment");
//! assert_eq!(files[0].name(), "a.txt");
//! assert_eq!(files[0].size(), 5);
//! assert!(params.request_error().is_none());
//! ```
//!
//! [`RequestParams`]: params::RequestParams
//! [`UploadedFile`]: params::UploadedFile
//! [`ArgumentSource`]: source::ArgumentSource

#[macro_use]
extern crate log;

pub mod error;
pub mod params;
pub mod source;
pub mod view;
