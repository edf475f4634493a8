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

//! Request parameters read from an [`ArgumentSource`](crate::source::ArgumentSource).
//!
//! A [`ParameterView`] answers the queries of the form layer by asking the argument source each
//! time; nothing is copied or cached. Uploaded files are handed out as [`UploadedFileView`]
//! instances, which keep the metadata of the file and release the underlying record when they
//! are released or dropped.

mod parameter_view;
mod uploaded_file_view;

pub use parameter_view::ParameterView;
pub use uploaded_file_view::UploadedFileView;
