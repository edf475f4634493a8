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

//! Common set of basic errors used throughout the library.
//!
//! The errors in this module are intended to be used by themselves or as part of a more complex
//! error `enum`.

mod internal;
mod invalid_argument;
mod invalid_state;

pub use internal::InternalError;
pub use invalid_argument::InvalidArgumentError;
pub use invalid_state::InvalidStateError;
