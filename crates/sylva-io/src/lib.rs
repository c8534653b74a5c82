// Copyright 2025 eraflo
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

//! # Sylva IO
//!
//! File-system facing services: decoder settings stored as RON or JSON, and
//! generator streams stored as raw little-endian `f64` or as text.

#![warn(missing_docs)]

pub mod config;
pub mod stream_file;

pub use config::{ColorSpec, ConfigError, DecoderSettings, PaletteSettings};
pub use stream_file::{load_stream, write_stream, StreamFileError, StreamFormat};
