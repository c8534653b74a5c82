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

//! Reading and writing generator streams on disk.
//!
//! Two formats are understood:
//!
//! - **binary**: the raw scalars as consecutive little-endian `f64`;
//! - **text**: numbers separated by whitespace or commas, where `#` starts a
//!   comment running to the end of the line.
//!
//! Files only carry scalars. Whether they form a valid stream is decided by
//! the decode lanes.

use std::path::{Path, PathBuf};
use thiserror::Error;

const SCALAR_SIZE: usize = std::mem::size_of::<f64>();

/// An error that can occur while loading or saving a stream file.
#[derive(Debug, Error)]
pub enum StreamFileError {
    /// The file could not be read or written.
    #[error("failed to access stream file '{path}'")]
    Io {
        /// The file involved.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// A binary stream whose length is not a multiple of eight bytes.
    #[error("binary stream of {len} byte(s) is not a whole number of f64 scalars")]
    Misaligned {
        /// Length of the data in bytes.
        len: usize,
    },
    /// A text token that is not a number.
    #[error("invalid scalar '{token}' on line {line}")]
    InvalidScalar {
        /// 1-based line number.
        line: usize,
        /// The rejected token.
        token: String,
        /// Why it was rejected.
        #[source]
        source: std::num::ParseFloatError,
    },
}

/// Storage format of a stream file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamFormat {
    /// Consecutive little-endian `f64`.
    Binary,
    /// Human-readable numbers.
    Text,
}

impl StreamFormat {
    /// Infers the format from a file extension: `.bin` and `.f64` are binary, anything else is text.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("bin") || ext.eq_ignore_ascii_case("f64") => {
                StreamFormat::Binary
            }
            _ => StreamFormat::Text,
        }
    }
}

/// Loads a stream, inferring its format from the extension.
pub fn load_stream(path: impl AsRef<Path>) -> Result<Vec<f64>, StreamFileError> {
    let path = path.as_ref();
    load_stream_as(path, StreamFormat::from_path(path))
}

/// Loads a stream stored in an explicit format.
pub fn load_stream_as(
    path: impl AsRef<Path>,
    format: StreamFormat,
) -> Result<Vec<f64>, StreamFileError> {
    let path = path.as_ref();
    let io_error = |source| StreamFileError::Io {
        path: path.to_path_buf(),
        source,
    };

    let data = match format {
        StreamFormat::Binary => decode_binary(&std::fs::read(path).map_err(io_error)?)?,
        StreamFormat::Text => parse_text(&std::fs::read_to_string(path).map_err(io_error)?)?,
    };

    log::debug!(
        "Loaded {} scalar(s) from '{}' ({:?})",
        data.len(),
        path.display(),
        format
    );
    Ok(data)
}

/// Saves a stream in the given format.
pub fn write_stream(
    path: impl AsRef<Path>,
    data: &[f64],
    format: StreamFormat,
) -> Result<(), StreamFileError> {
    let path = path.as_ref();
    let bytes = match format {
        StreamFormat::Binary => encode_binary(data),
        StreamFormat::Text => format_text(data).into_bytes(),
    };
    std::fs::write(path, bytes).map_err(|source| StreamFileError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Decodes consecutive little-endian `f64`.
pub fn decode_binary(bytes: &[u8]) -> Result<Vec<f64>, StreamFileError> {
    if bytes.len() % SCALAR_SIZE != 0 {
        return Err(StreamFileError::Misaligned { len: bytes.len() });
    }

    Ok(bytes
        .chunks_exact(SCALAR_SIZE)
        .map(|chunk| {
            let mut raw = [0u8; SCALAR_SIZE];
            raw.copy_from_slice(chunk);
            f64::from_le_bytes(raw)
        })
        .collect())
}

/// Encodes scalars as consecutive little-endian `f64`.
pub fn encode_binary(data: &[f64]) -> Vec<u8> {
    data.iter().flat_map(|scalar| scalar.to_le_bytes()).collect()
}

/// Parses the text format.
pub fn parse_text(text: &str) -> Result<Vec<f64>, StreamFileError> {
    let mut data = Vec::new();

    for (index, line) in text.lines().enumerate() {
        let content = line.split('#').next().unwrap_or_default();
        for token in content
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|token| !token.is_empty())
        {
            let scalar = token
                .parse::<f64>()
                .map_err(|source| StreamFileError::InvalidScalar {
                    line: index + 1,
                    token: token.to_string(),
                    source,
                })?;
            data.push(scalar);
        }
    }

    Ok(data)
}

/// Formats scalars as text, one per line. The output parses back bit-identically.
pub fn format_text(data: &[f64]) -> String {
    data.iter().map(|scalar| format!("{scalar:?}\n")).collect()
}
