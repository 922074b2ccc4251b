// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::string::FromUtf8Error;

use thiserror::Error;

use crate::regexp_cache::InvalidRegexError;

use super::enums::WireType;

/// Any defect of a metadata blob. Raised once, when the table is built.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The blob ends in the middle of a tag, a varint or a fixed width value.
    #[error("Malformed or truncated metadata: {0}")]
    Wire(#[from] protobuf::Error),

    #[error("Tag {0} has no field number")]
    InvalidTag(u32),

    #[error("Field {field} declares {declared} bytes but only {remaining} remain")]
    LengthOverrun { field: u32, declared: u64, remaining: u64 },

    #[error("Field {field} of {message} has wire type {found}, expected {expected}")]
    UnexpectedWireType {
        message: &'static str,
        field: u32,
        found: WireType,
        expected: WireType,
    },

    #[error("Field {field} has unsupported wire type {wire_type}")]
    UnsupportedWireType { field: u32, wire_type: u32 },

    #[error("Required field {field} of {message} is missing")]
    MissingField { message: &'static str, field: &'static str },

    #[error("Field {field} is not valid UTF-8: {source}")]
    InvalidUtf8 {
        field: u32,
        #[source]
        source: FromUtf8Error,
    },

    #[error("Country calling code {0} is out of range")]
    InvalidCallingCode(i32),

    #[error("Country calling code {0} is described more than once")]
    DuplicateCallingCode(i32),

    #[error("{0}")]
    InvalidRegex(#[from] InvalidRegexError),

    #[error("Format '{format}' references group {group}, but pattern '{pattern}' has only {available}")]
    TemplateGroupOutOfRange {
        pattern: String,
        format: String,
        group: usize,
        available: usize,
    },
}
