// Copyright (C) 2009 The Libphonenumber Authors
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

/// Calling codes have at most three digits.
pub const MAX_COUNTRY_CODE: i32 = 999;

pub const PLUS_SIGN: &'static str = "+";
pub const GROUP_REFERENCE_SIGN: char = '$';

// Field numbers of PhoneMetadataCollection in phonemetadata.proto.
pub const COLLECTION_METADATA: u32 = 1;

// Field numbers of PhoneMetadata. Only the ones alternate formats need are
// listed, everything else is skipped.
pub const METADATA_ID: u32 = 9;
pub const METADATA_COUNTRY_CODE: u32 = 10;
pub const METADATA_NUMBER_FORMAT: u32 = 19;

// Field numbers of NumberFormat.
pub const FORMAT_PATTERN: u32 = 1;
pub const FORMAT_FORMAT: u32 = 2;
pub const FORMAT_LEADING_DIGITS_PATTERN: u32 = 3;
pub const FORMAT_NATIONAL_PREFIX_FORMATTING_RULE: u32 = 4;
pub const FORMAT_DOMESTIC_CARRIER_CODE_FORMATTING_RULE: u32 = 5;
pub const FORMAT_NATIONAL_PREFIX_OPTIONAL_WHEN_FORMATTING: u32 = 6;

/// Rough number of distinct regexes in the compiled-in table.
pub const REGEX_CACHE_CAPACITY: usize = 128;
