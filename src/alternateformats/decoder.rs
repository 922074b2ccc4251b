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

//! Decoder of the compiled alternate format metadata.
//!
//! The blob is a serialized `PhoneMetadataCollection` (see phonemetadata.proto
//! of libphonenumber). Only the fields alternate formatting needs are kept:
//! the calling code, the region id and the number formats. Everything else
//! is skipped by wire type.

use log::{debug, trace};
use protobuf::CodedInputStream;

use crate::{
    regex_util::{anchor_full, anchor_start},
    regexp_cache::{InvalidRegexError, RegexCache},
};

use super::{
    enums::WireType,
    errors::DecodeError,
    helper_constants::{
        COLLECTION_METADATA, FORMAT_DOMESTIC_CARRIER_CODE_FORMATTING_RULE, FORMAT_FORMAT,
        FORMAT_LEADING_DIGITS_PATTERN, FORMAT_NATIONAL_PREFIX_FORMATTING_RULE,
        FORMAT_NATIONAL_PREFIX_OPTIONAL_WHEN_FORMATTING, FORMAT_PATTERN, MAX_COUNTRY_CODE,
        METADATA_COUNTRY_CODE, METADATA_ID, METADATA_NUMBER_FORMAT, REGEX_CACHE_CAPACITY,
    },
    metadata::{CompiledPattern, FormatRule, RuleGroup},
    template::FormatTemplate,
};

pub type Result<T> = std::result::Result<T, DecodeError>;

const NUMBER_FORMAT: &str = "NumberFormat";
const PHONE_METADATA: &str = "PhoneMetadata";
const PHONE_METADATA_COLLECTION: &str = "PhoneMetadataCollection";

/// Decodes every rule group of `blob`, in encoded order.
pub fn decode(blob: &[u8]) -> Result<Vec<RuleGroup>> {
    let mut reader = MetadataReader::new(blob);
    let rule_groups = reader.read_collection()?;
    debug!(
        "Decoded alternate formats: {} calling codes, {} rules, {} distinct regexes",
        rule_groups.len(),
        rule_groups.iter().map(|group| group.rules.len()).sum::<usize>(),
        reader.regex_cache.len()
    );
    Ok(rule_groups)
}

/// Restores the enclosing message after a nested one was read.
struct MessageScope {
    old_end: u64,
    old_limit: u64,
}

struct MetadataReader<'a> {
    input: CodedInputStream<'a>,
    /// Absolute end of the message being read. Length prefixes are checked
    /// against it so a lying length never reads into a sibling message.
    end: u64,
    regex_cache: RegexCache,
}

impl<'a> MetadataReader<'a> {
    fn new(blob: &'a [u8]) -> Self {
        Self {
            input: CodedInputStream::from_bytes(blob),
            end: blob.len() as u64,
            regex_cache: RegexCache::with_capacity(REGEX_CACHE_CAPACITY),
        }
    }

    fn read_collection(&mut self) -> Result<Vec<RuleGroup>> {
        let mut rule_groups = Vec::new();
        while let Some((field, wire_type)) = self.read_field()? {
            match field {
                COLLECTION_METADATA => {
                    expect_wire_type(PHONE_METADATA_COLLECTION, field, wire_type, WireType::LengthDelimited)?;
                    let scope = self.enter_message(field)?;
                    let group = self.read_rule_group()?;
                    self.leave_message(scope);
                    trace!(
                        "Read {} alternate formats for calling code {}",
                        group.rules.len(),
                        group.country_code
                    );
                    rule_groups.push(group);
                }
                _ => self.skip_field(field, wire_type)?,
            }
        }
        Ok(rule_groups)
    }

    fn read_rule_group(&mut self) -> Result<RuleGroup> {
        let mut id = None;
        let mut country_code = None;
        let mut rules = Vec::new();

        while let Some((field, wire_type)) = self.read_field()? {
            match field {
                METADATA_ID => {
                    expect_wire_type(PHONE_METADATA, field, wire_type, WireType::LengthDelimited)?;
                    id = Some(self.read_string(field)?);
                }
                METADATA_COUNTRY_CODE => {
                    expect_wire_type(PHONE_METADATA, field, wire_type, WireType::Varint)?;
                    // int32 in the schema, negative values are sign extended to 64 bits.
                    country_code = Some(self.input.read_raw_varint64()? as i32);
                }
                METADATA_NUMBER_FORMAT => {
                    expect_wire_type(PHONE_METADATA, field, wire_type, WireType::LengthDelimited)?;
                    let scope = self.enter_message(field)?;
                    let rule = self.read_format_rule()?;
                    self.leave_message(scope);
                    rules.push(rule);
                }
                _ => self.skip_field(field, wire_type)?,
            }
        }

        let country_code = country_code.ok_or(DecodeError::MissingField {
            message: PHONE_METADATA,
            field: "country_code",
        })?;
        if !(1..=MAX_COUNTRY_CODE).contains(&country_code) {
            return Err(DecodeError::InvalidCallingCode(country_code));
        }

        Ok(RuleGroup { country_code, id, rules })
    }

    fn read_format_rule(&mut self) -> Result<FormatRule> {
        let mut pattern = None;
        let mut format = None;
        let mut leading_digits_patterns = Vec::new();
        let mut national_prefix_formatting_rule = None;
        let mut national_prefix_optional_when_formatting = false;
        let mut domestic_carrier_code_formatting_rule = None;

        while let Some((field, wire_type)) = self.read_field()? {
            match field {
                FORMAT_PATTERN => {
                    expect_wire_type(NUMBER_FORMAT, field, wire_type, WireType::LengthDelimited)?;
                    pattern = Some(self.read_string(field)?);
                }
                FORMAT_FORMAT => {
                    expect_wire_type(NUMBER_FORMAT, field, wire_type, WireType::LengthDelimited)?;
                    format = Some(self.read_string(field)?);
                }
                FORMAT_LEADING_DIGITS_PATTERN => {
                    expect_wire_type(NUMBER_FORMAT, field, wire_type, WireType::LengthDelimited)?;
                    let source = self.read_string(field)?;
                    let anchored = anchor_start(&source);
                    leading_digits_patterns.push(self.compile(source, &anchored)?);
                }
                FORMAT_NATIONAL_PREFIX_FORMATTING_RULE => {
                    expect_wire_type(NUMBER_FORMAT, field, wire_type, WireType::LengthDelimited)?;
                    national_prefix_formatting_rule = Some(self.read_string(field)?);
                }
                FORMAT_DOMESTIC_CARRIER_CODE_FORMATTING_RULE => {
                    expect_wire_type(NUMBER_FORMAT, field, wire_type, WireType::LengthDelimited)?;
                    domestic_carrier_code_formatting_rule = Some(self.read_string(field)?);
                }
                FORMAT_NATIONAL_PREFIX_OPTIONAL_WHEN_FORMATTING => {
                    expect_wire_type(NUMBER_FORMAT, field, wire_type, WireType::Varint)?;
                    national_prefix_optional_when_formatting = self.input.read_raw_varint64()? != 0;
                }
                _ => self.skip_field(field, wire_type)?,
            }
        }

        let pattern = pattern.ok_or(DecodeError::MissingField {
            message: NUMBER_FORMAT,
            field: "pattern",
        })?;
        let format = format.ok_or(DecodeError::MissingField {
            message: NUMBER_FORMAT,
            field: "format",
        })?;

        let anchored = anchor_full(&pattern);
        let pattern = self.compile(pattern, &anchored)?;
        let format = FormatTemplate::parse(format);
        // Group 0 is the whole match.
        let available = pattern.regex().captures_len() - 1;
        if let Some(group) = format.max_group() {
            if group > available {
                return Err(DecodeError::TemplateGroupOutOfRange {
                    pattern: pattern.as_str().to_owned(),
                    format: format.as_str().to_owned(),
                    group,
                    available,
                });
            }
        }

        Ok(FormatRule {
            pattern,
            format,
            leading_digits_patterns,
            national_prefix_formatting_rule,
            national_prefix_optional_when_formatting,
            domestic_carrier_code_formatting_rule,
        })
    }

    fn compile(&self, source: String, anchored: &str) -> Result<CompiledPattern> {
        let regex = self.regex_cache.get_regex(anchored).map_err(|err| InvalidRegexError {
            pattern: source.clone(),
            source: err.source,
        })?;
        Ok(CompiledPattern::new(source, regex))
    }

    /// Next field of the current message, `None` at its end.
    fn read_field(&mut self) -> Result<Option<(u32, WireType)>> {
        if self.input.eof()? {
            return Ok(None);
        }
        let tag = self.input.read_raw_varint32()?;
        let field = tag >> 3;
        if field == 0 {
            return Err(DecodeError::InvalidTag(tag));
        }
        let wire_type = WireType::of_tag(tag).ok_or(DecodeError::UnsupportedWireType {
            field,
            wire_type: tag & 0b111,
        })?;
        Ok(Some((field, wire_type)))
    }

    /// Reads a length prefix and checks it against what is left of the
    /// current message.
    fn read_length(&mut self, field: u32) -> Result<u32> {
        let declared = self.input.read_raw_varint64()?;
        let remaining = self.end.saturating_sub(self.input.pos());
        if declared > remaining {
            return Err(DecodeError::LengthOverrun { field, declared, remaining });
        }
        u32::try_from(declared).map_err(|_| DecodeError::LengthOverrun { field, declared, remaining })
    }

    fn read_string(&mut self, field: u32) -> Result<String> {
        let len = self.read_length(field)?;
        let bytes = self.input.read_raw_bytes(len)?;
        String::from_utf8(bytes).map_err(|source| DecodeError::InvalidUtf8 { field, source })
    }

    fn enter_message(&mut self, field: u32) -> Result<MessageScope> {
        let len = u64::from(self.read_length(field)?);
        let old_limit = self.input.push_limit(len)?;
        let old_end = std::mem::replace(&mut self.end, self.input.pos() + len);
        Ok(MessageScope { old_end, old_limit })
    }

    fn leave_message(&mut self, scope: MessageScope) {
        self.input.pop_limit(scope.old_limit);
        self.end = scope.old_end;
    }

    fn skip_field(&mut self, field: u32, wire_type: WireType) -> Result<()> {
        match wire_type {
            WireType::Varint => {
                self.input.read_raw_varint64()?;
            }
            WireType::Fixed64 => {
                self.input.read_fixed64()?;
            }
            WireType::Fixed32 => {
                self.input.read_fixed32()?;
            }
            WireType::LengthDelimited => {
                let len = self.read_length(field)?;
                self.input.skip_raw_bytes(len)?;
            }
            WireType::StartGroup | WireType::EndGroup => {
                return Err(DecodeError::UnsupportedWireType { field, wire_type: wire_type as u32 });
            }
        }
        Ok(())
    }
}

fn expect_wire_type(
    message: &'static str,
    field: u32,
    found: WireType,
    expected: WireType,
) -> Result<()> {
    if found != expected {
        return Err(DecodeError::UnexpectedWireType { message, field, found, expected });
    }
    Ok(())
}
