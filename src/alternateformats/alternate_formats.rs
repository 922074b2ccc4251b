// Copyright (C) 2012 The Libphonenumber Authors
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

use std::collections::{hash_map::Entry, HashMap};

use log::trace;

use super::{
    decoder,
    errors::DecodeError,
    helper_constants::PLUS_SIGN,
    helper_functions::load_compiled_alternate_formats,
    metadata::{FormatRule, RuleGroup},
};
use crate::{interfaces::MatcherApi, regex_based_matcher::RegexBasedMatcher};

/// The rule that produced an alternate format, together with the result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlternateFormatMatch<'a> {
    /// Position of the rule inside its group.
    pub rule_index: usize,
    pub rule: &'a FormatRule,
    pub formatted: String,
}

pub struct AlternateFormats {
    /// An API for matching numbers against format rules.
    matcher_api: Box<dyn MatcherApi>,

    /// Every decoded group, in the order of the metadata.
    rule_groups: Vec<RuleGroup>,

    /// A mapping from a country calling code to the index of its group in
    /// `rule_groups`.
    country_code_to_rule_group: HashMap<i32, usize>,
}

impl AlternateFormats {
    /// Builds the table from the compiled-in metadata.
    ///
    /// Panics if the metadata can't be decoded: formatting with a broken
    /// table is worse than not starting at all.
    pub(super) fn new() -> Self {
        match load_compiled_alternate_formats() {
            Err(err) => {
                let err_message = format!("Could not parse compiled-in alternate format metadata: {:?}", err);
                log::error!("{}", err_message);
                panic!("{}", err_message);
            }
            Ok(alternate_formats) => alternate_formats,
        }
    }

    /// Decodes a serialized `PhoneMetadataCollection` holding alternate formats.
    pub fn from_bytes(blob: &[u8]) -> Result<Self, DecodeError> {
        Self::from_rule_groups(decoder::decode(blob)?, Box::new(RegexBasedMatcher::new()))
    }

    pub(crate) fn from_rule_groups(
        rule_groups: Vec<RuleGroup>,
        matcher_api: Box<dyn MatcherApi>,
    ) -> Result<Self, DecodeError> {
        let mut country_code_to_rule_group = HashMap::with_capacity(rule_groups.len());
        for (index, group) in rule_groups.iter().enumerate() {
            match country_code_to_rule_group.entry(group.country_code) {
                Entry::Occupied(_) => return Err(DecodeError::DuplicateCallingCode(group.country_code)),
                Entry::Vacant(entry) => {
                    entry.insert(index);
                }
            }
        }
        Ok(Self { matcher_api, rule_groups, country_code_to_rule_group })
    }

    /// All groups, in the order they were encoded.
    pub fn rule_groups(&self) -> &[RuleGroup] {
        &self.rule_groups
    }

    /// Calling codes that have at least one alternate format, ascending.
    pub fn supported_calling_codes(&self) -> Vec<i32> {
        let mut calling_codes = self
            .rule_groups
            .iter()
            .filter(|group| !group.is_empty())
            .map(RuleGroup::country_code)
            .collect::<Vec<_>>();
        calling_codes.sort_unstable();
        calling_codes
    }

    pub fn get_alternate_formats_for_country(&self, country_calling_code: i32) -> Option<&RuleGroup> {
        self.country_code_to_rule_group
            .get(&country_calling_code)
            .map(|&index| &self.rule_groups[index])
    }

    /// Formats `national_number` with the first alternate format of the
    /// calling code whose leading digits and pattern match it.
    ///
    /// Returns `None` when there is no such format, including when the
    /// calling code has no alternate formats at all.
    pub fn find_alternate_format(&self, country_calling_code: i32, national_number: &str) -> Option<String> {
        self.find_alternate_format_match(country_calling_code, national_number)
            .map(|found| found.formatted)
    }

    /// Like [`Self::find_alternate_format`], but also reports which rule won.
    pub fn find_alternate_format_match(
        &self,
        country_calling_code: i32,
        national_number: &str,
    ) -> Option<AlternateFormatMatch<'_>> {
        let group = self.get_alternate_formats_for_country(country_calling_code)?;
        let found = group
            .rules
            .iter()
            .enumerate()
            .find_map(|(rule_index, rule)| self.try_rule(rule_index, rule, national_number));
        if found.is_none() {
            trace!("Number '{national_number}' has no alternate format for calling code {country_calling_code}");
        }
        found
    }

    /// Every alternate format of the calling code that applies to the number,
    /// in priority order. Useful when checking how a written number was grouped.
    pub fn find_all_alternate_formats(
        &self,
        country_calling_code: i32,
        national_number: &str,
    ) -> Vec<AlternateFormatMatch<'_>> {
        let Some(group) = self.get_alternate_formats_for_country(country_calling_code) else {
            return Vec::new();
        };
        group
            .rules
            .iter()
            .enumerate()
            .filter_map(|(rule_index, rule)| self.try_rule(rule_index, rule, national_number))
            .collect()
    }

    /// The alternate format prefixed with the calling code the way an
    /// international number is written, e.g. `+49 30/123 4567`.
    pub fn format_with_calling_code(&self, country_calling_code: i32, national_number: &str) -> Option<String> {
        let formatted = self.find_alternate_format(country_calling_code, national_number)?;
        let mut buf = itoa::Buffer::new();
        let country_calling_code_str = buf.format(country_calling_code);
        Some(fast_cat::concat_str!(PLUS_SIGN, country_calling_code_str, " ", &formatted))
    }

    fn try_rule<'a>(
        &self,
        rule_index: usize,
        rule: &'a FormatRule,
        national_number: &str,
    ) -> Option<AlternateFormatMatch<'a>> {
        // Leading digits are a filter: a rule they reject is never tried,
        // even if its pattern would match.
        if !self.matcher_api.match_leading_digits(national_number, rule) {
            return None;
        }
        let captures = self.matcher_api.match_pattern(national_number, rule)?;
        let formatted = rule.format.render(&captures);
        trace!("Number '{national_number}' matched alternate format #{rule_index} '{}'", rule.format());
        Some(AlternateFormatMatch { rule_index, rule, formatted })
    }
}
