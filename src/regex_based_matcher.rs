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


use log::trace;
use regex::Captures;

use super::regex_util::{RegexConsume, RegexFullMatch};

use crate::{alternateformats::FormatRule, interfaces};

/// Matcher over the regexes compiled while decoding the metadata, so no
/// lookup or compilation happens per call.
pub struct RegexBasedMatcher;

impl RegexBasedMatcher {
    pub fn new() -> Self {
        Self
    }
}

impl interfaces::MatcherApi for RegexBasedMatcher {
    fn match_leading_digits(&self, national_number: &str, rule: &FormatRule) -> bool {
        if rule.leading_digits_patterns.is_empty() {
            return true;
        }
        let matched = rule
            .leading_digits_patterns
            .iter()
            .any(|leading_digits| leading_digits.regex().matches_start(national_number));
        if !matched {
            trace!(
                "Number '{national_number}' skips format '{}': no leading digits pattern matches",
                rule.format()
            );
        }
        matched
    }

    fn match_pattern<'a>(&self, national_number: &'a str, rule: &FormatRule) -> Option<Captures<'a>> {
        rule.pattern.regex().full_captures(national_number)
    }
}
