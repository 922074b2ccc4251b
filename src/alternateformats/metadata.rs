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

use std::{fmt, sync::Arc};

use regex::Regex;

use super::template::FormatTemplate;

/// A regex together with the metadata source it was compiled from.
///
/// Two patterns are equal when their sources are equal; the compiled form
/// follows from the source.
#[derive(Clone)]
pub struct CompiledPattern {
    source: String,
    regex: Arc<Regex>,
}

impl CompiledPattern {
    pub(crate) fn new(source: String, regex: Arc<Regex>) -> Self {
        Self { source, regex }
    }

    /// The pattern as written in the metadata, without anchors.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub(crate) fn regex(&self) -> &Regex {
        &self.regex
    }
}

impl PartialEq for CompiledPattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for CompiledPattern {}

impl fmt::Debug for CompiledPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CompiledPattern").field(&self.source).finish()
    }
}

/// One alternate way of formatting numbers of a country, the `NumberFormat`
/// message of the metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatRule {
    pub(crate) pattern: CompiledPattern,
    pub(crate) format: FormatTemplate,
    pub(crate) leading_digits_patterns: Vec<CompiledPattern>,
    pub(crate) national_prefix_formatting_rule: Option<String>,
    pub(crate) national_prefix_optional_when_formatting: bool,
    pub(crate) domestic_carrier_code_formatting_rule: Option<String>,
}

impl FormatRule {
    /// Pattern the whole national significant number has to match.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    pub fn format(&self) -> &str {
        self.format.as_str()
    }

    /// Patterns matched against the start of the number only. The rule is
    /// considered when any of them matches; an empty list doesn't restrict.
    pub fn leading_digits_patterns(&self) -> impl ExactSizeIterator<Item = &str> {
        self.leading_digits_patterns.iter().map(CompiledPattern::as_str)
    }

    /// `None` when the field is absent, `Some("")` when it is present but empty.
    pub fn national_prefix_formatting_rule(&self) -> Option<&str> {
        self.national_prefix_formatting_rule.as_deref()
    }

    /// The national prefix formatting rule, if there is one to apply.
    ///
    /// An empty rule carries no formatting and is treated like a missing one.
    pub fn applicable_national_prefix_formatting_rule(&self) -> Option<&str> {
        self.national_prefix_formatting_rule().filter(|rule| !rule.is_empty())
    }

    pub fn national_prefix_optional_when_formatting(&self) -> bool {
        self.national_prefix_optional_when_formatting
    }

    /// `None` when the field is absent, `Some("")` when it is present but empty.
    pub fn domestic_carrier_code_formatting_rule(&self) -> Option<&str> {
        self.domestic_carrier_code_formatting_rule.as_deref()
    }
}

/// All alternate formats of one country calling code, in priority order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleGroup {
    pub(crate) country_code: i32,
    pub(crate) id: Option<String>,
    pub(crate) rules: Vec<FormatRule>,
}

impl RuleGroup {
    pub fn country_code(&self) -> i32 {
        self.country_code
    }

    /// Region id of the record. Alternate format metadata is keyed by calling
    /// code, so this is usually empty.
    pub fn id(&self) -> &str {
        self.id.as_deref().unwrap_or_default()
    }

    pub fn rules(&self) -> &[FormatRule] {
        &self.rules
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
