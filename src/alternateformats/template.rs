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

use std::fmt;

use regex::Captures;

use super::helper_constants::GROUP_REFERENCE_SIGN;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Group(usize),
}

/// A parsed `format` string such as `$1/$2 $3`.
///
/// A placeholder is `$` followed by a single ASCII digit, so `$12` means
/// group 1 followed by a literal `2`. A `$` not followed by a digit is
/// copied as is.
#[derive(Clone)]
pub struct FormatTemplate {
    source: String,
    segments: Vec<Segment>,
}

impl FormatTemplate {
    pub fn parse(source: String) -> Self {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = source.chars().peekable();

        while let Some(c) = chars.next() {
            if c == GROUP_REFERENCE_SIGN {
                if let Some(group) = chars.peek().and_then(|next| next.to_digit(10)) {
                    chars.next();
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Group(group as usize));
                    continue;
                }
            }
            literal.push(c);
        }
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Self { source, segments }
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Highest group index referenced, `None` if the template is all literal.
    pub fn max_group(&self) -> Option<usize> {
        self.segments
            .iter()
            .filter_map(|segment| match segment {
                Segment::Group(group) => Some(*group),
                Segment::Literal(_) => None,
            })
            .max()
    }

    /// Substitutes every placeholder with its capture. Groups that did not
    /// take part in the match render as nothing.
    pub fn render(&self, captures: &Captures<'_>) -> String {
        let mut rendered = String::with_capacity(self.source.len() + captures[0].len());
        for segment in &self.segments {
            match segment {
                Segment::Literal(literal) => rendered.push_str(literal),
                Segment::Group(group) => {
                    if let Some(captured) = captures.get(*group) {
                        rendered.push_str(captured.as_str());
                    }
                }
            }
        }
        rendered
    }
}

impl PartialEq for FormatTemplate {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for FormatTemplate {}

impl fmt::Debug for FormatTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("FormatTemplate").field(&self.source).finish()
    }
}

#[cfg(test)]
mod tests {
    use regex::Regex;

    use super::FormatTemplate;

    fn render(pattern: &str, format: &str, number: &str) -> String {
        let regex = Regex::new(pattern).unwrap();
        let captures = regex.captures(number).unwrap();
        FormatTemplate::parse(format.to_string()).render(&captures)
    }

    #[test]
    fn renders_groups_between_separators() {
        assert_eq!(render(r"^(\d{3})(\d{2})(\d{4})$", "$1-$2-$3", "123457890"), "123-45-7890");
        assert_eq!(render(r"^(\d{2})(\d{3})(\d{3,4})$", "$1/$2 $3", "301234567"), "30/123 4567");
    }

    #[test]
    fn missing_optional_group_renders_empty() {
        assert_eq!(render(r"^(\d{2})(\d)?(\d{3})$", "$1 $2 $3", "12345"), "12  345");
    }

    #[test]
    fn placeholder_takes_one_digit() {
        let template = FormatTemplate::parse("$12".to_string());
        assert_eq!(template.max_group(), Some(1));
        assert_eq!(render(r"^(\d)$", "$12", "7"), "72");
    }

    #[test]
    fn dollar_without_digit_is_literal() {
        let template = FormatTemplate::parse("$ $NP".to_string());
        assert_eq!(template.max_group(), None);
        assert_eq!(render(r"^\d$", "$ $NP", "7"), "$ $NP");
    }

    #[test]
    fn max_group_is_highest_reference() {
        let template = FormatTemplate::parse("$2 $5 $1".to_string());
        assert_eq!(template.max_group(), Some(5));
        assert_eq!(template.as_str(), "$2 $5 $1");
    }
}
