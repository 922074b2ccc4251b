// Copyright (C) 2009 The Libphonenumber Authors
// Copyright (C) 2025 The Kashin Vladislav (Rust adaptation author)
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

use regex::{Captures, Regex};

/// Wraps `pattern` so that it only matches the whole input.
///
/// The group is non-capturing, so group indices of `pattern` are unchanged.
pub fn anchor_full(pattern: &str) -> String {
    fast_cat::concat_str!("^(?:", pattern, ")$")
}

/// Wraps `pattern` so that it only matches at the start of the input.
pub fn anchor_start(pattern: &str) -> String {
    fast_cat::concat_str!("^(?:", pattern, ")")
}

pub trait RegexFullMatch {
    /// Eq of C fullMatch, returning the captures of the match.
    ///
    /// Expects a regex built from [`anchor_full`]. The span check guards
    /// against a regex compiled from a raw, unanchored source.
    fn full_captures<'a>(&self, s: &'a str) -> Option<Captures<'a>>;
}

pub trait RegexConsume {
    /// Eq of C Consume without the consumed remainder.
    fn matches_start(&self, s: &str) -> bool;
}

impl RegexFullMatch for Regex {
    fn full_captures<'a>(&self, s: &'a str) -> Option<Captures<'a>> {
        let captures = self.captures(s)?;
        let whole = captures.get(0)?;
        if whole.start() != 0 || whole.end() != s.len() {
            return None
        }
        Some(captures)
    }
}

impl RegexConsume for Regex {
    fn matches_start(&self, s: &str) -> bool {
        self.find(s).is_some_and(|found| found.start() == 0)
    }
}

#[cfg(test)]
mod tests {
    use regex::Regex;

    use super::{anchor_full, anchor_start, RegexConsume, RegexFullMatch};

    #[test]
    fn full_anchor_rejects_partial_alternation() {
        // Leftmost-first would stop at "12" without the anchors.
        let regex = Regex::new(&anchor_full(r"12|1234")).unwrap();
        assert!(regex.full_captures("1234").is_some());
        assert!(regex.full_captures("12345").is_none());
    }

    #[test]
    fn start_anchor_does_not_look_past_prefix() {
        let regex = Regex::new(&anchor_start(r"3[02]|40")).unwrap();
        assert!(regex.matches_start("301234"));
        assert!(regex.matches_start("40"));
        assert!(!regex.matches_start("1301234"));
        assert!(!regex.matches_start("3"));
    }

    #[test]
    fn full_captures_keeps_group_numbering() {
        let regex = Regex::new(&anchor_full(r"(\d{2})(\d{3})")).unwrap();
        let captures = regex.full_captures("12345").unwrap();
        assert_eq!(&captures[1], "12");
        assert_eq!(&captures[2], "345");
    }
}
