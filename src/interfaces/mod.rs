use regex::Captures;

use crate::alternateformats::FormatRule;

/// Internal alternate format matching API used to isolate the underlying
/// implementation of the matcher and allow different implementations to be
/// swapped in easily.
pub(crate) trait MatcherApi: Send + Sync {
  /// Returns whether the given national number (a string containing only decimal
  /// digits) starts with one of the leading digits patterns of the rule. A rule
  /// without leading digits patterns accepts every number.
  fn match_leading_digits(&self, national_number: &str, rule: &FormatRule) -> bool;

  /// Returns the captures of the rule pattern if it matches the whole
  /// national number.
  fn match_pattern<'a>(&self, national_number: &'a str, rule: &FormatRule) -> Option<Captures<'a>>;
}
