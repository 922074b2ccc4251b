mod interfaces;
mod regexp_cache;
mod regex_based_matcher;
mod generated;
mod alternateformats;
pub(crate) mod regex_util;

#[cfg(test)]
mod tests;

pub use alternateformats::{
    ALTERNATE_FORMATS, AlternateFormatMatch, AlternateFormats, DecodeError, FormatRule, RuleGroup,
    enums::WireType, load_compiled_alternate_formats,
};
pub use regexp_cache::InvalidRegexError;
