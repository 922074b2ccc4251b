use crate::generated::metadata::ALTERNATE_FORMAT_METADATA;

use super::{alternate_formats::AlternateFormats, errors::DecodeError};

/// Loads alternate formats from the compiled-in metadata.
///
/// Unlike [`crate::ALTERNATE_FORMATS`] this reports a broken table to the
/// caller instead of panicking.
pub fn load_compiled_alternate_formats() -> Result<AlternateFormats, DecodeError> {
    AlternateFormats::from_bytes(ALTERNATE_FORMAT_METADATA)
}
