mod helper_constants;
mod helper_functions;
mod decoder;
mod template;
pub mod errors;
pub mod enums;
pub mod metadata;
pub mod alternate_formats;

use std::sync::LazyLock;

pub use alternate_formats::{AlternateFormatMatch, AlternateFormats};
pub use errors::DecodeError;
pub use helper_functions::load_compiled_alternate_formats;
pub use metadata::{FormatRule, RuleGroup};

pub static ALTERNATE_FORMATS: LazyLock<AlternateFormats> = LazyLock::new(|| {
    AlternateFormats::new()
});
