/// Compiled-in metadata assets.
pub(crate) mod metadata;
