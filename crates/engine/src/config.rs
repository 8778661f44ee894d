use bool_tally_core::{CountMode, HeaderSplit, TallyOptions};
use derive_builder::Builder;
use std::path::PathBuf;

/// Everything one engine run needs.
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
#[builder(setter(into))]
pub struct Config {
    pub path: PathBuf,
    #[builder(default)]
    pub mode: CountMode,
    #[builder(default)]
    pub header_split: HeaderSplit,
}

impl Config {
    /// Start a builder for `path`, leaving every other field at its default.
    pub fn for_path(path: impl Into<PathBuf>) -> ConfigBuilder {
        let mut builder = ConfigBuilder::default();
        builder.path(path);
        builder
    }

    #[must_use]
    pub const fn options(&self) -> TallyOptions {
        TallyOptions::new(self.mode).with_header_split(self.header_split)
    }
}
