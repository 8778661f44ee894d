use serde::Serialize;

/// Which counting algorithm to run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CountMode {
    /// Count rows per distinct tuple of boolean-column values.
    #[default]
    Combination,
    /// Count every `true`/`false` field regardless of column.
    Flat,
}

/// How the first line is split before header detection in flat mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum HeaderSplit {
    /// Same quote-aware split as every other row.
    #[default]
    QuoteAware,
    /// Split on every comma. Reproduces older flat-count output.
    Plain,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TallyOptions {
    pub mode: CountMode,
    pub header_split: HeaderSplit,
}

impl TallyOptions {
    #[must_use]
    pub const fn new(mode: CountMode) -> Self {
        Self {
            mode,
            header_split: HeaderSplit::QuoteAware,
        }
    }

    #[must_use]
    pub const fn with_header_split(mut self, header_split: HeaderSplit) -> Self {
        self.header_split = header_split;
        self
    }
}
