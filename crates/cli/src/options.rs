use clap::ValueEnum;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum Mode {
    /// Count rows per combination of boolean-column values
    #[default]
    Combination,
    /// Count every true/false value in the file
    Flat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Table,
    Json,
    Yaml,
}

/// Ordering of combination rows in text and table output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Key,
    Count,
}
