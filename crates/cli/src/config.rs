// crates/cli/src/config.rs
use crate::args::Args;
use crate::error::Result;
use crate::options::{self, OutputFormat, SortKey};
use bool_tally_engine::config::Config;
use bool_tally_engine::{CountMode, HeaderSplit};
use std::path::PathBuf;

/// How a report is turned into text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    pub format: OutputFormat,
    pub sort: SortKey,
    pub desc: bool,
}

/// Settings for one invocation, resolved from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// `None` means ask the user interactively.
    pub path: Option<PathBuf>,
    pub mode: CountMode,
    pub header_split: HeaderSplit,
    pub render: RenderOptions,
    pub verbosity: u8,
}

impl AppConfig {
    /// Engine configuration for `path` with this invocation's settings.
    ///
    /// # Errors
    /// Returns an engine configuration error if the builder rejects the input.
    pub fn engine_config(&self, path: PathBuf) -> Result<Config> {
        let config = Config::for_path(path)
            .mode(self.mode)
            .header_split(self.header_split)
            .build()
            .map_err(bool_tally_engine::error::EngineError::from)?;
        Ok(config)
    }
}

impl From<Args> for AppConfig {
    fn from(args: Args) -> Self {
        let header_split = if args.legacy_header_split {
            HeaderSplit::Plain
        } else {
            HeaderSplit::QuoteAware
        };

        Self {
            path: args.path,
            mode: args.mode.into(),
            header_split,
            render: RenderOptions {
                format: args.format,
                sort: args.sort,
                desc: args.desc,
            },
            verbosity: args.verbose,
        }
    }
}

// From trait implementations for CLI -> Engine enum conversion

macro_rules! map_enum {
    ($from:ty, $to:ty, $($variant:ident),+ $(,)?) => {
        impl From<$from> for $to {
            fn from(f: $from) -> Self {
                match f {
                    $( <$from>::$variant => <$to>::$variant, )+
                }
            }
        }
    };
}

map_enum!(options::Mode, CountMode, Combination, Flat);
