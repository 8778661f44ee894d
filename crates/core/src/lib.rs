#![no_std]
#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]

extern crate alloc;

pub mod classifier;
pub mod config;
pub mod counter;
pub mod error;
pub mod header;
pub mod parser;
pub mod stats;
pub mod token;

pub use config::{CountMode, HeaderSplit, TallyOptions};
pub use counter::count_booleans;
pub use error::{Result, TallyError};
pub use parser::{Dataset, Row};
pub use stats::{CountMap, FALSE_COUNT_KEY, TRUE_COUNT_KEY, Tally};
pub use token::BoolToken;
