#![warn(missing_docs)]
#![warn(clippy::std_instead_of_core)]
#![warn(clippy::std_instead_of_alloc)]
#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

extern crate alloc;

mod classify;
mod dump;
mod parsed;
mod parser;

pub(crate) mod arg;
pub(crate) mod error;
pub(crate) mod span;

pub use arg::FLAG_PREFIX;
pub use classify::classify;
pub use dump::Dump;
pub use error::{ArgsError, ArgsErrorKind};
pub use parsed::{ArgPair, ParsedArgs};
pub use parser::ArgsParser;
pub use span::{Pos, Span};
