pub mod terminal;

pub use terminal::{OutputFormat, TerminalLabel};
