//! Save-file and high-score codecs for Numeric Invasion.
//!
//! Both formats are plain whitespace-separated text, written and read
//! token by token. A save file is parsed completely before any of it is
//! handed to the caller, so a corrupt file never half-applies.

pub mod highscores;
pub mod save;

#[cfg(test)]
mod tests;
