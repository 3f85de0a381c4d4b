//! mdscroll
//!
//! Terminal pager that lays out a markdown-flavoured document as a vertical
//! stack of blocks and scrolls through it.
//!
//! The crate follows a pure core / impure shell split: classification,
//! layout, scrolling and scheduling are plain data transformations, while
//! [`view`] owns the terminal.

pub mod config;
pub mod logging;
pub mod model;
pub mod parser;
pub mod source;
pub mod state;
pub mod view;
pub mod view_state;

// Re-export main loop integration
pub mod integration;

#[cfg(test)]
mod test_harness;

#[cfg(test)]
mod tests;
