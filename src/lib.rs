//! JustStream library exports for testing

pub mod carousel;
pub mod catalog;
pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;
