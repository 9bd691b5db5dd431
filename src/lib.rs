//! amz-bestsellers - Amazon book bestsellers listing CLI
//!
//! Fetches the book bestsellers listing page and prints each entry's
//! title, author, price, and link.

pub mod amazon;
pub mod commands;
pub mod format;

pub use amazon::models::Listing;
