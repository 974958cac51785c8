//! Output module for writing the scraped dataset
//!
//! The sole output is one CSV file with a header row and one row per post,
//! in the order the dataset arrives (the caller sorts before writing).

mod writer;

pub use writer::write_posts;
