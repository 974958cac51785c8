//! CSV writer for the scraped dataset

use crate::crawler::Post;
use crate::SweepError;
use std::path::Path;

/// Writes posts to a CSV file with the listing's column layout
///
/// # Arguments
///
/// * `path` - Where to create the CSV file
/// * `posts` - The posts to write, in final order
///
/// # Returns
///
/// * `Ok(())` - File written and flushed
/// * `Err(SweepError)` - File creation or a write failed
pub fn write_posts(path: &Path, posts: &[Post]) -> Result<(), SweepError> {
    let mut writer = csv::Writer::from_path(path)?;

    writer.write_record(["No.", "Title", "User", "View", "Link"])?;

    for post in posts {
        let number = post.number.to_string();
        let views = post.views.to_string();
        writer.write_record([
            number.as_str(),
            post.title.as_str(),
            post.author.as_str(),
            views.as_str(),
            post.link.as_str(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}
