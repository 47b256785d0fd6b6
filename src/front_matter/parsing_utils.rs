use std::io;
use std::io::ErrorKind;
use std::path::Path;

use crate::front_matter::{DELIMITER, FrontMatter};

fn is_delimiter(line: &str) -> bool {
    line.trim_end() == DELIMITER
}

fn invalid_data(file_name: &Path, msg: &str) -> io::Error {
    io::Error::new(ErrorKind::InvalidData, format!("{} - file={}", msg, file_name.display()))
}

/// Splits a post in the TOML between the `+++` lines and the body after the closing one.
///
/// The opening delimiter must be the first line of the file and only one block is
/// allowed: a body starting with another `+++` block is rejected.
pub fn split_front_matter<'a>(file_name: &Path, content: &'a str) -> io::Result<(&'a str, &'a str)> {
    let mut lines = content.split_inclusive('\n');

    let first = lines.next().unwrap_or("");
    if !is_delimiter(first) {
        return Err(invalid_data(file_name, "Front matter must start with +++ on the first line"));
    }

    let block_start = first.len();
    let mut offset = block_start;
    let mut block_end = None;
    for line in lines.by_ref() {
        if is_delimiter(line) {
            block_end = Some((offset, offset + line.len()));
            break;
        }
        offset += line.len();
    }

    let Some((block_end, body_start)) = block_end else {
        return Err(invalid_data(file_name, "End of front matter (+++) is missing"));
    };

    let block = &content[block_start..block_end];
    let body = &content[body_start..];

    // Blank lines are fine between the block and the body, a second block is not
    let next_line = body.lines().find(|line| !line.trim().is_empty());
    if next_line.map(is_delimiter).unwrap_or(false) {
        return Err(invalid_data(file_name, "More than one front matter block"));
    }

    Ok((block, body))
}

pub fn parse_front_matter<'a>(file_name: &Path, content: &'a str) -> io::Result<(FrontMatter, &'a str)> {
    let (block, body) = split_front_matter(file_name, content)?;
    let front_matter = FrontMatter::from_toml(file_name, block)?;
    Ok((front_matter, body))
}
