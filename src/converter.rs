use std::{fs, io};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::{Days, NaiveDate};
use spdlog::{debug, info, warn};

use crate::config::Convert;
use crate::front_matter::front_matter_renderer::render_converted_header;
use crate::post_list::SourceList;
use crate::text_utils::{split_first_line, strip_title};
use crate::util::toml_date::TomlDate;
use crate::validator::{Issue, validate_content};

#[derive(Debug, Clone)]
pub struct ConvertOptions {
    pub prefix: String,
    pub tags: Vec<String>,
    pub draft: bool,
    pub start_offset: u32,
    pub no_clobber: bool,
    pub dry_run: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        ConvertOptions::from(&Convert::default())
    }
}

impl From<&Convert> for ConvertOptions {
    fn from(value: &Convert) -> Self {
        ConvertOptions {
            prefix: value.prefix.clone(),
            tags: value.tags.clone(),
            draft: value.draft,
            start_offset: value.start_offset,
            no_clobber: false,
            dry_run: false,
        }
    }
}

/// A draft turned into a Hugo post, still in memory
#[derive(Debug, PartialEq)]
pub struct ConvertedPost {
    pub title: String,
    pub date: TomlDate,
    pub content: String,
}

#[derive(Debug, PartialEq)]
pub struct ConvertedFile {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub title: String,
    pub date: TomlDate,
}

#[derive(Debug, Default)]
pub struct ConvertReport {
    pub converted: Vec<ConvertedFile>,
    pub skipped: Vec<PathBuf>,
    /// Problems the validator found in the converted posts. They are still written.
    pub issues: Vec<Issue>,
}

/// `devto-my-post.md` becomes `my-post.md`. Names without the prefix are kept.
pub fn output_file_name<'a>(file_name: &'a str, prefix: &str) -> &'a str {
    file_name.strip_prefix(prefix).unwrap_or(file_name)
}

pub fn post_date(today: NaiveDate, offset: u64) -> io::Result<NaiveDate> {
    today.checked_sub_days(Days::new(offset)).ok_or_else(|| {
        io::Error::new(ErrorKind::InvalidInput, format!("Cannot go back {} days from {}", offset, today))
    })
}

/// First line becomes the title, the remaining lines are kept untouched below the new header
pub fn convert_source(source: &str, date: NaiveDate, options: &ConvertOptions) -> ConvertedPost {
    let (first_line, body) = split_first_line(source);
    let title = strip_title(first_line).to_string();
    let date = TomlDate(date);

    let mut content = render_converted_header(&title, &date, options.draft, &options.tags);
    content.push_str(body);

    ConvertedPost { title, date, content }
}

fn read_source(path: &Path) -> io::Result<String> {
    let bytes = fs::read(path).map_err(|e| {
        io::Error::new(e.kind(), format!("Error reading {}: {}", path.display(), e))
    })?;
    String::from_utf8(bytes).map_err(|_| {
        io::Error::new(ErrorKind::InvalidData, format!("File is not valid UTF-8: {}", path.display()))
    })
}

/// Converts every draft in `source_dir` into `dest_dir`.
///
/// The n-th draft, in file name order, is dated `start_offset + n` days before `today`,
/// so older posts sort below newer ones the same way every run.
pub fn convert_dir(source_dir: &Path, dest_dir: &Path, options: &ConvertOptions, today: NaiveDate) -> io::Result<ConvertReport> {
    let sources = SourceList {
        root_dir: source_dir.to_path_buf(),
        prefix: options.prefix.clone(),
    }.retrieve_files()?;

    info!("Found {} drafts in {}", sources.len(), source_dir.display());

    if !options.dry_run && !sources.is_empty() {
        fs::create_dir_all(dest_dir).map_err(|e| {
            io::Error::new(e.kind(), format!("Error creating {}: {}", dest_dir.display(), e))
        })?;
    }

    let mut report = ConvertReport::default();
    for (counter, (source_path, file_name)) in sources.into_iter().enumerate() {
        let offset = options.start_offset as u64 + counter as u64;
        let date = post_date(today, offset)?;

        let destination = dest_dir.join(output_file_name(&file_name, &options.prefix));

        if options.no_clobber && destination.exists() {
            warn!("Skipping {}, {} already exists", source_path.display(), destination.display());
            report.skipped.push(source_path);
            continue;
        }

        let source = read_source(&source_path)?;
        let post = convert_source(&source, date, options);

        let issues = validate_content(&destination, &post.content);
        for issue in &issues {
            warn!("Converted post from {} is not valid: {}", source_path.display(), issue);
        }
        report.issues.extend(issues);

        if options.dry_run {
            info!("Would write {} ({}, {})", destination.display(), post.date, post.title);
        } else {
            fs::write(&destination, post.content.as_bytes()).map_err(|e| {
                io::Error::new(e.kind(), format!("Error writing {}: {}", destination.display(), e))
            })?;
            debug!("Wrote {} from {}", destination.display(), source_path.display());
        }

        report.converted.push(ConvertedFile {
            source: source_path,
            destination,
            title: post.title,
            date: post.date,
        });
    }

    info!("Converted {} posts, skipped {}, {} issues", report.converted.len(), report.skipped.len(), report.issues.len());
    Ok(report)
}
