use std::fmt::{Display, Formatter, Write};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::{fmt, fs, io};

use chrono::NaiveDate;
use spdlog::{info, warn};

use crate::front_matter::FrontMatter;
use crate::post_list::ContentList;
use crate::text_utils::slug_from_title;
use crate::util::toml_date::TomlDate;

/// A freshly created post, not written anywhere yet
pub struct NewPost {
    pub file_name: String,
    pub content: String,
}

fn render_body() -> String {
    let mut buf = String::new();

    let _ = writeln!(&mut buf, "");
    let _ = writeln!(&mut buf, "This is a body example");
    let _ = writeln!(&mut buf, "Please remove it and replace with your content");
    let _ = writeln!(&mut buf, "");
    let _ = writeln!(&mut buf, "<!--more-->");
    let _ = writeln!(&mut buf, "");
    let _ = writeln!(&mut buf, "And this is the rest of your post");

    buf
}

pub fn new_post(title: &str, date: NaiveDate, author: &str, tags: &[String]) -> io::Result<NewPost> {
    let slug = slug_from_title(title);
    if slug.is_empty() {
        return Err(io::Error::new(ErrorKind::InvalidInput, format!("Cannot build a file name from the title '{}'", title)));
    }

    let mut front_matter = FrontMatter::new(title, TomlDate(date));
    front_matter.draft = true;
    front_matter.tags = tags.to_vec();
    front_matter.description = Some(String::new());
    front_matter.author = Some(author.to_string());

    let mut content = front_matter.render();
    content.push_str(&render_body());

    Ok(NewPost {
        file_name: format!("{}.md", slug),
        content,
    })
}

/// Writes the post in `content_dir`. An existing file is never replaced.
pub fn write_new_post(content_dir: &Path, post: &NewPost) -> io::Result<PathBuf> {
    use std::io::Write;

    fs::create_dir_all(content_dir)?;
    let full_path = content_dir.join(&post.file_name);
    let mut file = fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&full_path)
        .map_err(|e| io::Error::new(e.kind(), format!("Error creating {}: {}", full_path.display(), e)))?;
    file.write_all(post.content.as_bytes())?;

    info!("Created post {}", full_path.display());
    Ok(full_path)
}

pub struct PostSummary {
    pub file_name: PathBuf,
    pub front_matter: FrontMatter,
}

impl Display for PostSummary {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let draft = if self.front_matter.draft { "draft" } else { "     " };
        write!(f, "{}  {}  {}  ({})",
               self.front_matter.date,
               draft,
               self.front_matter.title,
               self.file_name.display()
        )
    }
}

/// Posts below `content_dir`, newest first. Files that do not parse are skipped.
pub fn list_posts(content_dir: &Path) -> io::Result<Vec<PostSummary>> {
    let files = ContentList { root_dir: content_dir.to_path_buf() }.retrieve_files()?;

    let mut posts = vec![];
    for file_name in files {
        match FrontMatter::from_file(&file_name) {
            Ok(front_matter) => posts.push(PostSummary { file_name, front_matter }),
            Err(e) => warn!("Skipping {}", e),
        }
    }

    posts.sort_by(|a, b| {
        b.front_matter.date.cmp(&a.front_matter.date)
            .then_with(|| a.file_name.cmp(&b.file_name))
    });
    Ok(posts)
}
