use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use std::{fs, io};

use serde::Serialize;
use spdlog::{debug, info};

use crate::front_matter::FrontMatter;
use crate::front_matter::parsing_utils::parse_front_matter;
use crate::post_list::ContentList;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Issue {
    pub file_name: PathBuf,
    pub message: String,
}

impl Display for Issue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.file_name.display(), self.message)
    }
}

#[derive(Debug, Default, Serialize)]
pub struct ValidationReport {
    pub checked: usize,
    pub issues: Vec<Issue>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }
}

fn check_fields(front_matter: &FrontMatter) -> Vec<String> {
    let mut problems = vec![];

    if front_matter.title.trim().is_empty() {
        problems.push("title is empty".to_string());
    }
    if front_matter.tags.iter().any(|tag| tag.trim().is_empty()) {
        problems.push("tags contain an empty tag".to_string());
    }

    if let Some(ref howto) = front_matter.howto {
        if howto.steps.is_empty() {
            problems.push("howto has no steps".to_string());
        }
        for (i, step) in howto.steps.iter().enumerate() {
            if step.name.trim().is_empty() {
                problems.push(format!("howto step {} has an empty name", i + 1));
            }
            if step.text.trim().is_empty() {
                problems.push(format!("howto step {} has an empty text", i + 1));
            }
        }
    }

    for (i, faq) in front_matter.faqs.iter().enumerate() {
        if faq.question.trim().is_empty() {
            problems.push(format!("faq {} has an empty question", i + 1));
        }
        if faq.answer.trim().is_empty() {
            problems.push(format!("faq {} has an empty answer", i + 1));
        }
    }

    problems
}

/// Everything wrong with a single post. An empty list means the post is fine.
pub fn validate_content(file_name: &Path, content: &str) -> Vec<Issue> {
    let to_issue = |message: String| Issue { file_name: file_name.to_path_buf(), message };

    match parse_front_matter(file_name, content) {
        Ok((front_matter, _body)) => check_fields(&front_matter).into_iter().map(to_issue).collect(),
        Err(e) => {
            // The parser already names the file, keep only the reason
            let message = e.to_string().replace(&format!(" - file={}", file_name.display()), "");
            vec![to_issue(message)]
        }
    }
}

pub fn validate_file(file_name: &Path) -> io::Result<Vec<Issue>> {
    let content = fs::read_to_string(file_name).map_err(|e| {
        io::Error::new(e.kind(), format!("Error reading {}: {}", file_name.display(), e))
    })?;
    Ok(validate_content(file_name, &content))
}

pub fn validate_dir(content_dir: &Path) -> io::Result<ValidationReport> {
    let files = ContentList { root_dir: content_dir.to_path_buf() }.retrieve_files()?;

    let mut report = ValidationReport::default();
    for file_name in files {
        let issues = match validate_file(&file_name) {
            Ok(issues) => issues,
            Err(e) => vec![Issue { file_name: file_name.clone(), message: e.to_string() }],
        };
        debug!("{}: {} issues", file_name.display(), issues.len());
        report.checked += 1;
        report.issues.extend(issues);
    }

    info!("Checked {} posts in {}, {} issues", report.checked, content_dir.display(), report.issues.len());
    Ok(report)
}

#[cfg(test)]
mod tests {
    use crate::test_data::{HOWTO_POST, HUGO_POST};

    use super::*;

    fn file_name() -> PathBuf {
        PathBuf::from("content/post/post.md")
    }

    fn messages(content: &str) -> Vec<String> {
        validate_content(&file_name(), content).into_iter().map(|i| i.message).collect()
    }

    #[test]
    fn test_valid_posts() {
        assert!(validate_content(&file_name(), HUGO_POST).is_empty());
        assert!(validate_content(&file_name(), HOWTO_POST).is_empty());
    }

    #[test]
    fn test_post_from_hugo_new_is_valid() {
        let content = "+++\ndate = '2025-03-18T09:00:00-03:00'\ndraft = true\ntitle = 'From hugo new'\n+++\n";
        assert!(validate_content(&file_name(), content).is_empty());
    }

    #[test]
    fn test_structural_problems() {
        assert_eq!(messages("# No front matter\n"), ["Front matter must start with +++ on the first line"]);
        assert_eq!(messages("+++\ntitle = 'x'\n"), ["End of front matter (+++) is missing"]);
        assert_eq!(messages("+++\ntitle = 'x'\ndate = 2024-01-01\n+++\n+++\n+++\n"), ["More than one front matter block"]);
    }

    #[test]
    fn test_missing_key_names_the_key() {
        let msgs = messages("+++\ntitle = 'x'\n+++\n");
        assert_eq!(msgs.len(), 1);
        assert!(msgs[0].starts_with("Invalid front matter:"));
        assert!(msgs[0].contains("date"));
    }

    #[test]
    fn test_field_problems() {
        let content = "+++
title = ' '
date = 2024-01-01
tags = ['ai', '']

[howto]
name = 'Empty'

[[faqs]]
question = 'Why?'
answer = ''
+++
";
        assert_eq!(messages(content), [
            "title is empty",
            "tags contain an empty tag",
            "howto has no steps",
            "faq 1 has an empty answer",
        ]);
    }

    #[test]
    fn test_issue_display() {
        let issue = Issue { file_name: file_name(), message: "title is empty".to_string() };
        assert_eq!(issue.to_string(), "content/post/post.md: title is empty");
    }

    #[test]
    fn test_validate_dir() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("post")).unwrap();
        fs::write(dir.path().join("post/good.md"), HUGO_POST).unwrap();
        fs::write(dir.path().join("post/bad.md"), "# Forgot the header\n").unwrap();
        fs::write(dir.path().join("post/notes.txt"), "ignored").unwrap();

        let report = validate_dir(dir.path()).unwrap();
        assert_eq!(report.checked, 2);
        assert!(!report.is_valid());
        assert_eq!(report.issues.len(), 1);
        assert_eq!(report.issues[0].file_name, dir.path().join("post/bad.md"));
    }

    #[test]
    fn test_validate_missing_dir() {
        let err = validate_dir(Path::new("/no/such/content")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
