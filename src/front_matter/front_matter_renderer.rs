use std::fmt::Write;

use crate::front_matter::{DELIMITER, FrontMatter};
use crate::text_utils::{toml_string, toml_string_array};
use crate::util::toml_date::TomlDate;

/// The block written on top of converted drafts. Key order and quoting follow what
/// the old shell pipeline produced, so regenerated posts diff cleanly.
pub fn render_converted_header(title: &str, date: &TomlDate, draft: bool, tags: &[String]) -> String {
    let mut buf = String::new();

    let _ = writeln!(&mut buf, "{}", DELIMITER);
    let _ = writeln!(&mut buf, "title = {}", toml_string(title));
    let _ = writeln!(&mut buf, "date = {}", date);
    let _ = writeln!(&mut buf, "draft = {}", draft);
    let _ = writeln!(&mut buf, "tags = {}", toml_string_array(tags));
    let _ = writeln!(&mut buf, "{}", DELIMITER);
    buf
}

impl FrontMatter {
    /// Full block, including the optional how-to and FAQ tables
    pub fn render(&self) -> String {
        let mut buf = String::new();

        let _ = writeln!(&mut buf, "{}", DELIMITER);
        let _ = writeln!(&mut buf, "title = {}", toml_string(&self.title));
        let _ = writeln!(&mut buf, "date = {}", self.date);
        let _ = writeln!(&mut buf, "draft = {}", self.draft);
        let _ = writeln!(&mut buf, "tags = {}", toml_string_array(&self.tags));
        if let Some(ref description) = self.description {
            let _ = writeln!(&mut buf, "description = {}", toml_string(description));
        }
        if let Some(ref author) = self.author {
            let _ = writeln!(&mut buf, "author = {}", toml_string(author));
        }

        // Tables must come after every plain key
        if let Some(ref howto) = self.howto {
            let _ = writeln!(&mut buf, "");
            let _ = writeln!(&mut buf, "[howto]");
            if let Some(ref name) = howto.name {
                let _ = writeln!(&mut buf, "name = {}", toml_string(name));
            }
            if let Some(ref description) = howto.description {
                let _ = writeln!(&mut buf, "description = {}", toml_string(description));
            }
            if let Some(ref total_time) = howto.total_time {
                let _ = writeln!(&mut buf, "total_time = {}", toml_string(total_time));
            }
            for step in &howto.steps {
                let _ = writeln!(&mut buf, "");
                let _ = writeln!(&mut buf, "[[howto.steps]]");
                let _ = writeln!(&mut buf, "name = {}", toml_string(&step.name));
                let _ = writeln!(&mut buf, "text = {}", toml_string(&step.text));
            }
        }

        for faq in &self.faqs {
            let _ = writeln!(&mut buf, "");
            let _ = writeln!(&mut buf, "[[faqs]]");
            let _ = writeln!(&mut buf, "question = {}", toml_string(&faq.question));
            let _ = writeln!(&mut buf, "answer = {}", toml_string(&faq.answer));
        }

        let _ = writeln!(&mut buf, "{}", DELIMITER);
        buf
    }
}
