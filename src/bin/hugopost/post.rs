use anyhow::{Context, Result};
use chrono::Local;

use hugopost::config::Config;
use hugopost::post::{new_post, write_new_post};
use hugopost::util::os_helper::author_or_default;

use crate::NewArgs;

pub fn post_cmd(config: &Config, args: NewArgs) -> Result<bool> {
    let author = author_or_default(args.author.as_deref());
    let tags = if args.tags.is_empty() { config.convert.tags.clone() } else { args.tags };
    let today = Local::now().date_naive();

    let post = new_post(&args.title, today, &author, &tags)?;

    if args.stdout {
        print!("{}", post.content);
        return Ok(true);
    }

    let content_dir = args.content_dir.unwrap_or_else(|| config.paths.content_dir.clone());
    let full_path = write_new_post(&content_dir, &post)
        .with_context(|| format!("Error creating post '{}'", args.title))?;
    println!("Creating file {}", full_path.display());

    Ok(true)
}
