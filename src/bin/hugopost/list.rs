use anyhow::{Context, Result};

use hugopost::config::Config;
use hugopost::post::list_posts;

use crate::ListArgs;

pub fn list_cmd(config: &Config, args: ListArgs) -> Result<bool> {
    let content_dir = args.content_dir.unwrap_or_else(|| config.paths.content_dir.clone());
    let posts = list_posts(&content_dir)
        .with_context(|| format!("Error listing posts in {}", content_dir.display()))?;

    let mut shown = 0;
    for post in posts.iter().filter(|p| !args.published || !p.front_matter.draft) {
        println!("{}", post);
        shown += 1;
    }
    println!("{} posts", shown);

    Ok(true)
}
