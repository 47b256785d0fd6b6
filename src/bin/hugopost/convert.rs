use anyhow::{Context, Result};
use chrono::Local;

use hugopost::config::Config;
use hugopost::converter::{ConvertOptions, convert_dir};

use crate::ConvertArgs;

fn build_options(config: &Config, args: &ConvertArgs) -> ConvertOptions {
    let mut options = ConvertOptions::from(&config.convert);
    if let Some(ref prefix) = args.prefix {
        options.prefix = prefix.clone();
    }
    if !args.tags.is_empty() {
        options.tags = args.tags.clone();
    }
    if let Some(start_offset) = args.start_offset {
        options.start_offset = start_offset;
    }
    options.draft |= args.draft;
    options.no_clobber = args.no_clobber;
    options.dry_run = args.dry_run;
    options
}

pub fn convert_cmd(config: &Config, args: ConvertArgs) -> Result<bool> {
    let source_dir = args.source_dir.clone().unwrap_or_else(|| config.paths.source_dir.clone());
    let dest_dir = args.dest_dir.clone().unwrap_or_else(|| config.paths.dest_dir.clone());
    let options = build_options(config, &args);
    let today = Local::now().date_naive();

    let report = convert_dir(&source_dir, &dest_dir, &options, today)
        .with_context(|| format!("Error converting drafts from {}", source_dir.display()))?;

    for file in &report.converted {
        println!("{} -> {}  ({}, {})", file.source.display(), file.destination.display(), file.date, file.title);
    }
    for file in &report.skipped {
        println!("{} skipped", file.display());
    }
    for issue in &report.issues {
        println!("{}", issue);
    }
    let verb = if options.dry_run { "Would convert" } else { "Converted" };
    println!("{} {} files, {} issues", verb, report.converted.len(), report.issues.len());

    Ok(report.issues.is_empty())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn args() -> ConvertArgs {
        ConvertArgs {
            source_dir: None,
            dest_dir: None,
            prefix: None,
            tags: vec![],
            start_offset: None,
            draft: false,
            no_clobber: false,
            dry_run: false,
        }
    }

    #[test]
    fn test_config_values_by_default() {
        let options = build_options(&Config::default(), &args());
        assert_eq!(options.prefix, "devto-");
        assert_eq!(options.tags, ["agents", "ai", "mcp"]);
        assert_eq!(options.start_offset, 1);
        assert!(!options.draft);
    }

    #[test]
    fn test_flags_override_config() {
        let args = ConvertArgs {
            source_dir: Some(PathBuf::from("in")),
            prefix: Some("hashnode-".to_string()),
            tags: vec!["spring".to_string()],
            start_offset: Some(7),
            draft: true,
            dry_run: true,
            ..args()
        };
        let options = build_options(&Config::default(), &args);
        assert_eq!(options.prefix, "hashnode-");
        assert_eq!(options.tags, ["spring"]);
        assert_eq!(options.start_offset, 7);
        assert!(options.draft);
        assert!(options.dry_run);
    }
}
