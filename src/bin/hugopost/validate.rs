use anyhow::{Context, Result};

use hugopost::config::Config;
use hugopost::validator::{ValidationReport, validate_dir, validate_file};

use crate::ValidateArgs;

pub fn validate_cmd(config: &Config, args: ValidateArgs) -> Result<bool> {
    let path = args.path.unwrap_or_else(|| config.paths.content_dir.clone());

    let report = if path.is_file() {
        ValidationReport {
            checked: 1,
            issues: validate_file(&path).with_context(|| format!("Error validating {}", path.display()))?,
        }
    } else {
        validate_dir(&path).with_context(|| format!("Error validating {}", path.display()))?
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for issue in &report.issues {
            println!("{}", issue);
        }
        println!("{} posts checked, {} issues", report.checked, report.issues.len());
    }

    Ok(report.is_valid())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn test_unreadable_post_names_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("binary.md");
        fs::write(&path, [0xffu8, 0xfe, 0x00]).unwrap();

        let args = ValidateArgs { path: Some(path.clone()), json: false };
        let err = validate_cmd(&Config::default(), args).unwrap_err();
        let msg = format!("{:#}", err);
        assert!(msg.starts_with(&format!("Error validating {}", path.display())));
    }

    #[test]
    fn test_single_post() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("post.md");
        fs::write(&path, "+++\ntitle = 'One'\ndate = 2024-01-02\n+++\n").unwrap();

        let args = ValidateArgs { path: Some(path), json: false };
        assert!(validate_cmd(&Config::default(), args).unwrap());
    }
}
