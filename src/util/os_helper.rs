/// Author name for new posts: the OS real name, falling back to the user name
pub fn get_name() -> String {
    let name = whoami::realname();
    if name.trim().is_empty() {
        return whoami::username();
    }
    name
}

pub fn author_or_default(author: Option<&str>) -> String {
    match author {
        Some(name) if !name.trim().is_empty() => name.trim().to_string(),
        _ => get_name(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_author_wins() {
        assert_eq!(author_or_default(Some("  Ada Lovelace ")), "Ada Lovelace");
    }
}
