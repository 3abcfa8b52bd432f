/// Converts an identifier into the hyphenated lowercase form used for css
/// classes and template paths.
///
/// `editCategory` -> `edit-category`, `flag_reason` -> `flag-reason`,
/// `Create Account` -> `create-account`. Already dashed names pass through.
pub fn dasherize(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut prev: Option<char> = None;

    for c in name.chars() {
        if c.is_ascii_uppercase()
            && prev.is_some_and(|p| p.is_ascii_lowercase() || p.is_ascii_digit())
        {
            out.push('-');
        }
        match c {
            ' ' | '_' => out.push('-'),
            _ => out.extend(c.to_lowercase()),
        }
        prev = Some(c);
    }

    out
}

/// Returns the string only when it carries a value.
pub fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dasherize() {
        assert_eq!(dasherize("flag-reason"), "flag-reason");
        assert_eq!(dasherize("editCategory"), "edit-category");
        assert_eq!(dasherize("flag_reason"), "flag-reason");
        assert_eq!(dasherize("Create Account"), "create-account");
        assert_eq!(dasherize("html5Upload"), "html5-upload");
        assert_eq!(dasherize("ABCModal"), "abcmodal");
    }

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty(&Some("x".to_string())), Some("x"));
        assert_eq!(non_empty(&Some(String::new())), None);
        assert_eq!(non_empty(&None), None);
    }
}
