use std::sync::OnceLock;

use regex::Regex;

/// Expand `{{ env.VAR }}` placeholders in a raw TOML string
///
/// Supports an optional fallback via `{{ env.VAR | default("value") }}`.
/// TOML comment lines pass through unexpanded so documented-out secrets
/// never fail the load.
pub fn expand_env(input: &str) -> Result<String, String> {
    fn re() -> &'static Regex {
        static RE: OnceLock<Regex> = OnceLock::new();
        RE.get_or_init(|| {
            Regex::new(r#"\{\{\s*env\.([A-Za-z0-9_]+)\s*(?:\|\s*default\("([^"]*)"\))?\s*\}\}"#)
                .expect("must be valid regex")
        })
    }

    let mut output = String::with_capacity(input.len());

    for (i, line) in input.lines().enumerate() {
        if i > 0 {
            output.push('\n');
        }

        if line.trim_start().starts_with('#') {
            output.push_str(line);
            continue;
        }

        let mut last_end = 0;
        for captures in re().captures_iter(line) {
            let overall = captures.get(0).expect("capture 0 always present");
            let var_name = &captures[1];
            let fallback = captures.get(2).map(|m| m.as_str());

            output.push_str(&line[last_end..overall.start()]);

            match (std::env::var(var_name), fallback) {
                (Ok(value), _) => output.push_str(&value),
                (Err(_), Some(fallback)) => output.push_str(fallback),
                (Err(_), None) => {
                    return Err(format!("environment variable not found: `{var_name}`"));
                }
            }

            last_end = overall.end();
        }
        output.push_str(&line[last_end..]);
    }

    if input.ends_with('\n') {
        output.push('\n');
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_placeholders() {
        let input = "key = \"value\"";
        assert_eq!(expand_env(input).unwrap(), input);
    }

    #[test]
    fn set_variable_is_expanded() {
        temp_env::with_var("CATALOG_TEST_VAR", Some("hello"), || {
            let result = expand_env("key = \"{{ env.CATALOG_TEST_VAR }}\"").unwrap();
            assert_eq!(result, "key = \"hello\"");
        });
    }

    #[test]
    fn missing_variable_without_default_errors() {
        temp_env::with_var_unset("CATALOG_MISSING_VAR", || {
            let err = expand_env("key = \"{{ env.CATALOG_MISSING_VAR }}\"").unwrap_err();
            assert!(err.contains("CATALOG_MISSING_VAR"));
        });
    }

    #[test]
    fn missing_variable_with_default_uses_fallback() {
        temp_env::with_var_unset("CATALOG_MISSING_VAR", || {
            let result = expand_env("key = \"{{ env.CATALOG_MISSING_VAR | default(\"fallback\") }}\"").unwrap();
            assert_eq!(result, "key = \"fallback\"");
        });
    }

    #[test]
    fn comment_lines_are_not_expanded() {
        temp_env::with_var_unset("CATALOG_MISSING_VAR", || {
            let input = "# key = \"{{ env.CATALOG_MISSING_VAR }}\"";
            assert_eq!(expand_env(input).unwrap(), input);
        });
    }
}
