//! Environment variable expansion for configuration strings.

use crate::ConfigError;

/// Expand `${VAR}` and `${VAR:-default}` references in `value`.
///
/// `field` names the configuration key for error messages.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    shellexpand::env(value)
        .map(std::borrow::Cow::into_owned)
        .map_err(|e| ConfigError::EnvVar {
            field: field.to_owned(),
            message: format!("${{{}}} not set", e.var_name),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_unchanged() {
        assert_eq!(expand_env("docs", "docs.source_dir").unwrap(), "docs");
    }

    #[test]
    fn test_default_used_when_unset() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("DOCSITE_EXPAND_UNSET");
        }
        assert_eq!(
            expand_env("${DOCSITE_EXPAND_UNSET:-out}", "output.dir").unwrap(),
            "out"
        );
    }

    #[test]
    fn test_missing_var_names_field() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("DOCSITE_EXPAND_MISSING");
        }
        let err = expand_env("${DOCSITE_EXPAND_MISSING}/x", "manifest.path").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("DOCSITE_EXPAND_MISSING"));
        assert!(msg.contains("manifest.path"));
    }
}
