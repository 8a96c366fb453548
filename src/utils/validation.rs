use crate::utils::error::{Result, SyncError};

/// A value counts as present when it is set and non-empty. No format checks.
pub fn is_present(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}

/// Fails with every absent name at once, in the order given.
pub fn validate_required_values(values: &[(&str, Option<&str>)]) -> Result<()> {
    let missing: Vec<String> = values
        .iter()
        .filter(|(_, value)| !is_present(*value))
        .map(|(name, _)| name.to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(SyncError::MissingConfigError { missing })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_present() {
        assert!(is_present(Some("token")));
        assert!(!is_present(Some("")));
        assert!(!is_present(None));
        // whitespace is not trimmed
        assert!(is_present(Some(" ")));
    }

    #[test]
    fn test_validate_required_values_collects_all_missing() {
        let result = validate_required_values(&[
            ("A", None),
            ("B", Some("set")),
            ("C", Some("")),
        ]);

        match result {
            Err(SyncError::MissingConfigError { missing }) => {
                assert_eq!(missing, vec!["A".to_string(), "C".to_string()]);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_validate_required_values_accepts_any_format() {
        assert!(validate_required_values(&[("AWS_API_ENDPOINT", Some("not a url"))]).is_ok());
    }
}
