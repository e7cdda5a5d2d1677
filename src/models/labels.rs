use crate::error::{ApiError, Result};

/// Parses the label-list shape the source tables use for interest and
/// similar-product columns: a bracketed, quoted list such as
/// `['Books', 'Fashion']`. The raw text is kept on the record and parsed on
/// demand, so a malformed value fails only the request that needs it.
pub fn parse_label_list(raw: &str) -> Result<Vec<String>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    let inner = trimmed
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .ok_or_else(|| {
            ApiError::MalformedField(format!("expected a bracketed label list, got `{raw}`"))
        })?;

    if inner.trim().is_empty() {
        return Ok(Vec::new());
    }

    inner
        .split(',')
        .map(|item| {
            let item = item.trim();
            let unquoted = item
                .strip_prefix('\'')
                .and_then(|s| s.strip_suffix('\''))
                .or_else(|| item.strip_prefix('"').and_then(|s| s.strip_suffix('"')))
                .ok_or_else(|| {
                    ApiError::MalformedField(format!(
                        "expected a quoted label, got `{item}` in `{raw}`"
                    ))
                })?;
            Ok(unquoted.to_string())
        })
        .collect()
}
