use super::types::{ConfigError, ConfigValidationWarning, HASHTAG_PLACEHOLDER};

/// Top-level keys understood by [`super::Config`].
pub const KNOWN_KEYS: &[&str] = &["extract-urls-without-protocol", "hashtag-uri-template", "footnotes"];

pub fn validate_hashtag_template(template: &str) -> Result<(), ConfigError> {
    let found = template.matches(HASHTAG_PLACEHOLDER).count();
    if found != 1 {
        return Err(ConfigError::InvalidTemplate {
            template: template.to_string(),
            found,
        });
    }
    Ok(())
}

/// Warn about keys that will be ignored, with a suggestion when one is close.
pub fn validate_keys(table: &toml::Table) -> Vec<ConfigValidationWarning> {
    table
        .keys()
        .filter(|key| !KNOWN_KEYS.contains(&key.as_str()))
        .map(|key| {
            let message = match suggest_similar_key(key, KNOWN_KEYS) {
                Some(suggestion) => format!("Unknown config key: {key} (did you mean: {suggestion}?)"),
                None => format!("Unknown config key: {key}"),
            };
            ConfigValidationWarning {
                message,
                key: Some(key.clone()),
            }
        })
        .collect()
}

fn edit_distance(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for (i, ca) in a.chars().enumerate() {
        curr[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let substitution = prev[j] + usize::from(ca != cb);
            curr[j + 1] = substitution.min(prev[j + 1] + 1).min(curr[j] + 1);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

/// Closest known key within two edits or a third of the key's length.
pub fn suggest_similar_key(unknown: &str, valid_keys: &[&str]) -> Option<String> {
    let unknown = unknown.to_lowercase();
    let max_distance = 2.max(unknown.len() / 3);

    valid_keys
        .iter()
        .map(|valid| (*valid, edit_distance(&unknown, &valid.to_lowercase())))
        .filter(|&(_, distance)| distance <= max_distance)
        .min_by_key(|&(_, distance)| distance)
        .map(|(valid, _)| valid.to_string())
}
