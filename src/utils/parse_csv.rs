/// Split a comma-separated value into trimmed, non-empty tokens
pub fn parse_csv(value: Option<&String>) -> Vec<String> {
    match value {
        Some(v) => v
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect(),
        None => Vec::new(),
    }
}
