use crate::error::AppError;

/// Parse an optional decimal query value. Blank means absent; anything
/// else must be a finite number.
pub fn parse_optional_decimal(name: &str, value: Option<&String>) -> Result<Option<f64>, AppError> {
    let Some(v) = value else {
        return Ok(None);
    };
    let t = v.trim();
    if t.is_empty() {
        return Ok(None);
    }
    match t.parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(Some(n)),
        _ => Err(AppError::InvalidQuery {
            name: name.to_string(),
            value: v.clone(),
        }),
    }
}
