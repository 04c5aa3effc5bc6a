use anyhow::{bail, Context, Result};

/// Comma-separated numbers, e.g. `"-10, 2.5"`. Blank entries are skipped.
pub fn parse_components(input: &str) -> Result<Vec<f64>> {
    let values = input
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(|t| {
            t.parse::<f64>()
                .with_context(|| format!("component {t:?} in {input:?} is not a number"))
        })
        .collect::<Result<Vec<f64>>>()?;
    if values.is_empty() {
        bail!("no components in {input:?}");
    }
    Ok(values)
}
