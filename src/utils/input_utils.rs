use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context, Error};

pub fn read_api_key(path: &Path) -> Result<String, Error> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Could not read api key file {}", path.display()))?;

    let api_key = content.lines().next().unwrap_or_default().trim();

    if api_key.is_empty() {
        return Err(anyhow!("Api key file {} is empty", path.display()));
    }

    Ok(api_key.to_string())
}

pub fn read_country_codes(path: &Path) -> Result<Vec<String>, Error> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Could not read country code file {}", path.display()))?;

    let country_codes = parse_country_codes(&content);

    if country_codes.is_empty() {
        return Err(anyhow!("No country codes found in {}", path.display()));
    }

    Ok(country_codes)
}

fn parse_country_codes(content: &str) -> Vec<String> {
    content
        .lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .map(|line| line.to_string())
        .collect()
}
