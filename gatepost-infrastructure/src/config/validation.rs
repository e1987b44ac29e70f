use anyhow::{anyhow, Result};

pub fn validate_base_url(value: &str) -> Result<()> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(anyhow!("backend_base_url is empty"));
    }
    if !trimmed.starts_with("http://") && !trimmed.starts_with("https://") {
        return Err(anyhow!("backend_base_url must start with http:// or https://"));
    }
    Ok(())
}
