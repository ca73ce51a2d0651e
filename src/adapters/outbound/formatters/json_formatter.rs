use crate::application::dto::DiffResponse;
use crate::ports::outbound::DiffFormatter;
use crate::shared::Result;

/// JsonFormatter adapter serializing the whole response
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl DiffFormatter for JsonFormatter {
    fn format(&self, response: &DiffResponse) -> Result<String> {
        let json = serde_json::to_string_pretty(response)
            .map_err(|e| anyhow::anyhow!("Failed to serialize diff to JSON: {}", e))?;
        Ok(json)
    }
}
