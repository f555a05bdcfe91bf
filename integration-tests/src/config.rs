use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Live test settings. The property must be one the key's service account can edit.
#[derive(Debug, Deserialize)]
pub struct Secrets {
    pub property_id: String,
    pub service_account_key: PathBuf,
    #[serde(default)]
    pub base_url: Option<String>,
}

pub fn load_secrets() -> Result<Secrets, String> {
    let mut path = std::env::current_dir().map_err(|e| e.to_string())?;
    path.push("secrets.json");
    read_secrets(&path)
}

fn read_secrets(path: &Path) -> Result<Secrets, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read secrets.json: {e}"))?;
    serde_json::from_str(&contents).map_err(|e| format!("Invalid secrets.json: {e}"))
}
