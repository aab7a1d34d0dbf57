use tracing::{info, warn};

use crate::config::{keychain_entry, read_secret};
use crate::error::StorefrontError;

#[tauri::command]
pub fn set_api_key(service: &str, key: &str) -> Result<(), String> {
    info!("Setting API key for service: {}", service);
    keychain_entry(service)?.set_password(key).map_err(|e| {
        warn!("Failed to set password for {}: {}", service, e);
        e.to_string()
    })
}

/// Whether a key is saved. The key itself stays in the keychain.
#[tauri::command]
pub fn has_api_key(service: &str) -> Result<bool, String> {
    info!("Checking API key for service: {}", service);
    is_saved(read_secret(service))
}

fn is_saved(read: Result<Option<String>, StorefrontError>) -> Result<bool, String> {
    Ok(read?.is_some())
}

/// Removing a key that was never saved is not an error.
#[tauri::command]
pub fn delete_api_key(service: &str) -> Result<(), String> {
    info!("Deleting API key for service: {}", service);
    match keychain_entry(service)?.delete_credential() {
        Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
        Err(e) => {
            warn!("Failed to delete credential for {}: {}", service, e);
            Err(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_saved_reports_presence_only() {
        assert_eq!(is_saved(Ok(Some("secret".to_string()))), Ok(true));
        assert_eq!(is_saved(Ok(None)), Ok(false));
    }

    #[test]
    fn test_is_saved_propagates_keychain_error() {
        let err = is_saved(Err(StorefrontError::Keychain("locked".to_string()))).unwrap_err();
        assert!(err.contains("locked"));
    }
}
