//! Accessibility-service registration against the host's secure settings.
//! Only meaningful when the host grants write access (system installs).

use thiserror::Error;
use tracing::debug;

pub const ENABLED_ACCESSIBILITY_SERVICES: &str = "enabled_accessibility_services";
pub const ACCESSIBILITY_ENABLED: &str = "accessibility_enabled";

const SERVICE_SEPARATOR: char = ':';

#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("permission denied writing {0}")]
    PermissionDenied(String),
    #[error("settings backend unavailable: {0}")]
    Unavailable(String),
}

/// Injected platform capability.
pub trait SecureSettings {
    fn get_string(&self, key: &str) -> Result<Option<String>, PlatformError>;
    fn put_string(&mut self, key: &str, value: &str) -> Result<(), PlatformError>;
    fn put_int(&mut self, key: &str, value: i32) -> Result<(), PlatformError>;
}

/// `package/class`, the form the enabled-services list stores.
pub fn service_component(package: &str, class: &str) -> String {
    format!("{}/{}", package, class)
}

/// Returns the updated list, or None if `component` is already enabled.
pub fn merged_service_list(current: Option<&str>, component: &str) -> Option<String> {
    match current.filter(|c| !c.is_empty()) {
        Some(list) if list.split(SERVICE_SEPARATOR).any(|entry| entry == component) => None,
        Some(list) => Some(format!("{}{}{}", list, SERVICE_SEPARATOR, component)),
        None => Some(component.to_string()),
    }
}

pub fn enable_service(settings: &mut dyn SecureSettings, component: &str) -> Result<(), PlatformError> {
    let current = settings.get_string(ENABLED_ACCESSIBILITY_SERVICES)?;
    if let Some(list) = merged_service_list(current.as_deref(), component) {
        settings.put_string(ENABLED_ACCESSIBILITY_SERVICES, &list)?;
    }
    settings.put_int(ACCESSIBILITY_ENABLED, 1)
}

pub fn enable_service_checked(settings: &mut dyn SecureSettings, component: &str) -> bool {
    match enable_service(settings, component) {
        Ok(()) => true,
        Err(e) => {
            debug!("Could not enable accessibility service {}: {}", component, e);
            false
        }
    }
}
