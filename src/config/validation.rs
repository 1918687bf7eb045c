use crate::error::AppError;
use std::path::Path;

/// Validates the configuration settings
///
/// # Validation Rules
/// - Base URL cannot be empty
/// - Base URL must be a valid URL or domain name
/// - User agent cannot be empty
/// - If log file path is provided, it cannot be empty
/// - Log file path parent directory must exist or be creatable
pub fn validate_config(
    base_url: &str,
    user_agent: &str,
    log_file_path: &Option<String>,
) -> Result<(), AppError> {
    if base_url.is_empty() {
        return Err(AppError::config_error("Base URL cannot be empty"));
    }

    if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
        // Without a scheme it should at least look like a domain
        if !base_url.contains('.') && !base_url.starts_with("localhost") {
            return Err(AppError::config_error(
                "Base URL must be a valid URL or domain name",
            ));
        }
    }

    if user_agent.trim().is_empty() {
        return Err(AppError::config_error("User agent cannot be empty"));
    }

    if let Some(log_path) = log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        if let Some(parent) = Path::new(log_path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}
