use std::path::PathBuf;

const APP_DIR: &str = "gemini-desktop";

/// `{config_dir}/gemini-desktop`, falling back to `~/.config/gemini-desktop`.
pub fn get_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config")
        })
        .join(APP_DIR)
}

/// `{data_dir}/gemini-desktop/logs`.
pub fn get_log_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(get_config_dir)
        .join(APP_DIR)
        .join("logs")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dirs_are_app_scoped() {
        assert!(get_config_dir().ends_with(APP_DIR));
        let log_dir = get_log_dir();
        assert!(log_dir.ends_with("logs"));
        assert!(log_dir.parent().unwrap().ends_with(APP_DIR));
    }
}
