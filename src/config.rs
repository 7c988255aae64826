use std::path::PathBuf;

// =============================================================================
// Time-related constants
// =============================================================================

/// Cool-down between catalog fetches in milliseconds (10 seconds)
pub const API_COOL_DOWN_MS: i64 = 10 * 1000;

/// Returns the path to the data directory for enginepin.
/// Uses $XDG_DATA_HOME/enginepin if XDG_DATA_HOME is set,
/// otherwise falls back to ~/.local/share/enginepin,
/// or ./enginepin if neither is available.
pub fn data_dir() -> PathBuf {
    data_dir_with_env(std::env::var("XDG_DATA_HOME").ok(), dirs::home_dir())
}

fn data_dir_with_env(xdg_data_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let data_dir = xdg_data_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".local/share")))
        .unwrap_or_else(|| PathBuf::from("."));

    data_dir.join("enginepin")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_dir_with_env_uses_xdg_data_home_when_set() {
        let path = data_dir_with_env(
            Some("/tmp/test-data".to_string()),
            Some(PathBuf::from("/home/user")),
        );

        assert_eq!(path, PathBuf::from("/tmp/test-data/enginepin"));
    }

    #[test]
    fn data_dir_with_env_falls_back_to_home_local_share() {
        let path = data_dir_with_env(None, Some(PathBuf::from("/home/user")));

        assert_eq!(path, PathBuf::from("/home/user/.local/share/enginepin"));
    }

    #[test]
    fn data_dir_with_env_falls_back_to_current_dir_when_no_dirs_available() {
        let path = data_dir_with_env(None, None);
        assert_eq!(path, PathBuf::from("./enginepin"));
    }
}
