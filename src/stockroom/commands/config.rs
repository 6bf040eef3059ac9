use crate::commands::{CmdMessage, CmdResult};
use crate::config::StockConfig;
use crate::error::{Result, StockError};
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    let mut config = StockConfig::load(config_dir)?;
    let mut result = CmdResult::default();

    match action {
        ConfigAction::ShowAll => {}
        ConfigAction::ShowKey(key) => {
            let value = config
                .get(&key)
                .ok_or_else(|| StockError::Config(format!("Unknown config key: {}", key)))?;
            result.add_message(CmdMessage::info(format!("{} = {}", key, value)));
        }
        ConfigAction::Set(key, value) => {
            config.set(&key, &value)?;
            config.save(config_dir)?;
            result.add_message(CmdMessage::success(format!("{} set to {}", key, value)));
        }
    }

    Ok(result.with_config(config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_set_persists() {
        let dir = TempDir::new().unwrap();
        run(
            dir.path(),
            ConfigAction::Set("storage-key".into(), "branch-2".into()),
        )
        .unwrap();

        let shown = run(dir.path(), ConfigAction::ShowAll).unwrap();
        assert_eq!(shown.config.unwrap().storage_key, "branch-2");
    }

    #[test]
    fn test_show_unknown_key_fails() {
        let dir = TempDir::new().unwrap();
        assert!(run(dir.path(), ConfigAction::ShowKey("nope".into())).is_err());
    }
}
