use crate::commands::{CmdMessage, CmdResult};
use crate::config::NotezConfig;
use crate::error::Result;
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    match action {
        ConfigAction::ShowAll => {
            let config = NotezConfig::load(config_dir)?;
            Ok(CmdResult::default().with_config(config))
        }
        ConfigAction::ShowKey(key) => {
            let config = NotezConfig::load(config_dir)?;
            let mut result = CmdResult::default();
            match config.get(&key) {
                Some(value) => result.add_message(CmdMessage::info(value)),
                None => {
                    result.add_message(CmdMessage::error(format!("Unknown config key: {}", key)))
                }
            }
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            let mut config = NotezConfig::load(config_dir)?;
            if let Err(message) = config.set(&key, &value) {
                let mut result = CmdResult::default();
                result.add_message(CmdMessage::error(message));
                return Ok(result);
            }
            config.save(config_dir)?;

            let display_value = config.get(&key).unwrap_or(value);
            let mut result = CmdResult::default().with_config(config);
            result.add_message(CmdMessage::success(format!(
                "{} set to {}",
                key, display_value
            )));
            Ok(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use tempfile::TempDir;

    #[test]
    fn show_all_returns_the_config() {
        let dir = TempDir::new().unwrap();
        let result = run(dir.path(), ConfigAction::ShowAll).unwrap();
        assert_eq!(result.config, Some(NotezConfig::default()));
    }

    #[test]
    fn set_persists_to_disk() {
        let dir = TempDir::new().unwrap();
        run(
            dir.path(),
            ConfigAction::Set("strict_indexes".into(), "true".into()),
        )
        .unwrap();

        let loaded = NotezConfig::load(dir.path()).unwrap();
        assert!(loaded.strict_indexes);
    }

    #[test]
    fn show_key_reads_the_stored_value() {
        let dir = TempDir::new().unwrap();
        run(
            dir.path(),
            ConfigAction::Set("default_file".into(), "/tmp/n.json".into()),
        )
        .unwrap();

        let result = run(dir.path(), ConfigAction::ShowKey("default_file".into())).unwrap();
        assert_eq!(result.messages[0].content, "/tmp/n.json");
    }

    #[test]
    fn unknown_key_is_an_error_message() {
        let dir = TempDir::new().unwrap();
        let result = run(dir.path(), ConfigAction::ShowKey("bogus".into())).unwrap();
        assert!(matches!(result.messages[0].level, MessageLevel::Error));
    }

    #[test]
    fn bad_value_does_not_persist() {
        let dir = TempDir::new().unwrap();
        let result = run(
            dir.path(),
            ConfigAction::Set("strict_indexes".into(), "maybe".into()),
        )
        .unwrap();

        assert!(matches!(result.messages[0].level, MessageLevel::Error));
        assert!(!NotezConfig::load(dir.path()).unwrap().strict_indexes);
    }
}
