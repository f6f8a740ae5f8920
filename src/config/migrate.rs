//! Configuration file upgrades: keys added in newer versions are written
//! back with their default value, existing values are never touched.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// Keys present in `defaults` but missing from `current`.
pub fn missing_keys(current: &Mapping, defaults: &Mapping) -> Vec<String> {
    defaults
        .keys()
        .filter(|k| !current.contains_key(*k))
        .filter_map(|k| k.as_str().map(str::to_string))
        .collect()
}

/// Add any missing keys to the YAML file at `path`. Returns the keys added.
pub fn fill_missing_keys(path: &Path) -> AppResult<Vec<String>> {
    let content = fs::read_to_string(path)?;

    let mut yaml: Value = if content.trim().is_empty() {
        Value::Mapping(Mapping::new())
    } else {
        serde_yaml::from_str(&content).map_err(|e| AppError::Config(e.to_string()))?
    };

    let defaults = serde_yaml::to_value(Config::default())
        .map_err(|e| AppError::Config(e.to_string()))?;

    let (Some(map), Some(def_map)) = (yaml.as_mapping_mut(), defaults.as_mapping()) else {
        return Err(AppError::Config(format!(
            "{} is not a YAML mapping",
            path.display()
        )));
    };

    let added = missing_keys(map, def_map);
    if added.is_empty() {
        info("Configuration is up to date.");
        return Ok(added);
    }

    for key in &added {
        let k = Value::String(key.clone());
        if let Some(v) = def_map.get(&k) {
            map.insert(k, v.clone());
        }
    }

    let out = serde_yaml::to_string(&yaml).map_err(|e| AppError::Config(e.to_string()))?;
    fs::write(path, out)?;

    success(format!("Added missing configuration keys: {}", added.join(", ")));
    Ok(added)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn fills_only_missing_keys() {
        let path = env::temp_dir().join("rtimesheet_conf_migrate.conf");
        fs::write(&path, "database: /tmp/x.sqlite\nuser_name: Ana\n").unwrap();

        let added = fill_missing_keys(&path).unwrap();
        assert!(added.contains(&"mail_spool".to_string()));
        assert!(!added.contains(&"user_name".to_string()));

        let cfg: Config = serde_yaml::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(cfg.user_name, "Ana");
        assert_eq!(cfg.database, "/tmp/x.sqlite");

        assert!(fill_missing_keys(&path).unwrap().is_empty());
    }
}
