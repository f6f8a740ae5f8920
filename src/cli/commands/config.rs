use crate::cli::parser::Commands;
use crate::config::Config;
use crate::config::migrate::fill_missing_keys;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{error, info, success, warning};
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();

        if *print_config {
            let yaml = serde_yaml::to_string(cfg).map_err(|e| AppError::Config(e.to_string()))?;
            println!("📄 Current configuration:\n");
            println!("{}", yaml);
        }

        if *check {
            if !path.exists() {
                warning(format!(
                    "No configuration file at {}; run `rtimesheet init` first.",
                    path.display()
                ));
            } else {
                // reports what it added (or that nothing was missing)
                fill_missing_keys(&path)?;
            }
        }

        if *edit_config {
            let default_editor = std::env::var("EDITOR")
                .or_else(|_| std::env::var("VISUAL"))
                .unwrap_or_else(|_| {
                    if cfg!(target_os = "windows") {
                        "notepad".to_string()
                    } else {
                        "nano".to_string()
                    }
                });
            let editor_to_use = editor.clone().unwrap_or_else(|| default_editor.clone());

            if run_editor(&editor_to_use, &path) {
                success(format!("Configuration file edited using '{}'", editor_to_use));
            } else if editor_to_use != default_editor {
                warning(format!(
                    "Editor '{}' not available, falling back to '{}'",
                    editor_to_use, default_editor
                ));
                if run_editor(&default_editor, &path) {
                    success(format!("Configuration file edited using '{}'", default_editor));
                } else {
                    error(format!("Failed to edit configuration with '{}'", default_editor));
                }
            } else {
                error(format!("Failed to edit configuration with '{}'", editor_to_use));
            }
        }

        if !*print_config && !*check && !*edit_config {
            info(format!("Configuration file: {}", path.display()));
        }
    }

    Ok(())
}

fn run_editor(editor: &str, path: &std::path::Path) -> bool {
    matches!(Command::new(editor).arg(path).status(), Ok(s) if s.success())
}
