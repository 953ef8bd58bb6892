use crate::{
    config::{Config, ConfigManager},
    core::RegistrationForm,
    storage::{JsonStorage, StudentRepository},
};

use super::core::CliError;
use super::output::{self, OutputPreferences};
use super::registry::CommandRegistry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

/// Everything a command handler can reach: the registration form, the
/// command table and loop bookkeeping.
pub struct ShellContext {
    pub mode: CliMode,
    pub registry: CommandRegistry,
    pub form: RegistrationForm,
    pub config: Config,
    pub running: bool,
}

impl ShellContext {
    /// Opens the registry stored in the configured data directory.
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let config_manager = ConfigManager::new()?;
        let config = config_manager.load()?;
        let storage = JsonStorage::new(
            Some(config_manager.base_dir().to_path_buf()),
            Some(&config.storage_key),
        )?;
        tracing::debug!(path = %storage.collection_path().display(), "opening student registry");
        Self::with_repository(mode, config, Box::new(storage))
    }

    pub fn with_repository(
        mode: CliMode,
        config: Config,
        storage: Box<dyn StudentRepository>,
    ) -> Result<Self, CliError> {
        output::set_preferences(OutputPreferences {
            plain_mode: config.plain_output,
        });
        let mut registry = CommandRegistry::new();
        super::commands::register_all(&mut registry);
        let form = RegistrationForm::new(storage, config.page_size)?;
        Ok(Self {
            mode,
            registry,
            form,
            config,
            running: true,
        })
    }

    pub fn prompt(&self) -> String {
        match self.form.form().edit_cursor() {
            Some(position) => format!("students (editing #{})> ", position + 1),
            None => "students> ".to_string(),
        }
    }

    pub fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }
}
