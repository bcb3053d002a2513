mod settings;

pub use settings::SettingsCommands;
