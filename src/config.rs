use std::env;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_BIND: &str = "0.0.0.0";
pub const DEFAULT_MAX_PARTICIPANTS: usize = 500;

/// Runtime settings for web mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub bind: String,
    pub port: u16,
    pub max_participants: usize, // larger lists are rejected to keep generation fast
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            bind: DEFAULT_BIND.to_string(),
            port: DEFAULT_PORT,
            max_participants: DEFAULT_MAX_PARTICIPANTS,
        }
    }
}

impl Settings {
    /// Reads CALLS_BIND, CALLS_PORT and CALLS_MAX_PARTICIPANTS; a port argument wins over the env
    pub fn from_env(port_arg: Option<&str>) -> Self {
        Self::from_lookup(|key| env::var(key).ok(), port_arg)
    }

    fn from_lookup<F>(lookup: F, port_arg: Option<&str>) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Settings::default();

        let bind = lookup("CALLS_BIND")
            .filter(|b| !b.trim().is_empty())
            .unwrap_or(defaults.bind);
        let port = port_arg
            .and_then(|p| p.parse::<u16>().ok())
            .or_else(|| lookup("CALLS_PORT").and_then(|p| p.parse::<u16>().ok()))
            .unwrap_or(defaults.port);
        let max_participants = lookup("CALLS_MAX_PARTICIPANTS")
            .and_then(|m| m.parse::<usize>().ok())
            .filter(|&m| m >= 2)
            .unwrap_or(defaults.max_participants);

        Settings { bind, port, max_participants }
    }
}
