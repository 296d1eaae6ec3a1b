use clap::{Parser, ValueEnum};

pub const DEFAULT_DESCRIPTION_MIN_LENGTH: usize = 5;
pub const DEFAULT_DESCRIPTION_MAX_LENGTH: usize = 500;
pub const DEFAULT_PEOPLE_MIN: i64 = 1;

/// Bounds applied to the project form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationRules {
    pub description_min_length: usize,
    pub description_max_length: Option<usize>,
    pub people_min: i64,
    pub people_max: Option<i64>,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            description_min_length: DEFAULT_DESCRIPTION_MIN_LENGTH,
            description_max_length: Some(DEFAULT_DESCRIPTION_MAX_LENGTH),
            people_min: DEFAULT_PEOPLE_MIN,
            people_max: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ThemeChoice {
    #[default]
    Dark,
    Light,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "projboard")]
#[command(about = "Track projects across active and finished lists")]
pub struct AppConfig {
    /// Color theme of the window
    #[arg(long, value_enum, default_value_t = ThemeChoice::Dark)]
    pub theme: ThemeChoice,

    /// Log filter, e.g. `info` or `projboard=debug`
    #[arg(long = "log", env = "PROJBOARD_LOG", default_value = "info")]
    pub log_filter: String,

    /// Descriptions must be shorter than this many characters
    #[arg(long, default_value_t = DEFAULT_DESCRIPTION_MAX_LENGTH)]
    pub description_max_length: usize,

    /// Upper bound on people assigned to a project
    #[arg(long)]
    pub max_people: Option<u32>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme: ThemeChoice::default(),
            log_filter: "info".to_string(),
            description_max_length: DEFAULT_DESCRIPTION_MAX_LENGTH,
            max_people: None,
        }
    }
}

impl AppConfig {
    pub fn validation_rules(&self) -> ValidationRules {
        ValidationRules {
            description_max_length: Some(self.description_max_length),
            people_max: self.max_people.map(i64::from),
            ..ValidationRules::default()
        }
    }
}
