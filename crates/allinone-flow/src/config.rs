use web_time::Duration;

use crate::FlowError;

pub const SPLASH_DELAY_ENV: &str = "ALLINONE_SPLASH_MS";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FlowConfig {
    /// How long the splash screen shows before moving to login.
    pub splash_delay: Duration,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            splash_delay: Duration::from_millis(3000),
        }
    }
}

impl FlowConfig {
    /// Defaults, overridden by `ALLINONE_SPLASH_MS` when set.
    pub fn from_env() -> Result<Self, FlowError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, FlowError> {
        let mut config = Self::default();
        if let Some(raw) = lookup(SPLASH_DELAY_ENV) {
            let ms: u64 = raw.trim().parse().map_err(|_| FlowError::InvalidConfig {
                var: SPLASH_DELAY_ENV,
                value: raw.clone(),
            })?;
            config.splash_delay = Duration::from_millis(ms);
        }
        Ok(config)
    }
}
