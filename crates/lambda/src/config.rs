//! Process configuration loaded once at startup.

/// Environment variable holding the target state machine ARN.
pub const STATE_MACHINE_ARN_VAR: &str = "StateMachineArn";

/// Environment variable selecting the log output format.
pub const LOG_FORMAT_VAR: &str = "LOG_FORMAT";

/// Configuration injected into [`ExecutionTrigger`](crate::trigger::ExecutionTrigger).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerConfig {
    /// Target state machine. Not validated here: a missing or empty value
    /// is passed through and rejected by Step Functions.
    pub state_machine_arn: String,
}

impl TriggerConfig {
    pub fn new(state_machine_arn: impl Into<String>) -> Self {
        Self {
            state_machine_arn: state_machine_arn.into(),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// | Env Var           | Default |
    /// |-------------------|---------|
    /// | `StateMachineArn` | empty   |
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            state_machine_arn: lookup(STATE_MACHINE_ARN_VAR).unwrap_or_default(),
        }
    }
}

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Text,
    /// One JSON object per line, for CloudWatch Logs Insights.
    Json,
}

impl LogFormat {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Unknown values fall back to [`LogFormat::Text`].
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        match lookup(LOG_FORMAT_VAR) {
            Some(v) if v.trim().eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Text,
        }
    }
}
