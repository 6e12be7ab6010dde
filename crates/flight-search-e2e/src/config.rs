// Run configuration
//
// Captures everything the harness decides before the browser launches: the
// target environment name (a configuration hook, see below), whether to run
// headless, and the user agent presented by each browsing context.

/// User agent applied to every browsing context.
///
/// The homepage serves a different autocomplete widget to unidentified
/// clients; pinning a desktop Chrome agent keeps the locators stable.
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) \
     Chrome/108.0.0.0 Safari/537.36";

/// Name of the boolean-like flag for containerized runs.
pub const DOCKER_RUN_VAR: &str = "DOCKER_RUN";

/// Configuration for one test run.
///
/// `environment` is accepted from the CLI and logged, but does not yet select
/// a target URL; it is the extension point for multi-environment support.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub environment: String,
    pub headless: bool,
    pub no_sandbox: bool,
    pub user_agent: String,
}

impl RunConfig {
    /// Builds the configuration from the process environment.
    ///
    /// When `DOCKER_RUN` is set to a truthy value the browser launches
    /// headless with Chromium sandboxing disabled; otherwise it runs headed.
    pub fn from_env() -> Self {
        let containerized = flag_from(std::env::var(DOCKER_RUN_VAR).ok().as_deref());
        Self {
            environment: "local".to_string(),
            headless: containerized,
            no_sandbox: containerized,
            user_agent: USER_AGENT.to_string(),
        }
    }

    pub fn with_environment(mut self, environment: impl Into<String>) -> Self {
        self.environment = environment.into();
        self
    }
}

/// Interprets a boolean-like environment value. Unset, empty, `0`, and
/// `false` (any case) are off; anything else is on.
fn flag_from(value: Option<&str>) -> bool {
    match value {
        None => false,
        Some(v) => {
            let v = v.trim();
            !(v.is_empty() || v == "0" || v.eq_ignore_ascii_case("false"))
        }
    }
}
