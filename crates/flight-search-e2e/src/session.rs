// Browser session bootstrap
//
// One Playwright driver and one Chromium process per test run; one isolated
// browsing context and page per scenario. Contexts never outlive the
// scenario that created them.

use playwright_rs::{
    Browser, BrowserContext, BrowserContextOptions, LaunchOptions, Page, Playwright,
};
use tracing::info;

use crate::config::RunConfig;
use crate::error::Result;

/// A launched browser session shared across an entire run.
pub struct Session {
    // Keeps the driver process alive for the lifetime of the session.
    _playwright: Playwright,
    browser: Browser,
    config: RunConfig,
}

impl Session {
    /// Launches the driver and a Chromium instance per the run configuration.
    pub async fn launch(config: RunConfig) -> Result<Self> {
        let playwright = Playwright::launch().await?;

        let mut options = LaunchOptions::new().headless(config.headless);
        if config.no_sandbox {
            options = options.args(vec!["--no-sandbox".to_string()]);
        }
        let browser = playwright.chromium().launch_with_options(options).await?;

        info!(
            environment = %config.environment,
            headless = config.headless,
            no_sandbox = config.no_sandbox,
            "browser session started"
        );

        Ok(Self {
            _playwright: playwright,
            browser,
            config,
        })
    }

    /// Creates a fresh, exclusively owned context and page for one scenario.
    pub async fn new_page(&self) -> Result<(BrowserContext, Page)> {
        let options = BrowserContextOptions::builder()
            .user_agent(self.config.user_agent.clone())
            .build();
        let context = self.browser.new_context_with_options(options).await?;
        let page = context.new_page().await?;
        Ok((context, page))
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Closes the shared browser process.
    pub async fn close(&self) -> Result<()> {
        self.browser.close().await?;
        Ok(())
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("config", &self.config)
            .finish()
    }
}
