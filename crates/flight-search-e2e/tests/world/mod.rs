//! Per-scenario world over a run-wide browser session.
//!
//! The browser process is shared across scenarios; every scenario gets its
//! own browsing context and page, created here and closed in the runner's
//! after-hook.

use std::sync::OnceLock;

use cucumber::World;
use flight_search_e2e::{HomePage, RunConfig, Session};
use playwright_rs::{BrowserContext, Page};
use tokio::sync::OnceCell;
use tracing::warn;

static ENVIRONMENT: OnceLock<String> = OnceLock::new();
static SESSION: OnceCell<Session> = OnceCell::const_new();

/// Records the `--environment` CLI value before the first scenario runs.
pub fn set_environment(name: String) {
    let _ = ENVIRONMENT.set(name);
}

/// The shared browser session, launched on first use.
async fn session() -> anyhow::Result<&'static Session> {
    let session = SESSION
        .get_or_try_init(|| async {
            let mut config = RunConfig::from_env();
            if let Some(environment) = ENVIRONMENT.get() {
                config = config.with_environment(environment.clone());
            }
            Session::launch(config).await
        })
        .await?;
    Ok(session)
}

#[derive(World)]
#[world(init = Self::new)]
pub struct FlightSearchWorld {
    context: BrowserContext,
    pub page: Page,
    pub home: HomePage,
}

impl FlightSearchWorld {
    async fn new() -> anyhow::Result<Self> {
        let session = session().await?;
        let (context, page) = session.new_page().await?;
        let home = HomePage::attach(page.clone()).await;
        Ok(Self {
            context,
            page,
            home,
        })
    }

    /// Closes this scenario's browsing context.
    pub async fn teardown(&mut self) {
        if let Err(err) = self.context.close().await {
            warn!(error = %err, "failed to close scenario context");
        }
    }
}

impl std::fmt::Debug for FlightSearchWorld {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlightSearchWorld")
            .field("url", &self.page.url())
            .finish()
    }
}
