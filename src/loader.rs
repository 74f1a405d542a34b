use std::{cell::RefCell, rc::Rc};

use reqwest::Client;
use tokio::task::JoinHandle;

use crate::error::NavError;
use crate::fragment::FragmentSource;
use crate::key::ActiveKey;
use crate::outcome::Injection;
use crate::page::{Highlight, Page};

pub const DEFAULT_PATH: &str = "/bm20/nav.html";
pub const DEFAULT_CONTAINER: &str = "bm-nav";
pub const DEFAULT_KEY_ATTR: &str = "data-key";
pub const DEFAULT_ACTIVE_CLASS: &str = "on";

/// Where the navigation comes from, and where it goes.
#[derive(Clone, Debug)]
pub struct NavConfig {
    pub source: FragmentSource,
    /// Path of the fragment, resolved against the base URL of an HTTP source
    pub path: String,
    /// Id of the element whose content is replaced by the fragment
    pub container_id: String,
    /// Attribute of the links holding their key
    pub key_attr: String,
    /// Class added to the active link
    pub active_class: String,
}

impl NavConfig {
    pub fn new(source: FragmentSource) -> Self {
        Self {
            source,
            path: DEFAULT_PATH.into(),
            container_id: DEFAULT_CONTAINER.into(),
            key_attr: DEFAULT_KEY_ATTR.into(),
            active_class: DEFAULT_ACTIVE_CLASS.into(),
        }
    }
}

/// Loads the shared navigation bar into pages.
///
/// Every load retrieves a fresh fragment: nothing is cached between loads.
#[derive(Clone, Debug)]
pub struct NavLoader {
    config: NavConfig,
    client: Client,
}

impl NavLoader {
    pub fn new(config: NavConfig) -> Result<Self, NavError> {
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(NavError::Client)?;
        Ok(Self::with_client(config, client))
    }

    /// Use an already configured HTTP client (proxy, TLS, timeouts...).
    pub fn with_client(config: NavConfig, client: Client) -> Self {
        Self { config, client }
    }

    pub fn config(&self) -> &NavConfig {
        &self.config
    }

    /// Start loading the navigation into `page`, and return immediately.
    ///
    /// Must be called from within a [`tokio::task::LocalSet`].
    /// Failures are logged, never reported through the returned handle.
    /// Concurrent loads into the same page are not coordinated:
    /// the last one to complete wins.
    pub fn spawn_load(
        self: Rc<Self>,
        page: Rc<RefCell<Page>>,
        key: impl Into<ActiveKey>,
    ) -> JoinHandle<()> {
        let key = key.into();
        tokio::task::spawn_local(async move {
            self.load(&page, &key).await;
        })
    }

    /// Load the navigation into `page`, logging any failure.
    ///
    /// On failure, the page is left as it was.
    pub async fn load(&self, page: &RefCell<Page>, key: &ActiveKey) {
        match self.try_load(page, key).await {
            Ok(injection) if injection.is_unmatched() => {
                log::warn!("No navigation link matches key '{key}' ({injection})");
            }
            Ok(injection) => log::info!("Navigation loaded for key '{key}': {injection}"),
            Err(err) => log::error!("nav load failed: {:#}", anyhow::Error::new(err)),
        }
    }

    /// Load the navigation into `page`.
    ///
    /// `page` is only borrowed once the fragment is retrieved,
    /// so it is never borrowed across an await point.
    pub async fn try_load(
        &self,
        page: &RefCell<Page>,
        key: &ActiveKey,
    ) -> Result<Injection, NavError> {
        let fragment = self
            .config
            .source
            .fetch(&self.client, &self.config.path)
            .await?;
        let highlight = Highlight {
            attr: &self.config.key_attr,
            class: &self.config.active_class,
            key,
        };
        page.borrow_mut()
            .inject(&self.config.container_id, &fragment, &highlight)
    }
}
