//! Fetch a shared navigation bar fragment and inject it into an HTML page,
//! marking the link of the current page as active.
//!
//! ```no_run
//! use std::{cell::RefCell, rc::Rc};
//!
//! use nav_loader::{fragment::FragmentSource, loader::{NavConfig, NavLoader}, page::Page};
//!
//! # async fn demo() -> Result<(), nav_loader::error::NavError> {
//! let base_url = "https://example.org/".parse().unwrap();
//! let loader = Rc::new(NavLoader::new(NavConfig::new(FragmentSource::Http { base_url }))?);
//! let page = Rc::new(RefCell::new(Page::parse(r#"<div id="bm-nav"></div>"#)));
//! let local = tokio::task::LocalSet::new();
//! local.run_until(async { loader.spawn_load(page.clone(), "docs").await }).await.ok();
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod fragment;
pub mod key;
pub mod loader;
pub mod outcome;
pub mod page;
