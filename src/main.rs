use std::{cell::RefCell, rc::Rc};

use anyhow::{Context, Result, bail};
use clap::Parser;
use nav_loader::{loader::NavLoader, page::Page};
use tokio::task::LocalSet;

mod args;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = args::Args::parse();

    env_logger::builder()
        .format_timestamp(None)
        .filter_module("nav_loader", args.log_level)
        .init();

    let Some(config) = args.nav_config() else {
        bail!("Either a base URL or a fragment file is required");
    };
    let filename = args.page.display();
    let html = std::fs::read_to_string(&args.page)
        .with_context(|| format!("Failed loading page from file {filename}"))?;
    let page = Rc::new(RefCell::new(Page::parse(&html)));
    let loader = Rc::new(NavLoader::new(config)?);

    // a failed load leaves the page as it was, which is still written out
    LocalSet::new()
        .run_until(async { loader.spawn_load(page.clone(), args.key.as_str()).await })
        .await?;

    let html = page.borrow().html();
    match &args.output {
        Some(output) => std::fs::write(output, html)
            .with_context(|| format!("Failed writing page to file {}", output.display()))?,
        None => print!("{html}"),
    }
    Ok(())
}
