use std::path::PathBuf;

use clap::Parser;
use nav_loader::{
    fragment::FragmentSource,
    loader::{DEFAULT_ACTIVE_CLASS, DEFAULT_CONTAINER, DEFAULT_KEY_ATTR, DEFAULT_PATH, NavConfig},
};
use reqwest::Url;

/// Inject the shared navigation bar into an HTML page, marking the active link
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// HTML page to inject the navigation into
    pub page: PathBuf,

    /// Key of the navigation link to mark as active
    #[arg(short, long, env = "NAV_KEY")]
    pub key: String,

    /// Base URL against which the fragment path is resolved
    #[arg(short, long, env = "NAV_BASE_URL", required_unless_present = "file")]
    pub base_url: Option<Url>,

    /// Path of the navigation fragment
    #[arg(short, long, env = "NAV_PATH", default_value = DEFAULT_PATH)]
    pub path: String,

    /// File to read the navigation fragment from (rather than from the web)
    #[arg(short, long, env = "NAV_FILE")]
    pub file: Option<PathBuf>,

    /// Id of the element receiving the navigation
    #[arg(short, long, env = "NAV_CONTAINER", default_value = DEFAULT_CONTAINER)]
    pub container: String,

    /// Attribute holding the key of each navigation link
    #[arg(long, env = "NAV_KEY_ATTR", default_value = DEFAULT_KEY_ATTR)]
    pub key_attr: String,

    /// Class added to the active link
    #[arg(long, env = "NAV_ACTIVE_CLASS", default_value = DEFAULT_ACTIVE_CLASS)]
    pub active_class: String,

    /// Where to write the resulting page (standard output if absent)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Log-level (error, warn, info, debug, trace)
    #[arg(short, long, env = "NAV_LOG_LEVEL", default_value = "info")]
    pub log_level: log::LevelFilter,
}

impl Args {
    /// The loader configuration described by these arguments.
    ///
    /// A file, when given, takes precedence over the base URL.
    pub fn nav_config(&self) -> Option<NavConfig> {
        let source = match (&self.file, &self.base_url) {
            (Some(file), _) => FragmentSource::File(file.clone()),
            (None, Some(base_url)) => FragmentSource::Http {
                base_url: base_url.clone(),
            },
            (None, None) => return None,
        };
        Some(NavConfig {
            path: self.path.clone(),
            container_id: self.container.clone(),
            key_attr: self.key_attr.clone(),
            active_class: self.active_class.clone(),
            ..NavConfig::new(source)
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use test_case::test_case;

    fn parse(argv: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(["nav_loader"].iter().chain(argv).copied())
    }

    #[test]
    fn defaults() {
        let args = parse(&["-k", "docs", "-b", "https://example.org/", "page.html"]).unwrap();
        let config = args.nav_config().unwrap();
        assert!(matches!(
            config.source,
            FragmentSource::Http { ref base_url } if base_url.as_str() == "https://example.org/"
        ));
        assert_eq!(config.path, "/bm20/nav.html");
        assert_eq!(config.container_id, "bm-nav");
        assert_eq!(config.key_attr, "data-key");
        assert_eq!(config.active_class, "on");
        assert_eq!(args.key, "docs");
    }

    #[test]
    fn file_wins_over_base_url() {
        let args = parse(&[
            "-k", "docs", "-b", "https://example.org/", "-f", "nav.html", "page.html",
        ])
        .unwrap();
        assert!(matches!(
            args.nav_config().unwrap().source,
            FragmentSource::File(ref path) if path.as_os_str() == "nav.html"
        ));
    }

    #[test]
    fn custom_values() {
        let args = parse(&[
            "-k", "x", "-f", "nav.html", "-c", "menu", "-p", "/menu.html", "--key-attr",
            "data-page", "--active-class", "current", "page.html",
        ])
        .unwrap();
        let config = args.nav_config().unwrap();
        assert_eq!(config.path, "/menu.html");
        assert_eq!(config.container_id, "menu");
        assert_eq!(config.key_attr, "data-page");
        assert_eq!(config.active_class, "current");
    }

    #[test_case(&["-k", "docs", "page.html"] ; "no source")]
    #[test_case(&["-b", "https://example.org/", "page.html"] ; "no key")]
    #[test_case(&["-k", "docs", "-b", "https://example.org/"] ; "no page")]
    #[test_case(&["-k", "docs", "-b", "not a url", "page.html"] ; "bad url")]
    fn rejected(argv: &[&str]) {
        assert!(parse(argv).is_err());
    }
}
