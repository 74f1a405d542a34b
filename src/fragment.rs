//! I define the navigation fragment and the places it can be retrieved from.

use std::path::PathBuf;

use reqwest::{Client, Response, Url, header};
use scraper::Html;

use crate::error::NavError;

/// Cache directives sent with every fragment request.
/// The fragment may change between deployments, so a stale copy is never acceptable.
pub const NO_CACHE: &str = "no-store, no-cache, max-age=0";

/// A standalone piece of markup, meant to be inserted into a larger page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavFragment {
    markup: String,
}

impl NavFragment {
    pub fn new(markup: impl Into<String>) -> Self {
        Self {
            markup: markup.into(),
        }
    }

    pub fn markup(&self) -> &str {
        &self.markup
    }

    /// Parse this fragment as HTML body content.
    pub fn parse(&self) -> Html {
        Html::parse_fragment(&self.markup)
    }
}

/// Where the navigation fragment is retrieved from.
#[derive(Clone, Debug)]
pub enum FragmentSource {
    /// Fetched over HTTP, the fragment path being resolved against this base URL
    Http { base_url: Url },
    /// Read from a local file (the fragment path is then ignored)
    File(PathBuf),
}

impl FragmentSource {
    /// Retrieve a fresh copy of the fragment.
    ///
    /// Nothing is cached between calls: every HTTP retrieval is a new request
    /// carrying [`NO_CACHE`].
    pub async fn fetch(&self, client: &Client, path: &str) -> Result<NavFragment, NavError> {
        let markup = match self {
            Self::File(filename) => {
                log::debug!("Reading navigation from file {}", filename.display());
                std::fs::read_to_string(filename)
                    .map_err(|err| NavError::File(filename.display().to_string(), err))?
            }
            Self::Http { base_url } => {
                let url = base_url
                    .join(path)
                    .map_err(|err| NavError::Url(path.to_string(), err))?;
                log::debug!("Navigation URL: {url}");
                let response = client
                    .get(url)
                    .header(header::CACHE_CONTROL, NO_CACHE)
                    .header(header::PRAGMA, "no-cache")
                    .send()
                    .await
                    .and_then(Response::error_for_status)
                    .map_err(NavError::http)?;
                check_content_type(&response)?;
                response.text().await.map_err(NavError::http)?
            }
        };
        log::trace!("Navigation fragment: {markup}");
        Ok(NavFragment::new(markup))
    }
}

/// Reject responses explicitly declared as something other than text.
///
/// A response with no Content-Type at all is accepted.
fn check_content_type(response: &Response) -> Result<(), NavError> {
    let Some(value) = response.headers().get(header::CONTENT_TYPE) else {
        return Ok(());
    };
    let content_type = value.to_str().unwrap_or_default();
    if is_textual(content_type) {
        Ok(())
    } else {
        Err(NavError::NotText(content_type.to_string()))
    }
}

fn is_textual(content_type: &str) -> bool {
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    mime.starts_with("text/") || mime == "application/xhtml+xml"
}

#[cfg(test)]
mod test {
    use super::*;
    use test_case::test_case;

    #[test_case("text/html" => true ; "html")]
    #[test_case("text/html; charset=utf-8" => true ; "html with charset")]
    #[test_case("TEXT/HTML" => true ; "uppercase html")]
    #[test_case("text/plain" => true ; "plain")]
    #[test_case("application/xhtml+xml" => true ; "xhtml")]
    #[test_case("application/json" => false ; "json")]
    #[test_case("image/png" => false ; "png")]
    #[test_case("" => false ; "empty")]
    fn textual(content_type: &str) -> bool {
        is_textual(content_type)
    }

    #[test]
    fn parse_keeps_links() {
        let fragment = NavFragment::new(r#"<ul><li><a data-key="home" href="/">Home</a></li></ul>"#);
        assert!(fragment.markup().starts_with("<ul>"));
        let html = fragment.parse();
        let sel = scraper::Selector::parse("a[data-key]").unwrap();
        let keys: Vec<_> = html
            .root_element()
            .select(&sel)
            .filter_map(|a| a.attr("data-key"))
            .collect();
        assert_eq!(keys, ["home"]);
    }

    #[tokio::test]
    async fn missing_file() {
        let source = FragmentSource::File("/nonexistent/nav.html".into());
        let err = source.fetch(&Client::new(), "/bm20/nav.html").await.unwrap_err();
        assert!(matches!(err, NavError::File(..)), "{err:?}");
    }
}
