/// Identifies the navigation entry to highlight as the current page.
///
/// Compared by exact, case-sensitive equality with the key attribute of each link.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ActiveKey(String);

impl ActiveKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Determines whether a link carrying `value` as its key is the active one
    pub fn matches(&self, value: &str) -> bool {
        self.0 == value
    }
}

impl From<&str> for ActiveKey {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ActiveKey {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for ActiveKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use test_case::test_case;

    #[test_case("docs", "docs" => true ; "same")]
    #[test_case("docs", "Docs" => false ; "case differs")]
    #[test_case("docs", "docs " => false ; "trailing space")]
    #[test_case("", "" => true ; "both empty")]
    #[test_case("", "home" => false ; "empty key")]
    fn matches(key: &str, value: &str) -> bool {
        ActiveKey::from(key).matches(value)
    }
}
