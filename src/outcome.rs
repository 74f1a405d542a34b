/// What a successful injection did to the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Injection {
    /// Number of links carrying a key attribute in the injected fragment
    pub keyed_links: usize,
    /// Number of those links marked as active
    pub marked: usize,
}

impl Injection {
    /// Whether the active key matched none of the injected links
    pub fn is_unmatched(&self) -> bool {
        self.marked == 0
    }
}

impl std::fmt::Display for Injection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} of {} keyed links marked active", self.marked, self.keyed_links)
    }
}
