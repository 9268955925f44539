//! The issue or pull request that triggered the run.

/// Triggering issue or pull request.
///
/// Every field is optional-tolerant: an event without an issue or pull
/// request produces an item with no labels and no identifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Item {
    /// GraphQL node id of the issue or pull request.
    pub content_id: Option<String>,
    /// Issue or pull request number, for log messages.
    pub number: Option<u64>,
    /// Login of the repository owner.
    pub owner_login: Option<String>,
    /// Label names, lower-cased.
    pub labels: Vec<String>,
    pub html_url: Option<String>,
}

impl Item {
    /// Create an item, lower-casing the given label names.
    pub fn new<I, S>(
        content_id: Option<String>,
        owner_login: Option<String>,
        labels: I,
        html_url: Option<String>,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            content_id,
            number: None,
            owner_login,
            labels: labels.into_iter().map(|l| l.as_ref().to_lowercase()).collect(),
            html_url,
        }
    }

    /// Set the issue or pull request number.
    #[must_use]
    pub const fn with_number(mut self, number: u64) -> Self {
        self.number = Some(number);
        self
    }

    /// Whether the item lives under the same owner as the project.
    pub fn is_owned_by(&self, owner: &str) -> bool {
        self.owner_login.as_deref() == Some(owner)
    }
}
