//! Project references parsed from project URLs.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::domain::errors::{DomainError, DomainResult};

/// Matches `/<orgs|users>/<ownerName>/projects/<number>` anywhere in the URL.
static PROJECT_URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"/(?P<owner_type>orgs|users)/(?P<owner_name>[^/]+)/projects/(?P<number>\d+)")
        .unwrap_or_else(|e| unreachable!("project URL pattern is valid: {e}"))
});

/// Kind of account that owns a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OwnerType {
    Organization,
    User,
}

impl OwnerType {
    /// Map the URL path segment to an owner type.
    ///
    /// `"orgs"` maps to [`OwnerType::Organization`] and `"users"` to
    /// [`OwnerType::User`]. Anything else, including an absent segment,
    /// is rejected.
    pub fn from_url_segment(segment: Option<&str>) -> DomainResult<Self> {
        match segment {
            Some("orgs") => Ok(Self::Organization),
            Some("users") => Ok(Self::User),
            other => Err(DomainError::UnsupportedOwnerType(other.map(str::to_string))),
        }
    }

    /// Name of the GraphQL root field used to look up the owner.
    pub const fn query_field(self) -> &'static str {
        match self {
            Self::Organization => "organization",
            Self::User => "user",
        }
    }
}

impl fmt::Display for OwnerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.query_field())
    }
}

/// The project board an item is added to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectReference {
    pub owner_type: OwnerType,
    pub owner_name: String,
    pub project_number: u64,
}

impl ProjectReference {
    /// Parse a project URL such as `https://github.com/orgs/my-org/projects/7`.
    ///
    /// Only the path shape matters; scheme and host are ignored so GitHub
    /// Enterprise URLs parse the same way.
    pub fn parse(url: &str) -> DomainResult<Self> {
        let captures = PROJECT_URL_PATTERN
            .captures(url)
            .ok_or_else(|| DomainError::InvalidProjectUrl(url.to_string()))?;

        let owner_type =
            OwnerType::from_url_segment(captures.name("owner_type").map(|m| m.as_str()))?;
        let owner_name = captures
            .name("owner_name")
            .map(|m| m.as_str().to_string())
            .ok_or_else(|| DomainError::InvalidProjectUrl(url.to_string()))?;
        let project_number = captures
            .name("number")
            .and_then(|m| m.as_str().parse::<u64>().ok())
            .ok_or_else(|| DomainError::InvalidProjectUrl(url.to_string()))?;

        Ok(Self {
            owner_type,
            owner_name,
            project_number,
        })
    }
}
