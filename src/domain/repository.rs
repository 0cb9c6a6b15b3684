use std::fmt;

use url::Url;

use crate::domain::AppError;

pub const DEFAULT_HOST: &str = "github.com";

/// A remote repository on a GitHub host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    host: String,
    owner: String,
    name: String,
}

impl Repository {
    pub fn new(host: impl Into<String>, owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self { host: host.into().to_lowercase(), owner: owner.into(), name: name.into() }
    }

    /// Parse `OWNER/NAME` or `HOST/OWNER/NAME`.
    pub fn parse(value: &str) -> Result<Self, AppError> {
        let invalid = |reason: &str| AppError::InvalidRepository {
            value: value.to_string(),
            reason: reason.to_string(),
        };

        let parts: Vec<&str> = value.trim().split('/').collect();
        if parts.iter().any(|part| part.is_empty()) {
            return Err(invalid("expected the [HOST/]OWNER/REPO format"));
        }

        match parts.as_slice() {
            [owner, name] => Ok(Self::new(DEFAULT_HOST, *owner, *name)),
            [host, owner, name] => Ok(Self::new(*host, *owner, *name)),
            _ => Err(invalid("expected the [HOST/]OWNER/REPO format")),
        }
    }

    /// Parse a git remote URL in https, ssh or scp-like form.
    pub fn from_remote_url(remote: &str) -> Result<Self, AppError> {
        let invalid = |reason: &str| AppError::InvalidRepository {
            value: remote.to_string(),
            reason: reason.to_string(),
        };

        let (host, path) = if remote.contains("://") {
            let url = Url::parse(remote).map_err(|e| invalid(&e.to_string()))?;
            let host = url.host_str().ok_or_else(|| invalid("remote URL has no host"))?;
            (host.to_string(), url.path().to_string())
        } else {
            // git@host:owner/name.git
            let (authority, path) =
                remote.split_once(':').ok_or_else(|| invalid("unrecognized remote URL"))?;
            let host = authority.rsplit('@').next().unwrap_or(authority);
            (host.to_string(), path.to_string())
        };

        let path = path.trim_matches('/');
        let path = path.strip_suffix(".git").unwrap_or(path);
        match path.split('/').collect::<Vec<_>>().as_slice() {
            [owner, name] if !owner.is_empty() && !name.is_empty() => {
                Ok(Self::new(host, *owner, *name))
            }
            _ => Err(invalid("remote path is not OWNER/REPO")),
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// `OWNER/NAME`, as used in API paths.
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }

    pub fn is_default_host(&self) -> bool {
        self.host == DEFAULT_HOST || self.host == "www.github.com"
    }
}

impl fmt::Display for Repository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_default_host() {
            write!(f, "{}", self.full_name())
        } else {
            write!(f, "{}/{}", self.host, self.full_name())
        }
    }
}
