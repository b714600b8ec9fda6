//! SCM connection descriptor and connection type selection.
//!
//! A project describes its source-control endpoint with two optional URLs:
//! a read-only `connection` and a `developer_connection` with write access.
//! [`ConnectionType`] chooses which of the two the resolver binds to.

use crate::core::error::{Result, ScmScopeError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which URL of the connection descriptor to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionType {
    Connection,
    #[default]
    DeveloperConnection,
}

impl ConnectionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConnectionType::Connection => "connection",
            ConnectionType::DeveloperConnection => "developerconnection",
        }
    }
}

impl fmt::Display for ConnectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConnectionType {
    type Err = ScmScopeError;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "connection" => Ok(ConnectionType::Connection),
            "developerconnection" => Ok(ConnectionType::DeveloperConnection),
            _ => Err(ScmScopeError::invalid_connection_type(value)),
        }
    }
}

/// The pair of configured URLs identifying a source-control endpoint
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScmConnection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connection: Option<String>,
    #[serde(
        default,
        rename = "developerConnection",
        alias = "developer_connection",
        skip_serializing_if = "Option::is_none"
    )]
    pub developer_connection: Option<String>,
}

impl ScmConnection {
    pub fn new(connection: Option<String>, developer_connection: Option<String>) -> Self {
        Self {
            connection,
            developer_connection,
        }
    }

    /// Pick the URL for `connection_type`.
    ///
    /// Blank URLs count as unset.
    pub fn select(&self, connection_type: ConnectionType) -> Result<&str> {
        let url = match connection_type {
            ConnectionType::Connection => self.connection.as_deref(),
            ConnectionType::DeveloperConnection => self.developer_connection.as_deref(),
        };

        match url {
            Some(url) if !url.trim().is_empty() => Ok(url),
            _ => Err(ScmScopeError::ConnectionNotSet),
        }
    }
}

/// Select the connection URL from an optional descriptor
pub fn select_connection_url(
    scm: Option<&ScmConnection>,
    connection_type: ConnectionType,
) -> Result<&str> {
    let scm = scm.ok_or(ScmScopeError::NoScmConnection)?;
    scm.select(connection_type)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor() -> ScmConnection {
        ScmConnection::new(Some("prodcon".to_string()), Some("devcon".to_string()))
    }

    #[test]
    fn test_parse_connection_type() -> Result<()> {
        assert_eq!(
            "connection".parse::<ConnectionType>()?,
            ConnectionType::Connection
        );
        assert_eq!(
            "DeveloperConnection".parse::<ConnectionType>()?,
            ConnectionType::DeveloperConnection
        );
        assert!("svn".parse::<ConnectionType>().is_err());
        Ok(())
    }

    #[test]
    fn test_default_is_developer_connection() {
        assert_eq!(ConnectionType::default(), ConnectionType::DeveloperConnection);
    }

    #[test]
    fn test_select_developer_connection() -> Result<()> {
        assert_eq!(
            descriptor().select(ConnectionType::DeveloperConnection)?,
            "devcon"
        );
        Ok(())
    }

    #[test]
    fn test_select_connection() -> Result<()> {
        assert_eq!(descriptor().select(ConnectionType::Connection)?, "prodcon");
        Ok(())
    }

    #[test]
    fn test_missing_descriptor() {
        let err = select_connection_url(None, ConnectionType::Connection).unwrap_err();
        assert_eq!(err.to_string(), "No SCM Connection configured.");
    }

    #[test]
    fn test_selected_url_unset() {
        let scm = ScmConnection::new(Some("prodcon".to_string()), None);
        let err = scm.select(ConnectionType::DeveloperConnection).unwrap_err();
        assert!(matches!(err, ScmScopeError::ConnectionNotSet));

        let blank = ScmConnection::new(Some("  ".to_string()), None);
        assert!(blank.select(ConnectionType::Connection).is_err());
    }

    #[test]
    fn test_descriptor_json_field_names() -> std::result::Result<(), serde_json::Error> {
        let scm: ScmConnection = serde_json::from_str(
            r#"{"connection": "scm:git:a", "developerConnection": "scm:git:b"}"#,
        )?;
        assert_eq!(scm.connection.as_deref(), Some("scm:git:a"));
        assert_eq!(scm.developer_connection.as_deref(), Some("scm:git:b"));
        Ok(())
    }
}
