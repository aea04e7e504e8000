use super::{AccountDirectory, RemoteAccount};
use crate::error::{AwsidError, Result};

/// In-memory directory for testing.
///
/// Either answers with a fixed account list or fails every call with a fixed message.
#[derive(Debug, Clone)]
pub struct StaticDirectory {
    response: std::result::Result<Vec<RemoteAccount>, String>,
}

impl StaticDirectory {
    pub fn new(accounts: Vec<RemoteAccount>) -> Self {
        Self {
            response: Ok(accounts),
        }
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            response: Err(message.into()),
        }
    }
}

impl AccountDirectory for StaticDirectory {
    fn list_accounts(&self) -> Result<Vec<RemoteAccount>> {
        self.response.clone().map_err(AwsidError::Remote)
    }
}
