use serde::{Deserialize, Serialize};

/// Login flow enabled for a deployment. Only one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthMode {
    /// `documento_id` + password checked against the stored hash
    #[default]
    Credentials,
    /// An external provider authenticates; the local user is looked up by email
    IdentityProvider,
}
