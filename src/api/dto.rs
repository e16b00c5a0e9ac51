//! Data Transfer Objects
//!
//! Response body of the signup endpoint. The list endpoint decodes
//! straight into [`crate::activities::ActivityCatalog`].

use serde::{Deserialize, Serialize};

/// Successful signup response
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SignupReceipt {
    /// Confirmation text shown in the banner
    #[serde(default)]
    pub message: String,
}
