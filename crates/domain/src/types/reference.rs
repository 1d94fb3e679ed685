//! Reference data served to other platform services

use serde::{Deserialize, Serialize};

/// A topic and the category it is filed under
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    pub description: String,
    pub category: String,
}

/// A category with its human-readable description
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub category: String,
    pub description: String,
}
