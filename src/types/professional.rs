//! Professionals and the connection network that links them.

use serde::{Deserialize, Serialize};

use crate::graph::VertexGraph;

/// A person in a professional network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Professional {
    /// Display name.
    pub name: String,
    /// The company this person works for.
    pub company: String,
}

impl Professional {
    /// Create a professional.
    pub fn new(name: impl Into<String>, company: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            company: company.into(),
        }
    }

    /// Whether this person works for `company` (exact, case-sensitive match).
    pub fn works_at(&self, company: &str) -> bool {
        self.company == company
    }
}

/// A professional network: people are vertices, connections are edges.
pub type ProfessionalNetwork = VertexGraph<Professional>;
