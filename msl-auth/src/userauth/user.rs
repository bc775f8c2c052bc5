use std::fmt;

/// A user identified by a successful user authentication.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MslUser {
    id: String,
}

impl MslUser {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    /// Stable user identifier, independent of the credentials used.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }
}

impl fmt::Display for MslUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}
