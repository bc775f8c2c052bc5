use std::fmt;

use serde::{Deserialize, Serialize};

/// User authentication schemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum UserAuthenticationScheme {
    /// Email address and password.
    #[serde(rename = "EMAIL_PASSWORD")]
    EmailPassword,
}

impl UserAuthenticationScheme {
    pub const ALL: [Self; 1] = [Self::EmailPassword];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::EmailPassword => "EMAIL_PASSWORD",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.name() == name)
    }
}

impl fmt::Display for UserAuthenticationScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
