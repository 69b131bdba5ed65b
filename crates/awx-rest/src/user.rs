//! Users.

use serde::Deserialize;

use crate::resource::Entity;

/// An AWX user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: u64,
    username: String,
    is_superuser: bool,
}

impl User {
    /// Server-assigned user id.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Login name.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Whether the user is a system administrator.
    pub fn is_superuser(&self) -> bool {
        self.is_superuser
    }
}

#[derive(Debug, Deserialize)]
pub struct UserWire {
    id: u64,
    #[serde(default)]
    username: String,
    #[serde(default)]
    is_superuser: bool,
}

impl Entity for User {
    type Wire = UserWire;

    fn from_wire(wire: UserWire) -> Self {
        Self {
            id: wire.id,
            username: wire.username,
            is_superuser: wire.is_superuser,
        }
    }
}
