//! Organizations.

use serde::Deserialize;

use crate::resource::Entity;

/// An AWX organization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Organization {
    id: u64,
    name: String,
    execute_role_id: u64,
}

impl Organization {
    /// Server-assigned organization id.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Organization name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Id of the organization's execute role, or 0 when the server omits it.
    pub fn execute_role_id(&self) -> u64 {
        self.execute_role_id
    }
}

#[derive(Debug, Deserialize)]
pub struct OrganizationWire {
    id: u64,
    #[serde(default)]
    name: String,
    #[serde(default)]
    summary_fields: SummaryFields,
}

#[derive(Debug, Default, Deserialize)]
struct SummaryFields {
    #[serde(default)]
    object_roles: ObjectRoles,
}

#[derive(Debug, Default, Deserialize)]
struct ObjectRoles {
    #[serde(default)]
    execute_role: RoleRef,
}

#[derive(Debug, Default, Deserialize)]
struct RoleRef {
    #[serde(default)]
    id: u64,
}

impl Entity for Organization {
    type Wire = OrganizationWire;

    fn from_wire(wire: OrganizationWire) -> Self {
        Self {
            id: wire.id,
            name: wire.name,
            execute_role_id: wire.summary_fields.object_roles.execute_role.id,
        }
    }
}
