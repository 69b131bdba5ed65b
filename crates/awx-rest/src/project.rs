//! Projects.

use serde::Deserialize;

use crate::resource::Entity;

/// An AWX project: a source control checkout holding playbooks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    id: u64,
    name: String,
    scm_type: String,
    scm_url: String,
    scm_branch: String,
}

impl Project {
    /// Server-assigned project id.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Project name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Source control type, e.g. `git`. Empty for manual projects.
    pub fn scm_type(&self) -> &str {
        &self.scm_type
    }

    /// Source control URL.
    pub fn scm_url(&self) -> &str {
        &self.scm_url
    }

    /// Branch, tag or commit to check out. Empty means the default branch.
    pub fn scm_branch(&self) -> &str {
        &self.scm_branch
    }
}

#[derive(Debug, Deserialize)]
pub struct ProjectWire {
    id: u64,
    #[serde(default)]
    name: String,
    #[serde(default)]
    scm_type: String,
    #[serde(default)]
    scm_url: String,
    #[serde(default)]
    scm_branch: String,
}

impl Entity for Project {
    type Wire = ProjectWire;

    fn from_wire(wire: ProjectWire) -> Self {
        Self {
            id: wire.id,
            name: wire.name,
            scm_type: wire.scm_type,
            scm_url: wire.scm_url,
            scm_branch: wire.scm_branch,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projection() {
        let wire: ProjectWire = serde_json::from_value(serde_json::json!({
            "id": 6,
            "name": "Demo Project",
            "scm_type": "git",
            "scm_url": "https://github.com/ansible/ansible-tower-samples",
            "scm_branch": "master",
            "status": "successful"
        }))
        .unwrap();

        let project = Project::from_wire(wire);
        assert_eq!(project.id(), 6);
        assert_eq!(project.name(), "Demo Project");
        assert_eq!(project.scm_type(), "git");
        assert_eq!(
            project.scm_url(),
            "https://github.com/ansible/ansible-tower-samples"
        );
        assert_eq!(project.scm_branch(), "master");
    }

    #[test]
    fn test_manual_project_has_empty_scm_fields() {
        let wire: ProjectWire =
            serde_json::from_value(serde_json::json!({"id": 7, "name": "Manual", "scm_type": ""}))
                .unwrap();

        let project = Project::from_wire(wire);
        assert_eq!(project.scm_type(), "");
        assert_eq!(project.scm_url(), "");
    }
}
