use crate::error::{self, Result};
use crate::export::Exportable;
use crate::record::{Record, RecordId};
use crate::table::{Column, Tabular};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// A member of the admin team. Roles are free text and act as the category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    /// Record id.
    pub id: RecordId,
    /// Full name.
    pub name: String,
    /// Role, e.g. `Admin` or `Editor`.
    pub role: String,
    /// Contact email.
    pub email: String,
}

/// Partial update of a [`TeamMember`].
#[derive(Debug, Clone, Default)]
pub struct TeamMemberPatch {
    /// New name.
    pub name: Option<String>,
    /// New role.
    pub role: Option<String>,
    /// New email.
    pub email: Option<String>,
}

impl TeamMember {
    /// Creates a member without an id.
    pub fn new(name: &str, role: &str, email: &str) -> Self {
        Self {
            id: RecordId::UNASSIGNED,
            name: name.to_string(),
            role: role.to_string(),
            email: email.to_string(),
        }
    }
}

impl Record for TeamMember {
    type Patch = TeamMemberPatch;

    fn id(&self) -> RecordId {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.email.as_str()]
    }

    fn category(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(self.role.as_str()))
    }

    fn apply_patch(&mut self, patch: TeamMemberPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(role) = patch.role {
            self.role = role;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
    }

    fn validate(&self) -> Result<()> {
        error::require("name", &self.name)?;
        error::require("role", &self.role)?;
        error::require("email", &self.email)
    }
}

impl Exportable for TeamMember {
    const FIELDS: &'static [&'static str] = &["id", "name", "role", "email"];
}

impl Tabular for TeamMember {
    fn columns() -> Vec<Column> {
        vec![Column::new("Name"), Column::new("Role"), Column::new("Email")]
    }

    fn cells(&self) -> Vec<String> {
        vec![self.name.clone(), self.role.clone(), self.email.clone()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::ListController;

    #[test]
    fn test_add_requires_every_field() {
        let mut list: ListController<TeamMember> = ListController::default();
        let err = list.try_add(TeamMember::new("Sari", "  ", "sari@web.app")).unwrap_err();
        assert!(err.to_string().starts_with("role"));
        assert!(list.is_empty());

        let id = list.try_add(TeamMember::new("Sari", "Editor", "sari@web.app")).unwrap();
        assert!(list.contains(id));
    }

    #[test]
    fn test_roles_as_categories() {
        let mut list = ListController::new(vec![
            TeamMember::new("Awin", "Admin", "awin@web.app"),
            TeamMember::new("Rina", "Editor", "rina@web.app"),
            TeamMember::new("Budi", "Editor", "budi@web.app"),
        ]);
        list.set_category_filter("Editor");
        assert_eq!(list.filtered_count(), 2);
        let rina = list.items()[1].id;
        list.remove(rina);
        assert_eq!(list.filtered_count(), 1);
    }
}
