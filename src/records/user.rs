use crate::error::{self, Error, Result};
use crate::export::Exportable;
use crate::record::{Record, RecordId};
use crate::table::{Column, Tabular};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Account status, the users page's category filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserStatus {
    /// Active account.
    Active,
    /// Awaiting confirmation.
    Pending,
    /// Deactivated account.
    Inactive,
}

impl UserStatus {
    /// Every status, in select-box order.
    pub const ALL: [UserStatus; 3] = [UserStatus::Active, UserStatus::Pending, UserStatus::Inactive];

    /// Category text of this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Active => "Active",
            UserStatus::Pending => "Pending",
            UserStatus::Inactive => "Inactive",
        }
    }
}

/// Subscription plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserPlan {
    /// Top tier.
    Premium,
    /// Middle tier.
    Standard,
    /// Entry tier.
    Basic,
}

impl UserPlan {
    /// Display text.
    pub fn as_str(&self) -> &'static str {
        match self {
            UserPlan::Premium => "Premium",
            UserPlan::Standard => "Standard",
            UserPlan::Basic => "Basic",
        }
    }
}

/// A dashboard user account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Record id.
    pub id: RecordId,
    /// Full name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Account status.
    pub status: UserStatus,
    /// Subscription plan.
    pub plan: UserPlan,
}

/// Partial update of a [`User`].
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    /// New name.
    pub name: Option<String>,
    /// New email.
    pub email: Option<String>,
    /// New status.
    pub status: Option<UserStatus>,
    /// New plan.
    pub plan: Option<UserPlan>,
}

impl User {
    /// Creates a user without an id; the list assigns one on insertion.
    pub fn new(name: &str, email: &str, status: UserStatus, plan: UserPlan) -> Self {
        Self {
            id: RecordId::UNASSIGNED,
            name: name.to_string(),
            email: email.to_string(),
            status,
            plan,
        }
    }
}

impl Record for User {
    type Patch = UserPatch;

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
        Some(Cow::Borrowed(self.status.as_str()))
    }

    fn apply_patch(&mut self, patch: UserPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(plan) = patch.plan {
            self.plan = plan;
        }
    }

    fn validate(&self) -> Result<()> {
        error::require("name", &self.name)?;
        error::require("email", &self.email)?;
        if !self.email.contains('@') {
            return Err(Error::invalid("email", "must be an email address"));
        }
        Ok(())
    }
}

impl Exportable for User {
    const FIELDS: &'static [&'static str] = &["id", "name", "email", "status", "plan"];
}

impl Tabular for User {
    fn columns() -> Vec<Column> {
        vec![
            Column::new("Name"),
            Column::new("Email"),
            Column::new("Status"),
            Column::new("Plan"),
        ]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.email.clone(),
            self.status.as_str().to_string(),
            self.plan.as_str().to_string(),
        ]
    }
}
