use crate::error::{self, Result};
use crate::export::Exportable;
use crate::record::{Record, RecordId};
use crate::table::{Column, Tabular};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Settlement status of a payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionStatus {
    /// Settled.
    Success,
    /// Awaiting settlement.
    Pending,
    /// Rejected.
    Failed,
}

impl TransactionStatus {
    /// Every status, in select-box order.
    pub const ALL: [TransactionStatus; 3] = [
        TransactionStatus::Success,
        TransactionStatus::Pending,
        TransactionStatus::Failed,
    ];

    /// Category text.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionStatus::Success => "Success",
            TransactionStatus::Pending => "Pending",
            TransactionStatus::Failed => "Failed",
        }
    }
}

/// A payment. `reference` is the human-facing code such as `TRX-001`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Record id.
    pub id: RecordId,
    /// Transaction reference code.
    pub reference: String,
    /// Paying user.
    pub user: String,
    /// Amount in whole currency units.
    pub amount: u64,
    /// Settlement status.
    pub status: TransactionStatus,
    /// Timestamp as displayed.
    pub date: String,
}

/// Partial update of a [`Transaction`].
#[derive(Debug, Clone, Default)]
pub struct TransactionPatch {
    /// New status.
    pub status: Option<TransactionStatus>,
    /// New amount.
    pub amount: Option<u64>,
}

impl Transaction {
    /// Creates a transaction without an id.
    pub fn new(reference: &str, user: &str, amount: u64, status: TransactionStatus, date: &str) -> Self {
        Self {
            id: RecordId::UNASSIGNED,
            reference: reference.to_string(),
            user: user.to_string(),
            amount,
            status,
            date: date.to_string(),
        }
    }
}

/// Sum of the amounts, saturating on overflow.
pub fn total_amount<'a, I>(transactions: I) -> u64
where
    I: IntoIterator<Item = &'a Transaction>,
{
    transactions
        .into_iter()
        .fold(0u64, |sum, t| sum.saturating_add(t.amount))
}

impl Record for Transaction {
    type Patch = TransactionPatch;

    fn id(&self) -> RecordId {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.reference.as_str(), self.user.as_str()]
    }

    fn category(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(self.status.as_str()))
    }

    fn apply_patch(&mut self, patch: TransactionPatch) {
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(amount) = patch.amount {
            self.amount = amount;
        }
    }

    fn validate(&self) -> Result<()> {
        error::require("reference", &self.reference)?;
        error::require("user", &self.user)
    }
}

impl Exportable for Transaction {
    const FIELDS: &'static [&'static str] = &["id", "reference", "user", "amount", "status", "date"];
}

impl Tabular for Transaction {
    fn columns() -> Vec<Column> {
        vec![
            Column::new("Ref"),
            Column::new("User"),
            Column::new("Amount"),
            Column::new("Status"),
            Column::new("Date"),
        ]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.reference.clone(),
            self.user.clone(),
            self.amount.to_string(),
            self.status.as_str().to_string(),
            self.date.clone(),
        ]
    }
}
