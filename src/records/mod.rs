//! Record types of the dashboard's list pages.
//!
//! Each type designates its searchable text fields and its categorical field
//! through [`Record`](crate::record::Record), knows how to merge its patch,
//! validates the fields its form requires, and can be exported and rendered
//! as a table row.
//!
//! | Record | search | category |
//! |---|---|---|
//! | [`User`] | name, email | status |
//! | [`Product`] | name | product category |
//! | [`Transaction`] | reference, user | status |
//! | [`Notification`] | message, detail | `read` / `unread` |
//! | [`LogEntry`] | message | level |
//! | [`Activity`] | action, user | activity category |
//! | [`Feedback`] | comment | rating `1`..=`5` |
//! | [`TeamMember`] | name, email | role |
//! | [`Webhook`] | url, event | `active` / `inactive` |
//! | [`ApiKey`] | key | none |

mod activity;
mod api_key;
mod feedback;
mod log;
mod notification;
mod product;
mod team;
mod transaction;
mod user;
mod webhook;

pub use activity::{Activity, ActivityCategory, ActivityPatch};
pub use api_key::{ApiKey, ApiKeyPatch, API_KEY_PREFIX};
pub use feedback::{average_rating, Feedback, FeedbackPatch};
pub use log::{LogEntry, LogLevel, LogPatch, LOG_RETENTION};
pub use notification::{Notification, NotificationKind, NotificationPatch};
pub use product::{Product, ProductCategory, ProductPatch, ProductStatus};
pub use team::{TeamMember, TeamMemberPatch};
pub use transaction::{total_amount, Transaction, TransactionPatch, TransactionStatus};
pub use user::{User, UserPatch, UserPlan, UserStatus};
pub use webhook::{Webhook, WebhookPatch};
