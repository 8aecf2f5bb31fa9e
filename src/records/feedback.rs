use crate::error::{self, Error, Result};
use crate::export::Exportable;
use crate::record::{Record, RecordId};
use crate::table::{Column, Tabular};
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Lowest accepted rating.
pub const MIN_RATING: u8 = 1;
/// Highest accepted rating.
pub const MAX_RATING: u8 = 5;

/// A piece of customer feedback. The rating doubles as the category, so the
/// filter values are `"1"` through `"5"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    /// Record id.
    pub id: RecordId,
    /// Author.
    pub user: String,
    /// Star rating.
    pub rating: u8,
    /// Free text.
    pub comment: String,
    /// Submission date, `YYYY-MM-DD`.
    pub date: String,
}

/// Partial update of a [`Feedback`].
#[derive(Debug, Clone, Default)]
pub struct FeedbackPatch {
    /// New rating.
    pub rating: Option<u8>,
    /// New comment.
    pub comment: Option<String>,
}

impl Feedback {
    /// Creates feedback dated today.
    pub fn new(user: &str, rating: u8, comment: &str) -> Self {
        Self {
            id: RecordId::UNASSIGNED,
            user: user.to_string(),
            rating,
            comment: comment.to_string(),
            date: Local::now().format("%Y-%m-%d").to_string(),
        }
    }

    /// Rendered as filled and empty stars.
    pub fn stars(&self) -> String {
        let filled = usize::from(self.rating.min(MAX_RATING));
        let empty = usize::from(MAX_RATING) - filled;
        format!("{}{}", "★".repeat(filled), "☆".repeat(empty))
    }
}

/// Mean rating, or `None` for no feedback.
pub fn average_rating<'a, I>(feedback: I) -> Option<f64>
where
    I: IntoIterator<Item = &'a Feedback>,
{
    let (sum, count) = feedback
        .into_iter()
        .fold((0u64, 0u64), |(sum, count), f| (sum + u64::from(f.rating), count + 1));
    if count == 0 {
        None
    } else {
        Some(sum as f64 / count as f64)
    }
}

impl Record for Feedback {
    type Patch = FeedbackPatch;

    fn id(&self) -> RecordId {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.comment.as_str()]
    }

    fn category(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Owned(self.rating.to_string()))
    }

    fn apply_patch(&mut self, patch: FeedbackPatch) {
        if let Some(rating) = patch.rating {
            self.rating = rating;
        }
        if let Some(comment) = patch.comment {
            self.comment = comment;
        }
    }

    fn validate(&self) -> Result<()> {
        error::require("user", &self.user)?;
        error::require("comment", &self.comment)?;
        if !(MIN_RATING..=MAX_RATING).contains(&self.rating) {
            return Err(Error::invalid(
                "rating",
                format!("must be between {MIN_RATING} and {MAX_RATING}"),
            ));
        }
        Ok(())
    }
}

impl Exportable for Feedback {
    const FIELDS: &'static [&'static str] = &["id", "user", "rating", "comment", "date"];
}

impl Tabular for Feedback {
    fn columns() -> Vec<Column> {
        vec![
            Column::new("User"),
            Column::new("Rating").with_width(5),
            Column::new("Comment"),
            Column::new("Date").with_width(10),
        ]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.user.clone(),
            self.stars(),
            self.comment.clone(),
            self.date.clone(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::ListController;

    fn seed() -> Vec<Feedback> {
        vec![
            Feedback::new("Rina", 4, "UI keren, responsif"),
            Feedback::new("Budi", 5, "Fitur lengkap"),
            Feedback::new("Sari", 3, "Loading agak lambat"),
            Feedback::new("Tono", 5, "Mantap"),
        ]
    }

    #[test]
    fn test_rating_is_the_category() {
        let mut list = ListController::new(seed());
        list.set_category_filter("5");
        assert_eq!(list.filtered_count(), 2);
        assert_eq!(list.count_by_category().get("3"), Some(&1));
    }

    #[test]
    fn test_average() {
        assert_eq!(average_rating(&seed()), Some(4.25));
        assert_eq!(average_rating(&Vec::<Feedback>::new()), None);
    }

    #[test]
    fn test_rating_range() {
        let mut list = ListController::new(seed());
        let id = list.items()[0].id;
        let err = list
            .try_update(
                id,
                FeedbackPatch {
                    rating: Some(6),
                    ..Default::default()
                },
            )
            .unwrap_err();
        assert!(err.is_validation());
        assert_eq!(list.items()[0].rating, 4);
    }

    #[test]
    fn test_stars() {
        assert_eq!(seed()[2].stars(), "★★★☆☆");
    }
}
