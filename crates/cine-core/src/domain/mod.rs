//! Domain entities - ratings read from the relational store and the shapes derived from them.

mod history;
mod profile;
mod query;
mod rating;
mod tags;

pub use history::HistoryEntry;
pub use profile::{MonthlyRating, NO_RATINGS_MESSAGE, ProfileEntry};
pub use query::{HistoryQuery, ProfileQuery, TagsQuery};
pub use rating::RatingRecord;
pub use tags::TagDocument;
