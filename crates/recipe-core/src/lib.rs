pub mod error;
pub mod feedback;
pub mod preferences;
pub mod recommend;
pub mod session;
pub mod shopping;
pub mod store;

pub use error::{CoreError, Result};
pub use feedback::FeedbackLog;
pub use preferences::PreferenceStore;
pub use recommend::{CatalogRecommender, Recommendation, Recommender};
pub use session::SessionContext;
pub use store::RecipeStore;
