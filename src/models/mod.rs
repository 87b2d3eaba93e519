mod photo;
mod schema_info;
mod user;

pub use photo::{Comment, Photo, PopulatedComment, PopulatedPhoto};
pub use schema_info::SchemaInfo;
pub use user::{User, UserSummary};
