mod clock;
mod error;
mod service;
mod store;

pub use clock::{Clock, SystemClock};
pub use error::CommentError;
pub use service::CommentService;
pub use store::{CommentStore, PostLookup};
