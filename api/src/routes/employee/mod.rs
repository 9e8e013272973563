//! Employee record route handlers
//!
//! Every handler here sits behind the JWT middleware.

pub mod create;
pub mod delete;
pub mod list;
pub mod search;
pub mod update;

pub use create::create;
pub use delete::delete;
pub use list::list;
pub use search::search;
pub use update::update;
