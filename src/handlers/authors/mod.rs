//! Handlers for /api/authors and the book routes nested under an author.

pub mod author_create;
pub mod author_delete;
pub mod author_get;
pub mod author_list;
pub mod author_update;
pub mod book_create;
pub mod book_delete;
pub mod book_get;
pub mod book_list;
pub mod book_update;

pub use author_create::author_create;
pub use author_delete::author_delete;
pub use author_get::author_get;
pub use author_list::author_list;
pub use author_update::author_update;
pub use book_create::book_create;
pub use book_delete::book_delete;
pub use book_get::book_get;
pub use book_list::book_list;
pub use book_update::book_update;
