//! Handlers for the flat /api/books routes. Bodies carry `authorId`
//! explicitly, unlike the routes nested under an author.

pub mod book_create;
pub mod book_delete;
pub mod book_get;
pub mod book_list;
pub mod book_update;

pub use book_create::book_create;
pub use book_delete::book_delete;
pub use book_get::book_get;
pub use book_list::book_list;
pub use book_update::book_update;
