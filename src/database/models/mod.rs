pub mod author;
pub mod book;
pub mod user;

pub use author::Author;
pub use book::Book;
pub use user::User;
