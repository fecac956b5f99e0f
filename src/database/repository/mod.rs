//! Explicit repository functions: each takes a pool and plain records,
//! runs one statement (or one transaction), and returns plain records.

pub mod authors;
pub mod books;
pub mod users;
