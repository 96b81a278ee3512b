//! Domain models.
//!
//! A [`User`] exclusively owns its [`Todo`] sequence. There are no
//! back-references and no cross-user links.

pub mod todo;
pub mod user;

pub use todo::{NewTodo, Todo, TodoPatch};
pub use user::{NewUser, User};
