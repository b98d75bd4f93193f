//! External collaborators: the injected wallet provider and the content store.

pub mod content;
pub mod ethereum;
