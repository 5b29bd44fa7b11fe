pub mod store;

pub use store::{SessionStore, TOKEN_KEY, USER_KEY};
