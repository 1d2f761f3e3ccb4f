//! Session credentials and the guard that drops them on 401.

mod guard;
mod store;
mod token;

pub use guard::{Navigator, RecordingNavigator, SessionGuard};
pub use store::{
    FileSessionStore, MemorySessionStore, SessionError, SessionStore, TOKEN_KEY, USER_KEY,
};
pub use token::SessionToken;
