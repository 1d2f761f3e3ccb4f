//! Filter/pagination state machine shared by the products and actions views.

mod controller;
mod intent;
mod reducer;
mod state;

pub use controller::{ListPage, ListQuery, ListSource};
pub use intent::ListIntent;
pub use reducer::ListReducer;
pub use state::{FetchTicket, ListState, LoadStatus};
