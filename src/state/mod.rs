//! Client-side session and view state.

pub mod session;
pub mod view;
