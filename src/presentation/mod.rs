pub mod app_state;
pub mod components;
pub mod content;
pub mod handlers;
pub mod page;
pub mod router;
