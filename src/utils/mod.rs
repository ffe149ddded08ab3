//! Request helpers shared by the web handlers.

pub mod form_id;
pub mod origin;
