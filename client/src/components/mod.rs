//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Leaf components (`tag_list`, `image_grid`) are stateless; `mood_form` keeps
//! only its own input text; `status_pill` reads the shared request state from
//! Leptos context.

pub mod dayboard_view;
pub mod image_grid;
pub mod mood_form;
pub mod status_pill;
pub mod tag_list;
