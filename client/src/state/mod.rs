//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The page has a single piece of shared state, the dayboard request
//! lifecycle. Text typed into the mood field stays local to `MoodForm`.

pub mod dayboard;
