//! Per-resource routers, merged in [`crate::app`].

pub mod history;
pub mod import;
pub mod lists;
pub mod planner;
pub mod playlists;
pub mod recommendation;
pub mod workouts;
