// Public page: section navigation and server-side rendering of the profile.

pub mod handlers;
pub mod nav;
pub mod render;
