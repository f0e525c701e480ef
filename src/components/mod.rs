pub mod app;
pub mod earth_view;
pub mod hero_overlay;
