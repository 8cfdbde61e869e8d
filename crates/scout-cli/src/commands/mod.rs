pub mod browse;
pub mod categories;
pub mod dispatch;
pub mod list;
pub mod render;
pub mod shared;
