pub mod app;
pub mod host;
pub mod theme;
pub mod window;

pub const APP_ID: &str = "org.culturall.compass";
pub const TAP_BEARING: f32 = 45.0;
pub const TAP_CAPTION: &str = "123456789-10-11";
