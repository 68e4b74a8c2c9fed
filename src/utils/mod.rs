pub mod busy;
pub mod csrf;
pub mod format;
pub mod render;
pub mod validation;
