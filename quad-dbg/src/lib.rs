mod overlay;
mod screenlog;

pub use overlay::*;
pub use screenlog::init_on_screen_log;
