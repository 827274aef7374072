mod assets;
mod health;
mod home;
mod sign_up;

pub use assets::stylesheet;
pub use health::health_check;
pub use home::{landing, switch_tab};
pub use sign_up::register;
