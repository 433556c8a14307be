pub mod browser;
pub mod hooks;
pub mod services;
pub mod state;
