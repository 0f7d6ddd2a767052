//! Pages
//!
//! Top-level page components for each route and shell view.

pub mod dashboard;
pub mod home;
pub mod login;
pub mod notifications;
pub mod register;
pub mod settings;

pub use dashboard::Dashboard;
pub use home::Home;
pub use login::Login;
pub use notifications::Notifications;
pub use register::{Register, RegisterForm};
pub use settings::Settings;
