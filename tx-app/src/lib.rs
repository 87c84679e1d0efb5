pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod notification;
pub mod pages;

#[cfg(test)]
mod tests;

pub use cli::{Cli, Command, ProfileAction, SkillAction};
pub use error::{AppError, Result};
pub use notification::{Notification, Severity};
pub use pages::dashboard::{DashboardView, LogoDisplay};
pub use pages::login::{LoginForm, LoginOutcome, submit_login};
pub use pages::page_context::{OpenPage, PageContext};
pub use pages::register::{RegisterForm, RegisterOutcome, submit_registration};
pub use pages::update_profile::UpdateProfilePage;
