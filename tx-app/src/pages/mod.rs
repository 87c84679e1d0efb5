pub mod dashboard;
pub mod login;
pub mod page_context;
pub mod register;
pub mod update_profile;
