use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "thrivex", version, about = "ThriveX profile demo")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create an account and sign in
    Register {
        /// Full name; the first word becomes the first name
        name: String,
        email: String,
        password: String,
        confirm: String,
    },
    /// Sign in with a configured account
    Login { email: String, password: String },
    /// Sign out (profile data is kept)
    Logout,
    /// Open a page by path, e.g. dashboard.html
    Open { page: String },
    /// Work with the signed-in profile
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ProfileAction {
    /// Print the stored profile
    Show,
    /// Set one form field and save, e.g. firstName Ada
    Edit { field: String, value: String },
    /// Manage the skills list
    Skill {
        #[command(subcommand)]
        action: SkillAction,
    },
    /// Attach an image: profile-photo, profile-banner, company-logo or
    /// company-banner
    Attach { slot: String, file: PathBuf },
}

#[derive(Subcommand, Debug)]
pub enum SkillAction {
    Add { skill: String },
    Remove { index: usize },
    List,
}
