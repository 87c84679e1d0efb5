//! CLI command handlers: each command opens its page against the store,
//! runs the controller, and prints the outcome.

use crate::cli::{Command, ProfileAction, SkillAction};
use crate::pages::dashboard::{DashboardView, LogoDisplay};
use crate::pages::login::{LoginForm, LoginOutcome, submit_login};
use crate::pages::page_context::{OpenPage, PageContext};
use crate::pages::register::{RegisterForm, RegisterOutcome, submit_registration};
use crate::pages::update_profile::UpdateProfilePage;
use crate::{AppError, Result};

use tx_auth::{CredentialVerifier, PageKind, SessionManager};
use tx_form::{AssetSlot, FIELD_BINDINGS, FormDocument, SkillOutcome};
use tx_store::KeyValueStore;

pub fn run<S: KeyValueStore>(
    command: Command,
    store: &mut S,
    verifier: &dyn CredentialVerifier,
) -> Result<()> {
    match command {
        Command::Register {
            name,
            email,
            password,
            confirm,
        } => {
            let mut form = RegisterForm {
                name,
                email,
                password,
                confirm,
            };
            match submit_registration(store, &mut form) {
                RegisterOutcome::Success { identity, next } => {
                    println!("Registration successful! Welcome to ThriveX.");
                    println!("Signed in as {identity} -> {}", next.path());
                }
                RegisterOutcome::Failure(notice) => println!("{notice}"),
            }
        }

        Command::Login { email, password } => {
            let mut form = LoginForm { email, password };
            match submit_login(store, verifier, &mut form) {
                LoginOutcome::Success { identity, next } => {
                    println!("Signed in as {identity} -> {}", next.path());
                }
                LoginOutcome::Failure(notice) => println!("{notice}"),
            }
        }

        Command::Logout => match SessionManager::new(store).logout() {
            Some(identity) => println!("Logged out {identity}. Profile data is kept."),
            None => println!("Not logged in."),
        },

        Command::Open { page } => open_page(store, &page),

        Command::Profile { action } => run_profile(action, store)?,
    }

    Ok(())
}

fn open_page<S: KeyValueStore>(store: &mut S, page: &str) {
    let kind = PageKind::from_path(page);

    match PageContext::open(store, kind) {
        OpenPage::Redirect(entry) => {
            println!("No session - redirecting to {}", entry.path());
        }
        OpenPage::Anonymous => {
            println!("ThriveX - sign in or register to continue.");
        }
        OpenPage::Context(ctx) => match kind {
            PageKind::Dashboard => render_dashboard(&DashboardView::from_context(&ctx)),
            PageKind::UpdateProfile => render_form(&UpdateProfilePage::open(ctx)),
            // Entry pages with an active session just point back at the
            // dashboard, like the original's replace() redirect.
            _ => println!("Already signed in as {} -> dashboard.html", ctx.identity),
        },
    }
}

fn render_dashboard(view: &DashboardView) {
    println!("{}", view.welcome);
    println!("  {}", view.display_name);
    println!("  {}", view.tagline);
    println!("  {}", view.company_name);
    match &view.company_logo {
        LogoDisplay::Image(_) => println!("  [company logo image]"),
        LogoDisplay::Initial(initial) => println!("  [logo initial: {initial}]"),
        LogoDisplay::Placeholder => println!("  [logo placeholder]"),
    }
    if view.profile_photo_src.is_some() {
        println!("  [profile photo set]");
    }
    if view.profile_banner_src.is_some() {
        println!("  [profile banner set]");
    }
}

fn render_form(page: &UpdateProfilePage) {
    for binding in FIELD_BINDINGS {
        let value = page.form().value(binding.field).unwrap_or_default();
        println!("{} = {value}", binding.field);
    }
    for tag in page.skill_tags() {
        println!("skill[{}] = {}", tag.index, tag.label);
    }
}

fn run_profile<S: KeyValueStore>(action: ProfileAction, store: &mut S) -> Result<()> {
    let ctx = match PageContext::open(store, PageKind::UpdateProfile) {
        OpenPage::Context(ctx) => ctx,
        _ => return Err(AppError::no_session()),
    };

    match action {
        ProfileAction::Show => {
            let page = UpdateProfilePage::open(ctx);
            render_form(&page);
        }

        ProfileAction::Edit { field, value } => {
            let mut page = UpdateProfilePage::open(ctx);
            if !page.edit_field(&field, &value) {
                return Err(AppError::unknown_field(field));
            }
            let (notice, _next) = page.submit(store);
            println!("{notice}");
        }

        ProfileAction::Skill { action } => {
            let mut page = UpdateProfilePage::open(ctx);
            match action {
                SkillAction::Add { skill } => {
                    let (outcome, notice) = page.add_skill(&skill);
                    if let Some(notice) = notice {
                        println!("{notice}");
                    }
                    if outcome == SkillOutcome::Added {
                        let (notice, _next) = page.submit(store);
                        println!("{notice}");
                    }
                }
                SkillAction::Remove { index } => match page.remove_skill(index) {
                    SkillOutcome::Removed => {
                        let (notice, _next) = page.submit(store);
                        println!("{notice}");
                    }
                    _ => println!("No skill at index {index}."),
                },
                SkillAction::List => {}
            }
            for tag in page.skill_tags() {
                println!("skill[{}] = {}", tag.index, tag.label);
            }
        }

        ProfileAction::Attach { slot, file } => {
            let slot = parse_slot(&slot).ok_or_else(|| AppError::unknown_slot(slot))?;
            let bytes =
                std::fs::read(&file).map_err(|e| AppError::file_read(file.clone(), e))?;

            let mut page = UpdateProfilePage::open(ctx);
            let name = file.file_name().map(|n| n.to_string_lossy().to_string());
            page.attach(slot, name.as_deref(), &bytes)?;

            let (notice, _next) = page.submit(store);
            println!("{notice}");
        }
    }

    Ok(())
}

fn parse_slot(slot: &str) -> Option<AssetSlot> {
    match slot {
        "profile-photo" => Some(AssetSlot::ProfilePhoto),
        "profile-banner" => Some(AssetSlot::ProfileBanner),
        "company-logo" => Some(AssetSlot::CompanyLogo),
        "company-banner" => Some(AssetSlot::CompanyBanner),
        // The form field ids work too
        other => AssetSlot::from_field(other),
    }
}
