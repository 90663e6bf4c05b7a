//! Command-line front end: each subcommand drives one screen

use anyhow::{anyhow, Result};
use clap::{Args, Parser, Subcommand};
use log::{info, warn};

use crate::config::AppConfig;
use crate::models::news::{NewsItem, NewsLanguage};
use crate::models::theme::{hex, ThemePreference};
use crate::ui::navigation::{Navigator, Route};
use crate::ui::render::TextRenderer;
use crate::ui::screens::auth::{APP_TITLE, LOGIN_SUCCESS_MESSAGE};
use crate::ui::screens::feed::LoadState;
use crate::ui::screens::news::{HomeScreen, NO_NEWS_MESSAGE, NO_RESULTS_MESSAGE};
use crate::ui::screens::profile::PROFILE_UPDATED_MESSAGE;
use crate::ui::screens::splash::TAGLINE;
use crate::ui::AppContext;

#[derive(Debug, Parser)]
#[command(name = "mikedaily", version, about = "Read the news from your terminal")]
pub struct Cli {
    /// Disable colored output (also disabled when NO_COLOR is set)
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Top headlines
    Headlines(ListArgs),
    /// List news categories
    Categories,
    /// Headlines for one category
    Category(CategoryArgs),
    /// Search the news
    Search(SearchArgs),
    /// Log in to your account
    Login(LoginArgs),
    /// Create an account
    Signup(SignupArgs),
    /// Forget the stored session
    Logout,
    /// Show your profile
    Profile,
    /// Change username, email and password
    EditProfile(EditProfileArgs),
    /// Show or set the theme
    Theme(ThemeArgs),
    /// Show or set the news language
    Language(LanguageArgs),
    /// Show or change privacy settings
    Privacy(PrivacyArgs),
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Open the n-th article in the browser
    #[arg(long)]
    pub open: Option<usize>,
}

#[derive(Debug, Args)]
pub struct CategoryArgs {
    /// Category name or slug, e.g. "top-stories"
    pub category: String,

    #[command(flatten)]
    pub list: ListArgs,
}

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Search terms
    #[arg(required = true)]
    pub query: Vec<String>,

    #[command(flatten)]
    pub list: ListArgs,
}

#[derive(Debug, Args)]
pub struct LoginArgs {
    /// Email address
    #[arg(short, long)]
    pub email: String,

    /// Password
    #[arg(short, long)]
    pub password: String,
}

#[derive(Debug, Args)]
pub struct SignupArgs {
    #[arg(short, long)]
    pub username: String,

    #[arg(short, long)]
    pub email: String,

    #[arg(short, long)]
    pub password: String,

    #[arg(long)]
    pub confirm_password: String,
}

#[derive(Debug, Args)]
pub struct EditProfileArgs {
    /// New username; defaults to the current one
    #[arg(long)]
    pub username: Option<String>,

    /// New email; defaults to the current one
    #[arg(long)]
    pub email: Option<String>,

    #[arg(long, default_value = "")]
    pub old_password: String,

    #[arg(long, default_value = "")]
    pub new_password: String,
}

#[derive(Debug, Args)]
pub struct ThemeArgs {
    /// light, dark or system
    pub mode: Option<String>,
}

#[derive(Debug, Args)]
pub struct LanguageArgs {
    /// Language code: en, fr, es, de, it or pt
    pub code: Option<String>,
}

#[derive(Debug, Args)]
pub struct PrivacyArgs {
    /// Make the profile private
    #[arg(long)]
    pub private: Option<bool>,

    /// Show the email address to others
    #[arg(long)]
    pub show_email: Option<bool>,
}

/// Runs one command against `ctx`
pub async fn run(cli: Cli, ctx: &AppContext, config: &AppConfig) -> Result<()> {
    let renderer = TextRenderer::for_stdout(ctx.palette(), cli.no_color);

    let Some(command) = cli.command else {
        return launch(ctx, &renderer).await;
    };

    match command {
        Command::Headlines(args) => {
            config.require_news_key()?;
            let mut screen = ctx.home_screen();
            screen.open();
            let state = screen.feed().settled().await;

            print_home(&renderer, &screen);
            print_state(&renderer, &state, NO_NEWS_MESSAGE, false);
            open_article(state.items(), args.open)?;
        }
        Command::Categories => {
            let screen = ctx.categories_screen();
            println!("{}", renderer.heading("Categories"));
            for category in screen.categories() {
                println!("  {:<14} {}", category.name, renderer.muted(&category.slug()));
            }
        }
        Command::Category(args) => {
            config.require_news_key()?;
            let mut nav = Navigator::new(Route::Categories);
            if !ctx.categories_screen().select(&args.category, &mut nav) {
                return Err(anyhow!("Unknown category: {}", args.category));
            }
            let Route::Category(slug) = nav.current().clone() else {
                return Err(anyhow!("Unknown category: {}", args.category));
            };

            let mut screen = ctx.category_screen(&slug);
            screen.open();
            let state = screen.feed().settled().await;

            println!("{}", renderer.heading(&screen.title()));
            print_state(&renderer, &state, NO_NEWS_MESSAGE, true);
            open_article(state.items(), args.list.open)?;
        }
        Command::Search(args) => {
            config.require_news_key()?;
            let mut screen = ctx.search_screen();
            screen.query = args.query.join(" ");
            if !screen.submit() {
                return Err(anyhow!("Type something to search for"));
            }
            let state = screen.feed().settled().await;

            println!("{}", renderer.heading("Search News"));
            print_state(&renderer, &state, NO_RESULTS_MESSAGE, true);
            open_article(state.items(), args.list.open)?;
        }
        Command::Login(args) => {
            config.require_backend()?;
            let mut nav = Navigator::new(Route::Login);
            let mut screen = ctx.login_screen();
            screen.email = args.email;
            screen.password = args.password;

            screen.submit(&mut nav).await?;
            println!("{}", renderer.accent(LOGIN_SUCCESS_MESSAGE));
            info!("Navigated to {}", nav.current().path());
        }
        Command::Signup(args) => {
            let mut screen = ctx.signup_screen();
            screen.username = args.username;
            screen.email = args.email;
            screen.password = args.password;
            screen.confirm_password = args.confirm_password;
            screen.submit()?;
            println!("{}", renderer.muted("Sign-up isn't available yet. Please log in with an existing account."));
        }
        Command::Logout => {
            let mut nav = Navigator::new(Route::Profile);
            ctx.profile_screen().logout(&mut nav)?;
            println!("Logged out.");
        }
        Command::Profile => {
            let screen = ctx.profile_screen();
            println!("{}", renderer.heading(screen.name()));
            if !screen.email().is_empty() {
                println!("{}", renderer.muted(screen.email()));
            }
            println!();
            println!("{}", renderer.heading("Account Settings"));
            for item in screen.account_settings() {
                println!("  {:<14} {}", item.title, renderer.muted(&item.route.path()));
            }
            println!("{}", renderer.heading("Preferences"));
            for item in screen.preference_settings() {
                println!("  {:<14} {}", item.title, renderer.muted(&item.route.path()));
            }
        }
        Command::EditProfile(args) => {
            config.require_backend()?;
            let mut screen = ctx.edit_profile_screen();
            if let Some(username) = args.username {
                screen.username = username;
            }
            if let Some(email) = args.email {
                screen.email = email;
            }
            screen.old_password = args.old_password;
            screen.new_password = args.new_password;
            screen.submit().await?;
            println!("{}", renderer.accent(PROFILE_UPDATED_MESSAGE));
        }
        Command::Theme(args) => {
            let screen = ctx.dark_mode_screen();
            if let Some(mode) = args.mode {
                let mode: ThemePreference = mode.parse()?;
                screen.select(mode);
            }
            let renderer = TextRenderer::for_stdout(screen.palette(), cli.no_color);
            println!("{}", renderer.heading("Theme"));
            for choice in screen.modes() {
                let mark = if choice.selected { "✓" } else { " " };
                println!("  {} {}", renderer.accent(mark), choice.label);
            }
            for (role, color) in screen.palette().roles() {
                println!("  {:<11} {}", renderer.muted(role), hex(color));
            }
        }
        Command::Language(args) => {
            let mut screen = ctx.language_screen();
            if let Some(code) = args.code {
                let language: NewsLanguage = code.parse()?;
                screen.select(language)?;
            }
            println!("{}", renderer.heading("Select News Language"));
            for choice in screen.languages() {
                let mark = if choice.selected { "✓" } else { " " };
                println!("  {} {:<11} {}", renderer.accent(mark), choice.label, renderer.muted(choice.value.code()));
            }
        }
        Command::Privacy(args) => {
            let mut screen = ctx.privacy_screen();
            if let Some(private) = args.private {
                screen.set_private(private)?;
            }
            if let Some(show_email) = args.show_email {
                screen.set_show_email(show_email)?;
            }
            let settings = screen.settings();
            println!("{}", renderer.heading("Privacy Settings"));
            println!("  Make my profile private   {}", settings.is_private);
            println!("  Show my email to others   {}", settings.show_email);
        }
    }

    Ok(())
}

/// No subcommand: splash, then point at the login route
async fn launch(ctx: &AppContext, renderer: &TextRenderer) -> Result<()> {
    let mut nav = Navigator::default();
    println!("{}", renderer.heading(APP_TITLE));
    println!("{}", renderer.muted(TAGLINE));
    ctx.splash_screen().run(&mut nav).await;

    match ctx.sessions.load()? {
        Some(session) => println!("Welcome back, {}. Try `mikedaily headlines`.", session.display_name()),
        None => println!("Log in with `mikedaily login --email <EMAIL> --password <PASSWORD>`."),
    }
    info!("Navigated to {}", nav.current().path());
    Ok(())
}

fn print_home(renderer: &TextRenderer, screen: &HomeScreen) {
    println!("{}", renderer.heading(HomeScreen::GREETING));
    println!("{}", renderer.muted(HomeScreen::SUBTITLE));
    let featured = screen.featured();
    if !featured.is_empty() {
        println!();
        println!("{}", renderer.heading("Featured"));
        for item in &featured {
            println!("  {} {}", renderer.accent("★"), item.title);
        }
        println!();
        println!("{}", renderer.heading("Latest News"));
    }
}

fn print_state(renderer: &TextRenderer, state: &LoadState, empty_message: &str, spaced: bool) {
    if spaced {
        println!();
    }
    for line in renderer.load_state(state, empty_message) {
        println!("{}", line);
    }
}

fn open_article(items: &[NewsItem], index: Option<usize>) -> Result<()> {
    let Some(index) = index else {
        return Ok(());
    };
    let item = index
        .checked_sub(1)
        .and_then(|i| items.get(i))
        .ok_or_else(|| anyhow!("There is no article {}", index))?;

    if item.url.is_empty() {
        warn!("Article {} has no URL", index);
        return Ok(());
    }
    open::that(&item.url)?;
    Ok(())
}
