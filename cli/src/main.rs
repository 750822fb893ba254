mod navigator;
mod store;
mod transport;


use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde_json::Value;
use session::controller::{load_dashboard, logout, submit_login, submit_register};
use session::listing::DEFAULT_PAGE_LIMIT;
use session::{ApiClient, ApiConfig, Feedback, ListingState, LoginForm, RegisterForm, RequestError, SessionContext, UserRow};
use tracing_subscriber::EnvFilter;

use crate::navigator::LogNavigator;
use crate::store::{FileSessionStore, default_session_path};
use crate::transport::ReqwestTransport;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("{0}")]
    Failed(String),
    #[error(transparent)]
    Request(#[from] RequestError),
    #[error("http client setup failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("cannot locate the session file; pass --session-file or set HOME")]
    NoSessionPath,
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

impl From<Feedback> for CliError {
    fn from(feedback: Feedback) -> Self {
        Self::Failed(feedback.message)
    }
}

#[derive(Parser, Debug)]
#[command(name = "hopbunny", about = "Hop Bunny game API client")]
struct Cli {
    /// Use this API base URL instead of resolving one from --host.
    #[arg(long, env = "HOPBUNNY_API_URL")]
    api_url: Option<String>,

    /// Host name the endpoint resolver sees.
    #[arg(long, env = "HOPBUNNY_HOST", default_value = "localhost")]
    host: String,

    #[arg(long, env = "HOPBUNNY_SESSION_FILE")]
    session_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the API base URL in use.
    Endpoint,
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "HOPBUNNY_PASSWORD", hide_env_values = true)]
        password: String,
    },
    Register {
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
        #[arg(long, env = "HOPBUNNY_PASSWORD", hide_env_values = true)]
        password: String,
        #[arg(long, env = "HOPBUNNY_CONFIRM_PASSWORD", hide_env_values = true)]
        confirm_password: String,
    },
    Logout,
    /// Print the profile of the stored session as JSON.
    Profile,
    /// List players, one page at a time.
    Users {
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long, default_value_t = DEFAULT_PAGE_LIMIT)]
        limit: u32,
        #[arg(long, default_value = "")]
        search: String,
    },
}

impl Cli {
    fn base_url(&self) -> String {
        match &self.api_url {
            Some(url) if !url.trim().is_empty() => url.clone(),
            _ => ApiConfig::from_env().resolve(&self.host).to_owned(),
        }
    }

    fn session_store(&self) -> Result<FileSessionStore, CliError> {
        self.session_file
            .clone()
            .or_else(default_session_path)
            .map(FileSessionStore::new)
            .ok_or(CliError::NoSessionPath)
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    run(&cli).await
}

async fn run(cli: &Cli) -> Result<(), CliError> {
    let base_url = cli.base_url();
    if matches!(cli.command, Command::Endpoint) {
        println!("{base_url}");
        return Ok(());
    }

    let store = cli.session_store()?;
    let navigator = LogNavigator;
    if matches!(cli.command, Command::Logout) {
        println!("{}", logout(&store, &navigator).message);
        return Ok(());
    }

    let api = ApiClient::new(&base_url, ReqwestTransport::new()?).map_err(RequestError::from)?;
    let ctx = SessionContext::new(&api, &store, &navigator);

    match &cli.command {
        Command::Login { email, password } => {
            let form = LoginForm { email: email.clone(), password: password.clone() };
            report(submit_login(&ctx, &form, |_| {}).await)
        }
        Command::Register { username, email, password, confirm_password } => {
            let form = RegisterForm {
                username: username.clone(),
                email: email.clone(),
                password: password.clone(),
                confirm_password: confirm_password.clone(),
            };
            report(submit_register(&ctx, &form, |_| {}).await)
        }
        Command::Profile => {
            let profile = load_dashboard(&ctx).await?;
            print_json(&serde_json::to_value(&profile)?)
        }
        Command::Users { page, limit, search } => list_users(&api, *page, *limit, search).await,
        Command::Endpoint | Command::Logout => Ok(()),
    }
}

async fn list_users(api: &ApiClient<ReqwestTransport>, page: u32, limit: u32, search: &str) -> Result<(), CliError> {
    let mut state = ListingState::new(limit);
    let mut request = state.search(search);
    if page > 1 {
        request = state.request_page(page);
    }
    let outcome = api.fetch_users(&request.query).await;
    state.apply(&request, outcome);
    if let Some(error) = state.error.take() {
        return Err(CliError::Failed(error));
    }

    for line in render_rows(&state.rows()) {
        println!("{line}");
    }
    if let Some(controls) = state.controls() {
        println!("{}", controls.info);
    }
    Ok(())
}

fn render_rows(rows: &[UserRow]) -> Vec<String> {
    rows.iter()
        .map(|row| match row {
            UserRow::User(user) => format!(
                "{:<20} {:<32} {:>10} {:>6}  {}",
                user.username, user.email, user.high_score, user.games_played, user.joined_date
            ),
            UserRow::Placeholder(text) => (*text).to_owned(),
        })
        .collect()
}

fn report(feedback: Feedback) -> Result<(), CliError> {
    if feedback.is_error() {
        return Err(feedback.into());
    }
    println!("{}", feedback.message);
    Ok(())
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
