use std::sync::Arc;

use cinema_client::{ApiClient, ApiError, FileStorage, Navigator, SessionStore};
use clap::{Args, Parser, Subcommand};
use serde_json::Value;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("not logged in; run `cinema-cli login` first")]
    NotLoggedIn,
}

#[derive(Parser, Debug)]
#[command(name = "cinema-cli", about = "Cinema booking API session CLI")]
struct Cli {
    #[arg(long, env = "CINEMA_BASE_URL", default_value = "http://127.0.0.1:8080/api")]
    base_url: String,

    /// Directory the session is persisted in between invocations.
    #[arg(long, env = "CINEMA_SESSION_DIR", default_value = ".cinema-session")]
    session_dir: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Log in via the demo exchange and persist the session.
    Login(LoginArgs),
    /// Clear the persisted session.
    Logout,
    /// Show the identity behind the current session.
    Whoami,
    /// Issue a raw API request with the current credential.
    Api(ApiCommand),
}

#[derive(Args, Debug)]
struct LoginArgs {
    #[arg(long)]
    email: String,

    #[arg(long)]
    name: String,

    #[arg(long, default_value_t = false)]
    admin: bool,
}

#[derive(Args, Debug)]
struct ApiCommand {
    #[command(subcommand)]
    command: ApiSubcommand,
}

#[derive(Subcommand, Debug)]
enum ApiSubcommand {
    Get {
        path: String,
    },
    Post {
        path: String,
        #[arg(long)]
        data: Option<String>,
    },
    Patch {
        path: String,
        #[arg(long)]
        data: Option<String>,
    },
    Delete {
        path: String,
    },
}

/// Navigator for a terminal session: "redirecting to login" means telling
/// the operator to log in again.
struct LoginHint;

impl Navigator for LoginHint {
    fn navigate_to(&self, _path: &str) {
        eprintln!("session expired; run `cinema-cli login` to start a new one");
    }
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let storage = Arc::new(FileStorage::new(cli.session_dir.as_str()));
    let session = Arc::new(SessionStore::new(storage));
    session.restore();

    let api = ApiClient::new(&cli.base_url, session.clone(), Arc::new(LoginHint));

    match cli.command {
        Command::Login(args) => run_login(&api, args).await,
        Command::Logout => run_logout(&session),
        Command::Whoami => run_whoami(&session),
        Command::Api(api_cmd) => run_api(&api, api_cmd.command).await,
    }
}

async fn run_login(api: &ApiClient, args: LoginArgs) -> Result<(), CliError> {
    let user = api.login(&args.email, &args.name, args.admin).await?;
    eprintln!("logged in as {} ({})", user.name, user.role);
    Ok(())
}

fn run_logout(session: &SessionStore) -> Result<(), CliError> {
    session.logout();
    eprintln!("logged out");
    Ok(())
}

fn run_whoami(session: &SessionStore) -> Result<(), CliError> {
    if !session.is_authenticated() {
        return Err(CliError::NotLoggedIn);
    }
    match session.user() {
        Some(user) => print_json(&serde_json::to_value(&user)?),
        None => {
            // Restored token with an unreadable identity record.
            eprintln!("token present but identity unknown; log in again to refresh");
            Ok(())
        }
    }
}

async fn run_api(api: &ApiClient, command: ApiSubcommand) -> Result<(), CliError> {
    let value = match command {
        ApiSubcommand::Get { path } => api.get(&path).await?,
        ApiSubcommand::Post { path, data } => api.post(&path, parse_body(data)?).await?,
        ApiSubcommand::Patch { path, data } => api.patch(&path, parse_body(data)?).await?,
        ApiSubcommand::Delete { path } => api.delete(&path).await?,
    };
    print_json(&value)
}

fn parse_body(data: Option<String>) -> Result<Option<Value>, CliError> {
    data.map(|raw| serde_json::from_str(&raw))
        .transpose()
        .map_err(CliError::from)
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
