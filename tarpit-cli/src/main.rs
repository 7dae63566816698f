use std::env;
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use tarpit_client::{
    ApiClient, ClientConfig, CredentialStore, FileCredentialStore, MemoryCredentialStore,
    SessionService,
};

mod commands;

#[derive(Parser)]
#[command(name = "tarpit")]
#[command(about = "Operator console for a tarpit honeypot backend")]
struct Cli {
    /// Backend base URL including the API prefix; falls back to
    /// TARPIT_SERVER.
    #[arg(short, long)]
    server: Option<String>,

    /// API key for this invocation instead of the stored credential; falls
    /// back to TARPIT_API_KEY.
    #[arg(short = 'k', long)]
    api_key: Option<String>,

    /// Accept self-signed TLS certificates.
    #[arg(long)]
    insecure: bool,

    /// Log filter directives, e.g. "tarpit_client=debug".
    #[arg(long)]
    log: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate a credential against the backend and keep it for later runs.
    Login {
        #[arg(short, long)]
        user: String,
        /// Read from the terminal when omitted.
        #[arg(short, long)]
        password: Option<String>,
    },
    /// Forget the stored credential.
    Logout,
    /// Fetch one page of a resource, printed as JSON lines.
    Search {
        /// Resource name, e.g. content, rules, requests or honeypot.
        kind: String,
        /// Backend search expression, e.g. "port:8080 method:POST".
        #[arg(short, long, default_value = "")]
        query: String,
        #[arg(long, default_value_t = 0)]
        offset: i64,
        #[arg(long, default_value_t = 24)]
        limit: i64,
    },
    /// Export or import an application bundle.
    #[command(subcommand)]
    App(AppCommand),
    /// Stored whois information for an IP address.
    Whois { ip: String },
    /// Global backend statistics.
    Stats,
}

#[derive(Subcommand)]
enum AppCommand {
    /// Export an application with its rules and contents as JSON.
    Export {
        #[arg(long)]
        id: i64,
        /// Destination file; stdout when omitted.
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Import a previously exported bundle.
    Import {
        #[arg(short, long)]
        file: PathBuf,
    },
}

fn init_tracing(directives: Option<&str>) {
    let filter = match directives {
        Some(directives) => tracing_subscriber::EnvFilter::new(directives),
        None => tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "tarpit_client=info,tarpit_cli=info".into()),
    };

    // Log to stderr; stdout carries command output.
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log.as_deref());

    let mut config = ClientConfig::default();
    if let Some(server) = cli.server.clone().or_else(|| env::var("TARPIT_SERVER").ok()) {
        config = config.with_base_url(server);
    }
    if cli.insecure {
        config = config.with_accept_invalid_certs(true);
    }

    // Login and logout always manage the durable credential; an explicit
    // key only overrides it for the data commands.
    let explicit_key = cli
        .api_key
        .clone()
        .or_else(|| env::var("TARPIT_API_KEY").ok());
    let manages_credential = matches!(&cli.command, Command::Login { .. } | Command::Logout);
    let store: Arc<dyn CredentialStore> = match explicit_key {
        Some(key) if !manages_credential => Arc::new(MemoryCredentialStore::with_token(&key)),
        _ => Arc::new(FileCredentialStore::new()?),
    };

    let session = Arc::new(SessionService::new(store));
    session.initialize().await?;
    let client = ApiClient::with_config(config, session)?;

    match cli.command {
        Command::Login { user, password } => commands::login(&client, &user, password).await,
        Command::Logout => commands::logout(&client).await,
        Command::Search {
            kind,
            query,
            offset,
            limit,
        } => commands::search(&client, &kind, &query, offset, limit).await,
        Command::App(command) => match command {
            AppCommand::Export { id, out } => {
                commands::export_app(&client, id, out.as_deref()).await
            }
            AppCommand::Import { file } => commands::import_app(&client, &file).await,
        },
        Command::Whois { ip } => commands::whois(&client, &ip).await,
        Command::Stats => commands::stats(&client).await,
    }
}
