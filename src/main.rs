use clap::Parser;
use showcase_admin::cli::{self, Cli, Commands, Console};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "showcase_admin=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let home = cli.home.as_deref();

    let command = match cli.command {
        Some(Commands::Config { command }) => {
            return cli::config::run(home, command).await;
        }
        Some(command) => command,
        None => {
            // No subcommand provided, print help
            use clap::CommandFactory;
            Cli::command().print_help()?;
            return Ok(());
        }
    };

    let mut console = Console::open(home, cli.api_url.as_deref())?;

    let result = match command {
        Commands::Login { username, password } => {
            cli::auth::login(&mut console, username, password).await
        }
        Commands::Logout => cli::auth::logout(&mut console).await,
        Commands::Whoami => cli::auth::whoami(&mut console).await,
        Commands::Dashboard => cli::dashboard::run(&mut console).await,
        Commands::Projects { command } => cli::projects::run(&mut console, command).await,
        Commands::Categories { command } => cli::categories::run(&mut console, command).await,
        Commands::Videos { command } => cli::videos::run(&mut console, command).await,
        Commands::Upload { command } => cli::upload::run(&mut console, command).await,
        Commands::Config { .. } => Ok(()),
    };

    console.finish();
    result
}
