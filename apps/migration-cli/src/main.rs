use ant_backend::config::db::{DbOwner, DbProfile};
use ant_backend::infra::db::connect_db;
use clap::{Parser, ValueEnum};
use migration::{count_applied_migrations, migrate, MigrationCommand};

#[derive(Clone, ValueEnum)]
enum Command {
    Up,
    Down,
    Fresh,
    Reset,
    Refresh,
    Status,
}

#[derive(Clone, ValueEnum)]
enum Env {
    Prod,
    Test,
}

#[derive(Parser)]
#[command(name = "migration-cli")]
#[command(about = "ANT simulator database migration tool")]
struct Args {
    /// Migration command to run
    #[arg(value_enum)]
    command: Command,

    /// Which database to migrate
    #[arg(short, long, value_enum, default_value = "test")]
    env: Env,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stdout)
        .without_time()
        .with_target(false)
        .with_env_filter("migration=info,sqlx=warn")
        .init();

    let args = Args::parse();

    let command = match args.command {
        Command::Up => MigrationCommand::Up,
        Command::Down => MigrationCommand::Down,
        Command::Fresh => MigrationCommand::Fresh,
        Command::Reset => MigrationCommand::Reset,
        Command::Refresh => MigrationCommand::Refresh,
        Command::Status => MigrationCommand::Status,
    };

    let profile = match args.env {
        Env::Prod => DbProfile::Prod,
        Env::Test => DbProfile::Test,
    };

    // Schema changes run as the owner role, never the app role.
    let conn = match connect_db(profile, DbOwner::Owner).await {
        Ok(conn) => conn,
        Err(e) => {
            eprintln!("❌ Could not connect: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = migrate(&conn, command).await {
        eprintln!("❌ Migration failed: {e}");
        std::process::exit(1);
    }

    match count_applied_migrations(&conn).await {
        Ok(n) => tracing::info!(applied = n, "migrations applied"),
        Err(e) => tracing::warn!(error = %e, "could not count applied migrations"),
    }
}
