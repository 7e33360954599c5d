use anyhow::{Context, Result};
use carepoint_auth::{create_access_token, verify_token};
use carepoint_cli::args::RoleArg;
use carepoint_cli::report;
use carepoint_config::JwtConfig;
use carepoint_models::{CenterId, Principal, UserId};
use carepoint_observability::init_basic_console_logging;
use carepoint_session::{FileSessionStorage, SessionConfig, SessionStore};
use clap::{Parser, Subcommand};
use dialoguer::Input;
use dotenvy::dotenv;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "carepoint-cli")]
#[command(about = "Carepoint CLI - Access decisions and local sessions", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every role with its rank
    Roles,
    /// Show the permission set derived from a role and center
    Permissions {
        #[arg(short = 'u', long)]
        user_type: RoleArg,

        #[arg(short = 'c', long)]
        center_id: Option<i64>,
    },
    /// Decide whether a role may open a dashboard path
    CheckPath {
        #[arg(short = 'u', long)]
        user_type: RoleArg,

        /// Dashboard path, e.g. /admin/users
        path: String,
    },
    /// Decide whether a role may access another center
    CheckCenter {
        #[arg(short = 'u', long)]
        user_type: RoleArg,

        #[arg(long)]
        own_center: Option<i64>,

        #[arg(long)]
        target_center: i64,
    },
    /// Decide whether one principal may manage another
    CheckPrincipal {
        #[arg(long)]
        actor: RoleArg,

        #[arg(long)]
        actor_center: Option<i64>,

        #[arg(long)]
        target: RoleArg,

        #[arg(long)]
        target_center: Option<i64>,
    },
    /// Issue a signed access token for local development
    IssueToken {
        #[arg(short = 'u', long)]
        user_type: RoleArg,

        #[arg(short = 'c', long)]
        center_id: Option<i64>,

        #[arg(long)]
        user_id: Option<i64>,

        /// Email address (prompted if not provided)
        #[arg(short = 'e', long)]
        email: Option<String>,
    },
    /// Store a session from an access token
    Login {
        #[arg(short = 't', long)]
        token: String,
    },
    /// Show the signed-in principal and its permissions
    Whoami,
    /// Clear the stored session
    Logout,
}

#[tokio::main]
async fn main() {
    dotenv().ok();
    init_basic_console_logging();

    let cli = Cli::parse();

    if let Err(e) = run(cli.command).await {
        eprintln!("\n❌ {:#}", e);
        std::process::exit(1);
    }
}

async fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Roles => print!("{}", report::render_role_table()),
        Commands::Permissions {
            user_type,
            center_id,
        } => {
            warn_if_unrecognised(&user_type);
            print!(
                "{}",
                report::render_permissions(user_type.role, center_id.map(CenterId::new))
            );
        }
        Commands::CheckPath { user_type, path } => {
            warn_if_unrecognised(&user_type);
            print!("{}", report::render_path_check(user_type.role, &path));
        }
        Commands::CheckCenter {
            user_type,
            own_center,
            target_center,
        } => {
            warn_if_unrecognised(&user_type);
            print!(
                "{}",
                report::render_center_check(
                    user_type.role,
                    own_center.map(CenterId::new),
                    Some(CenterId::new(target_center)),
                )
            );
        }
        Commands::CheckPrincipal {
            actor,
            actor_center,
            target,
            target_center,
        } => {
            warn_if_unrecognised(&actor);
            warn_if_unrecognised(&target);
            let actor = Principal::new(actor.role, actor_center.map(CenterId::new));
            let target = Principal::new(target.role, target_center.map(CenterId::new));
            print!("{}", report::render_manage_check(&actor, &target));
        }
        Commands::IssueToken {
            user_type,
            center_id,
            user_id,
            email,
        } => handle_issue_token(user_type, center_id, user_id, email)?,
        Commands::Login { token } => handle_login(&token).await?,
        Commands::Whoami => handle_whoami().await?,
        Commands::Logout => {
            session_store().sign_out().await?;
            println!("✅ Signed out");
        }
    }

    Ok(())
}

fn warn_if_unrecognised(arg: &RoleArg) {
    if !arg.is_recognised() {
        warn!(role = %arg.raw, "Unknown role, evaluating as no role");
    }
}

fn session_store() -> SessionStore<FileSessionStorage> {
    SessionStore::new(FileSessionStorage::new(SessionConfig::from_env().file))
}

fn handle_issue_token(
    user_type: RoleArg,
    center_id: Option<i64>,
    user_id: Option<i64>,
    email: Option<String>,
) -> Result<()> {
    warn_if_unrecognised(&user_type);

    let email = match email {
        Some(email) => email,
        None => Input::new()
            .with_prompt("Email address")
            .interact_text()
            .context("Failed to read email")?,
    };

    let mut principal =
        Principal::new(user_type.role, center_id.map(CenterId::new)).with_email(email);
    if let Some(id) = user_id {
        principal = principal.with_id(UserId::new(id));
    }

    let token = create_access_token(&principal, &JwtConfig::from_env())
        .map_err(|e| anyhow::anyhow!("Failed to issue token: {}", e.error))?;
    info!(user_type = ?principal.user_type, center_id = ?principal.center_id, "Issued access token");

    println!("{}", token);
    Ok(())
}

async fn handle_login(token: &str) -> Result<()> {
    let claims = verify_token(token, &JwtConfig::from_env())
        .map_err(|e| anyhow::anyhow!("Token rejected: {}", e.error))?;
    let principal = claims.principal();

    let session = session_store()
        .sign_in(token.to_string(), principal)
        .await
        .context("Failed to store session")?;

    println!("✅ Signed in");
    print!(
        "{}",
        report::render_permissions(session.principal.user_type, session.principal.center_id)
    );
    Ok(())
}

async fn handle_whoami() -> Result<()> {
    let store = session_store();
    if store.hydrate().await?.is_none() {
        println!("Not signed in");
        return Ok(());
    }

    let session = store
        .current()
        .await
        .context("Session disappeared after loading")?;
    println!("{}", serde_json::to_string_pretty(&session)?);
    Ok(())
}
