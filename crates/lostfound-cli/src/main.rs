// Rust guideline compliant 2026-10-19

//! Lostfound CLI Application
//!
//! Command-line front end for reviewing lost & found reports.

use clap::Parser;
use lostfound_app::WorkspaceContext;
use lostfound_cli::commands::dashboard::FilterArgs;
use lostfound_cli::commands::report::ReportArgs;
use lostfound_cli::context::apply_overrides;
use lostfound_cli::logging::init_tracing;
use lostfound_cli::{commands, create_formatter, should_use_color, CommandContext, Tab};
use lostfound_core::{ItemId, ItemKind, OutputFormat as ConfigFormat};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "lostfound",
    version,
    about = "Lost & found admin console",
    long_about = "Reviews visitor reports of lost and found items: syncs the admin listing, filters it locally, and approves, rejects, or marks items as claimed.",
    after_help = "Examples:\n  lostfound init\n  lostfound login --username admin\n  lostfound dashboard --tab pending --search wallet\n  lostfound dashboard --type lost --time week\n  lostfound approve 9\n  lostfound claim 20 --by \"Sam Lee\"\n  lostfound public found --search umbrella\n"
)]
struct Cli {
    /// Enable JSON output
    #[arg(long, global = true)]
    json: bool,

    /// Output format
    #[arg(long, value_enum, global = true)]
    format: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Workspace root (defaults to the current directory)
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    /// Backend base URL
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Records per admin listing page
    #[arg(long, global = true)]
    page_size: Option<u32>,

    /// Log level (error, warn, info, debug)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Write JSON logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    Json,
    Table,
    Plain,
}

impl From<OutputFormat> for ConfigFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Json => ConfigFormat::Json,
            OutputFormat::Table => ConfigFormat::Table,
            OutputFormat::Plain => ConfigFormat::Plain,
        }
    }
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum Board {
    Found,
    Lost,
}

impl From<Board> for ItemKind {
    fn from(board: Board) -> Self {
        match board {
            Board::Found => ItemKind::Found,
            Board::Lost => ItemKind::Lost,
        }
    }
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Initialize a workspace in the current directory
    Init,

    /// Log in as an admin and store the session
    Login {
        /// Admin user name
        #[arg(long)]
        username: String,

        /// Password (read from stdin when omitted)
        #[arg(long)]
        password: Option<String>,
    },

    /// Forget the stored session
    Logout,

    /// Sync and show the review dashboard
    Dashboard {
        /// Partitions to show
        #[arg(long, value_enum, default_value = "all")]
        tab: Tab,

        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Sync and show the dashboard counters
    Stats {
        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Publish a pending item
    Approve {
        /// Item id
        id: ItemId,
    },

    /// Reject a pending item
    Reject {
        /// Item id
        id: ItemId,
    },

    /// Mark a published item as claimed
    Claim {
        /// Item id
        id: ItemId,

        /// Name of the person collecting the item
        #[arg(long = "by")]
        claimed_by: String,
    },

    /// Browse the public boards
    Public {
        /// Which board
        #[arg(value_enum)]
        board: Board,

        /// Case-insensitive match on name or description
        #[arg(long)]
        search: Option<String>,
    },

    /// Submit a lost or found report
    Report {
        /// Report type
        #[arg(value_enum)]
        board: Board,

        #[command(flatten)]
        fields: ReportArgs,
    },

    /// Upload an image and print its id
    Upload {
        /// Image file
        path: PathBuf,
    },

    /// Download an uploaded image
    File {
        /// File id
        id: String,

        /// Fetch the original instead of the thumbnail
        #[arg(long)]
        original: bool,

        /// Destination path
        #[arg(short, long)]
        output: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    let use_color = !cli.no_color && should_use_color();

    let workspace = WorkspaceContext::discover(cli.root.as_deref());
    let config_format = workspace
        .as_ref()
        .ok()
        .and_then(|workspace| workspace.load_config().ok())
        .map(|config| config.output_format);
    let format = match (cli.format, cli.json) {
        (Some(format), _) => format.into(),
        (None, true) => ConfigFormat::Json,
        (None, false) => config_format.unwrap_or_default(),
    };

    if let Err(err) = run(cli, workspace, format, use_color) {
        let formatter = create_formatter(format, use_color);
        let rendered = formatter.format_error(&err);
        if format == ConfigFormat::Json {
            println!("{}", rendered);
        } else {
            eprintln!("{}", rendered);
        }
        std::process::exit(1);
    }
}

fn run(
    cli: Cli,
    workspace: lostfound_app::Result<WorkspaceContext>,
    format: ConfigFormat,
    use_color: bool,
) -> anyhow::Result<()> {
    let command = match cli.command {
        Some(Commands::Init) => {
            let _guard = init_tracing(cli.log_level.as_deref().unwrap_or("warn"), cli.log_file.as_deref())?;
            return commands::init::execute(cli.root.as_deref(), use_color);
        }
        Some(command) => command,
        None => {
            println!("Use --help for usage information");
            return Ok(());
        }
    };

    let workspace = workspace?;
    let config = apply_overrides(
        workspace.load_config()?,
        cli.base_url,
        cli.page_size,
        cli.log_level,
    )?;
    let _guard = init_tracing(&config.log_level, cli.log_file.as_deref())?;

    let ctx = CommandContext::new(
        workspace,
        config,
        create_formatter(format, use_color),
        format == ConfigFormat::Json,
        use_color,
    );

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async {
        match command {
            Commands::Init => Ok(()),
            Commands::Login { username, password } => {
                commands::auth::login(&ctx, &username, password).await
            }
            Commands::Logout => commands::auth::logout(&ctx),
            Commands::Dashboard { tab, filters } => {
                commands::dashboard::execute(&ctx, &filters, tab).await
            }
            Commands::Stats { filters } => commands::dashboard::stats(&ctx, &filters).await,
            Commands::Approve { id } => commands::review::approve(&ctx, id).await,
            Commands::Reject { id } => commands::review::reject(&ctx, id).await,
            Commands::Claim { id, claimed_by } => {
                commands::review::claim(&ctx, id, &claimed_by).await
            }
            Commands::Public { board, search } => {
                commands::public::execute(&ctx, board.into(), search.as_deref()).await
            }
            Commands::Report { board, fields } => {
                commands::report::execute(&ctx, board.into(), fields).await
            }
            Commands::Upload { path } => commands::files::upload(&ctx, &path).await,
            Commands::File {
                id,
                original,
                output,
            } => commands::files::download(&ctx, &id, original, &output).await,
        }
    })
}
