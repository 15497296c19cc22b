use anyhow::Result;
use clap::Parser;
use orchestrator_client::{
    ClientConfig, OrchestratorClient,
    commands::{self, SenderArgs},
};

/// orchestrator - talk to an agent orchestration service
///
/// Examples:
///   orchestrator --base-url http://localhost:3000 agents
///   orchestrator dispatch --agent planner "Draft a release plan"
#[derive(Parser, Debug)]
#[command(author, version = env!("ORCHESTRATOR_CLIENT_VERSION"), about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Orchestrator base URL (also via ORCHESTRATOR_URL)
    #[arg(long, env = "ORCHESTRATOR_URL", value_name = "URL", global = true)]
    base_url: Option<String>,

    /// Per-attempt request timeout in milliseconds
    #[arg(long, value_name = "MS", global = true)]
    timeout_ms: Option<u64>,

    /// Retry transient failures up to N times
    #[arg(long, value_name = "N", global = true)]
    max_retries: Option<u32>,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Send one or more messages and print the reply
    Dispatch(DispatchArgs),

    /// List available agents
    Agents,

    /// Show the orchestrator health report
    Health,
}

#[derive(clap::Args, Debug)]
struct DispatchArgs {
    /// Route to this agent instead of the default one
    #[arg(long, short = 'a')]
    agent: Option<String>,

    /// Sender id attached to every message
    #[arg(long, default_value = "cli")]
    sender: String,

    /// Sender display name
    #[arg(long)]
    sender_name: Option<String>,

    /// Message contents, sent in order
    #[arg(required = true, value_name = "CONTENT")]
    contents: Vec<String>,
}

impl Cli {
    fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.base_url.clone().unwrap_or_default(),
            timeout_millis: self.timeout_ms,
            max_retries: self.max_retries.map(i64::from),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let client = OrchestratorClient::new(cli.client_config())?;
    let mut out = std::io::stdout().lock();

    match cli.command {
        Commands::Dispatch(args) => {
            let sender = SenderArgs {
                id: args.sender,
                name: args.sender_name,
            };
            commands::dispatch(
                &client,
                &mut out,
                args.agent.as_deref(),
                &sender,
                &args.contents,
            )
            .await?
        }
        Commands::Agents => commands::agents(&client, &mut out).await?,
        Commands::Health => commands::health(&client, &mut out).await?,
    }
    Ok(())
}
