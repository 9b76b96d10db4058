use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use git_extended::artifacts::request::{
    BRANCH, COMMIT_MESSAGE, FILES, OPERATION, REMOTE, REPO_PATH, REPO_URL, TARGET, TARGET_PATH,
};
use git_extended::nodes::example::{NAME, REVERSE};
use git_extended::{
    BatchContext, Example, GitExtended, GitProcess, Operation, OutputItem, execute, nodes,
};
use is_terminal::IsTerminal;
use std::io::Read;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "git-extended",
    version = "0.1.0",
    about = "Run git commands as workflow node batches",
    long_about = "Runs the Git Extended and Example workflow nodes outside a workflow host. \
    Each item of a batch becomes exactly one git process, started with an explicit \
    argument vector and never through a shell. Output items are printed as JSON.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(
        long,
        global = true,
        default_value = "git",
        help = "The git executable to run"
    )]
    git_binary: PathBuf,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum NodeKind {
    Git,
    Example,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "run",
        about = "Run a node over a JSON batch",
        long_about = "This command reads a batch (node identity, parameters, items and \
        continueOnFail flag) as JSON from a file or stdin and runs the selected node over it."
    )]
    Run {
        #[arg(long, value_enum, help = "The node to run")]
        node: NodeKind,
        #[arg(short, long, help = "Batch file to read instead of stdin")]
        input: Option<PathBuf>,
        #[arg(long, help = "Record failed items instead of aborting")]
        continue_on_fail: bool,
    },
    #[command(
        name = "git",
        about = "Run a single git operation",
        long_about = "This command runs one git operation as a single-item batch. \
        Only the options relevant to the chosen operation are used."
    )]
    Git {
        #[arg(index = 1, help = "The operation to run (add, clone, commit, status, ...)")]
        operation: String,
        #[arg(long, default_value = ".", help = "Repository the command is scoped to")]
        repo_path: String,
        #[arg(long, help = "Repository to clone")]
        repo_url: Option<String>,
        #[arg(long, help = "Directory to clone into")]
        target_path: Option<String>,
        #[arg(long, help = "Files or patterns to add")]
        files: Option<String>,
        #[arg(short, long, help = "The commit message")]
        message: Option<String>,
        #[arg(long, help = "Remote name for push/pull")]
        remote: Option<String>,
        #[arg(long, help = "Branch name for push/pull")]
        branch: Option<String>,
        #[arg(long, help = "Branch or commit for switch/checkout/merge")]
        target: Option<String>,
    },
    #[command(
        name = "example",
        about = "Run the greeting example node",
        long_about = "This command prints the greeting produced by the Example node."
    )]
    Example {
        #[arg(long, help = "Name to include in the greeting")]
        name: Option<String>,
        #[arg(long, help = "Reverse the greeting text")]
        reverse: bool,
    },
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("git_extended=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_batch(input: Option<&PathBuf>) -> Result<BatchContext> {
    let raw = match input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read batch file {}", path.display()))?,
        None => {
            let mut raw = String::new();
            std::io::stdin()
                .read_to_string(&mut raw)
                .context("Failed to read batch from stdin")?;
            raw
        }
    };

    serde_json::from_str(&raw).context("Failed to parse batch JSON")
}

async fn run_node(kind: NodeKind, ctx: &BatchContext, git_binary: PathBuf) -> Result<Vec<OutputItem>> {
    let output = match kind {
        NodeKind::Git => execute(&GitExtended::new(GitProcess::new(git_binary)), ctx).await?,
        NodeKind::Example => execute(&Example, ctx).await?,
    };

    Ok(output)
}

fn print_output(output: &[OutputItem]) -> Result<()> {
    let rendered = serde_json::to_string_pretty(output).context("Failed to render output")?;
    println!("{rendered}");
    Ok(())
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Run {
            node,
            input,
            continue_on_fail,
        } => {
            let mut ctx = read_batch(input.as_ref())?;
            if continue_on_fail {
                ctx.continue_on_fail = true;
            }

            print_output(&run_node(node, &ctx, cli.git_binary).await?)
        }
        Commands::Git {
            operation,
            repo_path,
            repo_url,
            target_path,
            files,
            message,
            remote,
            branch,
            target,
        } => {
            let mut ctx = BatchContext::new(nodes::git_extended::NODE_NAME)
                .with_parameter(OPERATION, operation)
                .with_parameter(REPO_PATH, repo_path);
            let optional = [
                (REPO_URL, repo_url),
                (TARGET_PATH, target_path),
                (FILES, files),
                (COMMIT_MESSAGE, message),
                (REMOTE, remote),
                (BRANCH, branch),
                (TARGET, target),
            ];
            for (name, value) in optional {
                if let Some(value) = value {
                    ctx = ctx.with_parameter(name, value);
                }
            }

            print_output(&run_node(NodeKind::Git, &ctx, cli.git_binary).await?)
        }
        Commands::Example { name, reverse } => {
            let mut ctx =
                BatchContext::new(nodes::example::NODE_NAME).with_parameter(REVERSE, reverse);
            if let Some(name) = name {
                ctx = ctx.with_parameter(NAME, name);
            }

            print_output(&run_node(NodeKind::Example, &ctx, cli.git_binary).await?)
        }
    }
}

#[tokio::main]
async fn main() {
    init_tracing();
    tracing::debug!(operations = ?Operation::ALL, "git-extended starting");

    if let Err(error) = run(Cli::parse()).await {
        let message = format!("error: {error:#}");
        if std::io::stderr().is_terminal() {
            eprintln!("{}", message.red().bold());
        } else {
            eprintln!("{message}");
        }
        std::process::exit(1);
    }
}
