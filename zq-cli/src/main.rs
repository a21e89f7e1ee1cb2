use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser, Debug)]
#[command(name = "zq")]
#[command(about = "zq - query and ingest client for ZincSearch")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug)]
struct ConnectArgs {
    /// ZincSearch base URL
    #[arg(long, default_value = "http://localhost:4080")]
    url: String,

    /// Basic auth username
    #[arg(long, default_value = "admin")]
    user: String,

    /// Basic auth password
    #[arg(long, env = "ZINC_API_PWD", hide_env_values = true)]
    password: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a search against an index and print the response body
    Search {
        #[command(flatten)]
        connect: ConnectArgs,

        /// Index name (without the year-month prefix)
        #[arg(short, long)]
        index: String,

        /// Query-string filter expression, e.g. 'LzHouston:>100'
        #[arg(short, long)]
        term: String,

        /// Sort fields, prefix with '-' for descending (repeatable)
        #[arg(short, long, default_value = "-@timestamp")]
        sort: Vec<String>,

        /// Starting offset
        #[arg(long, default_value = "0")]
        from: usize,

        /// Maximum number of results
        #[arg(long, default_value = "100")]
        limit: usize,

        /// Aggregations as NAME=TYPE:FIELD, e.g. max_SPP=max:LzHouston (repeatable)
        #[arg(short, long)]
        agg: Vec<String>,

        /// Fields to include in hits (default: none)
        #[arg(long)]
        source: Vec<String>,

        /// Re-parse the response and pretty-print with 4-space indent
        #[arg(short, long)]
        pretty: bool,

        /// Use the index name as-is instead of prefixing the current year-month
        #[arg(long)]
        no_monthly_prefix: bool,
    },

    /// Read JSONL documents and send them to the bulk endpoint
    Ingest {
        #[command(flatten)]
        connect: ConnectArgs,

        /// Index name (without the year-month prefix)
        #[arg(short, long)]
        index: String,

        /// Input JSONL file; reads stdin when omitted
        #[arg(short = 'f', long)]
        input: Option<String>,

        /// Documents per bulk request
        #[arg(long, default_value = "100")]
        batch_size: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Search {
            connect,
            index,
            term,
            sort,
            from,
            limit,
            agg,
            source,
            pretty,
            no_monthly_prefix,
        } => {
            commands::run_search(commands::SearchOpts {
                url: connect.url,
                user: connect.user,
                password: connect.password,
                index,
                term,
                sort,
                from,
                limit,
                agg_specs: agg,
                source,
                pretty,
                monthly_prefix: !no_monthly_prefix,
            })
            .await
        }
        Commands::Ingest {
            connect,
            index,
            input,
            batch_size,
        } => {
            commands::run_ingest(
                &connect.url,
                &connect.user,
                &connect.password,
                &index,
                input.as_deref(),
                batch_size,
            )
            .await
        }
    }
}
