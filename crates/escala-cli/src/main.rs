mod commands;
mod config;
mod output;
mod server;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "escala",
    version,
    about = "Compare two crew roster (escala) PDFs day by day"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log level used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    log_json: bool,
}

/// PDF text extraction backend.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum Backend {
    /// poppler's pdftotext (must be installed)
    #[default]
    Pdftotext,
    /// In-process pdf-extract
    #[cfg(feature = "pdf-extract")]
    PdfExtract,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract one roster and print what was found
    Parse {
        /// Path to roster PDF
        input_file: PathBuf,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Write parsed output to a JSON file
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,

        #[arg(long, value_enum, default_value_t = Backend::default())]
        backend: Backend,

        /// Run pdftotext in -layout mode
        #[arg(long)]
        layout: bool,
    },
    /// Compare two roster PDFs
    Compare {
        /// Left roster PDF
        left: PathBuf,

        /// Right roster PDF
        right: PathBuf,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Only show days in the reference month
        #[arg(long)]
        filter_month: bool,

        #[arg(long, value_enum, default_value_t = Backend::default())]
        backend: Backend,

        /// Run pdftotext in -layout mode
        #[arg(long)]
        layout: bool,
    },
    /// Serve the comparison endpoint over HTTP
    Serve {
        /// TOML config file
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Bind host
        #[arg(long)]
        host: Option<String>,

        /// Bind port
        #[arg(short, long, env = "PORT")]
        port: Option<u16>,

        /// Directory served at / (index.html)
        #[arg(long, value_name = "DIR")]
        static_dir: Option<PathBuf>,

        /// Only return days in the reference month
        #[arg(long)]
        filter_month: bool,

        /// Maximum request body size in bytes
        #[arg(long)]
        max_upload_bytes: Option<usize>,

        #[arg(long, value_enum, default_value_t = Backend::default())]
        backend: Backend,

        /// Run pdftotext in -layout mode
        #[arg(long)]
        layout: bool,
    },
}

fn init_tracing(level: &str, json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    let registry = tracing_subscriber::registry().with(filter);
    // stderr keeps stdout clean for --output json
    if json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(&cli.log_level, cli.log_json);

    let result = match cli.command {
        Commands::Parse {
            input_file,
            output,
            out,
            backend,
            layout,
        } => commands::parse::run(input_file, &output, out, commands::extractor(backend, layout)),
        Commands::Compare {
            left,
            right,
            output,
            filter_month,
            backend,
            layout,
        } => commands::compare::run(
            left,
            right,
            &output,
            filter_month,
            commands::extractor(backend, layout),
        ),
        Commands::Serve {
            config,
            host,
            port,
            static_dir,
            filter_month,
            max_upload_bytes,
            backend,
            layout,
        } => commands::serve::run(
            config,
            config::ServeOverrides {
                host,
                port,
                static_dir,
                filter_to_reference_month: filter_month,
                max_upload_bytes,
                layout,
            },
            backend,
        ),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
