//! jsonlit CLI - inspect and validate embedded JSON from the command line.
//! jsonlit CLI - 在命令行中检查和验证嵌入式 JSON。

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use jsonlit_syntax::JsonOptions;
use tracing_subscriber::EnvFilter;

/// Main CLI structure.
/// 主 CLI 结构体。
#[derive(Parser)]
#[command(name = "jsonlit")]
#[command(author, version, about = "jsonlit - A lossless, error-tolerant JSON parser", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Grammar profile (loose, strict). / 语法配置（loose, strict）。
    #[arg(long, global = true, default_value_t = JsonOptions::Loose)]
    mode: JsonOptions,

    /// Shorthand for `--mode strict`. / `--mode strict` 的简写。
    #[arg(long, global = true)]
    strict: bool,

    /// Enable verbose output. / 启用详细输出。
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress output. / 抑制输出。
    #[arg(short, long, global = true)]
    quiet: bool,
}

/// Available CLI commands.
/// 可用的 CLI 命令。
#[derive(Subcommand)]
enum Commands {
    /// Report diagnostics for a file. / 报告文件的诊断信息。
    Check {
        /// The file to check, or `-` for stdin. / 要检查的文件，`-` 表示标准输入。
        file: String,

        /// Diagnostic output format. / 诊断输出格式。
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Print the syntax tree. / 打印语法树。
    Tree {
        /// The file to parse, or `-` for stdin. / 要解析的文件，`-` 表示标准输入。
        file: String,
    },

    /// Print every token with its span. / 打印每个 token 及其范围。
    Tokens {
        /// The file to parse, or `-` for stdin. / 要解析的文件，`-` 表示标准输入。
        file: String,
    },
}

/// Output format for `check`.
/// `check` 的输出格式。
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Main entry point.
/// 主入口点。
fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let options = if cli.strict {
        JsonOptions::Strict
    } else {
        cli.mode
    };
    let settings = commands::Settings {
        options,
        verbose: cli.verbose,
        quiet: cli.quiet,
    };

    let result = match cli.command {
        Commands::Check { file, format } => commands::check::run(&file, format, &settings),
        Commands::Tree { file } => commands::tree::run(&file, &settings),
        Commands::Tokens { file } => commands::tokens::run(&file, &settings),
    };

    if let Err(e) = result {
        if !cli.quiet {
            output::error(&e.to_string());
        }
        std::process::exit(1);
    }
}

/// Install the log subscriber. `RUST_LOG` wins over the verbosity flags.
/// 安装日志订阅器。`RUST_LOG` 优先于详细程度参数。
fn init_tracing(verbose: bool, quiet: bool) {
    let default_directive = if verbose {
        "info"
    } else if quiet {
        "error"
    } else {
        "warn"
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
