//! GeoScene 命令行入口
//!
//! 读取场景文档，把位置属性中的构造表达式解析为数值后写回。

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use geoscene_core::config::ResolverConfig;
use geoscene_core::registry::{Construction, Evaluator};
use geoscene_core::resolver::SceneResolver;
use geoscene_file::{load_config, load_scene, save_scene, DEFAULT_INPUT, DEFAULT_OUTPUT};

#[derive(Parser)]
#[command(name = "geoscene", version)]
#[command(about = "Resolve geometric construction expressions in scene documents")]
struct Cli {
    /// 输出调试日志
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve every position attribute of a scene document
    Resolve {
        #[arg(long, default_value = DEFAULT_INPUT)]
        input: PathBuf,
        #[arg(long, default_value = DEFAULT_OUTPUT)]
        output: PathBuf,
        /// Resolver config (JSON)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Resolve entities in parallel
        #[arg(long)]
        parallel: bool,
    },
    /// Evaluate a single construction call and print the result
    Eval {
        call: String,
    },
    /// List the available constructions
    Functions,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // 初始化日志（写到 stderr，stdout 只留给结果）
    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing::subscriber::set_global_default(
        FmtSubscriber::builder()
            .with_max_level(level)
            .with_writer(std::io::stderr)
            .finish(),
    )?;

    match cli.command {
        Command::Resolve {
            input,
            output,
            config,
            parallel,
        } => resolve(input, output, config, parallel),
        Command::Eval { call } => eval(&call),
        Command::Functions => {
            for construction in Construction::ALL {
                println!("{}", construction.signature());
                for alias in construction.aliases() {
                    println!("  alias: {}", alias);
                }
            }
            Ok(())
        }
    }
}

fn resolve(input: PathBuf, output: PathBuf, config: Option<PathBuf>, parallel: bool) -> Result<()> {
    let mut resolver_config = match &config {
        Some(path) => load_config(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => ResolverConfig::default(),
    };
    if parallel {
        resolver_config.parallel = true;
    }

    let mut document = load_scene(&input)
        .with_context(|| format!("failed to load scene {}", input.display()))?;

    let report = SceneResolver::new(resolver_config).resolve(&mut document);

    save_scene(&document, &output)
        .with_context(|| format!("failed to save scene {}", output.display()))?;

    info!(
        "Resolved {} values ({} unresolved), saved to {}",
        report.resolved,
        report.unresolved,
        output.display()
    );
    Ok(())
}

fn eval(call: &str) -> Result<()> {
    let value = Evaluator::default()
        .evaluate(call)
        .with_context(|| format!("could not evaluate `{}`", call))?;
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}
