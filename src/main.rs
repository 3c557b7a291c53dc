mod commands;
mod gateway;

use clap::{Parser, Subcommand};
use codemedic_channels::telegram::TelegramChannel;
use codemedic_core::{classify, config, knowledge::KnowledgeBase};
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Parser)]
#[command(
    name = "codemedic",
    version,
    about = "CodeMedic — Telegram bot that diagnoses common programming errors"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to config file.
    #[arg(short, long, default_value = "config.toml")]
    config: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the bot.
    Start,
    /// Check configuration and channel readiness.
    Status,
    /// Run the classifier on a message and print the reply.
    Classify {
        /// The message to classify.
        #[arg(trailing_var_arg = true)]
        message: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Subscriber first: config::load logs a notice when the file is missing.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cfg = config::load(&cli.config)?;

    match cli.command {
        Commands::Start => {
            let kb = Arc::new(KnowledgeBase::builtin());

            let mut channels: HashMap<String, Arc<dyn codemedic_core::traits::Channel>> =
                HashMap::new();

            if let Some(ref tg) = cfg.channel.telegram {
                if tg.enabled {
                    if tg.bot_token.is_empty() {
                        anyhow::bail!(
                            "Telegram is enabled but bot_token is empty. \
                             Set it in config.toml or the TELEGRAM_BOT_TOKEN env var."
                        );
                    }
                    let channel = TelegramChannel::new(tg.clone());
                    channels.insert("telegram".to_string(), Arc::new(channel));
                }
            }

            if channels.is_empty() {
                anyhow::bail!("No channels enabled. Enable at least one channel in config.toml.");
            }

            println!("{} — starting...", cfg.medic.name);
            let gw = gateway::Gateway::new(channels, kb);
            gw.run().await?;
        }
        Commands::Status => {
            let kb = KnowledgeBase::builtin();
            println!("{} — Status Check\n", cfg.medic.name);
            println!("Config: {}", cli.config);
            println!("Log level: {}", cfg.medic.log_level);
            println!("Languages: {}", kb.supported_languages().join(", "));
            println!();

            if let Some(ref tg) = cfg.channel.telegram {
                println!(
                    "  telegram: {}",
                    if tg.enabled && !tg.bot_token.is_empty() {
                        "configured"
                    } else if tg.enabled {
                        "enabled but missing bot_token"
                    } else {
                        "disabled"
                    }
                );
            } else {
                println!("  telegram: not configured");
            }
        }
        Commands::Classify { message } => {
            if message.is_empty() {
                anyhow::bail!("no message provided. Usage: codemedic classify <message>");
            }

            let kb = KnowledgeBase::builtin();
            let text = message.join(" ");
            println!("{}", classify::respond(&text, &kb));
        }
    }

    Ok(())
}
