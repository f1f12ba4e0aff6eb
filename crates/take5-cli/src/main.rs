//! Take 5 CLI - Classify messages and talk to the chatbot
//!
//! `classify` runs offline against the same rules the server uses.

mod api;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;

use api::{ChatReply, Take5Client};
use take5::{explain, Intent, Message};

const DEFAULT_URL: &str = "http://localhost:5000";

#[derive(Parser)]
#[command(name = "take5")]
#[command(about = "Take 5 CLI - Classify messages and talk to the chatbot", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a message offline and show the deciding rule
    Classify {
        /// Message text
        message: String,
    },

    /// Send a message to the chatbot
    Chat {
        /// Message text
        message: String,
        /// Server base URL
        #[arg(short, long, env = "TAKE5_URL", default_value = DEFAULT_URL)]
        url: String,
    },

    /// Check the server is up
    Health {
        /// Server base URL
        #[arg(short, long, env = "TAKE5_URL", default_value = DEFAULT_URL)]
        url: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Classify { message } => cmd_classify(&message),
        Commands::Chat { message, url } => cmd_chat(&url, &message).await,
        Commands::Health { url } => cmd_health(&url).await,
    }
}

// ============================================
// Command Implementations
// ============================================

fn cmd_classify(raw: &str) -> Result<()> {
    let message = Message::parse(raw)?;
    let classification = explain(message.as_str());

    println!(
        "{} {}",
        intent_label(classification.intent),
        format!("({})", classification.rule).dimmed()
    );
    Ok(())
}

async fn cmd_chat(url: &str, raw: &str) -> Result<()> {
    if raw.trim().is_empty() {
        bail!("Message is required");
    }

    let client = Take5Client::new(url);
    let reply = client.chat(raw).await?;

    println!("{}", render_reply(&reply));
    Ok(())
}

fn render_reply(reply: &ChatReply) -> String {
    let label = match reply.response_type.parse::<Intent>() {
        Ok(intent) => intent_label(intent),
        Err(_) => reply.response_type.normal(),
    };
    format!("{}\n{}", label, reply.response)
}

async fn cmd_health(url: &str) -> Result<()> {
    let client = Take5Client::new(url);
    print!("Checking {}... ", url);

    match client.health().await {
        Ok(health) => {
            println!("{}", "OK".green());
            println!("  {} {}", health.app.bold(), health.status.dimmed());
            Ok(())
        }
        Err(e) => {
            println!("{}", "Failed".red());
            Err(e)
        }
    }
}

fn intent_label(intent: Intent) -> colored::ColoredString {
    match intent {
        Intent::Emotional => intent.as_str().yellow().bold(),
        Intent::Practical => intent.as_str().cyan().bold(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_reply_shows_type_and_text() {
        let reply = ChatReply {
            response: "Call 911.".to_string(),
            response_type: "practical".to_string(),
        };

        let rendered = render_reply(&reply);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("practical"));
        assert_eq!(lines[1], "Call 911.");
    }
}
