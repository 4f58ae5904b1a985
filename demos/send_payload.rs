//! Send Payload: send one request to an A2UI agent and print what comes back.
//!
//! Each structured message is printed as one JSON line, ready to be piped
//! into a surface renderer. A summary goes to stderr.
//!
//! ```sh
//! cargo run --example send_payload -- http://localhost:10002 "Show me my open tickets"
//! cargo run --example send_payload -- http://localhost:10002 '{"userAction": {"name": "refresh"}}'
//! ```
//!
//! Set `A2UI_TOKEN` to send a bearer token.

use std::time::Duration;

use a2ui_client::builders::ClientBuilder;
use a2ui_client::config::PollPolicy;
use anyhow::{bail, Context, Result};

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so stdout stays machine-readable.
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let (Some(url), Some(payload)) = (args.next(), args.next()) else {
        bail!("usage: send_payload <agent-url> <text-or-json>");
    };

    let mut builder = ClientBuilder::new(url.clone())
        .with_timeout(Duration::from_secs(120))
        .with_poll_policy(PollPolicy {
            max_attempts: 10,
            delay: Duration::from_secs(1),
        });
    if let Ok(token) = std::env::var("A2UI_TOKEN") {
        builder = builder.with_bearer_token(token);
    }

    let client = builder
        .connect()
        .await
        .with_context(|| format!("failed to connect to {url}"))?;

    let outcome = client.send_detailed(payload).await.context("send failed")?;

    for message in &outcome.extraction.messages {
        println!("{}", serde_json::to_string(message)?);
    }

    if let Some(task) = &outcome.task {
        eprintln!("task {}: {}", task.id, task.status.state);
    }
    if let Some(polling) = &outcome.polling {
        eprintln!("polled {} time(s), {}", polling.attempts, polling.stop);
    }
    match outcome.extraction.source {
        Some(source) => eprintln!(
            "{} structured message(s) from the {}",
            outcome.extraction.messages.len(),
            source
        ),
        None => eprintln!("no structured messages"),
    }
    for text in &outcome.extraction.text {
        eprintln!("agent said: {text}");
    }

    Ok(())
}
