use anyhow::Context;
use notepad::kernel::event::{Event, NodeId, Notification};
use notepad::outputs::sfx::TracingPlayer;
use notepad::{NotepadConfig, Reactor, SpellData, SpellType};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

/// Parses one stdin line into a kernel event. Unknown lines are skipped with a warning.
fn parse_line(line: &str) -> Option<Event> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    if line.eq_ignore_ascii_case("clear") {
        return Some(Event::clear());
    }
    if let Some(rest) = line.strip_prefix("unlock ") {
        return match rest.parse::<SpellType>() {
            Ok(spell) => Some(Event::Unlock(spell)),
            Err(e) => {
                tracing::warn!("{}", e);
                None
            }
        };
    }
    match line.parse::<NodeId>() {
        Ok(node) => Some(Event::press(node)),
        Err(_) => {
            tracing::warn!("Unrecognized input: {:?}", line);
            None
        }
    }
}

fn demo_config() -> NotepadConfig {
    NotepadConfig {
        spells: vec![
            SpellData::new(SpellType::Fire, "19", true),
            SpellData::new(SpellType::Ice, "1239", true),
            SpellData::new(SpellType::Lightning, "1479", false),
        ],
        ..NotepadConfig::default()
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging/tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => NotepadConfig::from_path(&path).with_context(|| format!("loading {path}"))?,
        None => {
            tracing::info!("No config given; using demo spell book");
            demo_config()
        }
    };

    let mut reactor = Reactor::with_player(config, TracingPlayer).context("invalid notepad config")?;

    // Kernel Channel
    let (tx, rx) = mpsc::channel::<Event>(100);
    // Notification Channel
    let (notify_tx, mut notify_rx) = mpsc::channel::<Notification>(100);

    let shutdown = CancellationToken::new();

    let stdin_task = tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Ok(Some(line)) = lines.next_line().await {
            if let Some(event) = parse_line(&line) {
                if tx.send(event).await.is_err() {
                    break;
                }
            }
        }
    });

    let printer_task = tokio::spawn(async move {
        while let Some(notification) = notify_rx.recv().await {
            match serde_json::to_string(&notification) {
                Ok(line) => println!("{line}"),
                Err(e) => tracing::warn!("Failed to encode notification: {}", e),
            }
        }
    });

    let ctrl_c = shutdown.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            ctrl_c.cancel();
        }
    });

    tracing::info!("Notepad active. Type node ids, 'clear', or 'unlock <SPELL>'. Ctrl+C to stop.");
    reactor.run(rx, notify_tx, shutdown).await;

    stdin_task.abort();
    printer_task.await.context("notification printer panicked")?;

    let snap = reactor.telemetry.snapshot();
    tracing::info!(
        "Session: {} started, {} casts, {} failures, {} cleared, {} rejected presses",
        snap.capture_stats.started,
        snap.capture_stats.casts,
        snap.capture_stats.failures,
        snap.capture_stats.cleared,
        snap.rejection_stats.total()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_driver_commands() {
        assert_eq!(parse_line("3"), Some(Event::press(3)));
        assert_eq!(parse_line(" clear "), Some(Event::clear()));
        assert_eq!(parse_line("unlock fire"), Some(Event::Unlock(SpellType::Fire)));
        assert_eq!(parse_line("unlock dragon"), None);
        assert_eq!(parse_line("banana"), None);
        assert_eq!(parse_line(""), None);
    }
}
