use std::sync::Arc;

use async_channel::{Receiver, Sender};
use tokio::io::{AsyncBufReadExt, BufReader};

use quickroutes::app::{command, serve, Event, Notice, View};
use quickroutes::config::Config;
use quickroutes::db::SqliteStore;
use quickroutes::engine::{Engine, LANGUAGE};
use quickroutes::error::Error;
use quickroutes::external::{nominatim, opener::SystemOpener};

async fn read_commands(events: Sender<Event>) {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(err) => {
                tracing::error!("failed to read stdin: {:?}", err);
                break;
            }
        };

        if line.trim().is_empty() {
            continue;
        }

        match command::parse(&line) {
            Ok(Event::Quit) => break,
            Ok(event) => {
                if events.send(event).await.is_err() {
                    break;
                }
            }
            Err(_) => println!("? unrecognised command: {}", line.trim()),
        }
    }

    events.send(Event::Quit).await.ok();
}

fn print_view(view: &View) {
    println!();
    println!("Quick Routes [{:?}]{}", view.selection, if view.pending { " (saving)" } else { "" });

    for (i, shortcut) in view.shortcuts.iter().enumerate() {
        println!("  {}. {}  {} -> {}", i, shortcut.name, shortcut.pickup, shortcut.dropoff);
    }

    let draft = &view.draft;
    println!("  draft: name={:?} pickup={:?} dropoff={:?}", draft.name, draft.pickup, draft.dropoff);

    for (label, query) in [("pickup", &draft.pickup_query), ("dropoff", &draft.dropoff_query)] {
        for (i, suggestion) in query.suggestions.iter().enumerate() {
            println!("    {} {}: {}", label, i, suggestion.label);
        }
    }
}

async fn print_notices(notices: Receiver<Notice>) {
    while let Ok(notice) = notices.recv().await {
        match notice {
            Notice::Render(view) => print_view(&view),
            Notice::Alert { title, message } => println!("! {}: {}", title, message),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let config = Config::from_env()?;

    let store = SqliteStore::new(&config.database_url, 1).await?;
    let geocoder = nominatim::Client::new(&config.geocoder_base, &config.user_agent, LANGUAGE)?;

    let (engine, resolutions) = Engine::new(
        Arc::new(store),
        geocoder,
        Arc::new(SystemOpener),
        config.debounce,
    );

    let (event_tx, event_rx) = async_channel::unbounded();
    let (notice_tx, notice_rx) = async_channel::unbounded();

    tokio::spawn(read_commands(event_tx));

    tokio::join!(
        serve(engine, resolutions, event_rx, notice_tx),
        print_notices(notice_rx),
    );

    Ok(())
}
