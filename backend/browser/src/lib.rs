//! # Browser
//!
//! Terminal client for the recipe finder API.
//!
//! Fetches the whole catalog on startup, then reads commands from stdin: every
//! `search` issues a new request, `open`/`close` switch between the list and a
//! recipe's detail view. See [`command::HELP`].
//!
//! Requests run on their own tasks and report back over a channel, so a new
//! search can be typed while an older one is still in flight. Late answers
//! are sorted out by [`session::Session`].
//!
//! ```sh
//! cargo run -p browser -- --api-url http://localhost:3001/api/v1/recipes
//! ```
use std::sync::Arc;

use bank::recipes::Recipe;
use tokio::{
    io::{AsyncBufReadExt, BufReader, stdin},
    sync::mpsc::{UnboundedSender, unbounded_channel},
};
use tracing::{debug, info};

pub mod api;
pub mod command;
pub mod render;
pub mod session;

use api::{FetchError, RecipeApi};
use command::{Command, HELP};
use render::render;
use session::{Outcome, Session, Ticket};

type Response = (Ticket, Result<Vec<Recipe>, FetchError>);

pub async fn run(api: RecipeApi) -> anyhow::Result<()> {
    info!("Browsing {}", api.url());

    let api = Arc::new(api);
    let (tx, mut rx) = unbounded_channel::<Response>();
    let mut session = Session::default();
    let mut lines = BufReader::new(stdin()).lines();

    search(&api, &tx, &mut session, "");
    println!("{}\n\n{HELP}", render(&session));

    loop {
        tokio::select! {
            Some((ticket, result)) = rx.recv() => {
                match session.finish(ticket, result) {
                    Outcome::Applied => println!("\n{}", render(&session)),
                    Outcome::Stale => debug!("Dropped stale response {ticket:?}"),
                }
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };

                match Command::parse(&line) {
                    Ok(Command::Search(term)) => search(&api, &tx, &mut session, &term),
                    Ok(Command::Refresh) => {
                        let term = session.search_term().to_string();
                        search(&api, &tx, &mut session, &term);
                    }
                    Ok(Command::Open(id)) => {
                        if session.select(id).is_none() {
                            println!("No recipe {id} in the current list");
                            continue;
                        }
                    }
                    Ok(Command::Close) => session.close(),
                    Ok(Command::Help) => {
                        println!("{HELP}");
                        continue;
                    }
                    Ok(Command::Quit) => break,
                    Err(e) => {
                        println!("{e}");
                        continue;
                    }
                }

                println!("\n{}", render(&session));
            }
        }
    }

    info!("Bye");

    Ok(())
}

fn search(api: &Arc<RecipeApi>, tx: &UnboundedSender<Response>, session: &mut Session, term: &str) {
    let ticket = session.begin(term);
    let api = api.clone();
    let tx = tx.clone();
    let term = term.to_string();

    debug!("Fetching {ticket:?} for {term:?}");
    tokio::spawn(async move {
        let result = api.fetch(&term).await;
        if tx.send((ticket, result)).is_err() {
            debug!("Browser closed before {ticket:?} returned");
        }
    });
}
