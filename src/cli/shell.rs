//! Interactive shell
//!
//! Line loop dispatching user intents into the application state: plain
//! text becomes a chat turn, slash commands cover everything else.

use std::io::Write;

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::core::AppState;
use crate::ui;

const HELP: &str = "\
commands:
  <text>            ask the assistant about your database
  /sql <statement>  run a SQL statement directly
  /approve [n]      approve a proposed query (default: latest pending)
  /reject [n]       reject a proposed query (default: latest pending)
  /schema           show the connected schema and dialect
  /connect <uri>    connect to a different database
  /help             show this help
  /quit             exit";

pub async fn run(state: &mut AppState, database_uri: Option<String>) -> Result<()> {
    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();

    println!("dbpilot — type a question, /help for commands");

    if let Some(uri) = database_uri {
        connect(state, &uri).await;
    }

    // Dialog stays up until a connection succeeds
    while !state.connection.is_connected() {
        prompt("database URI> ")?;
        let Some(line) = lines.next_line().await? else {
            return Ok(());
        };
        let uri = line.trim();
        if uri.is_empty() {
            continue;
        }
        if uri == "/quit" || uri == "/exit" {
            return Ok(());
        }
        connect(state, uri).await;
    }

    loop {
        prompt("dbpilot> ")?;
        let Some(line) = lines.next_line().await? else {
            break;
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(rest) = line.strip_prefix('/') {
            let (command, arg) = match rest.split_once(char::is_whitespace) {
                Some((command, arg)) => (command, arg.trim()),
                None => (rest, ""),
            };
            match command {
                "quit" | "exit" => break,
                "help" => println!("{HELP}"),
                "connect" => {
                    if arg.is_empty() {
                        println!("usage: /connect <uri>");
                    } else {
                        connect(state, arg).await;
                    }
                }
                "schema" => println!(
                    "{}",
                    ui::render_schema(state.connection.schema(), state.connection.dialect())
                ),
                "sql" => run_sql(state, arg).await,
                "approve" => decide(state, arg, true).await,
                "reject" => decide(state, arg, false).await,
                other => println!("unknown command: /{other} (try /help)"),
            }
        } else {
            send(state, line).await;
        }
    }

    Ok(())
}

fn prompt(text: &str) -> Result<()> {
    print!("{text}");
    std::io::stdout().flush()?;
    Ok(())
}

async fn connect(state: &mut AppState, uri: &str) {
    match state.connect(uri).await {
        Ok(info) => {
            println!("{}", info.message);
            println!("dialect: {}, {} tables", info.dialect, info.schema.len());
        }
        Err(err) => println!("connection failed: {err}"),
    }
}

async fn send(state: &mut AppState, text: &str) {
    match state.send_message(text).await {
        Ok(()) => {
            if let Some(reply) = state.conversation.history().last() {
                println!("{}", ui::render_message(reply));
            }
            if state.conversation.latest_pending().is_some() {
                println!("(/approve to run it, /reject to discard)");
            }
        }
        Err(err) => println!("{err}"),
    }
}

async fn run_sql(state: &mut AppState, sql: &str) {
    if sql.is_empty() {
        println!("usage: /sql <statement>");
        return;
    }
    match state.run_query(sql).await {
        Ok(()) => println!("{}", ui::render_table(state.query.rows())),
        Err(err) => println!("query failed: {err}"),
    }
}

async fn decide(state: &mut AppState, arg: &str, approve: bool) {
    let index = if arg.is_empty() {
        match state.conversation.latest_pending() {
            Some(index) => index,
            None => {
                println!("nothing awaiting approval");
                return;
            }
        }
    } else {
        match arg.parse() {
            Ok(index) => index,
            Err(_) => {
                println!("usage: /approve [index]");
                return;
            }
        }
    };

    let outcome = if approve {
        state.approve(index).await.map(|()| true)
    } else {
        state.reject(index).await.map(|()| false)
    };
    match outcome {
        Ok(true) => println!("{}", ui::render_table(state.query.rows())),
        Ok(false) => println!("query rejected"),
        Err(err) => println!("{err}"),
    }
}
