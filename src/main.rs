//! Othello client: connects to the game server, answers each turn
//! notification with a move from the two-step greedy selector.

use std::io::Write;
use std::net::TcpStream;

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::Deserializer;
use tracing::{info, warn};

use othello_agent::protocol::{ProtocolError, TurnRequest, encode_move};
use othello_agent::selector::select_move;

#[derive(Debug, Parser)]
#[command(about = "Network client for the Othello game server")]
struct Args {
    /// Server port.
    #[arg(long, default_value_t = 1337)]
    port: u16,

    /// Server host.
    #[arg(long, default_value = "localhost")]
    host: String,

    /// Log level filter (overridden by RUST_LOG).
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn init_tracing(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(&args.log_level);

    let address = format!("{}:{}", args.host, args.port);
    let stream = TcpStream::connect(&address)
        .with_context(|| format!("failed to connect to {address}"))?;
    info!(%address, "connected to game server");

    run(stream)
}

/// Answers turn notifications until the server closes the connection.
fn run(mut stream: TcpStream) -> Result<()> {
    let reader = stream.try_clone().context("failed to clone stream")?;
    let requests = Deserializer::from_reader(reader).into_iter::<TurnRequest>();

    for request in requests {
        let request = request.map_err(ProtocolError::Json)?;
        let (board, player) = request.decode()?;

        let mobility = board.legal_moves(player).len();
        let outcome = select_move(&board, player);
        match outcome {
            Some(pos) => info!(
                player = request.player,
                mobility,
                max_turn_time = request.max_turn_time,
                row = pos.row,
                col = pos.col,
                "selected move"
            ),
            None => warn!(player = request.player, "no legal move, passing"),
        }

        stream
            .write_all(&encode_move(outcome))
            .context("failed to send move")?;
        stream.flush().context("failed to flush stream")?;
    }

    info!("connection closed by server");
    Ok(())
}
