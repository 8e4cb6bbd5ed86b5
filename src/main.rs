use std::io::{self, BufRead, Write};
use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::{debug, info};
use rand::{rngs::StdRng, SeedableRng};

use duel_chess::engines::random_mover::RandomMover;
use duel_chess::game_state::chess_rules::RuleConfig;
use duel_chess::game_state::chess_types::Side;
use duel_chess::move_generation::move_apply::ChessMove;
use duel_chess::net::peer::{PeerEvent, PeerLink, DEFAULT_PORT};
use duel_chess::session::game_session::{GameSession, SessionEvent};
use duel_chess::utils::algebraic::{algebraic_to_coordinate, coordinate_to_algebraic};
use duel_chess::utils::render_game_state::{render_board, render_game_state};

#[derive(Parser, Debug)]
#[command(author, version, about = "Two-player chess, hot-seat or over TCP")]
struct Cli {
    /// let a pawn's double step pass over an occupied square
    #[arg(long, global = true)]
    legacy_pawn_jump: bool,

    #[command(subcommand)]
    mode: Option<GameMode>,
}

#[derive(Subcommand, Debug, Clone)]
enum GameMode {
    /// both players share this terminal
    Local,
    /// wait for an opponent to join; the host plays White
    Host {
        #[arg(long, default_value_t = DEFAULT_PORT)]
        port: u16,
    },
    /// connect to a host (for example 192.168.1.20:27015); the joiner plays Black
    Join { address: String },
    /// random moves for both sides, then print the final board
    Autoplay {
        #[arg(long, default_value_t = 40)]
        plies: u32,
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();
    let rules = if cli.legacy_pawn_jump {
        RuleConfig::legacy_pawn_jump()
    } else {
        RuleConfig::standard()
    };

    match cli.mode.unwrap_or(GameMode::Local) {
        GameMode::Local => run_interactive(GameSession::new(rules), None),
        GameMode::Host { port } => {
            println!("Listening on port {port}...");
            let link = PeerLink::host(port)
                .with_context(|| format!("failed to host a game on port {port}"))?;
            println!("Opponent connected from {}", link.peer_addr());
            run_interactive(GameSession::networked(rules, Side::White), Some(link))
        }
        GameMode::Join { address } => {
            let link = PeerLink::join(address.as_str())
                .with_context(|| format!("failed to join the game at {address}"))?;
            run_interactive(GameSession::networked(rules, Side::Black), Some(link))
        }
        GameMode::Autoplay { plies, seed } => run_autoplay(rules, plies, seed),
    }
}

fn spawn_stdin_reader() -> Receiver<String> {
    let (line_tx, line_rx) = channel::<String>();
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if line_tx.send(line).is_err() {
                break;
            }
        }
    });
    line_rx
}

fn redraw(session: &GameSession) {
    println!("\n{}", render_game_state(session));
    print!("square (e.g. e2), or q to quit> ");
    io::stdout().flush().ok();
}

fn run_interactive(mut session: GameSession, mut link: Option<PeerLink>) -> Result<()> {
    let line_rx = spawn_stdin_reader();
    let peer_rx = match &link {
        Some(link) => {
            let (peer_tx, peer_rx) = channel::<PeerEvent>();
            link.spawn_receiver(peer_tx)
                .context("failed to start the network receiver")?;
            Some(peer_rx)
        }
        None => None,
    };

    redraw(&session);

    loop {
        match line_rx.try_recv() {
            Ok(line) => {
                let input = line.trim();
                if input.eq_ignore_ascii_case("q") {
                    break;
                }
                if !input.is_empty() {
                    if let Some(mv) = handle_input(&mut session, input) {
                        if let Some(link) = link.as_mut() {
                            link.send_move(&mv).context("failed to send move to opponent")?;
                        }
                    }
                    redraw(&session);
                }
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => break,
        }

        if let Some(peer_rx) = &peer_rx {
            match peer_rx.try_recv() {
                Ok(PeerEvent::Move(mv)) => {
                    session.apply_remote_move(&mv);
                    println!("\nOpponent played {}", describe(&mv));
                    redraw(&session);
                }
                Ok(PeerEvent::Disconnected) | Err(TryRecvError::Disconnected) => {
                    println!("\nOpponent disconnected :(");
                    break;
                }
                Ok(PeerEvent::Failed(err)) => {
                    return Err(err).context("lost connection to opponent");
                }
                Err(TryRecvError::Empty) => {}
            }
        }

        thread::sleep(Duration::from_millis(10));
    }

    Ok(())
}

fn handle_input(session: &mut GameSession, input: &str) -> Option<ChessMove> {
    let coord = match algebraic_to_coordinate(input) {
        Ok(coord) => coord,
        Err(err) => {
            println!("{err}");
            return None;
        }
    };

    match session.press(coord) {
        Ok(SessionEvent::Moved(mv)) => Some(mv),
        Ok(_) => None,
        Err(err) => {
            debug!("press at {input} rejected: {err}");
            println!("{err}");
            None
        }
    }
}

fn describe(mv: &ChessMove) -> String {
    format!(
        "{:?} {:?} {}-{}",
        mv.side,
        mv.piece_type,
        coordinate_to_algebraic(mv.from),
        coordinate_to_algebraic(mv.to)
    )
}

fn run_autoplay(rules: RuleConfig, plies: u32, seed: u64) -> Result<()> {
    let mut session = GameSession::new(rules);
    let mut mover = RandomMover::new();
    let mut rng = StdRng::seed_from_u64(seed);

    for ply in 0..plies {
        let side = session.active_side();
        let Some(mv) = mover.choose_move(session.board(), side, session.rules(), &mut rng) else {
            info!("{side:?} has no move after {ply} plies");
            break;
        };
        println!("{:>3}. {}", ply + 1, describe(&mv));
        session
            .press(mv.from)
            .and_then(|_| session.press(mv.to))
            .with_context(|| format!("offered move {} was refused", describe(&mv)))?;
    }

    println!("{}", render_board(session.board()));
    Ok(())
}
