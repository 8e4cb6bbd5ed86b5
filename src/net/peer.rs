//! Point-to-point TCP link between the two players.
//!
//! One side hosts and accepts a single connection, the other joins. Each move
//! travels as one fixed-size frame. Receiving happens on a helper thread that
//! forwards decoded moves over a channel, so the game loop stays the only
//! owner of the session.

use std::io::{ErrorKind, Read, Write};
use std::net::{SocketAddr, TcpListener, TcpStream, ToSocketAddrs};
use std::sync::mpsc::Sender;
use std::thread::{self, JoinHandle};

use log::{info, warn};

use crate::errors::NetError;
use crate::move_generation::move_apply::ChessMove;
use crate::net::wire::{decode_move, encode_move, MOVE_FRAME_LEN};

pub const DEFAULT_PORT: u16 = 27015;

#[derive(Debug)]
pub enum PeerEvent {
    Move(ChessMove),
    Disconnected,
    Failed(NetError),
}

#[derive(Debug)]
pub struct PeerLink {
    stream: TcpStream,
    peer_addr: SocketAddr,
}

impl PeerLink {
    /// Listen on every interface at `port` and wait for one opponent.
    pub fn host(port: u16) -> Result<Self, NetError> {
        let listener = TcpListener::bind(("0.0.0.0", port))?;
        info!("listening on port {port}");
        Self::accept_from(&listener)
    }

    /// Accept one opponent from an already bound listener.
    pub fn accept_from(listener: &TcpListener) -> Result<Self, NetError> {
        let (stream, peer_addr) = listener.accept()?;
        info!("opponent connected from {peer_addr}");
        Self::from_stream(stream, peer_addr)
    }

    pub fn join<A: ToSocketAddrs>(address: A) -> Result<Self, NetError> {
        let stream = TcpStream::connect(address)?;
        let peer_addr = stream.peer_addr()?;
        info!("connected to {peer_addr}");
        Self::from_stream(stream, peer_addr)
    }

    fn from_stream(stream: TcpStream, peer_addr: SocketAddr) -> Result<Self, NetError> {
        stream.set_nodelay(true)?;
        Ok(Self { stream, peer_addr })
    }

    pub fn peer_addr(&self) -> SocketAddr {
        self.peer_addr
    }

    pub fn send_move(&mut self, mv: &ChessMove) -> Result<(), NetError> {
        self.stream.write_all(&encode_move(mv))?;
        self.stream.flush()?;
        Ok(())
    }

    /// Block until the next complete frame arrives.
    pub fn recv_move(&mut self) -> Result<ChessMove, NetError> {
        read_frame(&mut self.stream)
    }

    /// Read frames on a background thread until the peer goes away.
    ///
    /// Exactly one terminal event (`Disconnected` or `Failed`) is sent before
    /// the thread exits. The thread also stops quietly when `events` is dropped.
    pub fn spawn_receiver(&self, events: Sender<PeerEvent>) -> Result<JoinHandle<()>, NetError> {
        let mut stream = self.stream.try_clone()?;
        let handle = thread::spawn(move || loop {
            let event = match read_frame(&mut stream) {
                Ok(mv) => PeerEvent::Move(mv),
                Err(NetError::Disconnected) => {
                    warn!("opponent disconnected");
                    let _ = events.send(PeerEvent::Disconnected);
                    return;
                }
                Err(err) => {
                    warn!("receiver stopped: {err}");
                    let _ = events.send(PeerEvent::Failed(err));
                    return;
                }
            };
            if events.send(event).is_err() {
                return;
            }
        });
        Ok(handle)
    }
}

fn read_frame<R: Read>(reader: &mut R) -> Result<ChessMove, NetError> {
    let mut frame = [0u8; MOVE_FRAME_LEN];
    match reader.read_exact(&mut frame) {
        Ok(()) => Ok(decode_move(&frame)?),
        Err(err) if err.kind() == ErrorKind::UnexpectedEof => Err(NetError::Disconnected),
        Err(err) => Err(NetError::Io(err)),
    }
}
