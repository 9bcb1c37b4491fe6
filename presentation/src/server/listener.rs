//! TCP listener that hands each connection its own session

use crate::config::ServerConfig;
use crate::output::welcome;
use crate::server::connection::{ChannelDisplay, OUTBOX_CAPACITY, Outbox, StreamPrompt, write_loop};
use quizshell_application::{CommandDispatcher, DisplayPort, SessionLoop};
use quizshell_domain::QuizRepository;
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::{TcpListener, TcpStream, ToSocketAddrs};
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

/// Serves the quiz shell to any number of TCP clients
pub struct QuizServer<S: QuizRepository + ?Sized + 'static> {
    listener: TcpListener,
    session: Arc<SessionLoop<S>>,
    config: ServerConfig,
}

impl<S: QuizRepository + ?Sized + 'static> QuizServer<S> {
    /// Bind the listening socket
    pub async fn bind(
        addr: impl ToSocketAddrs,
        dispatcher: Arc<CommandDispatcher<S>>,
    ) -> io::Result<Self> {
        Ok(Self {
            listener: TcpListener::bind(addr).await?,
            session: Arc::new(SessionLoop::new(dispatcher)),
            config: ServerConfig::default(),
        })
    }

    pub fn with_config(mut self, config: ServerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Accept connections until `shutdown` is cancelled.
    ///
    /// Open sessions are told the server is going away and closed before
    /// this returns.
    pub async fn run(self, shutdown: CancellationToken) -> io::Result<()> {
        info!("Listening on {}", self.local_addr()?);
        let mut sessions = JoinSet::new();

        loop {
            tokio::select! {
                _ = shutdown.cancelled() => break,
                accepted = self.listener.accept() => match accepted {
                    Ok((stream, peer)) => {
                        info!("Connection from {}", peer);
                        sessions.spawn(serve_connection(
                            stream,
                            peer,
                            Arc::clone(&self.session),
                            self.config.clone(),
                            shutdown.child_token(),
                        ));
                    }
                    Err(e) => warn!("Accept failed: {}", e),
                },
                Some(_) = sessions.join_next(), if !sessions.is_empty() => {}
            }
        }

        info!("Shutting down, {} open session(s)", sessions.len());
        while sessions.join_next().await.is_some() {}
        Ok(())
    }
}

async fn serve_connection<S: QuizRepository + ?Sized>(
    stream: TcpStream,
    peer: SocketAddr,
    session: Arc<SessionLoop<S>>,
    config: ServerConfig,
    shutdown: CancellationToken,
) {
    let (reader, writer) = stream.into_split();
    let (outbox, outgoing) = Outbox::channel(OUTBOX_CAPACITY);
    let writer = tokio::spawn(write_loop(writer, outgoing));

    let prompt = StreamPrompt::new(reader, outbox.clone(), config.prompt);
    let display = ChannelDisplay::new(outbox.clone(), config.color);

    welcome(&display);
    tokio::select! {
        report = session.run(&prompt, &display) => {
            info!("Connection {} ended ({:?}, {} commands)", peer, report.end, report.commands);
        }
        _ = shutdown.cancelled() => {
            display.log("Server shutting down. Bye!");
            info!("Connection {} closed by shutdown", peer);
        }
        _ = outbox.stalled() => {
            warn!("Connection {} dropped: client is not reading its output", peer);
        }
    }

    // Dropping the last senders lets the writer flush and close
    let stalled = outbox.is_stalled();
    drop(prompt);
    drop(display);
    drop(outbox);
    if stalled {
        writer.abort();
    }
    let _ = writer.await;
}
