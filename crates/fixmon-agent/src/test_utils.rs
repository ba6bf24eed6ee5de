//! Test helpers: a scripted in-process agent endpoint
//!
//! Binds a real WebSocket server on a loopback port, accepts exactly one
//! connection, plays a scripted sequence of frames/waits, and ends with
//! either a clean close or an abrupt TCP drop. The request URI of the
//! accepted connection is captured so tests can assert on path and
//! command encoding.

use std::time::Duration;

use futures_util::SinkExt;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio_tungstenite::accept_hdr_async;
use tokio_tungstenite::tungstenite::handshake::server::{Request, Response};
use tokio_tungstenite::tungstenite::protocol::Message as WsMessage;
use url::Url;

/// One step of a scripted server session.
#[derive(Clone)]
pub enum ServerAction {
    /// Send a binary frame
    Binary(Vec<u8>),
    /// Send a text frame
    Text(String),
    /// Sleep before the next step
    Wait(Duration),
    /// Send a close frame and stop
    CloseClean,
    /// Drop the TCP connection without a close frame and stop
    DropAbrupt,
}

pub struct ScriptServer {
    /// Base URL of the listening endpoint (`ws://127.0.0.1:<port>`)
    pub url: Url,
    /// Resolves to the request URI of the accepted connection
    pub uri_rx: oneshot::Receiver<String>,
    pub task: JoinHandle<()>,
}

/// Spawn a scripted one-connection WebSocket server.
pub async fn spawn_script_server(actions: Vec<ServerAction>) -> ScriptServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    let (uri_tx, uri_rx) = oneshot::channel();

    let task = tokio::spawn(async move {
        let (stream, _) = listener.accept().await.expect("accept");
        let callback = move |req: &Request, resp: Response| {
            let _ = uri_tx.send(req.uri().to_string());
            Ok(resp)
        };
        let mut ws = accept_hdr_async(stream, callback).await.expect("handshake");

        for action in actions {
            match action {
                ServerAction::Binary(data) => {
                    ws.send(WsMessage::binary(data)).await.expect("send binary");
                }
                ServerAction::Text(text) => {
                    ws.send(WsMessage::text(text)).await.expect("send text");
                }
                ServerAction::Wait(duration) => tokio::time::sleep(duration).await,
                ServerAction::CloseClean => {
                    let _ = ws.close(None).await;
                    return;
                }
                ServerAction::DropAbrupt => {
                    drop(ws);
                    return;
                }
            }
        }
        let _ = ws.close(None).await;
    });

    ScriptServer {
        url: Url::parse(&format!("ws://{addr}")).expect("server url"),
        uri_rx,
        task,
    }
}

pub struct LoopServer {
    pub url: Url,
    pub task: JoinHandle<()>,
}

/// Spawn a server that accepts any number of connections, serving each one
/// the same scripted session.
pub async fn spawn_looping_server(actions: Vec<ServerAction>) -> LoopServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");

    let task = tokio::spawn(async move {
        loop {
            let (stream, _) = match listener.accept().await {
                Ok(conn) => conn,
                Err(_) => return,
            };
            let actions = actions.clone();
            tokio::spawn(async move {
                let mut ws = match tokio_tungstenite::accept_async(stream).await {
                    Ok(ws) => ws,
                    Err(_) => return,
                };
                for action in actions {
                    match action {
                        ServerAction::Binary(data) => {
                            if ws.send(WsMessage::binary(data)).await.is_err() {
                                return;
                            }
                        }
                        ServerAction::Text(text) => {
                            if ws.send(WsMessage::text(text)).await.is_err() {
                                return;
                            }
                        }
                        ServerAction::Wait(duration) => tokio::time::sleep(duration).await,
                        ServerAction::CloseClean => {
                            let _ = ws.close(None).await;
                            return;
                        }
                        ServerAction::DropAbrupt => {
                            drop(ws);
                            return;
                        }
                    }
                }
                let _ = ws.close(None).await;
            });
        }
    });

    LoopServer {
        url: Url::parse(&format!("ws://{addr}")).expect("server url"),
        task,
    }
}
