//! Streaming shell channels
//!
//! A shell channel is one WebSocket connection executing one remote command.
//! [`open_stream`] returns immediately with a [`ChannelHandle`]; a background
//! task owns the socket and forwards every received frame, decoded as text,
//! to the owner's event sender. The server closing the socket is the only
//! end-of-stream signal; an abrupt transport error is treated the same way
//! (any partial output has already been delivered), plus a warn log.

use futures_util::{SinkExt, StreamExt};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::protocol::Message as WsMessage;
use url::Url;

use fixmon_core::prelude::*;
use fixmon_core::{ShellEvent, StreamSource};

/// Percent-encode everything but RFC 3986 unreserved characters.
const COMMAND_ENCODE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Build the shell endpoint URL for a machine and command.
///
/// Shape: `<base>/api/agent/shell/<mid>?command=<percent-encoded command>`.
pub fn shell_url(base: &Url, mid: &str, command: &str) -> Url {
    let mut url = base.clone();
    url.set_path(&format!("/api/agent/shell/{mid}"));
    url.set_query(Some(&format!(
        "command={}",
        utf8_percent_encode(command, COMMAND_ENCODE)
    )));
    url
}

/// Owned handle to a live shell channel.
///
/// Closing the handle is the only cancellation primitive: the background task
/// sends a close frame and exits. Dropping the handle closes it too, so a
/// channel can never outlive its owning scope unnoticed.
#[derive(Debug)]
pub struct ChannelHandle {
    close_tx: Option<oneshot::Sender<()>>,
    task: JoinHandle<()>,
}

impl ChannelHandle {
    /// Ask the background task to close the channel. Idempotent.
    pub fn close(&mut self) {
        if let Some(tx) = self.close_tx.take() {
            let _ = tx.send(());
        }
    }

    /// True once the background task has exited (channel fully closed).
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Wait for the background task to exit.
    pub async fn closed(&mut self) {
        let _ = (&mut self.task).await;
    }
}

impl Drop for ChannelHandle {
    fn drop(&mut self) {
        self.close();
    }
}

/// Open a streaming shell channel.
///
/// Returns the owning handle immediately; connection and streaming happen on
/// a background task. Decoded chunks arrive on `events` in arrival order,
/// followed by exactly one [`ShellEvent::Closed`]. A failed connect behaves
/// like a session that closed before producing output.
///
/// Must be called from within a tokio runtime.
pub fn open_stream(
    url: Url,
    source: StreamSource,
    events: mpsc::Sender<ShellEvent>,
) -> ChannelHandle {
    let (close_tx, close_rx) = oneshot::channel();

    let task = tokio::spawn(async move {
        match connect_async(url.as_str()).await {
            Ok((ws, _response)) => {
                debug!("shell channel open: {source}");
                pump(ws, source, &events, close_rx).await;
            }
            Err(err) => {
                warn!("shell channel connect failed ({source}): {err}");
            }
        }
        let _ = events.send(ShellEvent::Closed { source }).await;
    });

    ChannelHandle {
        close_tx: Some(close_tx),
        task,
    }
}

type WsStream =
    tokio_tungstenite::WebSocketStream<tokio_tungstenite::MaybeTlsStream<tokio::net::TcpStream>>;

/// Read loop for one open channel. Exits on close, transport error, owner
/// close request, or the event receiver going away.
async fn pump(
    ws: WsStream,
    source: StreamSource,
    events: &mpsc::Sender<ShellEvent>,
    mut close_rx: oneshot::Receiver<()>,
) {
    let (mut sink, mut stream) = ws.split();

    loop {
        tokio::select! {
            _ = &mut close_rx => {
                debug!("shell channel close requested: {source}");
                let _ = sink.send(WsMessage::Close(None)).await;
                break;
            }
            msg = stream.next() => {
                let text = match msg {
                    Some(Ok(WsMessage::Binary(data))) => {
                        String::from_utf8_lossy(&data).into_owned()
                    }
                    Some(Ok(WsMessage::Text(text))) => text.as_str().to_owned(),
                    Some(Ok(WsMessage::Close(_))) | None => {
                        debug!("shell channel closed by agent: {source}");
                        break;
                    }
                    // Ping/pong are answered by tungstenite itself
                    Some(Ok(_)) => continue,
                    Some(Err(err)) => {
                        // Abrupt drop: same as a clean close, partial output stands
                        warn!("shell channel error ({source}): {err}");
                        break;
                    }
                };
                if events.send(ShellEvent::Chunk { source, text }).await.is_err() {
                    // Owner is gone; nothing left to deliver to
                    break;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{spawn_script_server, ServerAction};
    use std::time::Duration;

    #[test]
    fn test_shell_url_shape() {
        let base = Url::parse("ws://127.0.0.1:4080").unwrap();
        let url = shell_url(&base, "whale-07", "update_light_status");
        assert_eq!(
            url.as_str(),
            "ws://127.0.0.1:4080/api/agent/shell/whale-07?command=update_light_status"
        );
    }

    #[test]
    fn test_shell_url_encodes_command() {
        let base = Url::parse("ws://fixture.local:4080").unwrap();
        let url = shell_url(&base, "whale-07", "tail -f /var/log/factory.log");
        assert_eq!(
            url.query(),
            Some("command=tail%20-f%20%2Fvar%2Flog%2Ffactory.log")
        );
    }

    #[test]
    fn test_shell_url_encodes_mid_path_segment() {
        let base = Url::parse("ws://fixture.local:4080").unwrap();
        let url = shell_url(&base, "ghost 1", "status");
        assert_eq!(url.path(), "/api/agent/shell/ghost%201");
    }

    #[test]
    fn test_shell_url_preserves_scheme() {
        let base = Url::parse("wss://fixture.local:4080").unwrap();
        let url = shell_url(&base, "m", "c");
        assert_eq!(url.scheme(), "wss");
    }

    #[tokio::test]
    async fn test_stream_delivers_chunks_then_closed() {
        let server = spawn_script_server(vec![
            ServerAction::Binary(b"hello ".to_vec()),
            ServerAction::Binary(b"world".to_vec()),
            ServerAction::CloseClean,
        ])
        .await;

        let (tx, mut rx) = mpsc::channel(16);
        let _handle = open_stream(server.url.clone(), StreamSource::Main, tx);

        let mut chunks = Vec::new();
        while let Some(event) = rx.recv().await {
            match event {
                ShellEvent::Chunk { source, text } => {
                    assert_eq!(source, StreamSource::Main);
                    chunks.push(text);
                }
                ShellEvent::Closed { source } => {
                    assert_eq!(source, StreamSource::Main);
                    break;
                }
            }
        }
        assert_eq!(chunks, vec!["hello ", "world"]);
    }

    #[tokio::test]
    async fn test_abrupt_drop_delivers_partial_then_closed() {
        let server = spawn_script_server(vec![
            ServerAction::Binary(b"partial".to_vec()),
            ServerAction::Wait(Duration::from_millis(20)),
            ServerAction::DropAbrupt,
        ])
        .await;

        let (tx, mut rx) = mpsc::channel(16);
        let _handle = open_stream(server.url.clone(), StreamSource::AuxLog(0), tx);

        let mut chunks = Vec::new();
        while let Some(event) = rx.recv().await {
            match event {
                ShellEvent::Chunk { text, .. } => chunks.push(text),
                ShellEvent::Closed { source } => {
                    assert_eq!(source, StreamSource::AuxLog(0));
                    break;
                }
            }
        }
        assert_eq!(chunks, vec!["partial"]);
    }

    #[tokio::test]
    async fn test_connect_failure_reports_closed() {
        // Bind then drop to get a port nothing is listening on.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let url = Url::parse(&format!("ws://{addr}")).unwrap();
        let (tx, mut rx) = mpsc::channel(16);
        let _handle = open_stream(url, StreamSource::Main, tx);

        match rx.recv().await {
            Some(ShellEvent::Closed { source }) => assert_eq!(source, StreamSource::Main),
            other => panic!("expected Closed, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_close_tears_down_long_lived_channel() {
        let server = spawn_script_server(vec![
            ServerAction::Binary(b"tail output\n".to_vec()),
            ServerAction::Wait(Duration::from_secs(30)),
        ])
        .await;

        let (tx, mut rx) = mpsc::channel(16);
        let mut handle = open_stream(server.url.clone(), StreamSource::AuxLog(1), tx);

        // First chunk proves the stream is live.
        match rx.recv().await {
            Some(ShellEvent::Chunk { text, .. }) => assert_eq!(text, "tail output\n"),
            other => panic!("expected Chunk, got {other:?}"),
        }

        handle.close();
        loop {
            match rx.recv().await {
                Some(ShellEvent::Closed { .. }) => break,
                Some(_) => continue,
                None => panic!("channel dropped without Closed event"),
            }
        }
        handle.closed().await;
    }

    #[tokio::test]
    async fn test_command_reaches_server_encoded() {
        let server = spawn_script_server(vec![ServerAction::CloseClean]).await;

        let url = shell_url(&server.url, "whale-07", "echo done");
        let (tx, mut rx) = mpsc::channel(16);
        let _handle = open_stream(url, StreamSource::Main, tx);

        while let Some(event) = rx.recv().await {
            if matches!(event, ShellEvent::Closed { .. }) {
                break;
            }
        }

        let uri = server.uri_rx.await.unwrap();
        assert_eq!(uri, "/api/agent/shell/whale-07?command=echo%20done");
    }
}
