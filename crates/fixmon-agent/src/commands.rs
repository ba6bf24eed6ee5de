//! One-shot command execution over a streaming channel
//!
//! The agent has no request/response protocol; a "one-shot" command is a
//! shell channel whose entire output is collected until the server closes
//! it. Chunks are accumulated in arrival order and concatenated into a
//! single string; zero chunks before close resolve to the empty string.

use std::time::Duration;

use futures_util::StreamExt;
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::protocol::Message as WsMessage;
use url::Url;

use fixmon_core::prelude::*;

/// Build the tail command used for an aux log panel.
pub fn tail_command(path: &str) -> String {
    format!("tail -f {path}")
}

/// Execute a command and collect its full output.
///
/// Completion is the channel's natural close. A refused connection or an
/// abrupt mid-stream drop settle the same way a clean close does, with
/// whatever text arrived (possibly none); transport trouble is logged, not
/// surfaced. With a `timeout`, exceeding it is the one hard error.
pub async fn run_capture(url: Url, timeout: Option<Duration>) -> Result<String> {
    match timeout {
        Some(limit) => tokio::time::timeout(limit, capture(url))
            .await
            .map_err(|_| Error::CaptureTimeout(limit)),
        None => Ok(capture(url).await),
    }
}

async fn capture(url: Url) -> String {
    let mut ws = match connect_async(url.as_str()).await {
        Ok((ws, _response)) => ws,
        Err(err) => {
            warn!("capture connect failed: {err}");
            return String::new();
        }
    };

    let mut output = String::new();
    while let Some(msg) = ws.next().await {
        match msg {
            Ok(WsMessage::Binary(data)) => output.push_str(&String::from_utf8_lossy(&data)),
            Ok(WsMessage::Text(text)) => output.push_str(text.as_str()),
            Ok(WsMessage::Close(_)) => break,
            Ok(_) => {}
            Err(err) => {
                // Partial output stands; the drop is the completion signal
                warn!("capture stream error: {err}");
                break;
            }
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{spawn_script_server, ServerAction};

    #[test]
    fn test_tail_command() {
        assert_eq!(
            tail_command("/var/log/factory.log"),
            "tail -f /var/log/factory.log"
        );
    }

    #[tokio::test]
    async fn test_capture_concatenates_in_arrival_order() {
        let server = spawn_script_server(vec![
            ServerAction::Binary(b"/dev/google/".to_vec()),
            ServerAction::Binary(b"Ryu_debug/serial/AP".to_vec()),
            ServerAction::Binary(b"\n".to_vec()),
            ServerAction::CloseClean,
        ])
        .await;

        let output = run_capture(server.url.clone(), None).await.unwrap();
        assert_eq!(output, "/dev/google/Ryu_debug/serial/AP\n");
    }

    #[tokio::test]
    async fn test_capture_zero_chunks_resolves_empty() {
        let server = spawn_script_server(vec![ServerAction::CloseClean]).await;
        let output = run_capture(server.url.clone(), None).await.unwrap();
        assert_eq!(output, "");
    }

    #[tokio::test]
    async fn test_capture_mixed_text_and_binary_frames() {
        let server = spawn_script_server(vec![
            ServerAction::Binary(b"a".to_vec()),
            ServerAction::Text("b".to_string()),
            ServerAction::CloseClean,
        ])
        .await;

        let output = run_capture(server.url.clone(), None).await.unwrap();
        assert_eq!(output, "ab");
    }

    #[tokio::test]
    async fn test_capture_abrupt_drop_returns_partial() {
        let server = spawn_script_server(vec![
            ServerAction::Binary(b"partial output".to_vec()),
            ServerAction::Wait(Duration::from_millis(20)),
            ServerAction::DropAbrupt,
        ])
        .await;

        let output = run_capture(server.url.clone(), None).await.unwrap();
        assert_eq!(output, "partial output");
    }

    #[tokio::test]
    async fn test_capture_connect_refused_resolves_empty() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let url = Url::parse(&format!("ws://{addr}")).unwrap();
        let output = run_capture(url, None).await.unwrap();
        assert_eq!(output, "");
    }

    #[tokio::test]
    async fn test_capture_timeout() {
        let server = spawn_script_server(vec![
            ServerAction::Binary(b"never finishes".to_vec()),
            ServerAction::Wait(Duration::from_secs(30)),
        ])
        .await;

        let err = run_capture(server.url.clone(), Some(Duration::from_millis(50)))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::CaptureTimeout(_)));
        assert!(err.is_recoverable());
    }

    #[tokio::test]
    async fn test_capture_lossy_decodes_invalid_utf8() {
        let server = spawn_script_server(vec![
            ServerAction::Binary(vec![b'o', b'k', 0xFF]),
            ServerAction::CloseClean,
        ])
        .await;

        let output = run_capture(server.url.clone(), None).await.unwrap();
        assert_eq!(output, "ok\u{FFFD}");
    }
}
