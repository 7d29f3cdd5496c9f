//! Stdio transport: newline-delimited JSON-RPC on stdin/stdout.
//!
//! stdout carries protocol messages only; logs go to stderr.

use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::info;

use super::{McpState, dispatch_bytes};

/// Serve MCP over the process's stdin/stdout until stdin closes
pub async fn serve(state: Arc<McpState>) -> std::io::Result<()> {
    info!("MCP stdio transport started");
    serve_io(&state, tokio::io::stdin(), tokio::io::stdout()).await?;
    info!("stdin closed, shutting down");
    Ok(())
}

/// Serve MCP over any line-oriented reader/writer pair
pub async fn serve_io<R, W>(state: &McpState, reader: R, mut writer: W) -> std::io::Result<()>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut reader = BufReader::new(reader);
    let mut line = Vec::new();

    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line).await? == 0 {
            break;
        }

        let message = line.trim_ascii();
        if message.is_empty() {
            continue;
        }

        if let Some(response) = dispatch_bytes(state, message).await {
            let mut payload = serde_json::to_string(&response)?;
            payload.push('\n');
            writer.write_all(payload.as_bytes()).await?;
            writer.flush().await?;
        }
    }

    Ok(())
}
