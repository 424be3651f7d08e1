use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::http::response::Response;

/// Drains composed response bytes into a stream.
///
/// Holds the bytes of everything a handler produced plus a write cursor, so a
/// short write simply continues from where it stopped.
pub struct ResponseWriter {
    buffer: Vec<u8>,
    written: usize,
}

impl ResponseWriter {
    pub fn new(response: &Response) -> Self {
        Self::from_bytes(response.to_bytes())
    }

    pub fn from_bytes(buffer: Vec<u8>) -> Self {
        Self { buffer, written: 0 }
    }

    pub async fn write_to_stream<S>(&mut self, stream: &mut S) -> anyhow::Result<()>
    where
        S: AsyncWrite + Unpin,
    {
        while self.written < self.buffer.len() {
            let n = stream.write(&self.buffer[self.written..]).await?;

            if n == 0 {
                return Err(anyhow::anyhow!("connection closed while writing"));
            }

            self.written += n;
        }

        stream.flush().await?;
        Ok(())
    }
}
