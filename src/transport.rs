//! Byte source and sink over any tokio reader/writer.

use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tracing::trace;

use crate::envelope::{Header, HEADER_SIZE};
use crate::error::Error;
use crate::message::Message;

/// Reads exactly `n` bytes. Running out early is `TruncatedInput`, not an I/O
/// error.
pub async fn read_exactly<R>(reader: &mut R, n: usize) -> Result<Vec<u8>, Error>
where
    R: AsyncRead + Unpin,
{
    let mut buf = vec![0u8; n];
    // Not `read_exact`: its UnexpectedEof loses how many bytes did arrive.
    let mut filled = 0;
    while filled < n {
        let read = reader.read(&mut buf[filled..]).await?;
        if read == 0 {
            return Err(Error::TruncatedInput {
                needed: n,
                available: filled,
            });
        }
        filled += read;
    }
    Ok(buf)
}

pub async fn write_all<W>(writer: &mut W, bytes: &[u8]) -> Result<(), Error>
where
    W: AsyncWrite + Unpin,
{
    writer.write_all(bytes).await?;
    Ok(())
}

/// Reads one frame: the header first, then as many body bytes as it declares.
pub async fn read_message<R>(reader: &mut R) -> Result<(Header, Message), Error>
where
    R: AsyncRead + Unpin,
{
    let mut frame = read_exactly(reader, HEADER_SIZE).await?;
    let header = Header::read(&frame)?;

    let body = read_exactly(reader, header.body_len()).await?;
    frame.extend_from_slice(&body);
    trace!(len = frame.len(), "read frame");

    Message::decode(&frame)
}

pub async fn write_message<W>(writer: &mut W, header: Header, message: &Message) -> Result<(), Error>
where
    W: AsyncWrite + Unpin,
{
    let frame = message.encode(header);
    write_all(writer, &frame).await?;
    trace!(len = frame.len(), msg_type = %message.msg_type(), "wrote frame");
    Ok(())
}
