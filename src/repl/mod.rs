//! REPL Module
//!
//! The interactive command loop: tokenize a line, parse a command, run it
//! against the session, print the result.

mod command;
mod input;
mod session;

pub use command::{Command, COMMANDS};
pub use input::clean_input;
pub use session::{Outcome, Session};

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, warn};

/// Prompt printed before every command
pub const PROMPT: &str = "Pokedex > ";

/// Reads commands from `reader` until `exit` or end of input.
///
/// Command failures are printed and the loop continues, as are lines that
/// are not valid UTF-8. Only I/O errors on `reader` or `writer` end it early.
pub async fn run<R, W>(session: &mut Session, mut reader: R, writer: &mut W) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut buf = Vec::new();

    loop {
        writer.write_all(PROMPT.as_bytes()).await?;
        writer.flush().await?;

        buf.clear();
        if reader.read_until(b'\n', &mut buf).await? == 0 {
            debug!("input closed");
            writer.write_all(b"\n").await?;
            break;
        }
        // Bytes that are not UTF-8 become U+FFFD instead of ending the loop
        let line = String::from_utf8_lossy(&buf);

        let result = match Command::parse(&clean_input(&line)) {
            Ok(Some(command)) => session.execute(command).await,
            Ok(None) => continue,
            Err(err) => Err(err),
        };

        match result {
            Ok(Outcome::Continue(text)) => write_line(writer, &text).await?,
            Ok(Outcome::Exit(text)) => {
                write_line(writer, &text).await?;
                break;
            }
            Err(err) => {
                warn!(error = %err, "command failed");
                write_line(writer, &err.to_string()).await?;
            }
        }
    }

    writer.flush().await
}

async fn write_line<W: AsyncWrite + Unpin>(writer: &mut W, text: &str) -> std::io::Result<()> {
    writer.write_all(text.as_bytes()).await?;
    writer.write_all(b"\n").await
}
