use std::path::Path;

use tokio::io::{AsyncRead, AsyncReadExt};

use crate::error::SignalError;

/// `-` reads stdin to the end; anything else is a file path.
pub async fn read_document(source: &str) -> Result<String, SignalError> {
    read_document_from(source, tokio::io::stdin()).await
}

/// Same as `read_document`, with `-` bound to the given reader.
pub async fn read_document_from<R>(source: &str, stdin: R) -> Result<String, SignalError>
where
    R: AsyncRead + Unpin,
{
    if source == "-" {
        let mut stdin = stdin;
        let mut buf = String::new();
        stdin.read_to_string(&mut buf).await?;
        return Ok(buf);
    }
    read_file(source).await
}

pub async fn read_file(path: impl AsRef<Path>) -> Result<String, SignalError> {
    Ok(tokio::fs::read_to_string(path).await?)
}
