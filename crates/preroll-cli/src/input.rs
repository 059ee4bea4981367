//! Reply input from files or stdin

use anyhow::{bail, Context, Result};
use preroll_client::Envelope;
use std::path::Path;
use tokio::io::AsyncReadExt;

/// Read a reply from `path`, or stdin when `path` is `None` or `-`
///
/// # Errors
/// Fails when the input cannot be read, or when it is a saved error
/// envelope.
pub async fn read_reply(path: Option<&Path>) -> Result<String> {
    let text = match path {
        Some(path) if path != Path::new("-") => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read reply from {}", path.display()))?,
        _ => {
            let mut text = String::new();
            tokio::io::stdin()
                .read_to_string(&mut text)
                .await
                .context("failed to read reply from stdin")?;
            text
        }
    };
    unwrap_reply(text)
}

/// Reply text, unwrapping a saved `{output}` / `{detail}` envelope
///
/// # Errors
/// Fails for an envelope that carries only `detail`.
pub fn unwrap_reply(text: String) -> Result<String> {
    match Envelope::unwrap_saved(&text) {
        Some(Ok(output)) => Ok(output),
        Some(Err(detail)) => bail!("generation failed: {detail}"),
        None => Ok(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_passes_through() {
        let text = "SUMMARY\n- Rain".to_string();
        assert_eq!(unwrap_reply(text.clone()).expect("text"), text);
    }

    #[test]
    fn envelope_is_unwrapped() {
        let text = r#"{"output": "SUMMARY\n- Rain"}"#.to_string();
        assert_eq!(unwrap_reply(text).expect("output"), "SUMMARY\n- Rain");
    }

    #[test]
    fn error_envelope_fails() {
        let err = unwrap_reply(r#"{"detail": "Quota exceeded"}"#.to_string()).expect_err("detail");
        assert_eq!(err.to_string(), "generation failed: Quota exceeded");
    }
}
