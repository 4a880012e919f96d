//! Copying text to the system clipboard.
//!
//! [`copy`] returns a command; the write happens when the runtime executes
//! it, so later interaction is never blocked on the clipboard. A failed
//! write is logged and reported as [`CopyErrMsg`]; it is not retried.

use crate::error::{Error, Result};
use bubbletea_rs::{Cmd, Msg};
use std::time::Duration;

/// Sent after text was written to the clipboard.
#[derive(Debug, Clone)]
pub struct CopiedMsg(pub String);

/// Sent when the clipboard write failed.
#[derive(Debug, Clone)]
pub struct CopyErrMsg(pub String);

/// Creates a command that writes `text` to the system clipboard as plain text.
///
/// # Examples
///
/// ```rust
/// use listview_widgets::clipboard::copy;
///
/// // Typically returned from an update function and run by the program.
/// let _cmd = copy("cargo add listview-widgets");
/// ```
pub fn copy(text: impl Into<String>) -> Cmd {
    use bubbletea_rs::tick as bubbletea_tick;
    let text = text.into();
    bubbletea_tick(Duration::from_nanos(1), move |_| {
        match write_clipboard(&text) {
            Ok(()) => Box::new(CopiedMsg(text.clone())) as Msg,
            Err(e) => {
                tracing::warn!(error = %e, "clipboard write failed");
                Box::new(CopyErrMsg(e.to_string())) as Msg
            }
        }
    })
}

#[cfg(feature = "clipboard-support")]
fn write_clipboard(text: &str) -> Result<()> {
    use clipboard::{ClipboardContext, ClipboardProvider};
    let mut ctx: ClipboardContext = ClipboardProvider::new().map_err(|e| Error::Clipboard {
        message: format!("failed to create clipboard context: {e}"),
    })?;
    ctx.set_contents(text.to_owned())
        .map_err(|e| Error::Clipboard {
            message: e.to_string(),
        })
}

#[cfg(not(feature = "clipboard-support"))]
fn write_clipboard(_text: &str) -> Result<()> {
    Err(Error::Clipboard {
        message: "clipboard support not enabled".to_string(),
    })
}

impl From<CopiedMsg> for Msg {
    fn from(msg: CopiedMsg) -> Self {
        Box::new(msg) as Msg
    }
}

impl From<CopyErrMsg> for Msg {
    fn from(msg: CopyErrMsg) -> Self {
        Box::new(msg) as Msg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_builds_command_without_running_it() {
        let text = String::from("cargo add listview-widgets");
        let _cmd = copy(text.as_str());
        let _cmd = copy(text);
    }

    #[cfg(not(feature = "clipboard-support"))]
    #[test]
    fn test_write_without_clipboard_feature_fails() {
        let err = write_clipboard("text").unwrap_err();
        assert!(matches!(err, Error::Clipboard { .. }));
    }

    #[cfg(not(feature = "clipboard-support"))]
    #[tokio::test]
    async fn test_copy_command_resolves_to_error_msg() {
        let msg = copy("x").await.expect("copy command produces a message");
        let err = msg
            .downcast_ref::<CopyErrMsg>()
            .expect("copy without clipboard support reports CopyErrMsg");
        assert!(err.0.contains("clipboard support not enabled"));
        assert!(msg.downcast_ref::<CopiedMsg>().is_none());
    }
}
