//! Best-effort clipboard writes.

use crate::error::{CardError, CardResult};
use crate::toast::ToastKind;

/// Something that can receive text. The desktop app backs this with the
/// system clipboard.
pub trait Clipboard: Send + 'static {
    fn set_text(&mut self, text: String) -> CardResult<()>;
}

/// Write `text` off the UI thread and wait for the result.
pub async fn write_text<C: Clipboard>(mut clipboard: C, text: String) -> CardResult<()> {
    tokio::task::spawn_blocking(move || clipboard.set_text(text))
        .await
        .map_err(|e| CardError::Clipboard(format!("clipboard task failed: {}", e)))?
}

/// Toast shown after the "copy number" button finished.
pub fn copy_feedback(result: &CardResult<()>) -> (ToastKind, &'static str) {
    match result {
        Ok(()) => (ToastKind::Success, "Phone number copied to clipboard!"),
        Err(_) => (ToastKind::Error, "Failed to copy number. Please copy manually."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Recording(Arc<Mutex<Vec<String>>>);

    impl Clipboard for Recording {
        fn set_text(&mut self, text: String) -> CardResult<()> {
            self.0.lock().unwrap().push(text);
            Ok(())
        }
    }

    struct Broken;

    impl Clipboard for Broken {
        fn set_text(&mut self, _text: String) -> CardResult<()> {
            Err(CardError::Clipboard("no display".to_string()))
        }
    }

    #[tokio::test]
    async fn writes_text() {
        let clipboard = Recording::default();
        let result = write_text(clipboard.clone(), "+52 624 137 8636".to_string()).await;
        assert!(result.is_ok());
        assert_eq!(clipboard.0.lock().unwrap().as_slice(), ["+52 624 137 8636"]);
        assert_eq!(copy_feedback(&result).0, ToastKind::Success);
    }

    #[tokio::test]
    async fn failure_maps_to_error_toast() {
        let result = write_text(Broken, "x".to_string()).await;
        assert!(matches!(result, Err(CardError::Clipboard(_))));
        let (kind, message) = copy_feedback(&result);
        assert_eq!(kind, ToastKind::Error);
        assert!(message.starts_with("Failed to copy"));
    }
}
