use greyscale_application::ports::TabId;
use greyscale_domain::STYLE_ELEMENT_ID;
use serde::Serialize;
use tokio::sync::mpsc;

/// A style operation for the browser shim to execute in one tab.
///
/// Every command names the style element it targets, so the shim can locate
/// and replace or remove the exact node without scanning the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum StyleCommand {
    /// Insert the grayscale rule, replacing any prior instance of the
    /// style element.
    Apply {
        tab_id: TabId,
        element_id: &'static str,
        css: String,
    },
    /// Remove the style element when present.
    Remove {
        tab_id: TabId,
        element_id: &'static str,
    },
}

impl StyleCommand {
    pub fn apply(tab_id: TabId, css: String) -> Self {
        Self::Apply {
            tab_id,
            element_id: STYLE_ELEMENT_ID,
            css,
        }
    }

    pub fn remove(tab_id: TabId) -> Self {
        Self::Remove {
            tab_id,
            element_id: STYLE_ELEMENT_ID,
        }
    }
}

/// Non-blocking, fire-and-forget emitter for style commands.
///
/// Commands are best-effort: with no shim draining the channel they are
/// silently dropped, and a disabled emitter is a no-op. `emit` never awaits,
/// so the tab-update path cannot stall on a slow consumer.
#[derive(Clone)]
pub struct StyleCommandEmitter {
    sender: Option<mpsc::UnboundedSender<StyleCommand>>,
}

impl StyleCommandEmitter {
    /// An emitter that discards everything. Useful where the command stream
    /// has no consumer, e.g. in tests of the registry alone.
    pub fn disabled() -> Self {
        Self { sender: None }
    }

    /// An enabled emitter plus the receiver for the consumer side.
    pub fn enabled() -> (Self, mpsc::UnboundedReceiver<StyleCommand>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { sender: Some(tx) }, rx)
    }

    pub fn emit(&self, command: StyleCommand) {
        if let Some(ref tx) = self.sender {
            let _ = tx.send(command);
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.sender.is_some()
    }
}

impl Default for StyleCommandEmitter {
    fn default() -> Self {
        Self::disabled()
    }
}

impl std::fmt::Debug for StyleCommandEmitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StyleCommandEmitter")
            .field("enabled", &self.is_enabled())
            .finish()
    }
}
