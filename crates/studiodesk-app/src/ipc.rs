//! IPC bridge between the wrapped page and the shell.
//!
//! The page sees one frozen object, `window.studioDeskApp`, with a version
//! query, back/forward/reload requests, and a page-ready hook. Nothing else
//! crosses the boundary — no OS or filesystem primitives.

use serde::Deserialize;

/// IPC message from the page to the shell.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum IpcMessage {
    GoBack,
    GoForward,
    Reload,
    PageReady,
}

/// Parse an IPC payload. Anything unrecognized is logged and dropped.
pub fn parse_message(body: &str) -> Option<IpcMessage> {
    match serde_json::from_str(body) {
        Ok(message) => Some(message),
        Err(e) => {
            log::warn!("Dropping unrecognized IPC message: {}", e);
            None
        }
    }
}

const JS_BRIDGE_TEMPLATE: &str = r#"
(function () {
  if (window.studioDeskApp) { return; }
  function send(msg) {
    try { window.ipc.postMessage(JSON.stringify(msg)); } catch (e) { }
  }
  window.studioDeskApp = Object.freeze({
    getVersion: function () { return '__VERSION__'; },
    platform: '__PLATFORM__',
    goBack: function () { send({ cmd: 'go_back' }); },
    goForward: function () { send({ cmd: 'go_forward' }); },
    reload: function () { send({ cmd: 'reload' }); },
    onPageReady: function (callback) {
      window.addEventListener('DOMContentLoaded', callback);
    }
  });
  window.addEventListener('DOMContentLoaded', function () {
    send({ cmd: 'page_ready' });
  });
})();
"#;

/// The initialization script injected into every document.
pub fn bridge_script() -> String {
    JS_BRIDGE_TEMPLATE
        .replace("__VERSION__", env!("CARGO_PKG_VERSION"))
        .replace("__PLATFORM__", std::env::consts::OS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_messages() {
        assert_eq!(parse_message(r#"{"cmd":"go_back"}"#), Some(IpcMessage::GoBack));
        assert_eq!(
            parse_message(r#"{"cmd":"go_forward"}"#),
            Some(IpcMessage::GoForward)
        );
        assert_eq!(parse_message(r#"{"cmd":"reload"}"#), Some(IpcMessage::Reload));
        assert_eq!(
            parse_message(r#"{"cmd":"page_ready"}"#),
            Some(IpcMessage::PageReady)
        );
    }

    #[test]
    fn test_unknown_messages_dropped() {
        assert_eq!(parse_message(r#"{"cmd":"read_file","path":"/etc/passwd"}"#), None);
        assert_eq!(parse_message("not json"), None);
        assert_eq!(parse_message("{}"), None);
    }

    #[test]
    fn test_bridge_script_is_fully_rendered() {
        let script = bridge_script();
        assert!(script.contains(env!("CARGO_PKG_VERSION")));
        assert!(!script.contains("__VERSION__"));
        assert!(!script.contains("__PLATFORM__"));
    }
}
