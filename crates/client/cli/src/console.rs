//! Chat console standing in for the host's chat window.

use std::io::Write;

use tracker_runtime::{Audience, Notice, Notifier};

/// Prints notices to stdout, prefixed with who would see them.
#[derive(Debug, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, audience: &Audience, notice: &Notice) {
        let prefix = match audience {
            Audience::Everyone => "[chat]".to_owned(),
            other => format!("[to {other}]"),
        };
        let text = notice.to_string().replace('\n', "\n    ");

        let mut stdout = std::io::stdout().lock();
        if writeln!(stdout, "{prefix} {text}").is_err() {
            tracing::warn!(%audience, "notice could not be delivered");
        }
    }
}
