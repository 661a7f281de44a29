//! Replay of recorded actions
//!
//! Feeds newline-delimited `{type, payload}` actions through a store, then
//! writes one row per message followed by the queued requests as JSON lines.
//!
//! Row format: `<marker> [<side>] <sender>: <text> (<unread count>)`, where the
//! marker is `>` on the scroll target and a space otherwise.

use crate::Result;
use crate::chat::{MessageView, Side, message_views};
use crate::store::ChatStore;
use std::io::{BufRead, Write};

/// Dispatch every non-blank line of `reader`, then print the outcome to `out`
///
/// Malformed lines are skipped. Returns how many were skipped.
pub fn replay<R: BufRead, W: Write>(
    store: &mut ChatStore,
    reader: R,
    out: &mut W,
) -> Result<usize> {
    let mut dropped = 0;

    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        if store.dispatch_json(&line).is_err() {
            tracing::warn!("Skipped line {}", line_no + 1);
            dropped += 1;
        }
    }

    let viewer = store.settings().viewer.clone();
    for view in message_views(store.state(), &viewer) {
        writeln!(out, "{}", format_row(&view))?;
    }

    for request in store.take_requests() {
        writeln!(out, "{}", request.to_json()?)?;
    }

    Ok(dropped)
}

/// Render one message row
pub fn format_row(view: &MessageView) -> String {
    let side = match view.side {
        Side::Mine => "mine ",
        Side::Other => "other",
    };
    let marker = if view.is_scroll_target { ">" } else { " " };
    format!(
        "{} [{}] {}: {} ({})",
        marker, side, view.sender_id, view.text, view.unread_count
    )
}
