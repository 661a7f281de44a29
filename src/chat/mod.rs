//! Chat state module
//!
//! This module holds the client-side chat model including:
//! - Messages and their per-recipient read flags
//! - The reducer folding incoming events into state
//! - Read tracking for the current viewer
//! - View projections consumed by the rendering layer
//!
//! The module is organized into submodules:
//! - `content` - Message contents (plain text or mention segments)
//! - `message` - Message structure and unread counting
//! - `event` - Events fed into the reducer
//! - `state` - Chat state snapshot
//! - `reducer` - Pure state transition function
//! - `read_tracker` - Observer emitting read requests for the viewer
//! - `view` - Stateless projections for message bubbles

// Submodules
pub mod content;
pub mod event;
pub mod message;
pub mod read_tracker;
pub mod reducer;
pub mod state;
pub mod view;

// Re-export commonly used types
pub use content::{Contents, Segment};
pub use event::Event;
pub use message::{Message, ReadFlags};
pub use read_tracker::ReadTracker;
pub use reducer::reduce;
pub use state::ChatState;
pub use view::{MessageView, Side};

// Re-export main functions
pub use view::{message_views, unread_total};
