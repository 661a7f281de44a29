// Chat Tests Module - Testing the chat module
// Tests organized by chat submodule:
// - reducer_tests: state transitions (append, receipts, scroll target, isolation)
// - message_tests: Message and Contents (unread counting, wire shape, mentions)
// - read_tracker_tests: read requests for the viewer
// - view_tests: message bubble projections

mod message_tests;
mod read_tracker_tests;
mod view_tests;
