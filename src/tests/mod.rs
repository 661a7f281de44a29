// Test modules for Chatview
// Each module contains unit tests for the corresponding source file

mod chat_tests;
