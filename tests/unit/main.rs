//! Unit test modules exercising the public API.

mod engine_test;
mod export_test;
mod format_test;
mod increment_test;
mod session_test;
