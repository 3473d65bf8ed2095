//! Module `tests` provides integration tests for the weft language server.

mod mocks;
mod utils;

mod diagnostics;
mod folding_range;
mod selection_range;
