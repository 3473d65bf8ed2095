//! Module `utils` provides internal utilities for libweft.

mod iter;

pub(crate) use iter::PeekIter;
