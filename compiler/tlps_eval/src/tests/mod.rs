//! Test modules too long to sit inline in their implementation files.

mod operators_tests;
