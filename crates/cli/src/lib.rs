//! Library side of the `stockroom-cli` binary.

pub mod demo;
