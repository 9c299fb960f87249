/* \page Overview Overview
Append a string, optionally preceded by a newline, to a file.

- Invocation parameters and newline flag parsing (`config.rs`).
- The append itself (`writer.rs`).
*/
pub mod config;
pub mod writer;
