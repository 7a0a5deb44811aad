// Tagmarks shared type definitions
// Each submodule defines types used across the client.

pub mod bookmark;
pub mod errors;
