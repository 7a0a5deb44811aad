// Tagmarks incremental search
// The sequencer is the single-threaded core; the session drives it asynchronously.

pub mod sequencer;
pub mod session;
