/// Font registry and byte cache.
pub mod library;
/// Text outlining.
pub mod outline;
/// Last-request-wins conversion gate.
pub mod request;
