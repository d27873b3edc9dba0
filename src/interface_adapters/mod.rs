// Interface adapters: wire protocol and the HTTP client for the backend.

pub mod clients;
pub mod protocol;
