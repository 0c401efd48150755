// Adapters layer: concrete clients for the remote service and the reqwest
// transport behind the Transport port.

pub mod clients;
pub mod transport;
