pub mod address_lookup;
pub mod batch_lookup;

pub use address_lookup::AddressLookup;
pub use batch_lookup::BatchLookup;

/// Printed whenever a lookup does not yield a JSON payload.
pub const FAILURE_MESSAGE: &str = "Nao houve sucesso na requisicao.";
