// Credential handling for relayed Google API calls
pub mod credentials;
pub mod scopes;

pub use credentials::{extract_credential, parse_bearer, Credential};
pub use scopes::RELAY_SCOPES;
