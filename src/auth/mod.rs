//! Credential loading for the CRM API.
//!
//! The API key is a static bearer token stored in a plain file. It is read
//! once at startup and handed to the `ApiClient`.

pub mod credentials;

pub use credentials::{default_key_path, load_api_key, ApiKey, CredentialError};
