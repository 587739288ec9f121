//! # swapi-browser-client
//!
//! A small typed client for the [Star Wars API](https://swapi.dev) people
//! endpoint, used by the `swapi-browser-tui` terminal application.
//!
//! ## Feature Flags
//!
//! ### TLS Backend
//!
//! - **`native-tls`** *(default)*: Use the platform's native TLS implementation.
//! - **`rustls`**: Use rustls. Recommended for cross-compilation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use swapi_browser_client::{PageNumber, PeopleSource, SwapiClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = SwapiClient::new();
//!
//!     let page = client.fetch_page(PageNumber::first()).await?;
//!     for character in &page.results {
//!         println!("{}", character.display_name());
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, ClientError>`](ClientError):
//!
//! - [`ClientError::Network`]: connection or transport failure
//! - [`ClientError::Timeout`]: the request timed out
//! - [`ClientError::HttpStatus`]: the API answered with a non-2xx status
//! - [`ClientError::Parse`]: the response body is not the expected JSON
//!
//! The client never retries. Deciding what a failure means for the user is
//! left to the caller.

mod error;
mod http_client;
mod swapi;
mod traits;
mod types;
mod utils;

// Re-export error types
pub use error::{ClientError, Result};

// Re-export the source trait and its HTTP implementation
pub use swapi::{SwapiClient, DEFAULT_BASE_URL, PAGE_SIZE};
pub use traits::PeopleSource;

// Re-export types
pub use types::{Character, PageNumber, PeoplePage};

// Re-export utils module
pub use utils::{datetime, log_sanitizer};
