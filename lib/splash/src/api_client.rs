//! Ready-to-use API client on top of [`HyperClient`].

use splash_core::{InitConfig, MakeRequest, init_make_request};

use crate::HyperClient;

/// Request composer bound to the hyper transport.
///
/// Cheap to clone: the configuration and the connection pool are shared.
pub type ApiClient = MakeRequest<HyperClient>;

/// Create an API client with a default [`HyperClient`].
///
/// # Example
///
/// ```
/// use splash::{InitConfig, create_api};
///
/// let config = InitConfig::builder().access_key("my-access-key").build()?;
/// let api = create_api(config);
/// assert_eq!(api.config().api_version(), "v1");
/// # Ok::<_, splash::Error>(())
/// ```
#[must_use]
pub fn create_api(config: InitConfig) -> ApiClient {
    create_api_with(config, HyperClient::new())
}

/// Create an API client sharing an existing transport (and its middleware).
#[must_use]
pub fn create_api_with(config: InitConfig, client: HyperClient) -> ApiClient {
    init_make_request(config, client)
}
