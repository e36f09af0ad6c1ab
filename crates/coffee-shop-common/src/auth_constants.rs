//! Compiled-in deployment constants for the Coffee Shop front-end
//!
//! These constants are pre-compiled into the binary so the development record
//! is available without external configuration files. Each one can be replaced
//! at build time by exporting the matching `COFFEE_SHOP_*` variable or listing
//! it in a `.env` file next to the workspace manifest. The names are the ones
//! the runtime loader reads, so one setting overrides both layers.

/// Base URL of the running drinks API server
pub const API_SERVER_URL: &str = match option_env!("COFFEE_SHOP_API_SERVER_URL") {
    Some(value) => value,
    None => "http://localhost:5000",
};

/// Auth0 domain prefix (the tenant host without `.auth0.com`)
pub const AUTH0_DOMAIN_PREFIX: &str = match option_env!("COFFEE_SHOP_AUTH0__URL") {
    Some(value) => value,
    None => "coffeshop1987.us",
};

/// Auth0 audience for the drinks API
pub const AUTH0_AUDIENCE: &str = match option_env!("COFFEE_SHOP_AUTH0__AUDIENCE") {
    Some(value) => value,
    None => "http://localhost:5000",
};

/// Auth0 client ID generated for the front-end application
pub const AUTH0_CLIENT_ID: &str = match option_env!("COFFEE_SHOP_AUTH0__CLIENT_ID") {
    Some(value) => value,
    None => "sZt9jKXlJ7RQJrrfWMGovPY7AIJoDDlo",
};

/// Base URL of the running front-end, where Auth0 redirects after login
pub const AUTH0_CALLBACK_URL: &str = match option_env!("COFFEE_SHOP_AUTH0__CALLBACK_URL") {
    Some(value) => value,
    None => "http://localhost:8100",
};

/// Whether any value above was replaced at build time
pub const BUILD_OVERRIDDEN: bool = option_env!("COFFEE_SHOP_API_SERVER_URL").is_some()
    || option_env!("COFFEE_SHOP_AUTH0__URL").is_some()
    || option_env!("COFFEE_SHOP_AUTH0__AUDIENCE").is_some()
    || option_env!("COFFEE_SHOP_AUTH0__CLIENT_ID").is_some()
    || option_env!("COFFEE_SHOP_AUTH0__CALLBACK_URL").is_some();

/// Host suffix shared by every Auth0 tenant
pub const AUTH0_HOST_SUFFIX: &str = ".auth0.com";
