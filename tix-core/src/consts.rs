//! Core constants shared across tix components.

/// Environment variable holding the Atlassian account email.
pub const ENV_ATLASSIAN_EMAIL: &str = "ATLASSIAN_EMAIL";

/// Environment variable holding the Atlassian API token.
pub const ENV_ATLASSIAN_API_TOKEN: &str = "ATLASSIAN_API_TOKEN";

/// Environment variable holding the Jira site host (e.g. `acme.atlassian.net`).
pub const ENV_ATLASSIAN_SITE: &str = "ATLASSIAN_SITE";

/// Site used when neither `--site` nor `$ATLASSIAN_SITE` is provided.
pub const DEFAULT_SITE: &str = "yoursite.atlassian.net";

/// Where users create API tokens for Atlassian Cloud.
pub const API_TOKEN_URL: &str = "https://id.atlassian.com/manage-profile/security/api-tokens";
