//! Site URL helpers shared across crates.
//!
//! Users give tix a bare site host (`acme.atlassian.net`), but a pasted
//! browser URL should work too. These helpers turn either form into the base
//! URL the REST client talks to, and back into the host shown to users.

use anyhow::{Result, bail};
use url::Url;

/// Turn a site host into the base URL used for REST calls.
///
/// A bare host gets `https://`. An explicit `http://` or `https://` scheme is
/// kept, so proxies and local test servers can be targeted. A pasted ticket
/// link loses its `/browse/...` tail, and trailing slashes are dropped so
/// endpoint paths can be appended directly.
pub fn site_base_url(site: &str) -> Result<String> {
  let trimmed = site.trim();
  if trimmed.is_empty() {
    bail!("Site cannot be empty");
  }

  let lowered = trimmed.to_ascii_lowercase();
  let candidate = if lowered.starts_with("http://") || lowered.starts_with("https://") {
    trimmed.to_string()
  } else if lowered.contains("://") {
    bail!("Unsupported scheme in site '{trimmed}'. Use a host such as yoursite.atlassian.net");
  } else {
    format!("https://{trimmed}")
  };

  let url = Url::parse(&candidate).map_err(|e| anyhow::anyhow!("Invalid site '{trimmed}': {e}"))?;
  if url.host_str().is_none_or(str::is_empty) {
    bail!("Invalid site '{trimmed}': missing host");
  }

  let mut base = format!("{}://{}", url.scheme(), url.host_str().unwrap_or_default());
  if let Some(port) = url.port() {
    base.push_str(&format!(":{port}"));
  }
  let path = url.path();
  let path = path.find("/browse/").map_or(path, |idx| &path[..idx]).trim_end_matches('/');
  base.push_str(path);

  Ok(base)
}

/// Host (and port, when present) of a base URL, for display.
pub fn site_host(base_url: &str) -> String {
  match Url::parse(base_url) {
    Ok(url) => match (url.host_str(), url.port()) {
      (Some(host), Some(port)) => format!("{host}:{port}"),
      (Some(host), None) => host.to_string(),
      _ => base_url.to_string(),
    },
    Err(_) => base_url.to_string(),
  }
}

/// Link to an issue in the Jira web UI.
pub fn browse_url(base_url: &str, issue_key: &str) -> String {
  format!("{}/browse/{}", base_url.trim_end_matches('/'), issue_key)
}
