//! Environment variable management for testing
//!
//! Tests that read credentials from the process environment use these guards
//! so the original values come back when the test ends.

use std::env;

/// Saves one environment variable on creation and restores it on drop.
pub struct EnvVarGuard {
  name: String,
  original: Option<String>,
}

impl EnvVarGuard {
  /// Capture the current value of `name`.
  pub fn new(name: &str) -> Self {
    Self {
      name: name.to_string(),
      original: env::var(name).ok(),
    }
  }

  /// Set the variable for the lifetime of the guard.
  pub fn set(&self, value: &str) {
    unsafe {
      env::set_var(&self.name, value);
    }
  }

  /// Unset the variable for the lifetime of the guard.
  pub fn remove(&self) {
    unsafe {
      env::remove_var(&self.name);
    }
  }
}

impl Drop for EnvVarGuard {
  fn drop(&mut self) {
    match &self.original {
      Some(val) => unsafe {
        env::set_var(&self.name, val);
      },
      None => unsafe {
        env::remove_var(&self.name);
      },
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_env_var_guard_restores_value() {
    let name = "TIX_TEST_UTILS_GUARD_RESTORE";
    unsafe {
      env::set_var(name, "before");
    }
    {
      let guard = EnvVarGuard::new(name);
      guard.set("during");
      assert_eq!(env::var(name).unwrap(), "during");
      guard.remove();
      assert!(env::var(name).is_err());
    }
    assert_eq!(env::var(name).unwrap(), "before");
    unsafe {
      env::remove_var(name);
    }
  }

  #[test]
  fn test_env_var_guard_removes_unset_value() {
    let name = "TIX_TEST_UTILS_GUARD_UNSET";
    {
      let guard = EnvVarGuard::new(name);
      guard.set("temporary");
    }
    assert!(env::var(name).is_err());
  }
}
