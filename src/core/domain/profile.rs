//! Profile type.
//!
//! A profile names a deployment context (`production`, `staging`, ...) and
//! selects which scoped private key variable to look up.

use std::path::Path;

use tracing::debug;

use crate::core::constants::{ENV_FILE, PRIVATE_KEY_NAME, PUBLIC_KEY_PREFIX};
use crate::core::sink::EnvSource;

/// Deployment profile; empty selects the unscoped key name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Profile(String);

impl Profile {
    /// Create a profile from a name
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The unscoped profile
    pub fn none() -> Self {
        Self::default()
    }

    /// Profile name as given
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is the unscoped profile
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Private key variable for this profile.
    ///
    /// `DOTENV_PRIVATE_KEY_<PROFILE>` for a named profile, `DOTENV_PRIVATE_KEY`
    /// otherwise.
    pub fn private_key_name(&self) -> String {
        self.scoped(PRIVATE_KEY_NAME)
    }

    /// Public key variable for this profile.
    pub fn public_key_name(&self) -> String {
        self.scoped(PUBLIC_KEY_PREFIX)
    }

    /// Private key variable names to try, most specific first.
    pub fn private_key_names(&self) -> Vec<String> {
        if self.is_empty() {
            vec![PRIVATE_KEY_NAME.to_string()]
        } else {
            vec![self.private_key_name(), PRIVATE_KEY_NAME.to_string()]
        }
    }

    fn scoped(&self, base: &str) -> String {
        if self.is_empty() {
            base.to_string()
        } else {
            format!("{}_{}", base, self.0.to_uppercase())
        }
    }

    /// Infer the profile for a file load.
    ///
    /// The first non-empty variable in `vars_to_check` wins; otherwise a file
    /// named `.env.<suffix>` yields `<suffix>`; otherwise the profile is empty.
    pub fn infer<S: AsRef<str>>(path: &Path, vars: &dyn EnvSource, vars_to_check: &[S]) -> Self {
        for name in vars_to_check {
            let name = name.as_ref();
            if let Some(value) = vars.var(name).filter(|v| !v.is_empty()) {
                debug!(var = name, profile = %value, "profile from environment");
                return Self(value);
            }
        }

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        match file_name
            .strip_prefix(ENV_FILE)
            .and_then(|rest| rest.strip_prefix('.'))
        {
            Some(suffix) => {
                debug!(file = %file_name, profile = suffix, "profile from file name");
                Self(suffix.to_string())
            }
            None => Self::none(),
        }
    }
}

impl std::fmt::Display for Profile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Profile {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::PROFILE_VARS;
    use crate::core::sink::MemoryEnv;

    #[test]
    fn test_private_key_name_scoping() {
        assert_eq!(Profile::none().private_key_name(), "DOTENV_PRIVATE_KEY");
        assert_eq!(
            Profile::new("production").private_key_name(),
            "DOTENV_PRIVATE_KEY_PRODUCTION"
        );
        assert_eq!(
            Profile::new("ci").public_key_name(),
            "DOTENV_PUBLIC_KEY_CI"
        );
    }

    #[test]
    fn test_private_key_names_order() {
        assert_eq!(
            Profile::new("production").private_key_names(),
            vec!["DOTENV_PRIVATE_KEY_PRODUCTION", "DOTENV_PRIVATE_KEY"]
        );
        assert_eq!(
            Profile::none().private_key_names(),
            vec!["DOTENV_PRIVATE_KEY"]
        );
    }

    #[test]
    fn test_infer_from_file_name() {
        let vars = MemoryEnv::new();

        assert_eq!(
            Profile::infer(Path::new(".env.staging"), &vars, PROFILE_VARS),
            Profile::new("staging")
        );
        assert_eq!(
            Profile::infer(Path::new("config/.env.production"), &vars, PROFILE_VARS),
            Profile::new("production")
        );
        assert_eq!(
            Profile::infer(Path::new(".env"), &vars, PROFILE_VARS),
            Profile::none()
        );
        assert_eq!(
            Profile::infer(Path::new("settings.env"), &vars, PROFILE_VARS),
            Profile::none()
        );
        assert_eq!(
            Profile::infer(Path::new(".envrc"), &vars, PROFILE_VARS),
            Profile::none()
        );
    }

    #[test]
    fn test_infer_prefers_environment() {
        let mut vars = MemoryEnv::new();
        vars.insert("NODE_ENV", "test");

        assert_eq!(
            Profile::infer(Path::new(".env.staging"), &vars, PROFILE_VARS),
            Profile::new("test")
        );

        vars.insert("APP_ENV", "prod");
        assert_eq!(
            Profile::infer(Path::new(".env.staging"), &vars, PROFILE_VARS),
            Profile::new("prod")
        );
    }

    #[test]
    fn test_infer_skips_empty_variables() {
        let mut vars = MemoryEnv::new();
        vars.insert("APP_ENV", "");

        assert_eq!(
            Profile::infer(Path::new(".env.staging"), &vars, PROFILE_VARS),
            Profile::new("staging")
        );
    }
}
