//! Profile store backed by an AWS-style shared config file
//!
//! # File format
//!
//! ```text
//! [default]
//! region = us-east-1
//!
//! [profile prod]                  # named profile
//! sso_start_url = https://example.awsapps.com/start
//! sso_account_id = 123456789012
//! sso_role_name = DatabaseReader
//! s3 =
//!     max_concurrent_requests = 10  ; indented lines continue the previous value
//!
//! [sso-session corp]              # non-profile sections are ignored
//! sso_region = us-east-1
//! ```
//!
//! Only `[default]` and `[profile NAME]` define profiles; a bare `[NAME]`
//! header is ignored like any other non-profile section. Sections with the
//! same name merge and later keys win.

use std::collections::BTreeMap;
use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;

use crate::core::{DEFAULT_PROFILE, ProfileStoreError, ResolvedProfile};
use crate::traits::ProfileStore;

/// Environment variable overriding the shared config file location
pub const CONFIG_FILE_ENV: &str = "AWS_CONFIG_FILE";

/// Reads named profiles from a shared config file
///
/// The file is re-read on every lookup since it is maintained by other
/// tools. A missing file is treated as a store with no profiles.
#[derive(Debug, Clone)]
pub struct SharedConfigProfileStore {
    path: PathBuf,
}

impl SharedConfigProfileStore {
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `$AWS_CONFIG_FILE`, or `~/.aws/config` when unset
    pub fn from_env() -> Self {
        Self::from_path(config_path_from(|key| std::env::var_os(key)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse every profile in the file
    pub async fn load(&self) -> Result<BTreeMap<String, ResolvedProfile>, ProfileStoreError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => parse(&self.path, &contents),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "Shared config file not found, no profiles defined");
                Ok(BTreeMap::new())
            }
            Err(source) => Err(ProfileStoreError::Read {
                path: self.path.clone(),
                source,
            }),
        }
    }
}

#[async_trait]
impl ProfileStore for SharedConfigProfileStore {
    async fn lookup(&self, name: &str) -> Result<Option<ResolvedProfile>, ProfileStoreError> {
        Ok(self.load().await?.remove(name))
    }
}

/// Resolve the shared config path from an environment lookup
fn config_path_from(env: impl Fn(&str) -> Option<OsString>) -> PathBuf {
    let home = env("HOME")
        .or_else(|| env("USERPROFILE"))
        .filter(|home| !home.is_empty())
        .map(PathBuf::from);

    if let Some(configured) = env(CONFIG_FILE_ENV).filter(|path| !path.is_empty()) {
        let configured = PathBuf::from(configured);
        return match (configured.strip_prefix("~"), home) {
            (Ok(rest), Some(home)) => home.join(rest),
            _ => configured,
        };
    }

    home.unwrap_or_default().join(".aws").join("config")
}

/// What the parser does with `key = value` lines
enum Section {
    /// Before the first header
    None,
    /// Inside a non-profile section such as `[sso-session x]`
    Ignored,
    Profile(String),
}

/// Parse shared config `contents`; `path` is used for error reporting and
/// recorded as each profile's source.
pub fn parse(
    path: &Path,
    contents: &str,
) -> Result<BTreeMap<String, ResolvedProfile>, ProfileStoreError> {
    let mut profiles: BTreeMap<String, ResolvedProfile> = BTreeMap::new();
    let mut section = Section::None;
    let mut last_key: Option<String> = None;

    let error = |line: usize, message: &str| ProfileStoreError::Parse {
        path: path.to_path_buf(),
        line,
        message: message.to_string(),
    };

    for (index, raw) in contents.lines().enumerate() {
        let line_no = index + 1;
        let trimmed = raw.trim();

        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with(';') {
            continue;
        }

        // Indented line continues the previous property value
        if raw.starts_with(char::is_whitespace) && !trimmed.starts_with('[') {
            match (&section, &last_key) {
                (Section::Ignored, _) => {}
                (Section::Profile(name), Some(key)) => {
                    if let Some(profile) = profiles.get_mut(name) {
                        profile.append_to(key, trimmed);
                    }
                }
                _ => return Err(error(line_no, "continuation line without a preceding property")),
            }
            continue;
        }

        if let Some(header) = trimmed.strip_prefix('[') {
            let Some((inner, _)) = header.split_once(']') else {
                return Err(error(line_no, "section header is missing `]`"));
            };
            last_key = None;
            section = match profile_name_from_header(inner.trim()) {
                Some(name) if name.is_empty() => {
                    return Err(error(line_no, "section header has an empty profile name"));
                }
                Some(name) => {
                    profiles
                        .entry(name.to_string())
                        .or_insert_with(|| ResolvedProfile::new(name).with_source(path));
                    Section::Profile(name.to_string())
                }
                None => Section::Ignored,
            };
            continue;
        }

        let Some((key, value)) = trimmed.split_once('=') else {
            return Err(error(line_no, "expected `key = value`"));
        };
        let key = key.trim();
        if key.is_empty() {
            return Err(error(line_no, "property has an empty key"));
        }

        match &section {
            Section::None => return Err(error(line_no, "property outside of any section")),
            Section::Ignored => {}
            Section::Profile(name) => {
                if let Some(profile) = profiles.get_mut(name) {
                    profile.insert(key.to_string(), value.trim().to_string());
                }
                last_key = Some(key.to_string());
            }
        }
    }

    Ok(profiles)
}

/// Profile name for a section header, `None` for non-profile sections
fn profile_name_from_header(header: &str) -> Option<&str> {
    if header == DEFAULT_PROFILE {
        return Some(header);
    }
    header
        .strip_prefix("profile")
        .filter(|rest| rest.is_empty() || rest.starts_with(char::is_whitespace))
        .map(str::trim)
}
