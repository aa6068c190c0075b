use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use addthis_api::shares::Period;
use addthis_shared_models::{ContextSettings, Role};
use anyhow::Context;
use clap::ValueEnum;

#[derive(clap::Args, Debug)]
pub struct SettingsArgs {
    /// JSON file holding the journal's context settings (addThisProfileId, ...)
    #[arg(long)]
    pub settings_file: Option<PathBuf>,

    #[arg(long, env = "ADDTHIS_PROFILE_ID")]
    pub profile_id: Option<String>,

    #[arg(long, env = "ADDTHIS_USERNAME")]
    pub username: Option<String>,

    #[arg(long, env = "ADDTHIS_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    #[arg(long, env = "ADDTHIS_BASE_URL", default_value = addthis_api::BASE_URL)]
    pub base_url: String,

    /// Request timeout in seconds
    #[arg(long, default_value = "30", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: u64,
}

impl SettingsArgs {
    /// Settings file first, then flags and environment on top.
    pub fn context_settings(&self) -> anyhow::Result<ContextSettings> {
        let mut settings = match &self.settings_file {
            Some(path) => {
                let raw = fs::read_to_string(path)
                    .with_context(|| format!("Failed to read {}", path.display()))?;
                serde_json::from_str(&raw)
                    .with_context(|| format!("Invalid context settings in {}", path.display()))?
            }
            None => ContextSettings::default(),
        };

        if let Some(profile_id) = &self.profile_id {
            settings.profile_id = Some(profile_id.clone());
        }
        if let Some(username) = &self.username {
            settings.username = Some(username.clone());
        }
        if let Some(password) = &self.password {
            settings.password = Some(password.clone());
        }

        Ok(settings)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum PeriodArg {
    Day,
    Week,
    Month,
}

impl From<PeriodArg> for Period {
    fn from(arg: PeriodArg) -> Self {
        match arg {
            PeriodArg::Day => Period::Day,
            PeriodArg::Week => Period::Week,
            PeriodArg::Month => Period::Month,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum RoleArg {
    SiteAdmin,
    Manager,
    SubEditor,
    Author,
    Reviewer,
    Reader,
}

impl From<RoleArg> for Role {
    fn from(arg: RoleArg) -> Self {
        match arg {
            RoleArg::SiteAdmin => Role::SiteAdmin,
            RoleArg::Manager => Role::Manager,
            RoleArg::SubEditor => Role::SubEditor,
            RoleArg::Author => Role::Author,
            RoleArg::Reviewer => Role::Reviewer,
            RoleArg::Reader => Role::Reader,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[derive(Parser)]
    struct Cli {
        #[command(flatten)]
        settings: SettingsArgs,
    }

    fn args(settings_file: Option<PathBuf>) -> SettingsArgs {
        SettingsArgs {
            settings_file,
            profile_id: None,
            username: None,
            password: None,
            base_url: addthis_api::BASE_URL.to_owned(),
            timeout: 30,
        }
    }

    #[test]
    fn flags_override_the_settings_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"addThisProfileId":"ra-file","addThisUsername":"file-user","addThisPassword":"file-pw"}}"#
        )
        .unwrap();

        let mut args = args(Some(file.path().to_path_buf()));
        args.username = Some("flag-user".into());
        let settings = args.context_settings().unwrap();

        assert_eq!(settings.profile_id.as_deref(), Some("ra-file"));
        assert_eq!(settings.username.as_deref(), Some("flag-user"));
        assert_eq!(settings.password.as_deref(), Some("file-pw"));
    }

    #[test]
    fn zero_timeout_is_rejected() {
        assert!(Cli::try_parse_from(["addthis_stats", "--timeout", "0"]).is_err());

        let cli = Cli::try_parse_from(["addthis_stats", "--timeout", "5"]).unwrap();
        assert_eq!(cli.settings.timeout(), Duration::from_secs(5));
    }

    #[test]
    fn nothing_configured_means_no_credentials() {
        let settings = args(None).context_settings().unwrap();
        assert!(settings.credentials().is_none());
    }

    #[test]
    fn missing_settings_file_is_an_error() {
        let err = args(Some(PathBuf::from("/nonexistent/addthis.json")))
            .context_settings()
            .unwrap_err();
        assert!(err.to_string().starts_with("Failed to read"));
    }
}
