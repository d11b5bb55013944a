use super::Config;
use crate::message::ApiRevision;

impl Config {
    pub fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var("CHATLINE_BASE_URL")
            && !url.is_empty()
        {
            self.api.base_url = url;
        }

        if let Ok(user_id) = std::env::var("CHATLINE_USER_ID")
            && !user_id.trim().is_empty()
        {
            self.identity.user_id = Some(user_id.trim().to_string());
        }

        if let Ok(revision) = std::env::var("CHATLINE_API_REVISION")
            && let Ok(revision) = revision.parse::<ApiRevision>()
        {
            self.api.revision = revision;
        }

        if let Ok(level) = std::env::var("CHATLINE_LOG")
            && level.parse::<tracing::Level>().is_ok()
        {
            self.log.level = level;
        }
    }
}
