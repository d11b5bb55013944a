use crate::config::Config;

pub fn render_status(config: &Config) -> String {
    let lines = [
        format!("◆ chatline {}", env!("CARGO_PKG_VERSION")),
        String::new(),
        format!("  Config      {}", config.config_path.display()),
        format!("  Backend     {}", config.api.base_url),
        format!(
            "  Revision    {} ({})",
            config.api.revision,
            config.api.revision.messages_path()
        ),
        format!(
            "  User        {}",
            config.identity.user_id.as_deref().unwrap_or("(not set)")
        ),
        format!("  Type        {}", config.composer.default_type),
        format!("  Banners     {} ms", config.notifier.dismiss_after_ms),
        format!("  Log level   {}", config.log.level),
    ];
    lines.join("\n")
}
