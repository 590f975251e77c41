use sea_orm::DatabaseConnection;

use crate::error::AppError;
use crate::model::Monitor;
use crate::service::MonitorService;

/// Handles `/cliplist`: lists the Twitch channels monitored in the guild.
pub async fn run(db: &DatabaseConnection, guild_id: &str) -> Result<String, AppError> {
    let monitors = MonitorService::new(db).list_monitors(guild_id).await?;

    Ok(render_monitor_list(&monitors))
}

fn render_monitor_list(monitors: &[Monitor]) -> String {
    if monitors.is_empty() {
        return "No Twitch channels are monitored in this server. Use `/clipz` to add one."
            .to_string();
    }

    let mut lines = vec!["**Monitored Twitch channels:**".to_string()];

    for monitor in monitors {
        lines.push(format!(
            "• **{}** posting to <#{}>",
            monitor.twitch_channel, monitor.discord_channel_id
        ));
    }

    lines.join("\n")
}
