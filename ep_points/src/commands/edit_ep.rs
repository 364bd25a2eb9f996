use ep_config::BotConfig;
use ep_core::chat::ChatContext;
use ep_ledger::SharedLedger;
use ep_permission::Permission;

use crate::error::{CommandError, CommandResult};

/// `edit ep @user N`, overwrites the total.
pub async fn run(
    chat: &dyn ChatContext,
    ledger: &SharedLedger,
    config: &BotConfig,
    args: &str,
) -> CommandResult {
    ep_permission::check_permission(chat, &config.roles, Permission::EditPoints).await?;

    let user = match chat.mentioned_users().first() {
        Some(user) => *user,
        None => return Err(CommandError::MissingEditTarget),
    };
    let points = crate::parse::edit_value(args, user)
        .map_err(|invalid| CommandError::InvalidNumber(invalid.0))?;

    {
        let mut ledger = ledger.write().await;
        let previous = ledger.get(&user.to_string());
        ledger.set(&user.to_string(), points);
        ledger.flush()?;
        info!(
            "[edit ep] {} set {} from {} to {} EP",
            chat.author(),
            user,
            previous,
            points
        );
    }

    chat.send_message(
        chat.origin_channel(),
        &format!("✅ Set {}'s EP to **{}**.", user.mention(), points),
    )
    .await
    .map_err(CommandError::transport("update the EP ledger"))
}
