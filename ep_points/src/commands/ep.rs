use ep_config::BotConfig;
use ep_core::chat::ChatContext;
use ep_ledger::SharedLedger;
use ep_permission::Permission;

use crate::error::{CommandError, CommandResult};

/// `ep @user`, read only.
pub async fn run(chat: &dyn ChatContext, ledger: &SharedLedger, config: &BotConfig) -> CommandResult {
    ep_permission::check_permission(chat, &config.roles, Permission::ViewPoints).await?;

    let user = match chat.mentioned_users()[..] {
        [user] => user,
        _ => return Err(CommandError::MissingQueryTarget),
    };
    let points = ledger.read().await.get(&user.to_string());

    chat.send_message(
        chat.origin_channel(),
        &format!("{} has **{}** EP.", user.mention(), points),
    )
    .await
    .map_err(CommandError::transport("read the EP ledger"))
}
