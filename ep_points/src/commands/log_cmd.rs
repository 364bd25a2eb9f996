use ep_config::{BotConfig, LogChannel};
use ep_core::chat::ChatContext;
use ep_ledger::SharedLedger;
use ep_permission::Permission;

use crate::error::{CommandError, CommandResult};
use crate::event::{Attendee, EventRecord, EventType};

const ACTION: &str = "log the event";

/// `log <event> @user N EP [@user N EP ...]`
///
/// Credits every annotated attendee, flushes the ledger, then posts the
/// summary. The ledger is not rolled back if posting fails.
pub async fn run(
    chat: &dyn ChatContext,
    ledger: &SharedLedger,
    config: &BotConfig,
    args: &str,
) -> CommandResult {
    ep_permission::check_permission(chat, &config.roles, Permission::LogEvent).await?;

    let event = EventType::parse_leading(args).map_err(CommandError::UnknownEventType)?;

    let mentions = chat.mentioned_users();
    if mentions.is_empty() {
        return Err(CommandError::MissingAttendees);
    }

    let attendees: Vec<Attendee> = mentions
        .into_iter()
        .filter_map(|user| {
            crate::parse::find_ep_value(chat.content(), user).map(|points| Attendee { user, points })
        })
        .collect();
    if attendees.is_empty() {
        return Err(CommandError::NoEpValues);
    }

    {
        let mut ledger = ledger.write().await;
        // All or nothing: one total out of range credits nobody.
        for attendee in &attendees {
            ledger.total_after(&attendee.user.to_string(), attendee.points)?;
        }
        for attendee in &attendees {
            let total = ledger.add(&attendee.user.to_string(), attendee.points)?;
            debug!("[log] {} +{} EP, now {}", attendee.user, attendee.points, total);
        }
        ledger.flush()?;
    }

    let record = EventRecord::new(
        event,
        chat.author(),
        chrono::Local::now().date_naive(),
        attendees,
    );
    let target = post_record(chat, config, &record).await?;
    info!(
        "[log] {} logged {} with {} attendees to {}",
        record.host,
        record.kind,
        record.attendees.len(),
        target
    );

    chat.send_message(
        chat.origin_channel(),
        &format!(
            "✅ Successfully logged **{}** with **{}** attendees to {}.",
            record.kind,
            record.attendees.len(),
            target.channel_mention()
        ),
    )
    .await
    .map_err(CommandError::transport(ACTION))
}

/// Send the summary where it belongs and return that channel.
async fn post_record(
    chat: &dyn ChatContext,
    config: &BotConfig,
    record: &EventRecord,
) -> Result<ep_core::Id, CommandError> {
    let target = match config.log_channel() {
        LogChannel::Origin => chat.origin_channel(),
        LogChannel::Channel(id) => match chat
            .fetch_channel(id)
            .await
            .map_err(CommandError::transport(ACTION))?
        {
            Some(channel) if channel.sendable => channel.id,
            _ => return Err(CommandError::ChannelResolution(id.to_string())),
        },
        LogChannel::Invalid(raw) => return Err(CommandError::ChannelResolution(raw)),
    };

    chat.send_message(target, &record.render())
        .await
        .map_err(CommandError::transport(ACTION))?;
    Ok(target)
}
