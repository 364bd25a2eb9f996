pub mod edit_ep;
pub mod ep;
pub mod log_cmd;

use ep_config::BotConfig;
use ep_core::chat::ChatContext;
use ep_ledger::SharedLedger;

use crate::error::CommandError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Log,
    Ep,
    EditEp,
}

impl Command {
    /// Tried in this order, the first match wins.
    pub const ALL: [Command; 3] = [Command::Log, Command::Ep, Command::EditEp];

    pub fn name(self) -> &'static str {
        match self {
            Command::Log => "log",
            Command::Ep => "ep",
            Command::EditEp => "edit ep",
        }
    }

    /// The command `content` invokes, with the arguments that follow it.
    pub fn parse<'a>(content: &'a str, prefix: &str) -> Option<(Command, &'a str)> {
        Self::ALL.into_iter().find_map(|command| {
            crate::parse::strip_command(content, prefix, command.name()).map(|args| (command, args))
        })
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Run the command carried by the message, if any, and report its failure in
/// the chat. Returns the command that ran.
pub async fn dispatch(
    chat: &dyn ChatContext,
    ledger: &SharedLedger,
    config: &BotConfig,
) -> Option<Command> {
    let (command, args) = Command::parse(chat.content(), &config.prefix)?;
    debug!("[{}] invoked by {}", command, chat.author());
    let res = match command {
        Command::Log => log_cmd::run(chat, ledger, config, args).await,
        Command::Ep => ep::run(chat, ledger, config).await,
        Command::EditEp => edit_ep::run(chat, ledger, config, args).await,
    };
    if let Err(e) = res {
        report(chat, command, e).await;
    }
    Some(command)
}

async fn report(chat: &dyn ChatContext, command: Command, error: CommandError) {
    let error: ep_core::Error = error.into();
    let sent = match &error {
        ep_core::Error::Reply(msg) => {
            debug!("[{}] refused: {}", command, msg);
            chat.reply(msg).await
        }
        ep_core::Error::Message(msg) => {
            debug!("[{}] rejected: {}", command, msg);
            chat.send_message(chat.origin_channel(), msg).await
        }
        ep_core::Error::Error(err) => {
            error!("[{}]{}", command, err);
            Ok(())
        }
        ep_core::Error::Both { msg, err } => {
            error!("[{}]{}", command, err);
            chat.send_message(chat.origin_channel(), msg).await
        }
    };
    let _ = sent.map_err(|e| error!("Error when sending message: {}", e));
}
