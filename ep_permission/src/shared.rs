use ep_config::RoleNames;
use ep_core::chat::{ChatContext, TransportError};

/// What a command needs the author to be allowed to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    /// `log`
    LogEvent,
    /// `ep`
    ViewPoints,
    /// `edit ep`
    EditPoints,
}

impl Permission {
    /// The role granting this permission.
    pub fn role(self, roles: &RoleNames) -> &str {
        match self {
            Permission::LogEvent => &roles.event_permission,
            Permission::ViewPoints => &roles.verified,
            Permission::EditPoints => &roles.ep_edit_permission,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PermissionError {
    #[error("missing the `{0}` role")]
    MissingRole(String),
    #[error("could not fetch the author's roles: {0}")]
    Lookup(#[from] TransportError),
}

pub fn has_role(roles: &[String], required: &str) -> bool {
    roles.iter().any(|r| r == required)
}

pub async fn check_permission(
    chat: &dyn ChatContext,
    roles: &RoleNames,
    permission: Permission,
) -> Result<(), PermissionError> {
    let required = permission.role(roles);
    let held = chat.sender_roles().await?;
    if !has_role(&held, required) {
        debug!(
            "{} lacks `{}` for {:?}",
            chat.author(),
            required,
            permission
        );
        return Err(PermissionError::MissingRole(required.to_owned()));
    }
    Ok(())
}
