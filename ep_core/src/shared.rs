/// A discord snowflake, decoupled from serenity's typed ids so the command
/// logic can be driven without a gateway connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Id(pub u64);

impl Id {
    /// `<@id>`
    pub fn mention(self) -> String {
        format!("<@{}>", self.0)
    }

    /// `<#id>`
    pub fn channel_mention(self) -> String {
        format!("<#{}>", self.0)
    }
}

impl std::fmt::Display for Id {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("`{0}` is not a valid discord id")]
pub struct InvalidId(pub String);

impl std::str::FromStr for Id {
    type Err = InvalidId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().parse::<u64>() {
            Ok(0) | Err(_) => Err(InvalidId(s.into())),
            Ok(id) => Ok(Self(id)),
        }
    }
}

impl From<serenity::model::id::UserId> for Id {
    fn from(id: serenity::model::id::UserId) -> Self {
        Self(id.get())
    }
}

impl From<serenity::model::id::ChannelId> for Id {
    fn from(id: serenity::model::id::ChannelId) -> Self {
        Self(id.get())
    }
}

#[cfg(test)]
mod tests {
    use super::Id;

    #[test]
    fn mentions() {
        assert_eq!(Id(42).mention(), "<@42>");
        assert_eq!(Id(42).channel_mention(), "<#42>");
        assert_eq!(Id(42).to_string(), "42");
    }

    #[test]
    fn parse_rejects_zero_and_garbage() {
        assert_eq!(" 1234 ".parse::<Id>(), Ok(Id(1234)));
        assert!("0".parse::<Id>().is_err());
        assert!("abc".parse::<Id>().is_err());
        assert!("".parse::<Id>().is_err());
    }
}
