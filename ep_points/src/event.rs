use chrono::NaiveDate;
use ep_core::Id;

/// Event kinds that can be logged. Names are matched case sensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
    Spar,
    SmallPatrol,
    Patrol,
    Ct,
    Dt,
    Gt,
    Tdm,
    CitadelChallenge,
    Gamenight,
}

impl EventType {
    /// In the order they are listed to users.
    pub const ALL: [EventType; 9] = [
        EventType::Spar,
        EventType::SmallPatrol,
        EventType::Patrol,
        EventType::Ct,
        EventType::Dt,
        EventType::Gt,
        EventType::Tdm,
        EventType::CitadelChallenge,
        EventType::Gamenight,
    ];

    pub fn name(self) -> &'static str {
        match self {
            EventType::Spar => "Spar",
            EventType::SmallPatrol => "Small Patrol",
            EventType::Patrol => "Patrol",
            EventType::Ct => "CT",
            EventType::Dt => "DT",
            EventType::Gt => "GT",
            EventType::Tdm => "TDM",
            EventType::CitadelChallenge => "Citadel Challenge",
            EventType::Gamenight => "Gamenight",
        }
    }

    /// `Spar, Small Patrol, ...`
    pub fn valid_names() -> String {
        Self::ALL
            .iter()
            .map(|e| e.name())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Match the event name at the start of the arguments.
    ///
    /// Multi word names are compared token by token, the longest name wins.
    /// On failure the first token is returned (empty if there is none).
    pub fn parse_leading(args: &str) -> Result<EventType, String> {
        let tokens: Vec<&str> = args.split_whitespace().collect();
        let mut candidates = Self::ALL;
        candidates.sort_by_key(|e| std::cmp::Reverse(e.name().split(' ').count()));
        candidates
            .into_iter()
            .find(|event| {
                let words: Vec<&str> = event.name().split(' ').collect();
                tokens.len() >= words.len() && tokens[..words.len()] == words[..]
            })
            .ok_or_else(|| tokens.first().copied().unwrap_or_default().to_owned())
    }
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Attendee {
    pub user: Id,
    pub points: f64,
}

/// One `log` invocation, rendered straight to text.
#[derive(Debug, Clone, PartialEq)]
pub struct EventRecord {
    pub kind: EventType,
    pub host: Id,
    pub date: NaiveDate,
    pub attendees: Vec<Attendee>,
}

impl EventRecord {
    pub fn new(kind: EventType, host: Id, date: NaiveDate, attendees: Vec<Attendee>) -> Self {
        Self {
            kind,
            host,
            date,
            attendees,
        }
    }

    pub fn render(&self) -> String {
        let attendees = self
            .attendees
            .iter()
            .map(|a| format!("{} {} EP", a.user.mention(), a.points))
            .collect::<Vec<_>>()
            .join(" | ");
        format!(
            "**Type:** {kind}\n**Host:** {host}\n**Date:** {date}\n\n**Attendees:** {attendees}",
            kind = self.kind,
            host = self.host.mention(),
            date = self.date.format("%b %-d, %Y"),
            attendees = attendees,
        )
    }
}
