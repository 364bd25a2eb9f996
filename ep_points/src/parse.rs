//! Text parsing for the commands, independent from the chat transport.

use ep_core::Id;

/// Strip `prefix` followed by `command` from the start of `content`, ignoring
/// case. Returns what follows, untrimmed.
pub fn strip_command<'a>(content: &'a str, prefix: &str, command: &str) -> Option<&'a str> {
    let full = format!("{}{}", prefix, command);
    let head = content.get(..full.len())?;
    if head.to_lowercase() == full.to_lowercase() {
        content.get(full.len()..)
    } else {
        None
    }
}

/// `<@id>` or the nickname form `<@!id>`.
pub fn parse_mention(token: &str) -> Option<Id> {
    let inner = token.strip_prefix("<@")?.strip_suffix('>')?;
    inner.strip_prefix('!').unwrap_or(inner).parse().ok()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidPoints(pub String);

/// A finite decimal number. Fractions are kept as is.
pub fn parse_points(token: &str) -> Result<f64, InvalidPoints> {
    match token.parse::<f64>() {
        Ok(points) if points.is_finite() => Ok(points),
        _ => Err(InvalidPoints(token.to_owned())),
    }
}

/// Find the first `<mention> N EP` annotation for `user` in the raw message.
///
/// Whitespace between the parts is optional and `EP` is case insensitive.
/// Nothing is required after `EP`.
pub fn find_ep_value(content: &str, user: Id) -> Option<f64> {
    mention_ends(content, user)
        .into_iter()
        .find_map(|end| annotation_after(&content[end..]))
}

/// `\s*(\d+(\.\d+)?)\s*EP` anchored at the start of `rest`. Numbers too
/// large for an `f64` do not count as an annotation.
fn annotation_after(rest: &str) -> Option<f64> {
    let rest = rest.trim_start();
    let int_len = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
    if int_len == 0 {
        return None;
    }
    let mut number_len = int_len;
    if let Some(fraction) = rest[int_len..].strip_prefix('.') {
        let frac_len = fraction
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(fraction.len());
        if frac_len > 0 {
            number_len = int_len + 1 + frac_len;
        }
    }
    let (number, tail) = rest.split_at(number_len);
    let unit = tail.trim_start().get(..2)?;
    if unit.eq_ignore_ascii_case("ep") {
        parse_points(number).ok()
    } else {
        None
    }
}

/// The value for `edit ep`: the token right after `user`'s first mention,
/// which may follow it without a space.
pub fn edit_value(args: &str, user: Id) -> Result<f64, InvalidPoints> {
    let token = mention_ends(args, user)
        .into_iter()
        .next()
        .and_then(|end| args[end..].split_whitespace().next());
    match token {
        Some(token) => parse_points(token),
        None => Err(InvalidPoints(String::new())),
    }
}

/// Byte offsets right after each `<@id>` or `<@!id>` of `user`, in order.
fn mention_ends(content: &str, user: Id) -> Vec<usize> {
    let forms = [user.mention(), format!("<@!{}>", user.0)];
    let mut spans: Vec<(usize, usize)> = forms
        .iter()
        .flat_map(|form| content.match_indices(form.as_str()))
        .map(|(at, form)| (at, at + form.len()))
        .collect();
    spans.sort_unstable();
    spans.into_iter().map(|(_, end)| end).collect()
}
