//! Line splitting and classification for MAINTAINERS files.
//!
//! A line is either a bare login (no space at all), one of the two
//! `<email>` layouts, or malformed.

use crate::maintainer::Maintainer;
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// `Jane Doe <jane@example.com> (@janedoe)`
static NAME_EMAIL_LOGIN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<name>.*) <(?P<email>.*)> \(@(?P<login>.*)\)$")
        .expect("name/email/login pattern is valid")
});

/// `janedoe <jane@example.com>`
static LOGIN_EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<login>.*) <(?P<email>.*)>$").expect("login/email pattern is valid")
});

/// The classification of a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// A line without spaces, taken whole as a login.
    BareLogin(&'a str),
    /// `<name> <<email>> (@<login>)`
    NameEmailLogin {
        name: &'a str,
        email: &'a str,
        login: &'a str,
    },
    /// `<login> <<email>>`
    LoginEmail { login: &'a str, email: &'a str },
    /// Contains spaces but matches neither layout.
    Malformed(&'a str),
}

impl LineKind<'_> {
    /// Builds the maintainer described by this line, or `None` if it is malformed.
    pub fn to_maintainer(&self) -> Option<Maintainer> {
        match *self {
            LineKind::BareLogin(login) => Some(Maintainer::from_login(login)),
            LineKind::NameEmailLogin { name, email, login } => Some(
                Maintainer::default()
                    .with_name(name)
                    .with_login(login)
                    .with_email(email),
            ),
            LineKind::LoginEmail { login, email } => {
                Some(Maintainer::from_login(login).with_email(email))
            }
            LineKind::Malformed(_) => None,
        }
    }

    /// Returns true if the line matched no layout.
    pub fn is_malformed(&self) -> bool {
        matches!(self, LineKind::Malformed(_))
    }
}

/// Splits `input` into lines, ending a line at `\n`, `\r\n` or a lone `\r`.
///
/// Terminators are not part of the yielded lines. A final line without a
/// terminator is yielded whole; a terminator at the very end adds no empty line.
pub fn split_lines(input: &str) -> impl Iterator<Item = &str> {
    let mut rest = input;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        match rest.find(|c: char| c == '\r' || c == '\n') {
            Some(pos) => {
                let line = &rest[..pos];
                let terminator = if rest[pos..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[pos + terminator..];
                Some(line)
            }
            None => {
                let line = rest;
                rest = "";
                Some(line)
            }
        }
    })
}

fn group<'h>(caps: &Captures<'h>, name: &str) -> &'h str {
    caps.name(name).map_or("", |m| m.as_str())
}

/// Classifies a line that has already had its line terminator removed.
///
/// The name/email/login layout is tried before login/email; both are
/// anchored to the whole line.
pub fn classify_line(line: &str) -> LineKind<'_> {
    if !line.contains(' ') {
        return LineKind::BareLogin(line);
    }

    if let Some(caps) = NAME_EMAIL_LOGIN.captures(line) {
        return LineKind::NameEmailLogin {
            name: group(&caps, "name"),
            email: group(&caps, "email"),
            login: group(&caps, "login"),
        };
    }

    if let Some(caps) = LOGIN_EMAIL.captures(line) {
        return LineKind::LoginEmail {
            login: group(&caps, "login"),
            email: group(&caps, "email"),
        };
    }

    LineKind::Malformed(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_login() {
        assert_eq!(classify_line("octocat"), LineKind::BareLogin("octocat"));
    }

    #[test]
    fn bare_login_keeps_punctuation() {
        assert_eq!(
            classify_line("octo<cat>@x"),
            LineKind::BareLogin("octo<cat>@x")
        );
    }

    #[test]
    fn empty_line_is_empty_login() {
        assert_eq!(classify_line(""), LineKind::BareLogin(""));
    }

    #[test]
    fn tab_is_not_a_space() {
        assert_eq!(classify_line("octo\tcat"), LineKind::BareLogin("octo\tcat"));
    }

    #[test]
    fn name_email_login() {
        assert_eq!(
            classify_line("Jane Doe <jane@example.com> (@janedoe)"),
            LineKind::NameEmailLogin {
                name: "Jane Doe",
                email: "jane@example.com",
                login: "janedoe",
            }
        );
    }

    #[test]
    fn login_email() {
        assert_eq!(
            classify_line("janedoe <jane@example.com>"),
            LineKind::LoginEmail {
                login: "janedoe",
                email: "jane@example.com",
            }
        );
    }

    #[test]
    fn name_layout_wins_over_login_layout() {
        let kind = classify_line("J D <j@example.com> (@jd)");
        assert!(matches!(kind, LineKind::NameEmailLogin { login: "jd", .. }));
    }

    #[test]
    fn captures_are_greedy() {
        assert_eq!(
            classify_line("a <b> <c>"),
            LineKind::LoginEmail {
                login: "a <b>",
                email: "c",
            }
        );
    }

    #[test]
    fn malformed_line() {
        assert_eq!(
            classify_line("this is not valid"),
            LineKind::Malformed("this is not valid")
        );
    }

    #[test]
    fn match_is_anchored_to_end() {
        assert!(classify_line("janedoe <jane@example.com> trailing").is_malformed());
        assert!(classify_line("Jane <jane@example.com> (@jane) x").is_malformed());
    }

    #[test]
    fn split_lines_on_every_terminator() {
        let lines: Vec<_> = split_lines("a\nb\r\nc\rd").collect();
        assert_eq!(lines, ["a", "b", "c", "d"]);
    }

    #[test]
    fn split_lines_keeps_blank_lines() {
        let lines: Vec<_> = split_lines("a\n\r\n\rb\n").collect();
        assert_eq!(lines, ["a", "", "", "b"]);
    }

    #[test]
    fn split_lines_trailing_terminator_adds_nothing() {
        assert_eq!(split_lines("a\r").collect::<Vec<_>>(), ["a"]);
        assert_eq!(split_lines("a\r\n").collect::<Vec<_>>(), ["a"]);
        assert_eq!(split_lines("").count(), 0);
    }

    #[test]
    fn split_lines_keeps_final_character() {
        let lines: Vec<_> = split_lines("octocat\nhubot").collect();
        assert_eq!(lines, ["octocat", "hubot"]);
    }

    #[test]
    fn to_maintainer_fields() {
        let maintainer = classify_line("Jane Doe <jane@example.com> (@janedoe)")
            .to_maintainer()
            .unwrap();
        assert_eq!(maintainer.name(), Some("Jane Doe"));
        assert_eq!(maintainer.login(), Some("janedoe"));
        assert_eq!(maintainer.email(), Some("jane@example.com"));

        let maintainer = classify_line("janedoe <jane@example.com>")
            .to_maintainer()
            .unwrap();
        assert_eq!(maintainer.name(), None);
        assert_eq!(maintainer.login(), Some("janedoe"));

        assert_eq!(classify_line("not valid").to_maintainer(), None);
    }
}
