//! The maintainer record.
//!
//! A [`Maintainer`] is built once per classified line of a MAINTAINERS file
//! and is read-only afterwards.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::fmt::{self, Display};

/// Text used wherever an absent field is rendered for humans.
pub const ABSENT: &str = "None";

/// A single project maintainer.
///
/// Every field is optional and none is validated. Two maintainers are equal
/// when all three fields are equal, absent fields included.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Maintainer {
    name: Option<String>,
    login: Option<String>,
    email: Option<String>,
}

impl Maintainer {
    /// Creates a maintainer from the given fields.
    pub fn new(name: Option<String>, login: Option<String>, email: Option<String>) -> Self {
        Self { name, login, email }
    }

    /// Creates a maintainer that only has a login, as produced by a bare-login line.
    pub fn from_login(login: impl Into<String>) -> Self {
        Self {
            login: Some(login.into()),
            ..Default::default()
        }
    }

    /// Sets the name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the login.
    pub fn with_login(mut self, login: impl Into<String>) -> Self {
        self.login = Some(login.into());
        self
    }

    /// Sets the email.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// The maintainer's name, if known.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The maintainer's login, if known.
    pub fn login(&self) -> Option<&str> {
        self.login.as_deref()
    }

    /// The maintainer's email, if known.
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// Returns a JSON object with exactly the keys `name`, `login` and `email`.
    ///
    /// Absent fields are `null`; they are never omitted.
    pub fn to_json(&self) -> Value {
        json!({
            "name": self.name,
            "login": self.login,
            "email": self.email,
        })
    }

    /// Serializes the maintainer to a compact JSON string, keys in field order.
    pub fn to_json_string(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Structural representation, e.g. `Maintainer(name="Jane Doe", login="janedoe", email=None)`.
    ///
    /// Present fields are quoted, absent fields render as a bare `None`, so a
    /// missing field never collides with the text `"None"`.
    pub fn repr(&self) -> String {
        format!(
            "Maintainer(name={}, login={}, email={})",
            quoted(&self.name),
            quoted(&self.login),
            quoted(&self.email)
        )
    }
}

fn quoted(field: &Option<String>) -> String {
    match field {
        Some(value) => format!("\"{}\"", value),
        None => ABSENT.to_string(),
    }
}

fn or_absent(field: &Option<String>) -> &str {
    field.as_deref().unwrap_or(ABSENT)
}

impl Display for Maintainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "name={}, login={}, email={}",
            or_absent(&self.name),
            or_absent(&self.login),
            or_absent(&self.email)
        )
    }
}
