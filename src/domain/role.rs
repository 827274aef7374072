use serde::Serialize;

/// Which side of a delivery the person signing up wants to be on.
///
/// Serializes to the lowercase strings the registration backend expects.
/// ```
/// use fetchitt::domain::Role;
///
/// assert_eq!(Role::default(), Role::Sender);
/// assert_eq!("fetcher", Role::parse("fetcher").unwrap().as_str());
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Wants an item fetched or delivered.
    #[default]
    Sender,
    /// Offers to do the fetching.
    Fetcher,
}

impl Role {
    pub const ALL: [Role; 2] = [Role::Sender, Role::Fetcher];

    /// Returns `Ok` with the matching `Role`, otherwise `Err` with an error message.
    pub fn parse(s: &str) -> Result<Self, String> {
        match s {
            "sender" => Ok(Self::Sender),
            "fetcher" => Ok(Self::Fetcher),
            other => Err(format!("{} is not a valid role.", other)),
        }
    }

    /// The name the backend and the HTML form use for this role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Sender => "sender",
            Role::Fetcher => "fetcher",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
