//! Parsing of `npm_config_user_agent`.
//!
//! Package managers export this variable to the scripts they run, formatted as
//! space-separated `name/version` tokens, e.g. `npm/10.2.0 node/v20.10.0 darwin arm64`.
//! Only the first token names the tool that is running the script.

/// The leading `name/version` token of a user agent string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserAgent<'a> {
    pub name: &'a str,
    pub version: &'a str,
}

impl<'a> UserAgent<'a> {
    /// Returns `None` when the first token carries no `/`.
    pub fn parse(raw: &'a str) -> Option<Self> {
        let first = raw.split(' ').next()?;
        let (name, version) = first.split_once('/')?;
        Some(Self { name, version })
    }
}
