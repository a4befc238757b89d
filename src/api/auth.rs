use serde::{Deserialize, Serialize};

use crate::Config;

/// Spotify authentication token
///
/// Obtaining and refreshing the token is left to the caller. Any of the
/// authorization flows produce a token that can be used here.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub token_type: String,
}

impl Token {
    pub fn new<A: Into<String>, T: Into<String>>(access_token: A, token_type: T) -> Self {
        Self {
            access_token: access_token.into(),
            token_type: token_type.into(),
        }
    }

    pub fn bearer<A: Into<String>>(access_token: A) -> Self {
        Self::new(access_token, "Bearer")
    }

    pub fn access(&self) -> &str {
        &self.access_token
    }

    pub fn ttype(&self) -> &str {
        &self.token_type
    }

    /// Value for the `Authorization` header
    pub fn to_header(&self) -> String {
        format!("{} {}", self.ttype(), self.access())
    }
}

impl From<&Config> for Token {
    fn from(config: &Config) -> Self {
        Self::new(config.access_token.as_str(), config.token_type.as_str())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn header_from_config() {
        let token = Token::from(&Config::new("abc"));
        assert_eq!(token, Token::bearer("abc"));
        assert_eq!(token.to_header(), "Bearer abc");
    }
}
