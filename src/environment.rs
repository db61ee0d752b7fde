use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

/// Base URL of the public Art Institute of Chicago API.
pub const ARTIC_API_URL: &str = "https://api.artic.edu/api/v1";

/// CORS relay that returns the raw body of the URL passed in its `url` parameter.
pub const RELAY_URL: &str = "https://api.allorigins.win/raw";

/// Where catalog requests are sent.
#[derive(Clone, Default, PartialEq, Eq)]
pub enum Environment {
    /// Talk to the catalog API directly.
    #[default]
    Direct,
    /// Route every request through the CORS relay.
    Relay,
    /// A self-hosted mirror or a local stub server.
    Custom { api_url: String },
}

impl Environment {
    /// Returns the catalog API base URL associated with the environment.
    pub fn api_url(&self) -> String {
        match self {
            Environment::Direct | Environment::Relay => ARTIC_API_URL.to_string(),
            Environment::Custom { api_url } => api_url.trim_end_matches('/').to_string(),
        }
    }

    /// Turns a fully built catalog URL into the URL that actually goes on the wire.
    pub fn request_url(&self, target: &str) -> String {
        match self {
            Environment::Relay => format!("{}?url={}", RELAY_URL, urlencoding::encode(target)),
            _ => target.to_string(),
        }
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_lowercase().as_str() {
            "" | "direct" | "production" => Ok(Environment::Direct),
            "relay" | "proxy" => Ok(Environment::Relay),
            lower if lower.starts_with("http://") || lower.starts_with("https://") => {
                Ok(Environment::Custom {
                    api_url: trimmed.to_string(),
                })
            }
            _ => Err(format!(
                "Unknown environment '{}': expected 'direct', 'relay' or an http(s) URL",
                trimmed
            )),
        }
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Direct => write!(f, "Direct"),
            Environment::Relay => write!(f, "Relay"),
            Environment::Custom { api_url } => write!(f, "Custom ({})", api_url),
        }
    }
}

impl Debug for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Environment::{}, URL: {}", self, self.api_url())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_environments() {
        assert_eq!("direct".parse::<Environment>(), Ok(Environment::Direct));
        assert_eq!("".parse::<Environment>(), Ok(Environment::Direct));
        assert_eq!("RELAY".parse::<Environment>(), Ok(Environment::Relay));
        assert_eq!(
            "http://localhost:8080/api/v1/".parse::<Environment>(),
            Ok(Environment::Custom {
                api_url: "http://localhost:8080/api/v1/".to_string()
            })
        );
        assert!("staging".parse::<Environment>().is_err());
    }

    #[test]
    fn test_custom_url_drops_trailing_slash() {
        let env = Environment::Custom {
            api_url: "http://localhost:8080/api/v1/".to_string(),
        };
        assert_eq!(env.api_url(), "http://localhost:8080/api/v1");
    }

    #[test]
    fn test_relay_wraps_target_url() {
        let target = "https://api.artic.edu/api/v1/artworks?page=2&limit=12";
        let wrapped = Environment::Relay.request_url(target);
        assert_eq!(
            wrapped,
            "https://api.allorigins.win/raw?url=https%3A%2F%2Fapi.artic.edu%2Fapi%2Fv1%2Fartworks%3Fpage%3D2%26limit%3D12"
        );
        assert_eq!(Environment::Direct.request_url(target), target);
    }
}
