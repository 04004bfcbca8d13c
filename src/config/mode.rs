//! AOT compilation modes.

use std::fmt;

/// How much ahead-of-time transformation the build performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Full ahead-of-time build: functional and class-proxy sources are
    /// generated and compiled into the image.
    #[default]
    Native,
    /// Agent-assisted build: class proxies come from agent-collected
    /// configuration instead of generated sources.
    NativeAgent,
    /// Init-only build: only build-time initialization sources are
    /// generated.
    NativeInit,
}

impl Mode {
    /// Returns all mode variants.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Native, Self::NativeAgent, Self::NativeInit]
    }

    /// Returns the mode token as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Native => "native",
            Self::NativeAgent => "native-agent",
            Self::NativeInit => "native-init",
        }
    }

    /// Parses a mode from its token.
    ///
    /// Tokens are matched exactly; returns `None` for anything else.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "native" => Some(Self::Native),
            "native-agent" => Some(Self::NativeAgent),
            "native-init" => Some(Self::NativeInit),
            _ => None,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
