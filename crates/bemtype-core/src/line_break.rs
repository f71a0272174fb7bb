//! Line separator selection for rendered output.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// The line separator written between rendered lines.
///
/// The names match external configuration strings (snake_case).
///
/// # Variants
///
/// - `Native` - The host platform's separator (default)
/// - `Lf` - `\n`
/// - `CrLf` - `\r\n`
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LineBreak {
    /// `\r\n` on Windows, `\n` everywhere else
    #[default]
    Native,
    /// Unix line feed
    Lf,
    /// Carriage return followed by line feed
    #[serde(rename = "crlf")]
    CrLf,
}

impl LineBreak {
    /// Returns the separator string this variant stands for.
    ///
    /// # Examples
    ///
    /// ```
    /// use bemtype_core::LineBreak;
    ///
    /// assert_eq!(LineBreak::Lf.as_str(), "\n");
    /// assert_eq!(LineBreak::CrLf.as_str(), "\r\n");
    /// ```
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Native => native_line_break(),
            Self::Lf => "\n",
            Self::CrLf => "\r\n",
        }
    }
}

/// The host platform's native line separator.
pub fn native_line_break() -> &'static str {
    if cfg!(windows) { "\r\n" } else { "\n" }
}

impl FromStr for LineBreak {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "native" => Ok(Self::Native),
            "lf" => Ok(Self::Lf),
            "crlf" => Ok(Self::CrLf),
            _ => Err("Unsupported line break"),
        }
    }
}

impl From<LineBreak> for &'static str {
    fn from(val: LineBreak) -> Self {
        match val {
            LineBreak::Native => "native",
            LineBreak::Lf => "lf",
            LineBreak::CrLf => "crlf",
        }
    }
}

impl fmt::Display for LineBreak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_break_from_str() {
        assert_eq!("native".parse(), Ok(LineBreak::Native));
        assert_eq!("lf".parse(), Ok(LineBreak::Lf));
        assert_eq!("crlf".parse(), Ok(LineBreak::CrLf));
        assert!("cr".parse::<LineBreak>().is_err());
    }

    #[test]
    fn test_line_break_display_round_trip() {
        for line_break in [LineBreak::Native, LineBreak::Lf, LineBreak::CrLf] {
            assert_eq!(line_break.to_string().parse(), Ok(line_break));
        }
    }

    #[test]
    fn test_native_matches_platform() {
        let expected = if cfg!(windows) { "\r\n" } else { "\n" };
        assert_eq!(LineBreak::Native.as_str(), expected);
        assert_eq!(LineBreak::default().as_str(), expected);
    }
}
