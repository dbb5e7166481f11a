use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{LogoError, LogoResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TickConversion {
    /// `%d` / `%i`: integer part, truncated toward zero.
    Integer,
    /// `%f` / `%.Nf`: fixed decimals, 6 when no precision is given.
    Fixed { precision: usize },
    /// `%s`: shortest round-trip representation.
    Plain,
}

/// printf-style tick label template with exactly one conversion, e.g.
/// `"%d"`, `"pos %.1f"`, `"%d%%"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TickLabelFormat {
    prefix: String,
    conversion: TickConversion,
    suffix: String,
}

impl TickLabelFormat {
    #[must_use]
    pub fn integer() -> Self {
        Self {
            prefix: String::new(),
            conversion: TickConversion::Integer,
            suffix: String::new(),
        }
    }

    #[must_use]
    pub fn conversion(&self) -> TickConversion {
        self.conversion
    }

    pub fn parse(template: &str) -> LogoResult<Self> {
        let mut prefix = String::new();
        let mut suffix = String::new();
        let mut conversion = None;
        let mut chars = template.chars().peekable();

        while let Some(ch) = chars.next() {
            if ch != '%' {
                if conversion.is_some() {
                    suffix.push(ch);
                } else {
                    prefix.push(ch);
                }
                continue;
            }

            let mut precision_digits = None;
            if chars.peek() == Some(&'.') {
                chars.next();
                let mut digits = String::new();
                while let Some(digit) = chars.peek().copied().filter(char::is_ascii_digit) {
                    digits.push(digit);
                    chars.next();
                }
                precision_digits = Some(digits);
            }

            let parsed = match (chars.next(), precision_digits) {
                (Some('%'), None) => {
                    if conversion.is_some() {
                        suffix.push('%');
                    } else {
                        prefix.push('%');
                    }
                    continue;
                }
                (Some('d' | 'i'), None) => TickConversion::Integer,
                (Some('s'), None) => TickConversion::Plain,
                (Some('f'), None) => TickConversion::Fixed { precision: 6 },
                (Some('f'), Some(digits)) => TickConversion::Fixed {
                    precision: digits.parse().unwrap_or(0),
                },
                (other, _) => {
                    return Err(LogoError::InvalidConfig(format!(
                        "unsupported tick format `{template}` near {:?}",
                        other.map(String::from).unwrap_or_default()
                    )));
                }
            };
            if conversion.replace(parsed).is_some() {
                return Err(LogoError::InvalidConfig(format!(
                    "tick format `{template}` must contain exactly one conversion"
                )));
            }
        }

        let conversion = conversion.ok_or_else(|| {
            LogoError::InvalidConfig(format!(
                "tick format `{template}` must contain exactly one conversion"
            ))
        })?;
        Ok(Self {
            prefix,
            conversion,
            suffix,
        })
    }

    #[must_use]
    pub fn format(&self, value: f64) -> String {
        let body = match self.conversion {
            TickConversion::Integer => format!("{:.0}", value.trunc() + 0.0),
            TickConversion::Fixed { precision } => format!("{value:.precision$}"),
            TickConversion::Plain => format!("{value:?}"),
        };
        format!("{}{body}{}", self.prefix, self.suffix)
    }
}

impl Default for TickLabelFormat {
    fn default() -> Self {
        Self::integer()
    }
}

impl FromStr for TickLabelFormat {
    type Err = LogoError;

    fn from_str(template: &str) -> LogoResult<Self> {
        Self::parse(template)
    }
}

impl TryFrom<String> for TickLabelFormat {
    type Error = LogoError;

    fn try_from(template: String) -> LogoResult<Self> {
        Self::parse(&template)
    }
}

impl From<TickLabelFormat> for String {
    fn from(format: TickLabelFormat) -> Self {
        format.to_string()
    }
}

impl fmt::Display for TickLabelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let escape = |text: &str| text.replace('%', "%%");
        let conversion = match self.conversion {
            TickConversion::Integer => "%d".to_owned(),
            TickConversion::Fixed { precision } => format!("%.{precision}f"),
            TickConversion::Plain => "%s".to_owned(),
        };
        write!(
            f,
            "{}{conversion}{}",
            escape(&self.prefix),
            escape(&self.suffix)
        )
    }
}
