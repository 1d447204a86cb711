use std::collections::HashMap;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::{EtrackerError, Result};

fn flag_pattern() -> &'static Regex {
    static FLAG: OnceLock<Regex> = OnceLock::new();
    FLAG.get_or_init(|| Regex::new(r"^--([A-Za-z][A-Za-z0-9-]*)$").unwrap())
}

/// Flag values pulled out of a command payload.
///
/// Grammar: a `--name` token opens a flag, and every following token up to the
/// next `--name` token (or the end) is its value, joined with single spaces.
/// Tokens before the first flag are ignored, and a repeated flag keeps its last
/// value. So `--description Pay a fee --amount 5` yields `description = "Pay a fee"`
/// and `amount = "5"`.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct FlagArgs {
    values: HashMap<String, String>,
    blank: bool,
}

impl FlagArgs {
    pub fn parse(payload: &str) -> Self {
        let mut values = HashMap::new();
        let mut current: Option<(String, Vec<&str>)> = None;

        for token in payload.split_whitespace() {
            if let Some(caps) = flag_pattern().captures(token) {
                if let Some((name, words)) = current.take() {
                    values.insert(name, words.join(" "));
                }
                current = Some((caps[1].to_string(), Vec::new()));
            } else if let Some((_, words)) = current.as_mut() {
                words.push(token);
            }
        }
        if let Some((name, words)) = current {
            values.insert(name, words.join(" "));
        }

        Self {
            values,
            blank: payload.trim().is_empty(),
        }
    }

    /// No payload text at all, flags or otherwise.
    pub fn is_blank(&self) -> bool {
        self.blank
    }

    /// Raw trimmed text of a flag; `Some("")` when the flag was given without a value.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(|v| v.trim())
    }

    /// Text of a flag, treating an empty value as absent.
    pub fn non_empty(&self, name: &str) -> Option<&str> {
        self.text(name).filter(|v| !v.is_empty())
    }

    pub fn description(&self) -> Option<&str> {
        self.non_empty("description")
    }

    pub fn category(&self) -> Option<&str> {
        self.non_empty("category")
    }

    pub fn amount(&self) -> Result<Option<f64>> {
        let Some(raw) = self.non_empty("amount") else {
            return Ok(None);
        };
        match raw.parse::<f64>() {
            Ok(v) if v.is_finite() => Ok(Some(v)),
            _ => Err(EtrackerError::InvalidAmount(raw.to_string())),
        }
    }

    pub fn id(&self) -> Result<Option<u64>> {
        self.digits("id")
    }

    pub fn month(&self) -> Result<Option<u32>> {
        self.digits("month")
    }

    fn digits<T: std::str::FromStr>(&self, flag: &'static str) -> Result<Option<T>> {
        let Some(raw) = self.non_empty(flag) else {
            return Ok(None);
        };
        if !raw.chars().all(|c| c.is_ascii_digit()) {
            return Err(EtrackerError::InvalidNumber {
                flag,
                value: raw.to_string(),
            });
        }
        raw.parse::<T>().map(Some).map_err(|_| EtrackerError::InvalidNumber {
            flag,
            value: raw.to_string(),
        })
    }
}
