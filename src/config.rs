//! Line-grouping configuration

use thiserror::Error;

/// Errors raised while building a [`GroupingConfig`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Field indices are 1-based.
    #[error("field index must be at least 1")]
    ZeroFieldIndex,

    /// A zero-length prefix would put every line in one grouping.
    #[error("prefix length must be at least 1")]
    ZeroPrefixLength,
}

/// Which part of a line serves as its grouping criterion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeySelector {
    /// The whole line.
    Line,

    /// One delimited field.
    Field {
        /// 1-based field index.
        index: usize,
        /// Field separator; `None` splits on runs of whitespace.
        delimiter: Option<char>,
    },

    /// The first `n` characters.
    Prefix(usize),
}

impl KeySelector {
    /// Project `line` onto its key. Missing fields project to `""`.
    pub fn select<'a>(&self, line: &'a str) -> &'a str {
        match *self {
            KeySelector::Line => line,
            KeySelector::Field { index, delimiter } => index
                .checked_sub(1)
                .and_then(|nth| match delimiter {
                    Some(delimiter) => line.split(delimiter).nth(nth),
                    None => line.split_whitespace().nth(nth),
                })
                .unwrap_or(""),
            KeySelector::Prefix(n) => match line.char_indices().nth(n) {
                Some((cut, _)) => &line[..cut],
                None => line,
            },
        }
    }
}

/// Options for grouping the lines of an input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupingConfig {
    /// Key each line is grouped by.
    pub key: KeySelector,

    /// Compare keys case-insensitively.
    pub ignore_case: bool,

    /// Emit groupings from last to first.
    pub reverse: bool,

    /// Include each grouping's lines in rendered output.
    pub show_members: bool,
}

impl GroupingConfig {
    /// Group runs of identical lines.
    pub fn whole_lines() -> Self {
        Self::with_key(KeySelector::Line)
    }

    /// Group by the 1-based `index`-th field.
    pub fn by_field(index: usize, delimiter: Option<char>) -> Result<Self, ConfigError> {
        if index == 0 {
            return Err(ConfigError::ZeroFieldIndex);
        }
        Ok(Self::with_key(KeySelector::Field { index, delimiter }))
    }

    /// Group by the first `length` characters.
    pub fn by_prefix(length: usize) -> Result<Self, ConfigError> {
        if length == 0 {
            return Err(ConfigError::ZeroPrefixLength);
        }
        Ok(Self::with_key(KeySelector::Prefix(length)))
    }

    fn with_key(key: KeySelector) -> Self {
        Self {
            key,
            ignore_case: false,
            reverse: false,
            show_members: false,
        }
    }

    /// Compare keys case-insensitively.
    pub fn with_ignore_case(mut self, enabled: bool) -> Self {
        self.ignore_case = enabled;
        self
    }

    /// Emit groupings last to first.
    pub fn with_reverse(mut self, enabled: bool) -> Self {
        self.reverse = enabled;
        self
    }

    /// Include member lines in rendered output.
    pub fn with_members(mut self, enabled: bool) -> Self {
        self.show_members = enabled;
        self
    }

    /// Whether two keys fall in the same grouping under this configuration.
    pub fn keys_equivalent(&self, lhs: &str, rhs: &str) -> bool {
        if self.ignore_case {
            lhs.to_lowercase() == rhs.to_lowercase()
        } else {
            lhs == rhs
        }
    }
}

impl Default for GroupingConfig {
    fn default() -> Self {
        Self::whole_lines()
    }
}
