use crate::error::{self, Error};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Where a sorter places absent (`None`) values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NullPlacement {
    /// Absent values are handed to the base comparator like any other
    #[default]
    #[serde(alias = "off", alias = "none")]
    Disabled,
    /// Absent values are grouped at the start
    First,
    /// Absent values are grouped at the end
    Last,
}

impl NullPlacement {
    pub const DISABLED: &'static str = "disabled";
    pub const FIRST: &'static str = "first";
    pub const LAST: &'static str = "last";

    pub fn as_str(self) -> &'static str {
        match self {
            NullPlacement::Disabled => Self::DISABLED,
            NullPlacement::First => Self::FIRST,
            NullPlacement::Last => Self::LAST,
        }
    }

    /// Returns true if absent values are placed by the sorter
    pub fn is_enabled(self) -> bool {
        self != NullPlacement::Disabled
    }
}

impl fmt::Display for NullPlacement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NullPlacement {
    type Err = Error;

    fn from_str(s: &str) -> error::Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            Self::DISABLED | "off" | "none" => Ok(NullPlacement::Disabled),
            Self::FIRST => Ok(NullPlacement::First),
            Self::LAST => Ok(NullPlacement::Last),
            _ => Err(Error::InvalidNullPlacement(s.to_string())),
        }
    }
}

impl TryFrom<&str> for NullPlacement {
    type Error = Error;

    fn try_from(value: &str) -> error::Result<Self> {
        NullPlacement::from_str(value)
    }
}

/// The options a sorter orders by. Sorters never change their
/// options in place, deriving a sorter produces new options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct SorterOptions {
    /// Orders values as the base comparator does when true, and
    /// reversed when false
    pub ascending: bool,

    /// Configures how the sorter should sort absent values
    pub nulls: NullPlacement,
}

impl SorterOptions {
    /// Creates the default options: ascending, with null placement disabled
    pub const fn new() -> Self {
        Self {
            ascending: true,
            nulls: NullPlacement::Disabled,
        }
    }

    /// Merges a patch into the options, with the fields set in
    /// the patch taking precedence
    ///
    /// # Arguments
    ///
    /// `patch`: The fields to override
    pub fn merge(self, patch: OptionsPatch) -> Self {
        Self {
            ascending: patch.ascending.unwrap_or(self.ascending),
            nulls: patch.nulls.unwrap_or(self.nulls),
        }
    }
}

impl Default for SorterOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// A partial set of sorter options. Unset fields leave the
/// corresponding option untouched when merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OptionsPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ascending: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nulls: Option<NullPlacement>,
}

impl OptionsPatch {
    /// Creates an empty patch
    pub const fn new() -> Self {
        Self {
            ascending: None,
            nulls: None,
        }
    }

    /// Sets the direction
    pub const fn ascending(mut self, ascending: bool) -> Self {
        self.ascending = Some(ascending);
        self
    }

    /// Sets the null placement
    pub const fn nulls(mut self, nulls: NullPlacement) -> Self {
        self.nulls = Some(nulls);
        self
    }
}

impl From<SorterOptions> for OptionsPatch {
    fn from(options: SorterOptions) -> Self {
        Self {
            ascending: Some(options.ascending),
            nulls: Some(options.nulls),
        }
    }
}
