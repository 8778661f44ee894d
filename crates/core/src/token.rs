use core::fmt;

/// A field value recognised as `true` or `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoolToken {
    True,
    False,
}

impl BoolToken {
    /// Classify an already cleaned field (see [`crate::parser::clean_field`]).
    ///
    /// The comparison is ASCII case-insensitive and exact: quotes or padding
    /// left in the field make it non-boolean.
    #[must_use]
    pub fn parse(field: &str) -> Option<Self> {
        if field.eq_ignore_ascii_case("true") {
            Some(Self::True)
        } else if field.eq_ignore_ascii_case("false") {
            Some(Self::False)
        } else {
            None
        }
    }

    /// Lower-case spelling used in combination keys.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::True => "true",
            Self::False => "false",
        }
    }
}

impl From<bool> for BoolToken {
    fn from(value: bool) -> Self {
        if value { Self::True } else { Self::False }
    }
}

impl From<BoolToken> for bool {
    fn from(token: BoolToken) -> Self {
        matches!(token, BoolToken::True)
    }
}

impl fmt::Display for BoolToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns `true` when `field` is a boolean token.
#[must_use]
pub fn is_boolean(field: &str) -> bool {
    BoolToken::parse(field).is_some()
}
