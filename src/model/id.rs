//! Numeric identifiers assigned by the actors.
//!
//! Every id is a `u64` newtype so a menu item id cannot be passed where an
//! order id is expected. Ids render as plain decimal and parse from trimmed
//! decimal text.

use thiserror::Error;

/// Raised when raw text is not a decimal identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid identifier: {0:?}")]
pub struct IdParseError(pub String);

macro_rules! numeric_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            serde::Serialize,
            serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub u64);

        impl From<u64> for $name {
            fn from(id: u64) -> Self {
                Self(id)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = IdParseError;

            fn from_str(raw: &str) -> Result<Self, Self::Err> {
                let trimmed = raw.trim();
                if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(IdParseError(raw.to_string()));
                }
                trimmed
                    .parse::<u64>()
                    .map(Self)
                    .map_err(|_| IdParseError(raw.to_string()))
            }
        }
    };
}

numeric_id!(
    /// Identifier of a catalog entry.
    MenuItemId
);
numeric_id!(
    /// Identifier of an order, strictly increasing in creation order.
    OrderId
);
numeric_id!(
    /// Identifier of a line item, unique across all orders.
    LineItemId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(" 42 ".parse::<OrderId>(), Ok(OrderId(42)));
        assert_eq!("7\n".parse::<LineItemId>(), Ok(LineItemId(7)));
    }

    #[test]
    fn test_parse_rejects_malformed_text() {
        for raw in ["", "  ", "abc", "-1", "+3", "1.5", "99999999999999999999"] {
            assert_eq!(
                raw.parse::<MenuItemId>(),
                Err(IdParseError(raw.to_string())),
                "{raw:?} should not parse"
            );
        }
    }

    #[test]
    fn test_serializes_as_bare_number() {
        assert_eq!(serde_json::to_string(&OrderId(12)).unwrap(), "12");
        assert_eq!(OrderId(12).to_string(), "12");
    }
}
