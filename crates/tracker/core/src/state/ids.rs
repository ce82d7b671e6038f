use std::borrow::Borrow;
use std::fmt;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        pub struct $name(String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }
    };
}

string_id!(
    /// Identifier of a turn-order entry: a token on the tabletop, or the
    /// round counter sentinel.
    ActorId
);

string_id!(
    /// Identifier of a chat participant issuing commands.
    PlayerId
);

string_id!(
    /// Identifier of the character sheet a token represents.
    CharacterId
);

impl ActorId {
    /// Reserved identifier of the round counter entry.
    pub const ROUND_COUNTER: &'static str = "-1";

    pub fn round_counter() -> Self {
        Self::new(Self::ROUND_COUNTER)
    }

    /// Returns true if this identifier names the round counter sentinel.
    #[inline]
    pub fn is_round_counter(&self) -> bool {
        self.0 == Self::ROUND_COUNTER
    }
}

/// Round number projected from the round counter sentinel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Round(pub u32);

impl Round {
    pub const ZERO: Self = Self(0);
}

impl fmt::Display for Round {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_counter_id_is_reserved() {
        assert!(ActorId::round_counter().is_round_counter());
        assert!(!ActorId::new("token-1").is_round_counter());
        assert_eq!(ActorId::round_counter(), "-1");
    }

    #[test]
    fn rounds_order_numerically() {
        assert!(Round(2) > Round(1));
        assert!(Round::ZERO < Round(1));
        assert_eq!(Round(10).to_string(), "10");
    }
}
