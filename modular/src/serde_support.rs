//! `serde` support. A value is serialized as the decimal text of its representative and
//! deserialized from decimal text, reducing modulo `P` on the way in.

use std::fmt;

use serde::de::{Error, Unexpected, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{Modular, Residue};

impl<const P: Residue> Serialize for Modular<P> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de, const P: Residue> Deserialize<'de> for Modular<P> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ModularVisitor<const P: Residue>;

        impl<'de, const P: Residue> Visitor<'de> for ModularVisitor<P> {
            type Value = Modular<P>;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "a signed decimal integer")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: Error,
            {
                v.parse()
                    .map_err(|_| E::invalid_value(Unexpected::Str(v), &self))
            }

            fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
            where
                E: Error,
            {
                Ok(Modular::new(v))
            }

            fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
            where
                E: Error,
            {
                // Reduced before narrowing, so values above `Residue::MAX` are accepted too.
                let modulus = Modular::<P>::MODULUS as u64;
                Ok(Modular::from_canonical((v % modulus) as Residue))
            }
        }

        // Self-describing formats may also carry the value as a bare integer.
        if deserializer.is_human_readable() {
            deserializer.deserialize_any(ModularVisitor::<P>)
        } else {
            deserializer.deserialize_str(ModularVisitor::<P>)
        }
    }
}
