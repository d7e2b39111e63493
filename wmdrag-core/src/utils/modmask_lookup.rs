use bitflags::bitflags;
use serde::{
    de::{SeqAccess, Visitor},
    Deserialize, Serialize,
};

bitflags! {
    /// Represents the state of modifier keys
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
    pub struct ModMask: u16 {
        /// Used as the zero value
        const Zero = 0;
        const Shift = 1 << 1;
        const Control = 1 << 2;
        /// Mod1
        const Alt = 1 << 3;
        /// Mod2
        const NumLock = 1 << 4;
        const Mod3 = 1 << 5;
        /// Mod4
        const Super = 1 << 6;
        const Mod5 = 1 << 7;
    }
}

impl ModMask {
    /// Drop lock modifiers which never take part in a binding.
    #[must_use]
    pub fn clean(self) -> Self {
        self.intersection(
            Self::Shift | Self::Control | Self::Alt | Self::Mod3 | Self::Super | Self::Mod5,
        )
    }
}

#[must_use]
pub fn into_mod(key: &str) -> ModMask {
    match key {
        "Shift" => ModMask::Shift,
        "Control" => ModMask::Control,
        "Mod1" | "Alt" => ModMask::Alt,
        "Mod2" | "NumLock" => ModMask::NumLock,
        "Mod3" => ModMask::Mod3,
        "Mod4" | "Super" => ModMask::Super,
        "Mod5" => ModMask::Mod5,
        _ => ModMask::Zero,
    }
}

// serde impls (derive is not working with the bitflags macro)

impl Serialize for ModMask {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u16(self.bits())
    }
}

impl<'de> Deserialize<'de> for ModMask {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct ModmaskVisitor;

        impl<'de> Visitor<'de> for ModmaskVisitor {
            type Value = ModMask;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("a modifier bitfield or a list of modifier names")
            }

            fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                u16::try_from(v)
                    .map(ModMask::from_bits_retain)
                    .map_err(|_| E::custom(format!("modifier bitfield out of range: {v}")))
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut mask = ModMask::Zero;
                while let Some(name) = seq.next_element::<String>()? {
                    let modifier = into_mod(&name);
                    if modifier.is_empty() {
                        return Err(serde::de::Error::custom(format!(
                            "unknown modifier: {name}"
                        )));
                    }
                    mask |= modifier;
                }
                Ok(mask)
            }
        }

        deserializer.deserialize_any(ModmaskVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_should_ignore_numlock() {
        let mask = ModMask::Super | ModMask::NumLock | ModMask::Shift;
        assert_eq!(mask.clean(), ModMask::Super | ModMask::Shift);
    }

    #[test]
    fn unknown_names_map_to_zero() {
        assert_eq!(into_mod("Hyper"), ModMask::Zero);
    }
}
