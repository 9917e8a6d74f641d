//! Total mappings from a closed enumeration to an integer value.
//!
//! [`AttributesSet`](super::AttributesSet) and [`SkillsSet`](super::SkillsSet)
//! share one shape: a fixed array indexed by the enum discriminant. The same
//! type serves as an absolute snapshot (levels 0..=100) and as a delta, where
//! zero means "no change".
//!
//! With the `serde` feature, sets serialize as a map keyed by display name
//! (`{"Strength": 65, ...}`). Missing keys deserialize as zero so partial
//! modifiers round-trip; unknown keys are rejected.

/// Generates a set type keyed by `$key`.
///
/// `$key` must provide `COUNT`, `all()` and `as_index()`, and implement
/// `AsRef<str>` + `FromStr` for the serde representation.
macro_rules! stat_set {
    ($(#[$meta:meta])* $name:ident, $key:ident, $label:literal) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
        pub struct $name {
            values: [i32; $key::COUNT],
        }

        impl $name {
            /// Set with every entry at zero.
            pub const fn zero() -> Self {
                Self {
                    values: [0; $key::COUNT],
                }
            }

            /// Builds a set by evaluating `f` for every key.
            pub fn from_fn(mut f: impl FnMut($key) -> i32) -> Self {
                let mut set = Self::zero();
                for key in $key::all() {
                    set.values[key.as_index()] = f(key);
                }
                set
            }

            /// Builds a sparse set; keys not listed are zero.
            ///
            /// Repeated keys accumulate.
            pub fn from_pairs(pairs: &[($key, i32)]) -> Self {
                let mut set = Self::zero();
                for &(key, value) in pairs {
                    set.values[key.as_index()] += value;
                }
                set
            }

            #[inline]
            pub fn get(&self, key: $key) -> i32 {
                self.values[key.as_index()]
            }

            #[inline]
            pub fn set(&mut self, key: $key, value: i32) {
                self.values[key.as_index()] = value;
            }

            /// Returns a copy with `key` set to `value` (builder pattern).
            #[must_use]
            pub fn with(mut self, key: $key, value: i32) -> Self {
                self.set(key, value);
                self
            }

            /// Iterates `(key, value)` pairs in enumeration order.
            pub fn iter(&self) -> impl Iterator<Item = ($key, i32)> + '_ {
                $key::all().into_iter().map(move |key| (key, self.get(key)))
            }

            /// Sum of every entry.
            pub fn total(&self) -> i32 {
                self.values.iter().sum()
            }

            /// Sum of the entries for `keys`.
            pub fn total_of(&self, keys: &[$key]) -> i32 {
                keys.iter().map(|&key| self.get(key)).sum()
            }

            /// Number of entries strictly greater than zero.
            pub fn count_positive(&self) -> usize {
                self.values.iter().filter(|&&value| value > 0).count()
            }

            /// Raw values in enumeration order.
            #[inline]
            pub fn values(&self) -> &[i32; $key::COUNT] {
                &self.values
            }
        }

        impl core::ops::Index<$key> for $name {
            type Output = i32;

            #[inline]
            fn index(&self, key: $key) -> &i32 {
                &self.values[key.as_index()]
            }
        }

        impl core::ops::IndexMut<$key> for $name {
            #[inline]
            fn index_mut(&mut self, key: $key) -> &mut i32 {
                &mut self.values[key.as_index()]
            }
        }

        impl core::ops::Add for $name {
            type Output = Self;

            fn add(self, rhs: Self) -> Self {
                Self::from_fn(|key| self.get(key) + rhs.get(key))
            }
        }

        impl core::ops::Sub for $name {
            type Output = Self;

            fn sub(self, rhs: Self) -> Self {
                Self::from_fn(|key| self.get(key) - rhs.get(key))
            }
        }

        #[cfg(feature = "serde")]
        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                use serde::ser::SerializeMap;

                let mut map = serializer.serialize_map(Some($key::COUNT))?;
                for (key, value) in self.iter() {
                    map.serialize_entry(AsRef::<str>::as_ref(&key), &value)?;
                }
                map.end()
            }
        }

        #[cfg(feature = "serde")]
        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let raw = <std::collections::BTreeMap<String, i32> as serde::Deserialize>::deserialize(
                    deserializer,
                )?;
                let mut set = Self::zero();
                for (name, value) in raw {
                    let key: $key = name.parse().map_err(|_| {
                        serde::de::Error::custom(format_args!("unknown {} `{}`", $label, name))
                    })?;
                    set[key] = value;
                }
                Ok(set)
            }
        }
    };
}

pub(crate) use stat_set;
