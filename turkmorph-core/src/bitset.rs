//! Fixed-width set types over small enums
//!
//! Attribute and expectation sets are compared, hashed and used as map keys
//! constantly during compilation and search, so they are stored as plain
//! integers rather than hash sets.

/// Declares a `Copy` bitset over an enum that exposes `ALL` and `bit()`.
macro_rules! enum_set {
    ($(#[$meta:meta])* $set:ident, $elem:ident, $repr:ty) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
        pub struct $set($repr);

        impl $set {
            /// The empty set
            pub const fn empty() -> Self {
                Self(0)
            }

            /// Raw bit pattern; doubles as the canonical id of the set
            pub const fn bits(self) -> $repr {
                self.0
            }

            /// Rebuild a set from a bit pattern produced by [`Self::bits`]
            pub const fn from_bits(bits: $repr) -> Self {
                Self(bits)
            }

            /// Whether the element is present
            pub fn contains(self, elem: $elem) -> bool {
                self.0 & elem.bit() != 0
            }

            /// Whether every element of `other` is present
            pub fn contains_all(self, other: Self) -> bool {
                self.0 & other.0 == other.0
            }

            /// Whether at least one element of `other` is present
            pub fn contains_any(self, other: Self) -> bool {
                self.0 & other.0 != 0
            }

            /// Add an element in place
            pub fn insert(&mut self, elem: $elem) {
                self.0 |= elem.bit();
            }

            /// Remove an element in place
            pub fn remove(&mut self, elem: $elem) {
                self.0 &= !elem.bit();
            }

            /// Copy with the element added
            #[must_use]
            pub fn with(self, elem: $elem) -> Self {
                Self(self.0 | elem.bit())
            }

            /// Copy with the element removed
            #[must_use]
            pub fn without(self, elem: $elem) -> Self {
                Self(self.0 & !elem.bit())
            }

            /// Elements present in both sets
            #[must_use]
            pub fn intersection(self, other: Self) -> Self {
                Self(self.0 & other.0)
            }

            /// Elements present in either set
            #[must_use]
            pub fn union(self, other: Self) -> Self {
                Self(self.0 | other.0)
            }

            /// Whether the set has no elements
            pub fn is_empty(self) -> bool {
                self.0 == 0
            }

            /// Number of elements
            pub fn len(self) -> usize {
                self.0.count_ones() as usize
            }

            /// Elements in declaration order
            pub fn iter(self) -> impl Iterator<Item = $elem> {
                $elem::ALL.into_iter().filter(move |e| self.contains(*e))
            }
        }

        impl FromIterator<$elem> for $set {
            fn from_iter<I: IntoIterator<Item = $elem>>(iter: I) -> Self {
                let mut set = Self::empty();
                for elem in iter {
                    set.insert(elem);
                }
                set
            }
        }

        impl<const N: usize> From<[$elem; N]> for $set {
            fn from(elems: [$elem; N]) -> Self {
                elems.into_iter().collect()
            }
        }

        impl std::fmt::Debug for $set {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.debug_set().entries(self.iter()).finish()
            }
        }
    };
}

pub(crate) use enum_set;
