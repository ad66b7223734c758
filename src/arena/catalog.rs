//! Simulated integer types
//!
//! A [`SimulatedType`] describes one fixed-width integer (`int8_t`, `uint32_t`, ...)
//! by its width and signedness. Its bounds are always derived from those two
//! fields, so they are the exact two's-complement limits by construction.
//!
//! [`TypeCatalog`] is the ordered, read-only registry the round generator picks
//! from.

use super::errors::ArenaError;
use super::wrap::{is_supported_width, wrap, Wide};
use rand::Rng;
use rustc_hash::FxHashMap;
use std::fmt;

/// A fixed-width integer type simulated in the wide accumulator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulatedType {
    name: String,
    bits: u32,
    signed: bool,
    min: Wide,
    max: Wide,
}

impl SimulatedType {
    /// Declare a type, rejecting widths the wraparound engine cannot fold
    pub fn new(name: impl Into<String>, bits: u32, signed: bool) -> Result<Self, ArenaError> {
        let name = name.into();
        if !is_supported_width(bits, signed) {
            return Err(ArenaError::UnsupportedWidth {
                name,
                bits,
                signedness: if signed { "signed" } else { "unsigned" },
            });
        }

        let (min, max) = bounds(bits, signed);
        Ok(SimulatedType {
            name,
            bits,
            signed,
            min,
            max,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bits(&self) -> u32 {
        self.bits
    }

    pub fn is_signed(&self) -> bool {
        self.signed
    }

    /// Smallest representable value
    pub fn min(&self) -> Wide {
        self.min
    }

    /// Largest representable value
    pub fn max(&self) -> Wide {
        self.max
    }

    /// Check if `value` is representable without wrapping
    pub fn contains(&self, value: Wide) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Fold a wide result into this type's representation
    pub fn wrap(&self, value: Wide) -> Wide {
        wrap(value, self.bits, self.signed)
    }
}

impl fmt::Display for SimulatedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Two's-complement bounds for a supported width
fn bounds(bits: u32, signed: bool) -> (Wide, Wide) {
    if signed {
        let half: Wide = 1 << (bits - 1);
        (-half, half - 1)
    } else {
        (0, (1 << bits) - 1)
    }
}

/// Widths and signedness of the standard arena types, in menu order
const STANDARD_TYPES: [(&str, u32, bool); 6] = [
    ("uint8_t", 8, false),
    ("uint16_t", 16, false),
    ("int8_t", 8, true),
    ("int16_t", 16, true),
    ("int32_t", 32, true),
    ("uint32_t", 32, false),
];

/// Ordered, read-only registry of simulated types
#[derive(Debug, Clone)]
pub struct TypeCatalog {
    types: Vec<SimulatedType>,
    by_name: FxHashMap<String, usize>,
}

impl TypeCatalog {
    /// Build a catalog from explicit entries. Duplicate names keep the first entry.
    pub fn new(types: Vec<SimulatedType>) -> Result<Self, ArenaError> {
        if types.is_empty() {
            return Err(ArenaError::EmptyCatalog);
        }

        let mut unique = Vec::with_capacity(types.len());
        let mut by_name: FxHashMap<String, usize> = FxHashMap::default();
        for ty in types {
            if by_name.contains_key(ty.name()) {
                continue;
            }
            by_name.insert(ty.name().to_string(), unique.len());
            unique.push(ty);
        }

        Ok(TypeCatalog {
            types: unique,
            by_name,
        })
    }

    /// The arena's fixed set: 8/16/32-bit signed and unsigned integers
    pub fn standard() -> Self {
        let types = STANDARD_TYPES
            .iter()
            .map(|&(name, bits, signed)| {
                let (min, max) = bounds(bits, signed);
                SimulatedType {
                    name: name.to_string(),
                    bits,
                    signed,
                    min,
                    max,
                }
            })
            .collect::<Vec<_>>();

        let by_name = types
            .iter()
            .enumerate()
            .map(|(idx, ty)| (ty.name.clone(), idx))
            .collect();

        TypeCatalog { types, by_name }
    }

    /// Look up a type by its name
    pub fn get(&self, name: &str) -> Option<&SimulatedType> {
        self.by_name.get(name).map(|&idx| &self.types[idx])
    }

    /// Keep only the named types, preserving catalog order
    pub fn restrict<S: AsRef<str>>(&self, names: &[S]) -> Result<Self, ArenaError> {
        let mut wanted = vec![false; self.types.len()];
        for name in names {
            let name = name.as_ref().trim();
            let idx = self
                .by_name
                .get(name)
                .ok_or_else(|| ArenaError::UnknownType {
                    name: name.to_string(),
                    known: self.names().join(", "),
                })?;
            wanted[*idx] = true;
        }

        let kept = self
            .types
            .iter()
            .zip(wanted)
            .filter(|(_, keep)| *keep)
            .map(|(ty, _)| ty.clone())
            .collect();
        TypeCatalog::new(kept)
    }

    /// Pick an entry uniformly at random
    pub fn choose<R: Rng>(&self, rng: &mut R) -> &SimulatedType {
        // Never empty: both constructors reject an empty list
        &self.types[rng.gen_range(0..self.types.len())]
    }

    pub fn types(&self) -> &[SimulatedType] {
        &self.types
    }

    pub fn names(&self) -> Vec<&str> {
        self.types.iter().map(|ty| ty.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl Default for TypeCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
