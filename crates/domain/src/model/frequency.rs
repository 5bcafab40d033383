// crates/domain/src/model/frequency.rs
use std::fmt;

use hashbrown::HashMap;
use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{MapAccess, Visitor},
    ser::SerializeMap,
};

/// Character → occurrence count, iterated in first-occurrence order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharacterFrequency {
    order: Vec<char>,
    counts: HashMap<char, usize>,
}

impl CharacterFrequency {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `n` occurrences of `ch`.
    pub fn record_n(&mut self, ch: char, n: usize) {
        if n == 0 {
            return;
        }
        match self.counts.get_mut(&ch) {
            Some(count) => *count += n,
            None => {
                self.order.push(ch);
                self.counts.insert(ch, n);
            }
        }
    }

    #[inline]
    pub fn record(&mut self, ch: char) {
        self.record_n(ch, 1);
    }

    /// Occurrences of `ch`, zero when absent.
    pub fn get(&self, ch: char) -> usize {
        self.counts.get(&ch).copied().unwrap_or(0)
    }

    /// Number of distinct characters.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Sum of all occurrence counts.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, usize)> + '_ {
        self.order.iter().map(|ch| (*ch, self.counts[ch]))
    }
}

impl FromIterator<char> for CharacterFrequency {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut frequency = Self::new();
        for ch in iter {
            frequency.record(ch);
        }
        frequency
    }
}

impl Serialize for CharacterFrequency {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        let mut buf = [0u8; 4];
        for (ch, count) in self.iter() {
            map.serialize_entry(ch.encode_utf8(&mut buf) as &str, &count)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for CharacterFrequency {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct FrequencyVisitor;

        impl<'de> Visitor<'de> for FrequencyVisitor {
            type Value = CharacterFrequency;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map from single characters to counts")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut frequency = CharacterFrequency::new();
                while let Some((key, count)) = access.next_entry::<String, usize>()? {
                    let mut chars = key.chars();
                    match (chars.next(), chars.next()) {
                        (Some(ch), None) => frequency.record_n(ch, count),
                        _ => {
                            return Err(serde::de::Error::custom(format!(
                                "frequency key must be exactly one character, got {key:?}"
                            )));
                        }
                    }
                }
                Ok(frequency)
            }
        }

        deserializer.deserialize_map(FrequencyVisitor)
    }
}
