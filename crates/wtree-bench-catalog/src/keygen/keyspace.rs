//! Occupancy tracking over the benchmark key space.
//!
//! Routines need keys known to be present in the structure (search-existent,
//! remove) and keys known to be absent (insert, search-inexistent). The
//! bitmap records every key handed out so far; the draw helpers retry a
//! generator until it produces a key on the wanted side.

use super::KeyGenerator;

/// Bitset over `0..=max_value` marking keys already handed to a structure.
#[derive(Debug, Clone)]
pub struct KeySpace {
    bits: Vec<u64>,
    max_value: u64,
    annotated: u64,
}

impl KeySpace {
    /// Create an empty key space over `0..=max_value`.
    pub fn new(max_value: u64) -> Self {
        Self {
            bits: vec![0; (max_value / 64 + 1) as usize],
            max_value,
            annotated: 0,
        }
    }

    /// Whether a key has been annotated.
    pub fn contains(&self, key: u64) -> bool {
        debug_assert!(key <= self.max_value);
        self.bits[(key / 64) as usize] & (1u64 << (key % 64)) != 0
    }

    /// Mark a key as present. Idempotent.
    pub fn annotate(&mut self, key: u64) {
        if !self.contains(key) {
            self.bits[(key / 64) as usize] |= 1u64 << (key % 64);
            self.annotated += 1;
        }
    }

    /// Mark a key as absent again. Idempotent.
    pub fn clear(&mut self, key: u64) {
        if self.contains(key) {
            self.bits[(key / 64) as usize] &= !(1u64 << (key % 64));
            self.annotated -= 1;
        }
    }

    /// Number of annotated keys.
    pub fn annotated(&self) -> u64 {
        self.annotated
    }

    /// Upper bound of the key space (inclusive).
    pub fn max_value(&self) -> u64 {
        self.max_value
    }

    /// Draw until the generator produces an unseen key, then annotate it.
    ///
    /// Loops forever if the space is saturated; callers size routines well
    /// below `max_value`.
    pub fn fresh_key(&mut self, gen: &mut dyn KeyGenerator) -> u64 {
        loop {
            let key = gen.next_key();
            if !self.contains(key) {
                self.annotate(key);
                return key;
            }
        }
    }

    /// Draw until the generator produces an annotated key. With `erase`,
    /// the key is cleared on the way out (the remove-phase pattern).
    pub fn existing_key(&mut self, gen: &mut dyn KeyGenerator, erase: bool) -> u64 {
        loop {
            let key = gen.next_key();
            if self.contains(key) {
                if erase {
                    self.clear(key);
                }
                return key;
            }
        }
    }
}
