//! Scrolling hex dump decoration.

use rand::Rng;

use crate::config::hexdump::{ADDR_LIMIT, BYTES_PER_ROW, BYTE_LIMIT, MAX_ROWS};
use crate::ring_buffer::RingBuffer;

/// One row of fake memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HexRow {
    pub addr: u32,
    pub bytes: [u8; BYTES_PER_ROW],
}

impl HexRow {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut bytes = [0u8; BYTES_PER_ROW];
        for b in &mut bytes {
            *b = rng.gen_range(0..BYTE_LIMIT);
        }
        Self {
            addr: rng.gen_range(0..ADDR_LIMIT),
            bytes,
        }
    }

    /// Address column, e.g. `0x00A1B2C3`.
    pub fn addr_label(&self) -> String {
        format!("0x{:08X}", self.addr)
    }

    /// Byte column: upper-case pairs, each followed by a space.
    pub fn bytes_label(&self) -> String {
        self.bytes.iter().map(|b| format!("{:02X} ", b)).collect()
    }
}

/// The last [`MAX_ROWS`] rows of the ticker.
#[derive(Debug, Clone)]
pub struct HexTicker {
    rows: RingBuffer<HexRow>,
}

impl HexTicker {
    pub fn new() -> Self {
        Self {
            rows: RingBuffer::new(MAX_ROWS),
        }
    }

    /// Append a random row, dropping the oldest when full.
    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.rows.push(HexRow::random(rng));
    }

    pub fn rows(&self) -> impl Iterator<Item = &HexRow> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl Default for HexTicker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_labels() {
        let row = HexRow {
            addr: 0xA1B2C3,
            bytes: [0, 1, 0x0f, 0x10, 0xab, 0xfe, 0x7f, 0x80],
        };
        assert_eq!(row.addr_label(), "0x00A1B2C3");
        assert_eq!(row.bytes_label(), "00 01 0F 10 AB FE 7F 80 ");
    }

    #[test]
    fn test_random_within_limits() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..200 {
            let row = HexRow::random(&mut rng);
            assert!(row.addr < ADDR_LIMIT);
            assert!(row.bytes.iter().all(|&b| b < BYTE_LIMIT));
        }
    }

    #[test]
    fn test_ticker_is_bounded() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut ticker = HexTicker::new();
        assert!(ticker.is_empty());
        for _ in 0..MAX_ROWS + 5 {
            ticker.tick(&mut rng);
        }
        assert_eq!(ticker.len(), MAX_ROWS);
        assert_eq!(ticker.rows().count(), MAX_ROWS);
    }
}
