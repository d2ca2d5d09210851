//! The row of slots a player drops tiles into.

use crate::{equations::Checker, verdict::Verdict};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SlotError {
    #[error("slot {index} is out of range (the row has {len} slots)")]
    OutOfRange { index: usize, len: usize },
}

/// A fixed-length row of slots, each of which may hold one tile.
///
/// The front end owns one of these per round and hands it to a [`Checker`]
/// when the player asks for their arrangement to be checked.
#[derive(Debug, Clone, PartialEq)]
pub struct SlotRow {
    slots: Vec<Option<String>>,
}

impl SlotRow {
    pub fn new(len: usize) -> Self {
        SlotRow {
            slots: vec![None; len],
        }
    }

    pub fn len(&self) -> usize { self.slots.len() }

    pub fn is_empty(&self) -> bool { self.slots.iter().all(Option::is_none) }

    pub fn is_full(&self) -> bool { self.slots.iter().all(Option::is_some) }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.slots.get(index).and_then(|slot| slot.as_deref())
    }

    /// Put a tile in a slot, returning whichever tile was already there.
    pub fn place<S: Into<String>>(
        &mut self,
        index: usize,
        tile: S,
    ) -> Result<Option<String>, SlotError> {
        let slot = self.slot_mut(index)?;
        Ok(slot.replace(tile.into()))
    }

    /// Remove the tile from a slot.
    pub fn take(&mut self, index: usize) -> Result<Option<String>, SlotError> {
        let slot = self.slot_mut(index)?;
        Ok(slot.take())
    }

    /// Exchange the contents of two slots.
    pub fn swap(&mut self, a: usize, b: usize) -> Result<(), SlotError> {
        self.slot_mut(a)?;
        self.slot_mut(b)?;
        self.slots.swap(a, b);
        Ok(())
    }

    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            *slot = None;
        }
    }

    /// The placed tiles in slot order. Empty slots are skipped.
    pub fn tiles(&self) -> impl Iterator<Item = &str> + '_ {
        self.slots.iter().filter_map(|slot| slot.as_deref())
    }

    pub fn check(&self, checker: &Checker) -> Verdict {
        checker.check(self.tiles())
    }

    pub fn check_default(&self) -> Verdict { self.check(&Checker::default()) }

    fn slot_mut(
        &mut self,
        index: usize,
    ) -> Result<&mut Option<String>, SlotError> {
        let len = self.slots.len();
        self.slots
            .get_mut(index)
            .ok_or(SlotError::OutOfRange { index, len })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::verdict::Rejection;

    fn row(tiles: &[Option<&str>]) -> SlotRow {
        let mut row = SlotRow::new(tiles.len());

        for (i, tile) in tiles.iter().enumerate() {
            if let Some(tile) = tile {
                row.place(i, *tile).unwrap();
            }
        }

        row
    }

    #[test]
    fn empty_slots_are_skipped() {
        let row = row(&[Some("1"), None, Some("2"), Some("="), None, Some("12")]);

        let got: Vec<_> = row.tiles().collect();

        assert_eq!(got, vec!["1", "2", "=", "12"]);
        assert!(!row.is_full());
        assert!(row.check_default().is_valid());
    }

    #[test]
    fn placing_returns_the_displaced_tile() {
        let mut row = SlotRow::new(3);

        assert_eq!(row.place(1, "7").unwrap(), None);
        assert_eq!(row.place(1, "+").unwrap(), Some(String::from("7")));
        assert_eq!(row.get(1), Some("+"));
        assert_eq!(row.get(0), None);
    }

    #[test]
    fn out_of_range_slots() {
        let mut row = SlotRow::new(2);

        assert_eq!(
            row.place(2, "1").unwrap_err(),
            SlotError::OutOfRange { index: 2, len: 2 }
        );
        assert!(row.take(5).is_err());
        assert!(row.swap(0, 9).is_err());
        assert!(row.is_empty());
    }

    #[test]
    fn swap_and_take() {
        let mut row = row(&[Some("4"), Some("="), Some("2"), Some("+"), Some("2")]);
        assert!(row.is_full());

        row.swap(0, 4).unwrap();
        assert_eq!(row.tiles().collect::<String>(), "2=2+4");
        assert_eq!(
            row.check_default().rejection(),
            Some(&Rejection::ValueMismatch {
                expected: 2.0,
                found: 6.0
            })
        );

        assert_eq!(row.take(4).unwrap(), Some(String::from("4")));
        assert_eq!(row.tiles().collect::<String>(), "2=2+");
    }

    #[test]
    fn clear_empties_every_slot() {
        let mut row = row(&[Some("1"), Some("=")]);

        row.clear();

        assert!(row.is_empty());
        assert_eq!(row.len(), 2);
        assert_eq!(
            row.check_default(),
            Verdict::Invalid(Rejection::MissingEquality)
        );
    }
}
