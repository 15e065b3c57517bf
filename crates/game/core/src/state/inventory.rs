//! Ordered inventory with unique item names.

/// One inventory line: an item name and how many the player holds.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemSlot {
    pub name: String,
    pub amount: u32,
}

/// The player's items, in the order they were first received.
///
/// Names are unique: granting an item the player already holds merges into
/// the existing slot instead of adding a line. Serializes transparently as a
/// list, so the save file shows the same order the pause menu does.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Inventory {
    slots: Vec<ItemSlot>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// How many of `name` the player holds; zero when absent.
    pub fn count(&self, name: &str) -> u32 {
        self.slots
            .iter()
            .find(|slot| slot.name == name)
            .map_or(0, |slot| slot.amount)
    }

    /// `true` when the player holds at least `amount` of `name`.
    pub fn has(&self, name: &str, amount: u32) -> bool {
        self.count(name) >= amount
    }

    /// Grants `amount` of `name`, merging into an existing slot or appending
    /// a new one. Granting zero is a no-op and never creates an empty slot.
    pub fn add(&mut self, name: &str, amount: u32) {
        if amount == 0 {
            return;
        }
        if let Some(slot) = self.slots.iter_mut().find(|slot| slot.name == name) {
            slot.amount = slot.amount.saturating_add(amount);
        } else {
            self.slots.push(ItemSlot {
                name: name.to_string(),
                amount,
            });
        }
    }

    /// Takes up to `amount` of `name` and returns how many were actually
    /// removed. A slot emptied by the removal is dropped from the list.
    pub fn remove(&mut self, name: &str, amount: u32) -> u32 {
        let Some(index) = self.slots.iter().position(|slot| slot.name == name) else {
            return 0;
        };
        let slot = &mut self.slots[index];
        let removed = slot.amount.min(amount);
        slot.amount -= removed;
        if slot.amount == 0 {
            self.slots.remove(index);
        }
        removed
    }

    pub fn slots(&self) -> &[ItemSlot] {
        &self.slots
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_merges_into_existing_slot() {
        let mut inv = Inventory::new();
        inv.add("potion", 2);
        inv.add("key", 1);
        inv.add("potion", 3);

        assert_eq!(inv.count("potion"), 5);
        assert_eq!(inv.len(), 2);
        // First-received order is preserved.
        assert_eq!(inv.slots()[0].name, "potion");
        assert_eq!(inv.slots()[1].name, "key");
    }

    #[test]
    fn remove_saturates_and_drops_empty_slots() {
        let mut inv = Inventory::new();
        inv.add("potion", 2);

        assert_eq!(inv.remove("potion", 5), 2);
        assert_eq!(inv.count("potion"), 0);
        assert!(inv.is_empty());
        assert_eq!(inv.remove("potion", 1), 0);
    }

    #[test]
    fn add_zero_never_creates_a_slot() {
        let mut inv = Inventory::new();
        inv.add("dust", 0);
        assert!(inv.is_empty());
    }

    #[test]
    fn has_is_an_at_least_test() {
        let mut inv = Inventory::new();
        inv.add("coin", 3);
        assert!(inv.has("coin", 2));
        assert!(inv.has("coin", 3));
        assert!(!inv.has("coin", 4));
        assert!(inv.has("nothing", 0));
    }
}
