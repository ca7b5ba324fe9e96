use soroban_sdk::{contracttype, Address, Env, Vec};

use crate::Error;

/// Player list: duplicates allowed, O(1) append, O(1) swap-remove by index.
///
/// Removal moves the last entry into the freed slot, so order is not
/// preserved. Winner draws index into this list directly and rely on it.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AddressSet {
    items: Vec<Address>,
}

impl AddressSet {
    pub fn new(env: &Env) -> Self {
        AddressSet { items: Vec::new(env) }
    }

    pub fn add(&mut self, address: Address) {
        self.items.push_back(address);
    }

    /// Removes and returns the entry at `index`, filling the slot with the last entry.
    pub fn remove_at(&mut self, index: u32) -> Result<Address, Error> {
        let removed = self.items.get(index).ok_or(Error::IndexOutOfRange)?;
        let last = self.items.pop_back().ok_or(Error::IndexOutOfRange)?;
        if index < self.items.len() {
            self.items.set(index, last);
        }
        Ok(removed)
    }

    pub fn at(&self, index: u32) -> Result<Address, Error> {
        self.items.get(index).ok_or(Error::IndexOutOfRange)
    }

    pub fn len(&self) -> u32 {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items = Vec::new(self.items.env());
    }

    pub fn to_vec(&self) -> Vec<Address> {
        self.items.clone()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use soroban_sdk::{testutils::Address as _, vec, Address, Env};

    use super::AddressSet;
    use crate::Error;

    fn filled(env: &Env, n: usize) -> (AddressSet, std::vec::Vec<Address>) {
        let mut set = AddressSet::new(env);
        let addrs: std::vec::Vec<Address> = (0..n).map(|_| Address::generate(env)).collect();
        for a in &addrs {
            set.add(a.clone());
        }
        (set, addrs)
    }

    #[test]
    fn add_keeps_duplicates_in_purchase_order() {
        let env = Env::default();
        let a = Address::generate(&env);
        let b = Address::generate(&env);
        let mut set = AddressSet::new(&env);
        set.add(a.clone());
        set.add(b.clone());
        set.add(a.clone());

        assert_eq!(set.len(), 3);
        assert_eq!(set.to_vec(), vec![&env, a.clone(), b, a]);
    }

    #[test]
    fn remove_at_moves_last_entry_into_the_gap() {
        let env = Env::default();
        let (mut set, a) = filled(&env, 5);

        assert_eq!(set.remove_at(1), Ok(a[1].clone()));
        assert_eq!(
            set.to_vec(),
            vec![&env, a[0].clone(), a[4].clone(), a[2].clone(), a[3].clone()]
        );
    }

    #[test]
    fn remove_last_and_only_entries() {
        let env = Env::default();
        let (mut set, a) = filled(&env, 2);

        assert_eq!(set.remove_at(1), Ok(a[1].clone()));
        assert_eq!(set.remove_at(0), Ok(a[0].clone()));
        assert!(set.is_empty());
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        let env = Env::default();
        let (mut set, a) = filled(&env, 3);

        assert_eq!(set.remove_at(3), Err(Error::IndexOutOfRange));
        assert_eq!(set.at(7), Err(Error::IndexOutOfRange));
        assert_eq!(set.at(2), Ok(a[2].clone()));
        assert_eq!(set.len(), 3);
        assert_eq!(AddressSet::new(&env).remove_at(0), Err(Error::IndexOutOfRange));
    }

    #[test]
    fn clear_empties_the_set() {
        let env = Env::default();
        let (mut set, _) = filled(&env, 4);
        set.clear();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
    }
}
