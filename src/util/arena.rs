use std::ops::{Index, IndexMut};

/// Simple index-based arena backed by a `Vec` and a free list.
///
/// Slots hold `Option<T>` so a value can be moved out without requiring
/// `T: Default`. Handles stay stable until the value is taken.
pub struct Arena<T> {
    items: Vec<Option<T>>,
    free_list: Vec<u32>,
}

impl<T> Arena<T> {
    pub fn new() -> Self {
        Arena {
            items: Vec::new(),
            free_list: Vec::new(),
        }
    }

    /// Store `value`, returning its handle. Reuses freed slots when available.
    pub fn alloc(&mut self, value: T) -> u32 {
        if let Some(idx) = self.free_list.pop() {
            self.items[idx as usize] = Some(value);
            idx
        } else {
            let idx = self.items.len() as u32;
            self.items.push(Some(value));
            idx
        }
    }

    /// Move the value out of `idx` and return the slot to the free list.
    ///
    /// # Panics
    /// Panics if `idx` does not hold a live value.
    pub fn take(&mut self, idx: u32) -> T {
        let value = self.items[idx as usize]
            .take()
            .unwrap_or_else(|| panic!("arena slot {idx} is vacant"));
        self.free_list.push(idx);
        value
    }

    pub fn get(&self, idx: u32) -> Option<&T> {
        self.items.get(idx as usize).and_then(Option::as_ref)
    }

    pub fn get_mut(&mut self, idx: u32) -> Option<&mut T> {
        self.items.get_mut(idx as usize).and_then(Option::as_mut)
    }

    /// Drop all values and reset the free list.
    pub fn clear(&mut self) {
        self.items.clear();
        self.free_list.clear();
    }

    /// Number of live values.
    pub fn len(&self) -> usize {
        self.items.len() - self.free_list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<u32> for Arena<T> {
    type Output = T;
    fn index(&self, idx: u32) -> &T {
        self.get(idx)
            .unwrap_or_else(|| panic!("arena slot {idx} is vacant"))
    }
}

impl<T> IndexMut<u32> for Arena<T> {
    fn index_mut(&mut self, idx: u32) -> &mut T {
        self.get_mut(idx)
            .unwrap_or_else(|| panic!("arena slot {idx} is vacant"))
    }
}
