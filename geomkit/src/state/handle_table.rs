//! Free-list handle table
//!
//! Slots are addressed by a 0-based identifier that never changes while the
//! slot is live. Free identifiers sit on a LIFO stack:
//! - allocation pops the most recently freed identifier, O(1)
//! - when the stack is empty the table doubles and pushes the new slots in
//!   descending order, so the lowest new identifier comes out first
//! - release pushes the identifier back
//!
//! The table never shrinks. Growth only appends slots, so live identifiers
//! and their contents survive it untouched.

use tracing::debug;

/// Default number of pre-populated slots
pub const DEFAULT_INITIAL_CAPACITY: usize = 256;

/// Identifier-stable slot table with a free list
pub struct HandleTable<T> {
    /// Table name (for log messages)
    name: &'static str,
    /// Slot count after construction and after [`reset`](Self::reset)
    initial_capacity: usize,
    /// `None` while the identifier is on the free list
    slots: Vec<Option<T>>,
    /// Free identifiers, top of stack is the next one handed out
    free: Vec<u32>,
}

impl<T> std::fmt::Debug for HandleTable<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandleTable")
            .field("name", &self.name)
            .field("capacity", &self.slots.len())
            .field("live", &self.len())
            .finish()
    }
}

impl<T> HandleTable<T> {
    /// Create a table with `initial_capacity` free slots (at least one)
    pub fn new(name: &'static str, initial_capacity: usize) -> Self {
        let initial_capacity = initial_capacity.max(1);
        let mut table = Self {
            name,
            initial_capacity,
            slots: Vec::new(),
            free: Vec::new(),
        };
        table.seed(initial_capacity);
        table
    }

    /// Append free slots up to `new_capacity`, lowest identifier on top
    fn seed(&mut self, new_capacity: usize) {
        let old_capacity = self.slots.len();
        self.slots.resize_with(new_capacity, || None);
        self.free.extend((old_capacity as u32..new_capacity as u32).rev());
    }

    fn grow(&mut self) {
        let old_capacity = self.slots.len();
        let new_capacity = old_capacity * 2;
        debug!(
            "Growing handle table '{}': {} -> {} slots",
            self.name, old_capacity, new_capacity
        );
        self.seed(new_capacity);
    }

    /// Store `value` in a free slot and return its identifier
    pub fn allocate(&mut self, value: T) -> u32 {
        self.allocate_with(|_| value)
    }

    /// Store the value built from the chosen identifier and return it
    pub fn allocate_with(&mut self, make: impl FnOnce(u32) -> T) -> u32 {
        let id = match self.free.pop() {
            Some(id) => id,
            None => {
                self.grow();
                // Growth pushed at least one identifier
                self.free.pop().unwrap_or_default()
            }
        };
        self.slots[id as usize] = Some(make(id));
        id
    }

    /// Take the value out of a live slot and free its identifier
    ///
    /// Returns `None`, leaving the table unchanged, if `id` is out of range
    /// or already free.
    pub fn release(&mut self, id: u32) -> Option<T> {
        let value = self.slots.get_mut(id as usize)?.take()?;
        self.free.push(id);
        Some(value)
    }

    /// Live value for `id`
    pub fn get(&self, id: u32) -> Option<&T> {
        self.slots.get(id as usize)?.as_ref()
    }

    /// Mutable live value for `id`
    pub fn get_mut(&mut self, id: u32) -> Option<&mut T> {
        self.slots.get_mut(id as usize)?.as_mut()
    }

    /// Live entries in identifier order
    pub fn iter(&self) -> impl Iterator<Item = (u32, &T)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(id, slot)| slot.as_ref().map(|value| (id as u32, value)))
    }

    /// Remove every live value, in identifier order, and reset the table
    pub fn drain(&mut self) -> Vec<(u32, T)> {
        let live = self
            .slots
            .iter_mut()
            .enumerate()
            .filter_map(|(id, slot)| slot.take().map(|value| (id as u32, value)))
            .collect();
        self.reset();
        live
    }

    /// Drop every value and return to the freshly constructed state
    pub fn reset(&mut self) {
        debug!(
            "Resetting handle table '{}' to {} slots",
            self.name, self.initial_capacity
        );
        self.slots.clear();
        self.free.clear();
        self.seed(self.initial_capacity);
    }

    /// Number of live values
    pub fn len(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    /// Check if no value is live
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Current slot count (live plus free)
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of free identifiers
    pub fn free_count(&self) -> usize {
        self.free.len()
    }

    /// Table name
    pub fn name(&self) -> &'static str {
        self.name
    }
}
