//! Reference-counted slot+generation handle table for FFI lifetime management.
//!
//! Prevents use-after-free across the C boundary: released handles have
//! stale generation counters and safely return `None` instead of causing UB.
//! Each slot carries its own reference count so `*_ref` / `*_unref` can
//! share one handle value between several C owners. Generations start at 1,
//! so the all-zero handle is never issued and can stand in for NULL.

/// Handle encoding: upper 32 bits = slot index, lower 32 bits = generation.
fn encode(slot: u32, generation: u32) -> u64 {
    ((slot as u64) << 32) | (generation as u64)
}

fn decode(handle: u64) -> (u32, u32) {
    let slot = (handle >> 32) as u32;
    let generation = handle as u32;
    (slot, generation)
}

/// The null handle.
pub(crate) const NULL_HANDLE: u64 = 0;

struct Slot<T> {
    generation: u32,
    refs: u32,
    data: Option<T>,
}

/// Outcome of dropping one reference to a handle.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Release<T> {
    /// The handle was stale or never valid.
    Stale,
    /// Other references remain; the value stays in the table.
    Shared,
    /// That was the last reference; the value is handed back.
    Last(T),
}

/// A slot+generation handle table mapping `u64` handles to owned values.
///
/// Reuses slots via a free list. Generation counters increment on removal,
/// making stale handles detectable without UB.
pub(crate) struct HandleTable<T> {
    slots: Vec<Slot<T>>,
    free_list: Vec<u32>,
}

impl<T> HandleTable<T> {
    /// Create an empty handle table.
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_list: Vec::new(),
        }
    }

    /// Insert a value with a reference count of 1 and return its handle.
    pub fn insert(&mut self, value: T) -> u64 {
        if let Some(slot_idx) = self.free_list.pop() {
            let slot = &mut self.slots[slot_idx as usize];
            slot.data = Some(value);
            slot.refs = 1;
            encode(slot_idx, slot.generation)
        } else {
            let slot_idx = self.slots.len() as u32;
            self.slots.push(Slot {
                generation: 1,
                refs: 1,
                data: Some(value),
            });
            encode(slot_idx, 1)
        }
    }

    fn live_slot(&self, handle: u64) -> Option<&Slot<T>> {
        let (slot_idx, generation) = decode(handle);
        let slot = self.slots.get(slot_idx as usize)?;
        if slot.generation != generation || slot.data.is_none() {
            return None;
        }
        Some(slot)
    }

    fn live_slot_mut(&mut self, handle: u64) -> Option<&mut Slot<T>> {
        let (slot_idx, generation) = decode(handle);
        let slot = self.slots.get_mut(slot_idx as usize)?;
        if slot.generation != generation || slot.data.is_none() {
            return None;
        }
        Some(slot)
    }

    /// Get an immutable reference to the value behind a handle.
    ///
    /// Returns `None` if the handle is stale or was never valid.
    pub fn get(&self, handle: u64) -> Option<&T> {
        self.live_slot(handle)?.data.as_ref()
    }

    /// Get a mutable reference to the value behind a handle.
    ///
    /// Returns `None` if the handle is stale or invalid.
    pub fn get_mut(&mut self, handle: u64) -> Option<&mut T> {
        self.live_slot_mut(handle)?.data.as_mut()
    }

    /// Add a reference to a live handle. Returns `false` for a stale handle
    /// or a saturated reference count.
    pub fn acquire(&mut self, handle: u64) -> bool {
        match self.live_slot_mut(handle) {
            Some(slot) => match slot.refs.checked_add(1) {
                Some(refs) => {
                    slot.refs = refs;
                    true
                }
                None => false,
            },
            None => false,
        }
    }

    /// Current reference count of a live handle.
    #[cfg(test)]
    pub fn refs(&self, handle: u64) -> Option<u32> {
        self.live_slot(handle).map(|slot| slot.refs)
    }

    /// Drop one reference to a handle.
    ///
    /// On the last reference the value is removed and handed back, the
    /// generation counter increments, and the slot goes to the free list.
    /// If the generation wraps to 0 the slot is permanently retired instead,
    /// so a wrapped generation can never collide with an old handle or with
    /// [`NULL_HANDLE`].
    pub fn release(&mut self, handle: u64) -> Release<T> {
        let (slot_idx, _) = decode(handle);
        let Some(slot) = self.live_slot_mut(handle) else {
            return Release::Stale;
        };
        slot.refs -= 1;
        if slot.refs > 0 {
            return Release::Shared;
        }
        let Some(value) = slot.data.take() else {
            return Release::Stale;
        };
        slot.generation = slot.generation.wrapping_add(1);
        if slot.generation != 0 {
            self.free_list.push(slot_idx);
        }
        Release::Last(value)
    }

    /// Number of live values.
    #[cfg(test)]
    pub fn live_count(&self) -> usize {
        self.slots.iter().filter(|s| s.data.is_some()).count()
    }
}
