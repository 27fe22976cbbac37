//! Single-slot memoization keyed on input identity.
//!
//! A [`Memo`] remembers the inputs and output of its last computation. When it
//! is asked again with inputs that are [`MemoKey::same_as`] the remembered ones,
//! it hands back a clone of the remembered output (for `Arc` outputs, the very
//! same allocation). Any other input evicts the slot.

use std::{
    cell::{Cell, RefCell},
    fmt::{Debug, Formatter},
    sync::Arc,
};

use log::{debug, trace};
use ustr::Ustr;

/// Identity comparison used to decide whether a cached result is still valid.
///
/// Shared containers compare by pointer, never by content: two equal maps in
/// different allocations are different inputs.
pub trait MemoKey {
    fn same_as(&self, other: &Self) -> bool;
}

impl<T: ?Sized> MemoKey for Arc<T> {
    fn same_as(&self, other: &Self) -> bool {
        Arc::ptr_eq(self, other)
    }
}

impl<T: MemoKey> MemoKey for Option<T> {
    fn same_as(&self, other: &Self) -> bool {
        match (self, other) {
            (Some(a), Some(b)) => a.same_as(b),
            (None, None) => true,
            _ => false,
        }
    }
}

macro_rules! value_memo_key {
    ($($ty:ty),* $(,)?) => {
        $(
            impl MemoKey for $ty {
                fn same_as(&self, other: &Self) -> bool {
                    self == other
                }
            }
        )*
    };
}

// Interned strings are equal exactly when they share an allocation.
value_memo_key!(bool, u8, u32, u64, usize, i32, i64, char, Ustr, String, &'static str);

macro_rules! tuple_memo_key {
    ($($name:ident : $idx:tt),+) => {
        impl<$($name: MemoKey),+> MemoKey for ($($name,)+) {
            fn same_as(&self, other: &Self) -> bool {
                $(self.$idx.same_as(&other.$idx))&&+
            }
        }
    };
}

tuple_memo_key!(A: 0);
tuple_memo_key!(A: 0, B: 1);
tuple_memo_key!(A: 0, B: 1, C: 2);
tuple_memo_key!(A: 0, B: 1, C: 2, D: 3);
tuple_memo_key!(A: 0, B: 1, C: 2, D: 3, E: 4);

pub struct Memo<K, V> {
    name: &'static str,
    slot: RefCell<Option<(K, V)>>,
    recomputations: Cell<usize>,
}

impl<K, V> Debug for Memo<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Memo")
            .field("name", &self.name)
            .field("cached", &self.slot.borrow().is_some())
            .field("recomputations", &self.recomputations.get())
            .finish()
    }
}

impl<K, V> Memo<K, V>
where
    K: MemoKey,
    V: Clone,
{
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            slot: RefCell::new(None),
            recomputations: Cell::new(0),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Return the cached output for `key`, or run `compute` and cache its output.
    ///
    /// `compute` may call other memos; it must not call back into this one.
    pub fn get_or_compute(&self, key: K, compute: impl FnOnce(&K) -> V) -> V {
        {
            let slot = self.slot.borrow();
            if let Some((cached_key, cached)) = slot.as_ref()
                && cached_key.same_as(&key)
            {
                trace!("{} hit", self.name);
                return cached.clone();
            }
        }

        let value = compute(&key);
        let count = self.recomputations.get() + 1;
        self.recomputations.set(count);
        debug!("{} recomputed ({count} total)", self.name);

        *self.slot.borrow_mut() = Some((key, value.clone()));
        value
    }

    /// How many times the output had to be computed.
    pub fn recomputations(&self) -> usize {
        self.recomputations.get()
    }

    pub fn reset_recomputations(&self) {
        self.recomputations.set(0);
    }

    /// Drop the cached slot so the next call recomputes.
    pub fn clear(&self) {
        self.slot.borrow_mut().take();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_arc_hits_cache() {
        let memo: Memo<Arc<Vec<u32>>, Arc<u32>> = Memo::new("sum");
        let input = Arc::new(vec![1, 2, 3]);

        let first = memo.get_or_compute(Arc::clone(&input), |v| Arc::new(v.iter().sum()));
        let second = memo.get_or_compute(Arc::clone(&input), |v| Arc::new(v.iter().sum()));

        assert_eq!(*first, 6);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(memo.recomputations(), 1);
    }

    #[test]
    fn equal_content_in_new_arc_recomputes() {
        let memo: Memo<Arc<Vec<u32>>, u32> = Memo::new("sum");

        memo.get_or_compute(Arc::new(vec![1, 2]), |v| v.iter().sum());
        memo.get_or_compute(Arc::new(vec![1, 2]), |v| v.iter().sum());

        assert_eq!(memo.recomputations(), 2);
    }

    #[test]
    fn new_input_evicts_previous() {
        let memo: Memo<(Ustr, bool), String> = Memo::new("label");
        let a = Ustr::from("a");
        let b = Ustr::from("b");

        memo.get_or_compute((a, false), |(id, _)| id.to_string());
        memo.get_or_compute((b, false), |(id, _)| id.to_string());
        // Slot holds only `b` now, so `a` recomputes.
        let again = memo.get_or_compute((a, false), |(id, _)| id.to_string());

        assert_eq!(again, "a");
        assert_eq!(memo.recomputations(), 3);
    }

    #[test]
    fn option_and_tuple_keys_compare_elementwise() {
        let shared = Arc::new(1_u8);
        assert!((Some(Arc::clone(&shared)), 3_u32).same_as(&(Some(Arc::clone(&shared)), 3_u32)));
        assert!(!(Some(Arc::clone(&shared)), 3_u32).same_as(&(None, 3_u32)));
        assert!(!(Some(Arc::clone(&shared)), 3_u32).same_as(&(Some(shared), 4_u32)));
    }

    #[test]
    fn clear_forces_recompute() {
        let _ = env_logger::builder().is_test(true).try_init();
        let memo: Memo<bool, u32> = Memo::new("flag");

        memo.get_or_compute(true, |_| 1);
        memo.clear();
        memo.get_or_compute(true, |_| 1);
        assert_eq!(memo.recomputations(), 2);

        memo.reset_recomputations();
        assert_eq!(memo.recomputations(), 0);
    }
}
