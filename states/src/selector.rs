use std::fmt::{Debug, Formatter};

use crate::{Memo, MemoKey};

type InputFn<S, K> = Box<dyn Fn(&S) -> K>;
type CombineFn<K, V> = Box<dyn Fn(&K) -> V>;

/// A memoized derivation over a snapshot `S`.
///
/// `input` picks the tracked pieces of the snapshot; `combine` derives the
/// output from them. `combine` only runs when `input` yields something not
/// [`MemoKey::same_as`] the previous call.
pub struct Selector<S, K, V> {
    input: InputFn<S, K>,
    combine: CombineFn<K, V>,
    memo: Memo<K, V>,
}

impl<S, K, V> Debug for Selector<S, K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Selector").field("memo", &self.memo).finish()
    }
}

impl<S, K, V> Selector<S, K, V>
where
    K: MemoKey,
    V: Clone,
{
    pub fn new(
        name: &'static str,
        input: impl Fn(&S) -> K + 'static,
        combine: impl Fn(&K) -> V + 'static,
    ) -> Self {
        Self {
            input: Box::new(input),
            combine: Box::new(combine),
            memo: Memo::new(name),
        }
    }

    pub fn select(&self, state: &S) -> V {
        let key = (self.input)(state);
        self.memo.get_or_compute(key, |key| (self.combine)(key))
    }

    pub fn recomputations(&self) -> usize {
        self.memo.recomputations()
    }

    pub fn reset_recomputations(&self) {
        self.memo.reset_recomputations();
    }
}
