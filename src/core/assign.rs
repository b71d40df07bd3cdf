//! Fair random allocation of items to staff

use super::item::Item;
use super::staff::{Assignee, Roster};

use anyhow::{ensure, Context, Result};
use rand::prelude::*;

use std::collections::{BTreeMap, HashSet};

/// Final mapping from items to staff, with its inverse.
///
/// Immutable once built. The inverse lists every roster member, including
/// those holding no items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    by_item: BTreeMap<Item, Assignee>,
    by_assignee: BTreeMap<Assignee, Vec<Item>>,
}

impl Assignment {
    pub fn assignee_of(&self, item: &Item) -> Option<&Assignee> {
        self.by_item.get(item)
    }

    pub fn items_of(&self, id: &Assignee) -> Option<&[Item]> {
        self.by_assignee.get(id).map(|items| items.as_slice())
    }

    /// All pairs in ascending item order
    pub fn iter(&self) -> impl Iterator<Item = (&Item, &Assignee)> {
        self.by_item.iter()
    }

    /// Per-staff view, in ascending staff id order
    pub fn staff(&self) -> impl Iterator<Item = (&Assignee, &[Item])> {
        self.by_assignee
            .iter()
            .map(|(id, items)| (id, items.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.by_item.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_item.is_empty()
    }
}

/// Assign every item to exactly one staff member, as evenly as possible.
///
/// Each staff member receives floor(N/M) items from a shuffled deck; the
/// N mod M leftovers go one each to staff sampled without replacement, main
/// pool first, regular pool only once the main pool is exhausted.
///
/// All validation happens before the first random draw; on error no partial
/// assignment is produced.
pub fn allocate(roster: &Roster, items: &[Item], rng: &mut impl Rng) -> Result<Assignment> {
    ensure!(!roster.is_empty(), "cannot assign items to an empty roster");

    let mut seen = HashSet::new();
    for item in items {
        ensure!(seen.insert(item), "duplicate item {}", item);
    }

    let quota = items.len() / roster.len();
    let remainder = items.len() % roster.len();
    // The quota math bounds the remainder by the roster size; keep the check
    // in case a caller ever decouples the pools from the item count.
    ensure!(
        remainder <= roster.len(),
        "cannot place {} leftover items with {} staff",
        remainder,
        roster.len()
    );

    let mut deck: Vec<Item> = items.to_vec();
    deck.shuffle(rng);

    let mut by_item = BTreeMap::new();
    let mut by_assignee: BTreeMap<Assignee, Vec<Item>> =
        roster.iter().map(|id| (id.clone(), Vec::new())).collect();

    for id in roster.iter() {
        for _ in 0..quota {
            let item = deck.pop().context("deck exhausted during quota round")?;
            by_item.insert(item.clone(), id.clone());
            by_assignee.get_mut(id).context("unknown staff id")?.push(item);
        }
    }

    // Leftovers: sample the main pool first, then fall back to the regular
    // pool for whatever the main pool cannot absorb.
    let mut extras: Vec<Assignee> = roster
        .main()
        .choose_multiple(rng, remainder.min(roster.main().len()))
        .cloned()
        .collect();
    if remainder > roster.main().len() {
        extras.extend(
            roster
                .regular()
                .choose_multiple(rng, remainder - roster.main().len())
                .cloned(),
        );
    }

    for id in &extras {
        let item = deck.pop().context("deck exhausted during leftover round")?;
        by_item.insert(item.clone(), id.clone());
        by_assignee.get_mut(id).context("unknown staff id")?.push(item);
    }

    Ok(Assignment { by_item, by_assignee })
}
