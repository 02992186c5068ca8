use std::collections::VecDeque;

use crate::{
    cart::store::{MIN_QUANTITY, clamp_quantity},
    models::ItemId,
};

/// Upper bound on remembered picks; the oldest pick is dropped first.
pub const MAX_PENDING: usize = 100;

/// Pending quantity picked on an item page before it is added.
///
/// Only picks other than the default of 1 are remembered.
#[derive(Debug, Default, Clone)]
pub struct QuantitySelector {
    pending: VecDeque<(ItemId, u32)>,
}

impl QuantitySelector {
    pub fn get(&self, id: ItemId) -> u32 {
        self.pending
            .iter()
            .find(|(pending_id, _)| *pending_id == id)
            .map_or(MIN_QUANTITY, |(_, quantity)| *quantity)
    }

    pub fn set(&mut self, id: ItemId, quantity: i64) -> u32 {
        let quantity = clamp_quantity(quantity);
        self.reset(id);
        if quantity != MIN_QUANTITY {
            if self.pending.len() >= MAX_PENDING {
                self.pending.pop_front();
            }
            self.pending.push_back((id, quantity));
        }
        quantity
    }

    pub fn reset(&mut self, id: ItemId) {
        self.pending.retain(|(pending_id, _)| *pending_id != id);
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
