use std::time::{Duration, Instant};

use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    cart::{
        selector::QuantitySelector,
        summary::{OrderSummary, PricingPolicy},
    },
    feedback::{
        Feedback,
        haptics::{HapticCue, ImpactStyle, NotificationKind},
        notification::NotificationAction,
    },
    models::{CartItem, CartLine, ItemId, RestaurantSummary},
};

pub const MIN_QUANTITY: u32 = 1;
pub const MAX_QUANTITY: u32 = 99;
pub const PREVIEW_DURATION: Duration = Duration::from_secs(3);
pub const PREVIEW_LINES: usize = 3;

pub fn clamp_quantity(quantity: i64) -> u32 {
    quantity.clamp(i64::from(MIN_QUANTITY), i64::from(MAX_QUANTITY)) as u32
}

pub fn lines_total(lines: &[CartLine]) -> f64 {
    lines.iter().fold(0.0, |total, line| total + line.line_total())
}

pub fn lines_item_count(lines: &[CartLine]) -> u32 {
    lines.iter().map(|line| line.quantity).sum()
}

#[derive(Debug, Clone, PartialEq)]
pub enum QuantityUpdate {
    Updated(CartLine),
    Removed(CartLine),
    Missing,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct CartPreview {
    pub visible: bool,
    pub item_count: u32,
    pub total: f64,
    pub lines: Vec<CartLine>,
    pub more_lines: usize,
}

/// In-memory cart: one line per item id, kept in insertion order.
///
/// Every mutation fires its notification and haptic cue through [`Feedback`];
/// those are best-effort and cannot fail a mutation.
pub struct CartStore {
    lines: Vec<CartLine>,
    selector: QuantitySelector,
    preview_until: Option<Instant>,
    feedback: Feedback,
}

impl CartStore {
    pub fn new(feedback: Feedback) -> Self {
        Self {
            lines: Vec::new(),
            selector: QuantitySelector::default(),
            preview_until: None,
            feedback,
        }
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn line(&self, id: ItemId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn feedback(&self) -> &Feedback {
        &self.feedback
    }

    /// Adds `quantity` of `item`, merging into the existing line for the same id.
    pub fn add_to_cart(
        &mut self,
        item: CartItem,
        restaurant: Option<RestaurantSummary>,
        quantity: u32,
    ) -> CartLine {
        let quantity = clamp_quantity(i64::from(quantity));
        let name = item.name.clone();

        let line = match self.lines.iter_mut().find(|line| line.id == item.id) {
            Some(line) => {
                line.quantity = clamp_quantity(i64::from(line.quantity) + i64::from(quantity));
                self.feedback
                    .haptic(HapticCue::Notification(NotificationKind::Success));
                line.clone()
            }
            None => {
                let line = CartLine {
                    id: item.id,
                    name: item.name,
                    price: item.price,
                    quantity,
                    image: item.image,
                    restaurant_name: item.restaurant_name,
                    restaurant,
                };
                self.lines.push(line.clone());
                self.feedback.haptic(HapticCue::Impact(ImpactStyle::Medium));
                line
            }
        };

        tracing::debug!(item_id = line.id, quantity = line.quantity, "cart line added");
        self.feedback
            .notify(format!("{quantity}x {name} added to cart"), None);
        self.preview_until = Some(Instant::now() + PREVIEW_DURATION);
        line
    }

    /// Adds the quantity picked in the selector, then resets the selector to 1.
    pub fn add_selected(&mut self, item: CartItem, restaurant: Option<RestaurantSummary>) -> CartLine {
        let id = item.id;
        let quantity = self.selector.get(id);
        let line = self.add_to_cart(item, restaurant, quantity);
        self.selector.reset(id);
        line
    }

    pub fn selected_quantity(&self, id: ItemId) -> u32 {
        self.selector.get(id)
    }

    pub fn select_quantity(&mut self, id: ItemId, quantity: i64) -> u32 {
        self.selector.set(id, quantity)
    }

    /// Removes the line and offers an undo carrying the removed line.
    pub fn remove_from_cart(&mut self, id: ItemId) -> Option<CartLine> {
        let index = self.lines.iter().position(|line| line.id == id)?;
        let removed = self.lines.remove(index);

        tracing::debug!(item_id = id, "cart line removed");
        self.feedback.haptic(HapticCue::Impact(ImpactStyle::Light));
        self.feedback.notify(
            format!("{} removed from cart", removed.name),
            Some(NotificationAction::Undo {
                line: removed.clone(),
            }),
        );
        Some(removed)
    }

    /// Puts a removed line back with its prior quantity and restaurant.
    pub fn restore(&mut self, removed: CartLine) -> CartLine {
        let quantity = removed.quantity;
        let item = removed.item();
        self.add_to_cart(item, removed.restaurant, quantity)
    }

    pub fn update_quantity(&mut self, id: ItemId, quantity: i64) -> QuantityUpdate {
        if quantity <= 0 {
            return match self.remove_from_cart(id) {
                Some(removed) => QuantityUpdate::Removed(removed),
                None => QuantityUpdate::Missing,
            };
        }

        let quantity = clamp_quantity(quantity);
        let Some(line) = self.lines.iter_mut().find(|line| line.id == id) else {
            return QuantityUpdate::Missing;
        };
        line.quantity = quantity;
        let line = line.clone();

        tracing::debug!(item_id = id, quantity, "cart line quantity updated");
        self.feedback.haptic(HapticCue::Selection);
        self.feedback
            .notify(format!("{} quantity: {quantity}", line.name), None);
        QuantityUpdate::Updated(line)
    }

    pub fn cart_total(&self) -> f64 {
        lines_total(&self.lines)
    }

    pub fn cart_item_count(&self) -> u32 {
        lines_item_count(&self.lines)
    }

    pub fn clear_cart(&mut self) {
        self.lines.clear();
        self.preview_until = None;
        tracing::debug!("cart cleared");
    }

    pub fn summary(&self, policy: &PricingPolicy) -> OrderSummary {
        OrderSummary::from_lines(&self.lines, policy)
    }

    pub fn preview(&self) -> CartPreview {
        self.preview_at(Instant::now())
    }

    pub fn preview_at(&self, now: Instant) -> CartPreview {
        let visible = !self.lines.is_empty() && self.preview_until.is_some_and(|until| now < until);
        CartPreview {
            visible,
            item_count: self.cart_item_count(),
            total: self.cart_total(),
            lines: self.lines.iter().take(PREVIEW_LINES).cloned().collect(),
            more_lines: self.lines.len().saturating_sub(PREVIEW_LINES),
        }
    }

    pub fn hide_preview(&mut self) {
        self.preview_until = None;
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::feedback::{
        haptics::{HapticError, Haptics},
        notification::Notifier,
    };

    #[derive(Default)]
    struct RecordingHaptics {
        cues: Mutex<Vec<HapticCue>>,
    }

    impl Haptics for RecordingHaptics {
        fn play(&self, cue: HapticCue) -> Result<(), HapticError> {
            self.cues.lock().unwrap().push(cue);
            Ok(())
        }
    }

    struct BrokenHaptics;

    impl Haptics for BrokenHaptics {
        fn play(&self, _cue: HapticCue) -> Result<(), HapticError> {
            Err(HapticError::Engine("motor stalled".into()))
        }
    }

    fn item(id: ItemId, name: &str, price: f64) -> CartItem {
        CartItem {
            id,
            name: name.into(),
            price,
            image: None,
            restaurant_name: None,
        }
    }

    fn store() -> CartStore {
        CartStore::new(Feedback::default())
    }

    #[test]
    fn add_to_empty_cart() {
        let mut cart = store();
        cart.add_to_cart(item(1, "Burger", 10.0), None, 1);
        assert_eq!(cart.cart_item_count(), 1);
        assert_eq!(cart.cart_total(), 10.0);
        assert_eq!(
            cart.feedback().notifier().current().unwrap().message,
            "1x Burger added to cart"
        );
    }

    #[test]
    fn adding_same_id_merges_lines() {
        let mut cart = store();
        cart.add_to_cart(item(1, "X", 5.0), None, 2);
        cart.add_to_cart(item(1, "X", 5.0), None, 3);
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.line(1).unwrap().quantity, 5);
        assert_eq!(cart.cart_total(), 25.0);
    }

    #[test]
    fn merged_quantity_is_capped() {
        let mut cart = store();
        for _ in 0..4 {
            cart.add_to_cart(item(1, "X", 1.0), None, 40);
        }
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.line(1).unwrap().quantity, MAX_QUANTITY);
    }

    #[test]
    fn zero_or_negative_update_removes_line() {
        let mut cart = store();
        cart.add_to_cart(item(1, "Burger", 10.0), None, 2);
        cart.add_to_cart(item(2, "Fries", 3.0), None, 2);

        assert!(matches!(cart.update_quantity(1, 0), QuantityUpdate::Removed(_)));
        assert!(matches!(cart.update_quantity(2, -5), QuantityUpdate::Removed(_)));
        assert!(cart.is_empty());
        assert_eq!(cart.update_quantity(2, 3), QuantityUpdate::Missing);
    }

    #[test]
    fn update_clamps_to_max() {
        let mut cart = store();
        cart.add_to_cart(item(1, "Burger", 10.0), None, 1);
        let QuantityUpdate::Updated(line) = cart.update_quantity(1, 150) else {
            panic!("expected update");
        };
        assert_eq!(line.quantity, 99);
        let notification = cart.feedback().notifier().current().unwrap();
        assert_eq!(notification.message, "Burger quantity: 99");
        assert_eq!(notification.action, NotificationAction::ViewCart);
    }

    #[test]
    fn remove_then_undo_restores_line() {
        let mut cart = store();
        let restaurant = RestaurantSummary {
            id: 3,
            name: "Chop Bar".into(),
            delivery_fee: 4.5,
            delivery_time: "30-45 min".into(),
            min_order: 15.0,
        };
        cart.add_to_cart(item(1, "Banku", 7.0), Some(restaurant.clone()), 4);

        let removed = cart.remove_from_cart(1).unwrap();
        assert!(cart.is_empty());

        let notification = cart.feedback().notifier().current().unwrap();
        assert_eq!(notification.message, "Banku removed from cart");
        let NotificationAction::Undo { line } = notification.action else {
            panic!("expected undo action");
        };
        assert_eq!(line, removed);

        let restored = cart.restore(line);
        assert_eq!(restored.id, 1);
        assert_eq!(restored.quantity, 4);
        assert_eq!(restored.restaurant, Some(restaurant));
    }

    #[test]
    fn removing_unknown_id_is_silent() {
        let mut cart = store();
        assert!(cart.remove_from_cart(42).is_none());
        assert!(cart.feedback().notifier().current().is_none());
    }

    #[test]
    fn totals_ignore_insertion_order() {
        let mut forward = store();
        let mut backward = store();
        let items = [(1, 2.5, 3), (2, 4.0, 1), (3, 0.75, 8)];
        for (id, price, qty) in items {
            forward.add_to_cart(item(id, "a", price), None, qty);
        }
        for (id, price, qty) in items.into_iter().rev() {
            backward.add_to_cart(item(id, "a", price), None, qty);
        }
        assert_eq!(forward.cart_item_count(), 12);
        assert_eq!(backward.cart_item_count(), 12);
        assert!((forward.cart_total() - backward.cart_total()).abs() < 1e-9);
        assert!((forward.cart_total() - 17.5).abs() < 1e-9);
    }

    #[test]
    fn haptic_cues_follow_mutation_kind() {
        let haptics = Arc::new(RecordingHaptics::default());
        let mut cart = CartStore::new(Feedback::new(Notifier::default(), haptics.clone()));
        cart.add_to_cart(item(1, "Burger", 10.0), None, 1);
        cart.add_to_cart(item(1, "Burger", 10.0), None, 1);
        cart.update_quantity(1, 4);
        cart.remove_from_cart(1);

        assert_eq!(
            *haptics.cues.lock().unwrap(),
            vec![
                HapticCue::Impact(ImpactStyle::Medium),
                HapticCue::Notification(NotificationKind::Success),
                HapticCue::Selection,
                HapticCue::Impact(ImpactStyle::Light),
            ]
        );
    }

    #[test]
    fn failing_haptics_never_fail_mutations() {
        let mut cart = CartStore::new(Feedback::new(Notifier::default(), Arc::new(BrokenHaptics)));
        cart.add_to_cart(item(1, "Burger", 10.0), None, 2);
        cart.update_quantity(1, 3);
        assert_eq!(cart.cart_item_count(), 3);
        assert!(cart.remove_from_cart(1).is_some());
    }

    #[test]
    fn clear_cart_is_silent() {
        let mut cart = store();
        cart.add_to_cart(item(1, "Burger", 10.0), None, 1);
        cart.feedback().notifier().dismiss();
        cart.clear_cart();
        assert!(cart.is_empty());
        assert!(cart.feedback().notifier().current().is_none());
        assert!(!cart.preview().visible);
    }

    #[test]
    fn preview_shows_first_three_lines() {
        let mut cart = store();
        for id in 1..=5 {
            cart.add_to_cart(item(id, "dish", 2.0), None, 1);
        }
        let now = Instant::now();
        let preview = cart.preview_at(now);
        assert!(preview.visible);
        assert_eq!(preview.lines.len(), 3);
        assert_eq!(preview.more_lines, 2);
        assert_eq!(preview.item_count, 5);
        assert!(!cart.preview_at(now + PREVIEW_DURATION).visible);
    }

    #[test]
    fn selector_quantity_is_added_then_reset() {
        let mut cart = store();
        cart.select_quantity(1, 4);
        let line = cart.add_selected(item(1, "Kelewele", 3.0), None);
        assert_eq!(line.quantity, 4);
        assert_eq!(cart.selected_quantity(1), 1);
    }
}
