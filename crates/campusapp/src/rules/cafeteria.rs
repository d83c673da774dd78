//! Cafeteria: the immutable menu catalog and the append-only order log.
//!
//! Order creation never validates `item_id` against the menu; the catalog
//! and the log are deliberately decoupled, matching how the portal has
//! always behaved.

use crate::clock;
use crate::error::Result;
use crate::events::Event;
use crate::model::{MenuItem, Order};
use crate::store::{CampusStore, StorageBackend};

const ORDER_PLACED: &str = "Placed";
pub const GUEST_USER: &str = "guest";

pub fn menu<B: StorageBackend>(store: &CampusStore<B>) -> Vec<MenuItem> {
    store.snapshot().menu_items.clone()
}

/// Append an order for `item_id`. A missing user falls back to `guest`.
pub fn create_order<B: StorageBackend>(
    store: &mut CampusStore<B>,
    item_id: u32,
    user: Option<String>,
) -> Result<Event> {
    let user = user.unwrap_or_else(|| GUEST_USER.to_string());
    let order = Order {
        id: uuid::Uuid::new_v4(),
        item_id,
        user: user.clone(),
        time: clock::wall_time(),
        status: ORDER_PLACED.to_string(),
    };

    store.mutate(|data| data.orders.push(order))?;

    Ok(Event::OrderCreated { item_id, user })
}

/// Orders placed by `user`, newest first.
pub fn orders_for_user<B: StorageBackend>(store: &CampusStore<B>, user: &str) -> Vec<Order> {
    let mut orders: Vec<Order> = store
        .snapshot()
        .orders
        .iter()
        .filter(|order| order.user == user)
        .cloned()
        .collect();
    orders.reverse();
    orders
}
