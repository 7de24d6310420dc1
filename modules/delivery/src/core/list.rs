//! The locked message list: ordered in-flight messages, cursor, expiry
//! chains, and the bounded node pool.

mod delivered_message;
mod expiry_sweep;
mod handle_action;
mod list_state;
mod locked_message_list;
mod locked_node;
mod node_arena;
mod node_index;
mod side_effects;
#[cfg(test)]
pub(crate) mod test_support;

pub use delivered_message::DeliveredMessage;
pub use handle_action::HandleAction;
pub use locked_message_list::LockedMessageList;
pub use node_arena::POOL_CAPACITY;
