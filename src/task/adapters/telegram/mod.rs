//! Telegram adapter for outbound notifications.

mod notifier;

pub use notifier::{TelegramConfig, TelegramNotifier};
