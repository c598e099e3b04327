//! Recorded screen effects
//!
//! [`ScreenEffects`] stands in for both the navigation stack and the
//! snackbar host: it records every intent so a caller (the HTTP host, or a
//! test) can drain and forward them.

use super::{
    navigation::{Destination, Navigator},
    notification::{Notification, Notifier},
};
use parking_lot::Mutex;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum ScreenEffect {
    Navigate(Destination),
    Notify(Notification),
}

#[derive(Debug, Default)]
pub struct ScreenEffects {
    recorded: Mutex<Vec<ScreenEffect>>,
}

impl ScreenEffects {
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes every effect recorded so far, oldest first.
    pub fn drain(&self) -> Vec<ScreenEffect> {
        std::mem::take(&mut *self.recorded.lock())
    }

    pub fn navigations(&self) -> Vec<Destination> {
        self.recorded
            .lock()
            .iter()
            .filter_map(|e| match e {
                ScreenEffect::Navigate(d) => Some(d.clone()),
                ScreenEffect::Notify(_) => None,
            })
            .collect()
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.recorded
            .lock()
            .iter()
            .filter_map(|e| match e {
                ScreenEffect::Notify(n) => Some(n.clone()),
                ScreenEffect::Navigate(_) => None,
            })
            .collect()
    }
}

impl Navigator for ScreenEffects {
    fn navigate(&self, destination: Destination) {
        self.recorded.lock().push(ScreenEffect::Navigate(destination));
    }
}

impl Notifier for ScreenEffects {
    fn show(&self, notification: Notification) {
        self.recorded.lock().push(ScreenEffect::Notify(notification));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_in_order_and_drains() {
        let effects = ScreenEffects::new();
        effects.navigate(Destination::Cart);
        effects.show(Notification::new("hello"));

        assert_eq!(effects.navigations(), vec![Destination::Cart]);
        assert_eq!(effects.notifications(), vec![Notification::new("hello")]);

        let drained = effects.drain();
        assert_eq!(
            drained,
            vec![
                ScreenEffect::Navigate(Destination::Cart),
                ScreenEffect::Notify(Notification::new("hello")),
            ]
        );
        assert!(effects.drain().is_empty());
    }

    #[test]
    fn effects_serialize_with_tagged_payloads() {
        let json = serde_json::to_value(ScreenEffect::Navigate(Destination::product_detail("2")))
            .unwrap();
        assert_eq!(json["type"], "navigate");
        assert_eq!(json["payload"]["name"], "productDetail");
        assert_eq!(json["payload"]["productId"], "2");
    }
}
