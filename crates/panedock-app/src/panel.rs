//! Panel content components
//!
//! Every panel mounted into the dock shows one of three components. They all
//! take the same props and read or write the shared counter; the terminal
//! crate decides how each one is drawn.

use panedock_core::WidgetType;

use crate::message::Message;
use crate::store::CounterState;

/// Inputs every panel content component accepts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelProps {
    pub id: String,
    pub name: String,
}

/// The renderable units a panel can host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelComponent {
    /// Button that increments the shared count
    Incrementor,
    /// Button that decrements the shared count
    Decrementor,
    /// Read-only display of the shared count
    Watcher,
}

impl PanelComponent {
    /// Message produced when the component's control is pressed
    pub fn press(&self) -> Option<Message> {
        match self {
            PanelComponent::Incrementor => Some(Message::Increment),
            PanelComponent::Decrementor => Some(Message::Decrement),
            PanelComponent::Watcher => None,
        }
    }

    /// Text the component shows for the current counter
    pub fn text(&self, counter: &CounterState) -> String {
        match self {
            PanelComponent::Incrementor => "Increment Count".to_string(),
            PanelComponent::Decrementor => "Decrement Count".to_string(),
            PanelComponent::Watcher => format!("The current count is {}", counter.value()),
        }
    }
}

/// A component instance mounted into a panel node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountedPanel {
    pub component: PanelComponent,
    pub props: PanelProps,
}

/// Resolve the component for a widget type
pub fn component_for(kind: WidgetType) -> PanelComponent {
    match kind {
        WidgetType::Watcher => PanelComponent::Watcher,
        WidgetType::Incrementor => PanelComponent::Incrementor,
        WidgetType::Decrementor => PanelComponent::Decrementor,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_for_each_type() {
        assert_eq!(
            component_for(WidgetType::Incrementor),
            PanelComponent::Incrementor
        );
        assert_eq!(
            component_for(WidgetType::Decrementor),
            PanelComponent::Decrementor
        );
        assert_eq!(component_for(WidgetType::Watcher), PanelComponent::Watcher);
    }

    #[test]
    fn test_unknown_tag_mounts_watcher() {
        assert_eq!(
            component_for(WidgetType::resolve("SPINNER")),
            PanelComponent::Watcher
        );
        assert_eq!(
            component_for(WidgetType::resolve("decrementor")),
            PanelComponent::Decrementor
        );
    }

    #[test]
    fn test_press_messages() {
        assert!(matches!(
            PanelComponent::Incrementor.press(),
            Some(Message::Increment)
        ));
        assert!(matches!(
            PanelComponent::Decrementor.press(),
            Some(Message::Decrement)
        ));
        assert!(PanelComponent::Watcher.press().is_none());
    }

    #[test]
    fn test_watcher_text_follows_counter() {
        let mut counter = CounterState::new();
        counter.increment();
        counter.increment();
        assert_eq!(
            PanelComponent::Watcher.text(&counter),
            "The current count is 2"
        );
        assert_eq!(PanelComponent::Incrementor.text(&counter), "Increment Count");
    }
}
