//! Keybinding system for context-aware keyboard shortcuts
//!
//! Provides a registry of keybindings that change based on which control has
//! focus. The registry drives key dispatch, the nav bar and the help overlay,
//! so all three always agree.

use crate::app::Focus;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Actions that can be triggered by keybindings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    NavigateUp,
    NavigateDown,
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    Top,
    Bottom,
    SwitchFocus,
    ShowHome,
    ShowGuide,
    Help,
    Quit,
}

/// A keybinding definition
#[derive(Debug, Clone)]
pub struct Keybinding {
    pub key: KeyCode,
    pub modifiers: KeyModifiers,
    pub action: KeyAction,
    pub display: String,
    pub description: String,
}

impl Keybinding {
    /// Create a new keybinding with no modifiers
    pub fn new(key: KeyCode, action: KeyAction, display: &str, description: &str) -> Self {
        Self {
            key,
            modifiers: KeyModifiers::NONE,
            action,
            display: display.to_string(),
            description: description.to_string(),
        }
    }

    /// Create a keybinding with modifiers
    pub fn with_modifiers(
        key: KeyCode,
        modifiers: KeyModifiers,
        action: KeyAction,
        display: &str,
        description: &str,
    ) -> Self {
        Self {
            key,
            modifiers,
            action,
            display: display.to_string(),
            description: description.to_string(),
        }
    }

    /// Whether a key event triggers this binding
    ///
    /// Shift is ignored so that `?` and uppercase letters match regardless of
    /// how the terminal reports them.
    pub fn matches(&self, event: &KeyEvent) -> bool {
        let modifiers = event.modifiers.difference(KeyModifiers::SHIFT);
        self.key == event.code && self.modifiers == modifiers
    }
}

/// Context-aware keybinding registry
pub struct KeybindingContext {
    /// Focus-specific keybindings
    focus_bindings: HashMap<Focus, Vec<Keybinding>>,
    /// Global keybindings (available regardless of focus)
    global_bindings: Vec<Keybinding>,
}

impl Default for KeybindingContext {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingContext {
    /// Create a new keybinding context with default bindings
    pub fn new() -> Self {
        let mut ctx = Self {
            focus_bindings: HashMap::new(),
            global_bindings: Vec::new(),
        };
        ctx.register_defaults();
        ctx
    }

    /// Register default keybindings for both focus targets
    fn register_defaults(&mut self) {
        self.global_bindings = vec![
            Keybinding::new(KeyCode::Tab, KeyAction::SwitchFocus, "Tab", "Switch focus"),
            Keybinding::new(KeyCode::BackTab, KeyAction::SwitchFocus, "S-Tab", "Switch focus"),
            Keybinding::new(KeyCode::Char('j'), KeyAction::ScrollDown, "J", "Scroll down"),
            Keybinding::new(KeyCode::Char('k'), KeyAction::ScrollUp, "K", "Scroll up"),
            Keybinding::new(KeyCode::PageUp, KeyAction::PageUp, "PgUp", "Page up"),
            Keybinding::new(KeyCode::PageDown, KeyAction::PageDown, "PgDn", "Page down"),
            Keybinding::new(KeyCode::Home, KeyAction::Top, "Home", "Top of page"),
            Keybinding::new(KeyCode::End, KeyAction::Bottom, "End", "Bottom of page"),
            Keybinding::new(KeyCode::Char('1'), KeyAction::ShowHome, "1", "Home page"),
            Keybinding::new(KeyCode::Char('2'), KeyAction::ShowGuide, "2", "Resource Guide"),
            Keybinding::new(KeyCode::Char('?'), KeyAction::Help, "?", "Help"),
            Keybinding::new(KeyCode::Char('q'), KeyAction::Quit, "Q", "Quit"),
            Keybinding::new(KeyCode::Esc, KeyAction::Quit, "Esc", "Quit"),
            Keybinding::with_modifiers(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL,
                KeyAction::Quit,
                "Ctrl+C",
                "Quit",
            ),
        ];

        self.focus_bindings.insert(
            Focus::Sidebar,
            vec![
                Keybinding::new(KeyCode::Up, KeyAction::NavigateUp, "Up", "Previous page"),
                Keybinding::new(KeyCode::Down, KeyAction::NavigateDown, "Down", "Next page"),
            ],
        );

        self.focus_bindings.insert(
            Focus::Selector,
            vec![
                Keybinding::new(KeyCode::Up, KeyAction::NavigateUp, "Up", "Previous option"),
                Keybinding::new(KeyCode::Down, KeyAction::NavigateDown, "Down", "Next option"),
            ],
        );
    }

    /// Get keybindings for a focus target (focus bindings first, then global)
    pub fn get_bindings(&self, focus: &Focus) -> Vec<&Keybinding> {
        let mut bindings: Vec<&Keybinding> = Vec::new();

        if let Some(focus_bindings) = self.focus_bindings.get(focus) {
            bindings.extend(focus_bindings.iter());
        }
        bindings.extend(self.global_bindings.iter());

        bindings
    }

    /// Resolve a key event to an action under the given focus
    pub fn action_for(&self, focus: &Focus, event: &KeyEvent) -> Option<KeyAction> {
        self.get_bindings(focus)
            .into_iter()
            .find(|b| b.matches(event))
            .map(|b| b.action)
    }

    /// Get navigation bar items for display
    pub fn get_nav_items(&self, focus: &Focus) -> Vec<NavBarItem> {
        let bindings = self.get_bindings(focus);

        let priority_actions = [
            KeyAction::NavigateUp,
            KeyAction::NavigateDown,
            KeyAction::SwitchFocus,
            KeyAction::PageDown,
            KeyAction::Help,
            KeyAction::Quit,
        ];

        // Combine Up/Down into single item for cleaner display
        let mut items: Vec<NavBarItem> = Vec::new();
        let mut has_nav = false;

        for action in priority_actions {
            if matches!(action, KeyAction::NavigateUp | KeyAction::NavigateDown) {
                if has_nav {
                    continue;
                }
                let label = match focus {
                    Focus::Sidebar => "Page",
                    Focus::Selector => "Choose",
                };
                items.push(NavBarItem {
                    key_display: "Up/Dn".to_string(),
                    action_label: label.to_string(),
                });
                has_nav = true;
            } else if let Some(binding) = bindings.iter().find(|b| b.action == action) {
                items.push(NavBarItem {
                    key_display: binding.display.clone(),
                    action_label: binding.description.clone(),
                });
            }
        }

        items
    }

    /// Get full help content for a focus target (for help overlay)
    pub fn get_help_content(&self, focus: &Focus) -> Vec<HelpSection> {
        let groups: [(&str, &[KeyAction]); 3] = [
            (
                "Navigation",
                &[
                    KeyAction::NavigateUp,
                    KeyAction::NavigateDown,
                    KeyAction::SwitchFocus,
                    KeyAction::ShowHome,
                    KeyAction::ShowGuide,
                ],
            ),
            (
                "Scrolling",
                &[
                    KeyAction::ScrollUp,
                    KeyAction::ScrollDown,
                    KeyAction::PageUp,
                    KeyAction::PageDown,
                    KeyAction::Top,
                    KeyAction::Bottom,
                ],
            ),
            ("General", &[KeyAction::Help, KeyAction::Quit]),
        ];

        let bindings = self.get_bindings(focus);
        let mut sections = Vec::new();

        for (title, actions) in groups {
            let mut items: Vec<(String, String)> = Vec::new();
            for binding in bindings.iter().filter(|b| actions.contains(&b.action)) {
                // Collapse aliases (Tab / S-Tab, Q / Esc) into one row
                if let Some(existing) = items.iter_mut().find(|(_, d)| *d == binding.description) {
                    existing.0 = format!("{}/{}", existing.0, binding.display);
                } else {
                    items.push((binding.display.clone(), binding.description.clone()));
                }
            }
            if !items.is_empty() {
                sections.push(HelpSection {
                    title: title.to_string(),
                    items,
                });
            }
        }

        sections
    }
}

/// Navigation bar item for display
#[derive(Debug, Clone)]
pub struct NavBarItem {
    pub key_display: String,
    pub action_label: String,
}

/// Help section for the help overlay
#[derive(Debug, Clone)]
pub struct HelpSection {
    pub title: String,
    pub items: Vec<(String, String)>,
}
