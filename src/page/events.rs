//! Page events
//!
//! Clicks are handled once for the whole shows list rather than per card:
//! the event names the card and the element inside it that was clicked, and
//! the show id is looked up from the list at dispatch time. Cards rendered
//! after the handler was set up are therefore dispatched like any other.

use super::ShowsList;

/// A submission of the search form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchSubmit {
    /// Current value of the search term input
    pub term: String,
}

impl SearchSubmit {
    pub fn new(term: impl Into<String>) -> Self {
        Self { term: term.into() }
    }
}

/// The element inside a show card that received a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardElement {
    /// The card container itself
    Card,
    Image,
    Title,
    Summary,
    /// The "Episodes" button
    EpisodesButton,
}

impl CardElement {
    fn is_button(self) -> bool {
        matches!(self, CardElement::EpisodesButton)
    }
}

/// A click somewhere inside the shows list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClickEvent {
    /// Position of the card containing the clicked element
    pub card: usize,
    pub element: CardElement,
}

impl ClickEvent {
    /// A click on the "Episodes" button of the card at `card`.
    pub fn episodes_button(card: usize) -> Self {
        Self {
            card,
            element: CardElement::EpisodesButton,
        }
    }
}

/// Dispatches a click on the shows list.
///
/// Only button clicks are dispatched. Returns the show id embedded in the
/// enclosing card, or `None` if the click is not for an "Episodes" button
/// or no such card exists.
pub fn delegate_click(shows_list: &ShowsList, event: &ClickEvent) -> Option<u64> {
    if !event.element.is_button() {
        return None;
    }
    shows_list.closest_show_id(event.card)
}
