//! View-model rendering for itineraries.
//!
//! Rendering is two steps: build a [`Node`] tree from typed data, then
//! serialize it with [`Node::to_html`]. Text never passes through as markup.

mod itinerary;
mod node;

pub use itinerary::{error_alert, render_itinerary, NO_ITINERARY_NOTICE};
pub use node::{Element, Node};
