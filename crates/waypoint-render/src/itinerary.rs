use waypoint_core::{Attraction, DayPlan, ItineraryResponse};

use crate::node::{Element, Node};

pub const NO_ITINERARY_NOTICE: &str = "No itinerary data available";

/// Build the view tree for an itinerary.
///
/// Day plans render in the order received, followed by the tips block. When
/// `daily_plans` is absent the container holds only the no-data notice.
#[must_use]
pub fn render_itinerary(itinerary: &ItineraryResponse) -> Node {
    let root = Element::new("div").class("itinerary");

    let Some(plans) = itinerary.daily_plans.as_deref() else {
        return root
            .child(
                Element::new("div")
                    .class("alert alert-warning")
                    .text(NO_ITINERARY_NOTICE),
            )
            .into();
    };

    let mut root = root.children(plans.iter().map(day_section));
    if let Some(tips) = itinerary.overall_tips() {
        root = root.child(
            Element::new("div")
                .class("overall-tips mt-4")
                .child(Element::new("h6").text("Overall Tips"))
                .child(Element::new("div").class("alert alert-info").text(tips)),
        );
    }
    root.into()
}

/// A single error alert replacing the results content.
#[must_use]
pub fn error_alert(message: &str) -> Node {
    Element::new("div")
        .class("alert alert-danger")
        .text(message)
        .into()
}

fn day_section(day: &DayPlan) -> Element {
    let mut section = Element::new("div")
        .class("day-plan mb-4")
        .child(Element::new("h6").text(format!("Day {}", day.day_number)))
        .child(
            Element::new("ul")
                .class("list-group")
                .children(day.attractions.iter().map(attraction_item)),
        );

    let meals = day.meal_suggestions();
    if !meals.is_empty() {
        section = section.child(
            Element::new("div")
                .class("meal-suggestions mt-2")
                .child(
                    Element::new("small")
                        .class("text-muted")
                        .text("Meal Suggestions:"),
                )
                .child(
                    Element::new("ul").class("list-unstyled").children(
                        meals
                            .iter()
                            .map(|meal| Element::new("li").text(format!("• {meal}"))),
                    ),
                ),
        );
    }
    section
}

fn attraction_item(attraction: &Attraction) -> Element {
    let mut item = Element::new("li")
        .class("list-group-item")
        .child(Element::new("strong").text(attraction.name.as_str()))
        .child(Element::new("br"))
        .child(Element::new("small").class("text-muted").text(format!(
            "{} • {}",
            attraction.category, attraction.estimated_duration
        )))
        .child(Element::new("br"));

    if let Some(address) = attraction.address() {
        item = item
            .child(
                Element::new("small")
                    .class("address text-muted")
                    .text(address),
            )
            .child(Element::new("br"));
    }
    item.text(attraction.description.as_str())
}

#[cfg(test)]
#[path = "itinerary_test.rs"]
mod tests;
