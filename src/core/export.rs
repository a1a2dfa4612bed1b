use crate::domain::model::{Activity, Location};
use std::fmt::Write;

/// Renders activities in the plain-text export layout. Each activity is
/// followed by a `Locations:` header and one tab-indented block per location.
pub fn render<'a>(activities: impl IntoIterator<Item = &'a Activity>) -> String {
    let mut document = String::new();
    for activity in activities {
        write_activity(&mut document, activity);
        document.push_str("\nLocations:\n");
        for location in activity.locations() {
            write_location(&mut document, location);
        }
    }
    document
}

// Writing into a String cannot fail.
fn write_activity(out: &mut String, activity: &Activity) {
    let _ = writeln!(out, "Activity Name: {}", activity.name());
    let _ = writeln!(out, "Activity Description: {}", activity.description());
    let _ = writeln!(out, "Equipment Needed for Activity: {}", activity.equipment());
    let _ = writeln!(out, "Activity Cost: {}", activity.cost());
}

fn write_location(out: &mut String, location: &Location) {
    let _ = writeln!(out, "\tLocation Name: {}", location.name());
    let _ = writeln!(out, "\tLocation Description: {}", location.description());
    let _ = writeln!(out, "\tReservation Requirements: {}", location.reservation_policy());
    let _ = writeln!(out, "\tNumber of Parking Spots: {}", location.parking_spots());
    out.push('\n');
}
