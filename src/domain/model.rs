use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_non_negative, Validate};
use std::cmp::Ordering;
use std::fmt;

/// A place offering an activity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    name: String,
    description: String,
    reservation_policy: String,
    parking_spots: i32,
}

impl Location {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        reservation_policy: impl Into<String>,
        parking_spots: i32,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            reservation_policy: reservation_policy.into(),
            parking_spots,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn reservation_policy(&self) -> &str {
        &self.reservation_policy
    }

    pub fn parking_spots(&self) -> i32 {
        self.parking_spots
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Location Name: {}", self.name)?;
        writeln!(f, "Location Description: {}", self.description)?;
        writeln!(f, "Reservation Requirements: {}", self.reservation_policy)?;
        writeln!(f, "Number of Parking Spots: {}", self.parking_spots)?;
        writeln!(f)
    }
}

/// A snow activity and the locations offering it, most recently added first.
///
/// Every constructed `Activity` has non-empty text fields and a finite,
/// non-negative cost. Equality and ordering look at the name only.
#[derive(Debug, Clone)]
pub struct Activity {
    name: String,
    description: String,
    equipment: String,
    cost: f64,
    locations: Vec<Location>,
}

impl Activity {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        equipment: impl Into<String>,
        cost: f64,
    ) -> Result<Self> {
        let (name, description, equipment) = (name.into(), description.into(), equipment.into());
        check_fields(&name, &description, &equipment, cost)?;

        Ok(Self {
            name,
            description,
            equipment,
            cost,
            locations: Vec::new(),
        })
    }

    /// Replaces all four fields, or none of them if any value is rejected.
    /// Locations are kept.
    pub fn load(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        equipment: impl Into<String>,
        cost: f64,
    ) -> Result<()> {
        let (name, description, equipment) = (name.into(), description.into(), equipment.into());
        check_fields(&name, &description, &equipment, cost)?;

        self.name = name;
        self.description = description;
        self.equipment = equipment;
        self.cost = cost;
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn equipment(&self) -> &str {
        &self.equipment
    }

    pub fn cost(&self) -> f64 {
        self.cost
    }

    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    pub fn is_named(&self, name: &str) -> bool {
        self.name == name
    }

    pub fn compare_name(&self, other: &Activity) -> Ordering {
        self.name.cmp(&other.name)
    }

    pub(crate) fn prepend_location(&mut self, location: Location) {
        self.locations.insert(0, location);
    }

    pub fn find_location(&self, name: &str) -> Option<&Location> {
        self.locations.iter().find(|location| location.name == name)
    }
}

fn check_fields(name: &str, description: &str, equipment: &str, cost: f64) -> Result<()> {
    validate_non_empty_string("name", name)?;
    validate_non_empty_string("description", description)?;
    validate_non_empty_string("equipment", equipment)?;
    validate_non_negative("cost", cost)
}

impl Validate for Activity {
    fn validate(&self) -> Result<()> {
        check_fields(&self.name, &self.description, &self.equipment, self.cost)
    }
}

impl PartialEq for Activity {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Activity {}

impl PartialOrd for Activity {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Activity {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare_name(other)
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Description: {}", self.description)?;
        writeln!(f, "Equipment Needed: {}", self.equipment)?;
        writeln!(f, "Cost: {}", self.cost)?;
        writeln!(f)
    }
}
