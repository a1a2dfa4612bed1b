use crate::core::export;
use crate::domain::model::{Activity, Location};
use crate::domain::ports::ExportSink;
use crate::utils::error::{CatalogError, Result};
use crate::utils::validation::Validate;
use std::io::Write;
use std::path::PathBuf;

/// Activities kept sorted by name, names unique.
#[derive(Debug, Default)]
pub struct ActivityCatalog {
    activities: Vec<Activity>,
}

impl ActivityCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    pub fn add(&mut self, activity: Activity) -> Result<()> {
        if self.find_by_name(activity.name()).is_some() {
            tracing::debug!("Rejected duplicate activity '{}'", activity.name());
            return Err(CatalogError::DuplicateName {
                name: activity.name().to_string(),
            });
        }
        activity.validate()?;

        self.insert_sorted(activity);
        Ok(())
    }

    /// Replaces the fields of the activity called `name`. A new name is checked
    /// for duplicates and the activity moves to its sorted position; on any
    /// failure the catalog is left as it was.
    pub fn reload(
        &mut self,
        name: &str,
        new_name: &str,
        description: &str,
        equipment: &str,
        cost: f64,
    ) -> Result<()> {
        let index = self
            .position(name)
            .ok_or_else(|| activity_not_found(name))?;
        if new_name != name && self.position(new_name).is_some() {
            tracing::debug!("Rejected rename of '{}' to existing '{}'", name, new_name);
            return Err(CatalogError::DuplicateName {
                name: new_name.to_string(),
            });
        }

        let mut activity = self.activities.remove(index);
        if let Err(e) = activity.load(new_name, description, equipment, cost) {
            self.activities.insert(index, activity);
            return Err(e);
        }
        self.insert_sorted(activity);
        Ok(())
    }

    fn insert_sorted(&mut self, activity: Activity) {
        let index = self
            .activities
            .partition_point(|existing| existing.compare_name(&activity).is_lt());
        tracing::debug!("Inserting activity '{}' at position {}", activity.name(), index);
        self.activities.insert(index, activity);
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.activities
            .iter()
            .position(|activity| activity.is_named(name))
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Activity> {
        self.activities.iter().find(|activity| activity.is_named(name))
    }

    // Mutable access stays private so names cannot change underneath the sort order.
    fn find_by_name_mut(&mut self, name: &str) -> Option<&mut Activity> {
        self.activities
            .iter_mut()
            .find(|activity| activity.is_named(name))
    }

    /// Removes the activity together with its locations and returns it.
    pub fn remove(&mut self, name: &str) -> Result<Activity> {
        if self.activities.is_empty() {
            return Err(CatalogError::EmptyCatalog);
        }

        let index = self
            .position(name)
            .ok_or_else(|| CatalogError::NoMatch {
                name: name.to_string(),
            })?;

        let removed = self.activities.remove(index);
        tracing::debug!(
            "Removed activity '{}' with {} locations",
            removed.name(),
            removed.locations().len()
        );
        Ok(removed)
    }

    pub fn list_all(&self) -> impl ExactSizeIterator<Item = &Activity> + '_ {
        self.activities.iter()
    }

    pub fn add_location(&mut self, activity_name: &str, location: Location) -> Result<()> {
        let activity = self
            .find_by_name_mut(activity_name)
            .ok_or_else(|| activity_not_found(activity_name))?;

        tracing::debug!(
            "Adding location '{}' to activity '{}'",
            location.name(),
            activity_name
        );
        activity.prepend_location(location);
        Ok(())
    }

    pub fn list_locations(&self, activity_name: &str) -> Result<&[Location]> {
        self.find_by_name(activity_name)
            .map(Activity::locations)
            .ok_or_else(|| activity_not_found(activity_name))
    }

    pub fn find_reservation(&self, activity_name: &str, location_name: &str) -> Result<&str> {
        let activity = self
            .find_by_name(activity_name)
            .ok_or_else(|| activity_not_found(activity_name))?;

        activity
            .find_location(location_name)
            .map(Location::reservation_policy)
            .ok_or_else(|| CatalogError::LocationNotFound {
                activity: activity_name.to_string(),
                location: location_name.to_string(),
            })
    }

    /// Writes the whole catalog as text. Nothing reaches `sink` until the
    /// full document has been rendered.
    pub fn export_to<W: Write + ?Sized>(&self, sink: &mut W) -> Result<()> {
        let document = export::render(self.list_all());
        sink.write_all(document.as_bytes())?;
        sink.flush()?;
        Ok(())
    }

    /// Exports into `file_name` opened through `sink`, returning the path written.
    pub fn export(&self, sink: &dyn ExportSink, file_name: &str) -> Result<PathBuf> {
        let (mut writer, path) = sink.open(file_name)?;
        self.export_to(writer.as_mut())?;
        tracing::info!(
            "Exported {} activities to {}",
            self.activities.len(),
            path.display()
        );
        Ok(path)
    }
}

fn activity_not_found(name: &str) -> CatalogError {
    CatalogError::ActivityNotFound {
        name: name.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn activity(name: &str) -> Activity {
        Activity::new(name, format!("{} description", name), "Gear", 10.0).unwrap()
    }

    fn names(catalog: &ActivityCatalog) -> Vec<&str> {
        catalog.list_all().map(Activity::name).collect()
    }

    #[test]
    fn test_add_then_find_returns_same_fields() {
        let mut catalog = ActivityCatalog::new();
        catalog
            .add(Activity::new("Skiing", "Downhill skiing", "Skis, poles", 45.0).unwrap())
            .unwrap();

        let found = catalog.find_by_name("Skiing").unwrap();
        assert_eq!(found.name(), "Skiing");
        assert_eq!(found.description(), "Downhill skiing");
        assert_eq!(found.equipment(), "Skis, poles");
        assert_eq!(found.cost(), 45.0);
        assert!(catalog.find_by_name("skiing").is_none());
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let mut catalog = ActivityCatalog::new();
        catalog.add(activity("Skiing")).unwrap();
        let err = catalog.add(activity("Skiing")).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateName { ref name } if name == "Skiing"));
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_sorted_regardless_of_insert_order() {
        let orders = [
            ["Skiing", "Sledding", "Ice Fishing"],
            ["Ice Fishing", "Sledding", "Skiing"],
            ["Sledding", "Ice Fishing", "Skiing"],
        ];
        for order in orders {
            let mut catalog = ActivityCatalog::new();
            for name in order {
                catalog.add(activity(name)).unwrap();
            }
            assert_eq!(names(&catalog), vec!["Ice Fishing", "Skiing", "Sledding"]);
        }
    }

    #[test]
    fn test_empty_catalog_lists_nothing() {
        let catalog = ActivityCatalog::new();
        assert_eq!(catalog.list_all().len(), 0);
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_remove_cases() {
        let mut catalog = ActivityCatalog::new();
        assert!(matches!(
            catalog.remove("Skiing"),
            Err(CatalogError::EmptyCatalog)
        ));

        catalog.add(activity("Skiing")).unwrap();
        catalog.add(activity("Sledding")).unwrap();
        catalog
            .add_location("Skiing", Location::new("Mt. Hood", "Resort", "Required", 120))
            .unwrap();

        let err = catalog.remove("Snowshoeing").unwrap_err();
        assert!(matches!(err, CatalogError::NoMatch { .. }));
        assert!(err.is_not_found());

        let removed = catalog.remove("Skiing").unwrap();
        assert_eq!(removed.locations().len(), 1);
        assert_eq!(names(&catalog), vec!["Sledding"]);
        assert!(catalog.list_locations("Skiing").is_err());
    }

    #[test]
    fn test_add_location_prepends() {
        let mut catalog = ActivityCatalog::new();
        let err = catalog
            .add_location("Skiing", Location::new("Mt. Hood", "Resort", "Required", 120))
            .unwrap_err();
        assert!(matches!(err, CatalogError::ActivityNotFound { .. }));

        catalog.add(activity("Skiing")).unwrap();
        catalog
            .add_location("Skiing", Location::new("Mt. Hood", "Resort", "Required", 120))
            .unwrap();
        catalog
            .add_location("Skiing", Location::new("Mt. Bachelor", "Volcano", "None", 800))
            .unwrap();

        let locations = catalog.list_locations("Skiing").unwrap();
        assert_eq!(locations[0].name(), "Mt. Bachelor");
        assert_eq!(locations[1].name(), "Mt. Hood");
    }

    #[test]
    fn test_list_locations_unknown_activity() {
        let mut catalog = ActivityCatalog::new();
        catalog.add(activity("Skiing")).unwrap();
        assert!(catalog.list_locations("Skiing").unwrap().is_empty());
        assert!(matches!(
            catalog.list_locations("Sledding"),
            Err(CatalogError::ActivityNotFound { .. })
        ));
    }

    #[test]
    fn test_find_reservation() {
        let mut catalog = ActivityCatalog::new();
        assert!(matches!(
            catalog.find_reservation("Skiing", "Mt. Hood"),
            Err(CatalogError::ActivityNotFound { .. })
        ));

        catalog.add(activity("Skiing")).unwrap();
        assert!(matches!(
            catalog.find_reservation("Skiing", "Mt. Hood"),
            Err(CatalogError::LocationNotFound { .. })
        ));

        catalog
            .add_location(
                "Skiing",
                Location::new("Mt. Hood", "Resort", "Required on weekends", 120),
            )
            .unwrap();
        assert_eq!(
            catalog.find_reservation("Skiing", "Mt. Hood").unwrap(),
            "Required on weekends"
        );
        assert!(matches!(
            catalog.find_reservation("Skiing", "Timberline"),
            Err(CatalogError::LocationNotFound { .. })
        ));
    }

    #[test]
    fn test_export_to_writer() {
        let mut catalog = ActivityCatalog::new();
        catalog
            .add(Activity::new("Skiing", "Downhill skiing", "Skis, poles", 45.0).unwrap())
            .unwrap();
        catalog
            .add_location(
                "Skiing",
                Location::new("Mt. Hood", "Local resort", "Required", 120),
            )
            .unwrap();

        let mut out = Vec::new();
        catalog.export_to(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        let name = text.find("Activity Name: Skiing").unwrap();
        let cost = text.find("Activity Cost: 45").unwrap();
        let spots = text.find("Number of Parking Spots: 120").unwrap();
        assert!(name < cost && cost < spots);
    }

    #[test]
    fn test_reload_keeps_catalog_sorted_and_unique() {
        let mut catalog = ActivityCatalog::new();
        for name in ["Ice Fishing", "Skiing", "Sledding"] {
            catalog.add(activity(name)).unwrap();
        }

        let err = catalog
            .reload("Sledding", "Ice Fishing", "Renamed", "Gear", 5.0)
            .unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateName { ref name } if name == "Ice Fishing"));
        assert_eq!(names(&catalog), vec!["Ice Fishing", "Skiing", "Sledding"]);

        catalog
            .add_location("Skiing", Location::new("Mt. Hood", "Resort", "Required", 120))
            .unwrap();
        catalog
            .reload("Skiing", "Aaa", "Renamed", "Gear", 5.0)
            .unwrap();
        assert_eq!(names(&catalog), vec!["Aaa", "Ice Fishing", "Sledding"]);
        assert_eq!(catalog.list_locations("Aaa").unwrap().len(), 1);
        assert!(catalog.find_by_name("Skiing").is_none());

        catalog.add(activity("Skiing")).unwrap();
        assert_eq!(
            names(&catalog),
            vec!["Aaa", "Ice Fishing", "Skiing", "Sledding"]
        );
    }

    #[test]
    fn test_reload_same_name_and_failures() {
        let mut catalog = ActivityCatalog::new();
        catalog.add(activity("Skiing")).unwrap();
        catalog.add(activity("Sledding")).unwrap();

        catalog
            .reload("Skiing", "Skiing", "Cross-country", "Skinny skis", 20.0)
            .unwrap();
        let skiing = catalog.find_by_name("Skiing").unwrap();
        assert_eq!(skiing.description(), "Cross-country");
        assert_eq!(skiing.cost(), 20.0);

        assert!(matches!(
            catalog.reload("Skiing", "Zzz", "d", "e", -1.0),
            Err(CatalogError::InvalidField { .. })
        ));
        assert!(matches!(
            catalog.reload("Tubing", "Zzz", "d", "e", 1.0),
            Err(CatalogError::ActivityNotFound { .. })
        ));
        assert_eq!(names(&catalog), vec!["Skiing", "Sledding"]);
        assert_eq!(catalog.find_by_name("Skiing").unwrap().cost(), 20.0);
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_export_write_failure_is_io_error() {
        let mut catalog = ActivityCatalog::new();
        catalog.add(activity("Skiing")).unwrap();
        let err = catalog.export_to(&mut FailingWriter).unwrap_err();
        assert!(matches!(err, CatalogError::IoError(_)));
        assert_eq!(catalog.len(), 1);
    }
}
