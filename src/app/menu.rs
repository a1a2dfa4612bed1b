use crate::core::catalog::ActivityCatalog;
use crate::domain::model::{Activity, Location};
use crate::domain::ports::{ConfigProvider, ExportSink};
use crate::utils::error::{CatalogError, Result};
use std::io::{BufRead, Write};

const SELECTION_PROMPT: &str = "Please enter your menu selection now: ";
const RETURN_PROMPT: &str =
    "Would you like to return to the main menu? Enter Y for yes or N for no";
const ANOTHER_PROMPT: &str = "Would you like to add another activity? Enter Y for yes or N for no";
const ACTIVITY_NAME_PROMPT: &str = "Please enter the name of the activity you wish to add:";
const ACTIVITY_DESCRIPTION_PROMPT: &str = "Please enter a description of the activity:";
const EQUIPMENT_PROMPT: &str = "Please enter the equipment needed for this activity:";
const COST_PROMPT: &str = "Please enter the cost of the activity:";
const LOCATION_ACTIVITY_PROMPT: &str =
    "Please enter the name of the activity you'd like to add a location to:";
const LOCATION_NAME_PROMPT: &str = "Please enter the name of the location you would like to add:";
const LOCATION_DESCRIPTION_PROMPT: &str =
    "Please enter a description of the location you would like to add:";
const RESERVATION_PROMPT: &str =
    "Please enter whether or not reservations are required, and if so, the requirements:";
const PARKING_PROMPT: &str =
    "Please enter the number of parking spots available at this location:";
const VIEW_LOCATIONS_PROMPT: &str =
    "Please enter the name of the activity you wish to view locations for:";
const RESERVATION_ACTIVITY_PROMPT: &str =
    "Please enter the name of the activity you wish to view reservation requirements for:";
const RESERVATION_LOCATION_PROMPT: &str =
    "Please enter the name of the location you wish to view reservation requirements for:";
const REMOVE_PROMPT: &str = "Please enter the name of the activity you wish to delete:";
const EXPORT_PROMPT: &str = "Enter the name of the file you wish to save your activities to:";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddActivity,
    DisplayAll,
    AddLocation,
    DisplayLocations,
    DisplayReservation,
    RemoveActivity,
    Export,
    Quit,
}

impl MenuChoice {
    pub fn from_selection(selection: &str) -> Option<Self> {
        match selection.trim().parse::<u8>().ok()? {
            1 => Some(Self::AddActivity),
            2 => Some(Self::DisplayAll),
            3 => Some(Self::AddLocation),
            4 => Some(Self::DisplayLocations),
            5 => Some(Self::DisplayReservation),
            6 => Some(Self::RemoveActivity),
            7 => Some(Self::Export),
            8 => Some(Self::Quit),
            _ => None,
        }
    }
}

/// Text menu driving an [`ActivityCatalog`] from line-based input.
///
/// End of input ends the session the same way choosing quit does.
pub struct Menu<R, W, C> {
    input: R,
    output: W,
    config: C,
    sink: Box<dyn ExportSink>,
}

impl<R: BufRead, W: Write, C: ConfigProvider> Menu<R, W, C> {
    pub fn new(input: R, output: W, config: C, sink: Box<dyn ExportSink>) -> Self {
        Self {
            input,
            output,
            config,
            sink,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn run(&mut self, catalog: &mut ActivityCatalog) -> Result<()> {
        tracing::info!("Menu session started");
        self.display_menu()?;

        loop {
            let Some(selection) = self.prompt(SELECTION_PROMPT)? else {
                break;
            };

            let choice = MenuChoice::from_selection(&selection);
            tracing::debug!("Menu selection {:?} -> {:?}", selection, choice);

            match choice {
                Some(MenuChoice::Quit) => {
                    writeln!(self.output, "Goodbye, see you next time!")?;
                    break;
                }
                Some(choice) => {
                    if !self.dispatch(choice, catalog)? {
                        break;
                    }
                }
                None => writeln!(self.output, "Please choose an option from 1 to 8")?,
            }

            if self.config.confirm_return() && !self.confirm(RETURN_PROMPT)? {
                writeln!(self.output, "See you next time!")?;
                break;
            }
            self.display_menu()?;
        }

        tracing::info!("Menu session ended with {} activities", catalog.len());
        Ok(())
    }

    pub fn display_menu(&mut self) -> Result<()> {
        writeln!(
            self.output,
            "Welcome to the {}. Please select from a menu option below to begin:",
            self.config.title()
        )?;
        writeln!(self.output, "1: Add a new snow activity")?;
        writeln!(self.output, "2: Display all activities")?;
        writeln!(self.output, "3: Add a location to an activity")?;
        writeln!(self.output, "4: Display all locations for an activity")?;
        writeln!(
            self.output,
            "5: Display reservation requirements for an activity/location"
        )?;
        writeln!(self.output, "6: Remove an activity from the list")?;
        writeln!(self.output, "7: Export activities to file")?;
        writeln!(self.output, "8: Quit")?;
        Ok(())
    }

    /// Returns `false` once input has run out.
    fn dispatch(&mut self, choice: MenuChoice, catalog: &mut ActivityCatalog) -> Result<bool> {
        match choice {
            MenuChoice::AddActivity => self.add_activities(catalog),
            MenuChoice::DisplayAll => self.display_all(catalog).map(|_| true),
            MenuChoice::AddLocation => self.add_location(catalog),
            MenuChoice::DisplayLocations => self.display_locations(catalog),
            MenuChoice::DisplayReservation => self.display_reservation(catalog),
            MenuChoice::RemoveActivity => self.remove_activity(catalog),
            MenuChoice::Export => self.export(catalog),
            MenuChoice::Quit => Ok(false),
        }
    }

    fn add_activities(&mut self, catalog: &mut ActivityCatalog) -> Result<bool> {
        loop {
            let name_limit = self.config.max_name_length();
            let text_limit = self.config.max_text_length();

            let Some(name) = self.prompt_limited(ACTIVITY_NAME_PROMPT, name_limit)? else {
                return Ok(false);
            };
            let Some(description) =
                self.prompt_limited(ACTIVITY_DESCRIPTION_PROMPT, text_limit)?
            else {
                return Ok(false);
            };
            let Some(equipment) = self.prompt_limited(EQUIPMENT_PROMPT, text_limit)? else {
                return Ok(false);
            };
            let Some(cost) = self.prompt(COST_PROMPT)? else {
                return Ok(false);
            };

            let activity = parse_cost(&cost)
                .and_then(|cost| Activity::new(name, description, equipment, cost));
            match activity {
                Ok(activity) => match catalog.add(activity) {
                    Ok(()) => writeln!(self.output, "Activity added to list!")?,
                    Err(e) => self.report(&e)?,
                },
                Err(e) => self.report(&e)?,
            }

            if !self.confirm(ANOTHER_PROMPT)? {
                return Ok(true);
            }
        }
    }

    fn display_all(&mut self, catalog: &ActivityCatalog) -> Result<()> {
        if catalog.is_empty() {
            writeln!(self.output, "Error displaying list- no entries found")?;
            return Ok(());
        }
        for activity in catalog.list_all() {
            write!(self.output, "{}", activity)?;
        }
        Ok(())
    }

    fn add_location(&mut self, catalog: &mut ActivityCatalog) -> Result<bool> {
        let limit = self.config.max_text_length();

        let Some(activity_name) = self.prompt_limited(LOCATION_ACTIVITY_PROMPT, limit)? else {
            return Ok(false);
        };
        let Some(name) = self.prompt_limited(LOCATION_NAME_PROMPT, limit)? else {
            return Ok(false);
        };
        let Some(description) = self.prompt_limited(LOCATION_DESCRIPTION_PROMPT, limit)? else {
            return Ok(false);
        };
        let Some(reservation) = self.prompt_limited(RESERVATION_PROMPT, limit)? else {
            return Ok(false);
        };
        let Some(spots) = self.prompt(PARKING_PROMPT)? else {
            return Ok(false);
        };

        let Ok(spots) = spots.trim().parse::<i32>() else {
            writeln!(
                self.output,
                "Error adding location- number of parking spots must be a whole number"
            )?;
            return Ok(true);
        };

        let location = Location::new(name, description, reservation, spots);
        match catalog.add_location(&activity_name, location) {
            Ok(()) => writeln!(self.output, "Location added successfully!")?,
            Err(CatalogError::ActivityNotFound { .. }) => writeln!(
                self.output,
                "Error adding location- no matching activity found"
            )?,
            Err(e) => self.report(&e)?,
        }
        Ok(true)
    }

    fn display_locations(&mut self, catalog: &ActivityCatalog) -> Result<bool> {
        let limit = self.config.max_text_length();
        let Some(activity_name) = self.prompt_limited(VIEW_LOCATIONS_PROMPT, limit)? else {
            return Ok(false);
        };

        match catalog.list_locations(&activity_name) {
            Ok([]) => writeln!(
                self.output,
                "No locations recorded for {}",
                activity_name
            )?,
            Ok(locations) => {
                for location in locations {
                    write!(self.output, "{}", location)?;
                }
            }
            Err(_) => writeln!(
                self.output,
                "Error displaying locations- no matching activity found"
            )?,
        }
        Ok(true)
    }

    fn display_reservation(&mut self, catalog: &ActivityCatalog) -> Result<bool> {
        let limit = self.config.max_text_length();
        let Some(activity_name) = self.prompt_limited(RESERVATION_ACTIVITY_PROMPT, limit)? else {
            return Ok(false);
        };
        let Some(location_name) = self.prompt_limited(RESERVATION_LOCATION_PROMPT, limit)? else {
            return Ok(false);
        };

        match catalog.find_reservation(&activity_name, &location_name) {
            Ok(reservation) => {
                writeln!(self.output, "Reservation Requirements: {}", reservation)?
            }
            Err(e) => self.report(&e)?,
        }
        Ok(true)
    }

    fn remove_activity(&mut self, catalog: &mut ActivityCatalog) -> Result<bool> {
        let limit = self.config.max_text_length();
        let Some(activity_name) = self.prompt_limited(REMOVE_PROMPT, limit)? else {
            return Ok(false);
        };

        match catalog.remove(&activity_name) {
            Ok(_) => writeln!(self.output, "Activity successfully removed")?,
            Err(e) => self.report(&e)?,
        }
        Ok(true)
    }

    fn export(&mut self, catalog: &ActivityCatalog) -> Result<bool> {
        let limit = self.config.max_file_name_length();
        let Some(file_name) = self.prompt_limited(EXPORT_PROMPT, limit)? else {
            return Ok(false);
        };

        let file_name = match (file_name.trim(), self.config.default_export_file()) {
            ("", Some(default)) => default.to_string(),
            (name, _) => name.to_string(),
        };
        if file_name.is_empty() {
            writeln!(self.output, "Error saving activities- no file name given")?;
            return Ok(true);
        }

        match catalog.export(self.sink.as_ref(), &file_name) {
            Ok(path) => writeln!(
                self.output,
                "Activities saved to {} successfully!",
                path.display()
            )?,
            Err(e) => self.report(&e)?,
        }
        Ok(true)
    }

    fn report(&mut self, error: &CatalogError) -> Result<()> {
        tracing::debug!("{} ({:?})", error, error.category());
        writeln!(self.output, "{}", error.user_friendly_message())?;
        Ok(())
    }

    fn confirm(&mut self, question: &str) -> Result<bool> {
        let answer = self.prompt(question)?;
        Ok(matches!(answer, Some(a) if a.trim().eq_ignore_ascii_case("y")))
    }

    fn prompt_limited(&mut self, message: &str, max_chars: usize) -> Result<Option<String>> {
        Ok(self
            .prompt(message)?
            .map(|line| truncate_chars(&line, max_chars).to_string()))
    }

    /// Prints `message` and reads one line without its terminator. `None` at end of input.
    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        writeln!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()))
    }
}

fn parse_cost(raw: &str) -> Result<f64> {
    raw.trim().parse::<f64>().map_err(|_| {
        CatalogError::invalid_field("cost", format!("'{}' is not a number", raw.trim()))
    })
}

fn truncate_chars(value: &str, max_chars: usize) -> &str {
    match value.char_indices().nth(max_chars) {
        Some((index, _)) => &value[..index],
        None => value,
    }
}
