//! Fixed elevator schedules
//!
//! A schedule is the full timetable of a building: for every elevator car,
//! the floor it reaches at the end of each discrete step. Entry `i` of a
//! car's sequence is the floor that car occupies at time `i + 1`; the rider
//! begins at the starting car's entry 0.
//!
//! Cars are iterated in insertion order everywhere. The planner relies on
//! this for reproducible results, so the table is a plain ordered `Vec`
//! rather than a hash map.

use std::fmt;

use thiserror::Error;

/// Elevator car label (element of the schedule's key alphabet)
pub type ElevatorId = char;

/// Floor number (always positive)
pub type Floor = u32;

/// Discrete time index into a schedule
pub type TimeStep = usize;

/// Immutable timetable of floor positions for every car
///
/// All cars share the same horizon (number of entries). Construct via
/// [`Schedule::builder`]; the table is read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    cars: Vec<(ElevatorId, Vec<Floor>)>,
    horizon: usize,
}

impl Schedule {
    /// Start building a schedule
    pub fn builder() -> ScheduleBuilder {
        ScheduleBuilder { cars: Vec::new() }
    }

    /// Number of schedule entries per car
    ///
    /// A rider's journey spans times `0..=horizon`.
    pub fn horizon(&self) -> usize {
        self.horizon
    }

    /// Number of cars in the schedule
    pub fn num_cars(&self) -> usize {
        self.cars.len()
    }

    /// Whether `car` appears in the schedule
    pub fn contains(&self, car: ElevatorId) -> bool {
        self.cars.iter().any(|(id, _)| *id == car)
    }

    /// Floor `car` reaches at the end of step `entry + 1`
    ///
    /// Returns `None` for an unknown car or an entry past the horizon.
    pub fn floor_at(&self, car: ElevatorId, entry: TimeStep) -> Option<Floor> {
        self.cars
            .iter()
            .find(|(id, _)| *id == car)
            .and_then(|(_, floors)| floors.get(entry).copied())
    }

    /// Car labels in insertion order
    pub fn cars(&self) -> impl Iterator<Item = ElevatorId> + '_ {
        self.cars.iter().map(|(id, _)| *id)
    }
}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (id, floors) in &self.cars {
            write!(f, "{id}:")?;
            for floor in floors {
                write!(f, " {floor}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Builder for [`Schedule`]
///
/// Insertion order of cars is preserved and becomes the expansion order of
/// the planner.
#[derive(Debug, Default)]
pub struct ScheduleBuilder {
    cars: Vec<(ElevatorId, Vec<Floor>)>,
}

impl ScheduleBuilder {
    /// Add a car with its per-step floor sequence
    pub fn car(mut self, id: ElevatorId, floors: Vec<Floor>) -> Self {
        self.cars.push((id, floors));
        self
    }

    /// Validate and freeze the schedule
    ///
    /// Rejects an empty car set, duplicate labels, floor sequences of
    /// differing length, a zero-length horizon, and non-positive floors.
    pub fn build(self) -> Result<Schedule, ScheduleError> {
        let Some((_, first)) = self.cars.first() else {
            return Err(ScheduleError::Empty);
        };
        let horizon = first.len();
        if horizon == 0 {
            return Err(ScheduleError::ZeroHorizon);
        }

        for (i, (id, floors)) in self.cars.iter().enumerate() {
            if self.cars[..i].iter().any(|(seen, _)| seen == id) {
                return Err(ScheduleError::DuplicateCar(*id));
            }
            if floors.len() != horizon {
                return Err(ScheduleError::HorizonMismatch {
                    car: *id,
                    expected: horizon,
                    actual: floors.len(),
                });
            }
            if let Some(entry) = floors.iter().position(|&f| f == 0) {
                return Err(ScheduleError::InvalidFloor { car: *id, entry });
            }
        }

        Ok(Schedule {
            cars: self.cars,
            horizon,
        })
    }
}

/// Errors detected while building a schedule
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// No cars were added
    #[error("schedule contains no cars")]
    Empty,

    /// Every car needs at least one entry
    #[error("schedule has a zero-length horizon")]
    ZeroHorizon,

    /// The same label was added twice
    #[error("car '{0}' appears twice in the schedule")]
    DuplicateCar(ElevatorId),

    /// A car's sequence length differs from the first car's
    #[error("car '{car}' has {actual} entries, expected {expected}")]
    HorizonMismatch {
        /// Offending car
        car: ElevatorId,
        /// Horizon established by the first car
        expected: usize,
        /// Length actually supplied
        actual: usize,
    },

    /// Floors are positive integers; 0 is not a floor
    #[error("car '{car}' has an invalid floor at entry {entry}")]
    InvalidFloor {
        /// Offending car
        car: ElevatorId,
        /// Index of the bad entry
        entry: usize,
    },
}
