use std::fmt;

use crate::entities::{Shortcut, Suggestion};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Pickup,
    Dropoff,
}

impl Field {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Pickup => "pickup",
            Self::Dropoff => "dropoff",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Free-text search state for one address field.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldQuery {
    pub text: String,
    pub suggestions: Vec<Suggestion>,
}

/// The shortcut currently being composed. Never persisted.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Draft {
    pub name: String,
    pub pickup: String,
    pub dropoff: String,
    pub pickup_query: FieldQuery,
    pub dropoff_query: FieldQuery,
}

impl Draft {
    pub fn query(&self, field: Field) -> &FieldQuery {
        match field {
            Field::Pickup => &self.pickup_query,
            Field::Dropoff => &self.dropoff_query,
        }
    }

    pub fn query_mut(&mut self, field: Field) -> &mut FieldQuery {
        match field {
            Field::Pickup => &mut self.pickup_query,
            Field::Dropoff => &mut self.dropoff_query,
        }
    }

    pub fn coordinates_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Pickup => &mut self.pickup,
            Field::Dropoff => &mut self.dropoff,
        }
    }

    pub fn candidate(&self) -> Shortcut {
        Shortcut::new(self.name.clone(), self.pickup.clone(), self.dropoff.clone())
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
