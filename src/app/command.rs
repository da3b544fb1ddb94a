//! Line-oriented input for the terminal front end.
//!
//! ```text
//! name <label>              set the shortcut name
//! pickup <text>             search for a pickup address
//! dropoff <text>            search for a dropoff address
//! set <pickup|dropoff> <lat,lng>
//! pick <pickup|dropoff> <n> choose suggestion n
//! add | clear
//! open <n> | delete <n>
//! service <uber|ola|both>
//! quit
//! ```

use crate::app::Event;
use crate::entities::Field;
use crate::error::Error;

fn field(s: &str) -> Result<Field, Error> {
    match s {
        "pickup" => Ok(Field::Pickup),
        "dropoff" => Ok(Field::Dropoff),
        _ => Err(Error::invalid_input_error()),
    }
}

fn index(s: &str) -> Result<usize, Error> {
    s.trim().parse().map_err(|_| Error::invalid_input_error())
}

pub fn parse(line: &str) -> Result<Event, Error> {
    let line = line.trim_start();
    let (verb, rest) = line.split_once(' ').unwrap_or((line.trim_end(), ""));

    match verb {
        "name" => Ok(Event::SetName(rest.into())),
        "pickup" | "dropoff" => Ok(Event::ChangeText(field(verb)?, rest.into())),
        "set" => {
            let (target, value) = rest
                .split_once(' ')
                .ok_or_else(Error::invalid_input_error)?;
            Ok(Event::SetCoordinates(field(target)?, value.trim().into()))
        }
        "pick" => {
            let (target, n) = rest
                .split_once(' ')
                .ok_or_else(Error::invalid_input_error)?;
            Ok(Event::SelectSuggestion(field(target)?, index(n)?))
        }
        "add" => Ok(Event::Add),
        "clear" => Ok(Event::ClearDraft),
        "open" => Ok(Event::Launch(index(rest)?)),
        "delete" => Ok(Event::Delete(index(rest)?)),
        "service" => Ok(Event::SelectService(rest.parse()?)),
        "quit" | "exit" => Ok(Event::Quit),
        _ => Err(Error::invalid_input_error()),
    }
}
