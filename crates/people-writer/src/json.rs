//! JSON rendering.

use crate::error::WriterError;
use people_generator::Person;

/// Render people as a single JSON array.
///
/// Optional fields are dropped from each object when the run did not enable
/// them, so every object carries exactly the enabled keys.
pub fn render_json(people: &[Person]) -> Result<Vec<u8>, WriterError> {
    Ok(serde_json::to_vec(people)?)
}
