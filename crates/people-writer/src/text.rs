//! Plain text rendering.

use crate::delimited::DATE_FORMAT;
use people_generator::{FieldSet, Person};
use std::fmt::Write;

/// Render one line per person: `First Middle Last (G) YYYY-MM-DD`, followed
/// by the SSN and `$salary` when enabled.
pub fn render_text(people: &[Person], fields: FieldSet) -> Vec<u8> {
    let mut out = String::new();
    for person in people {
        let _ = write!(
            out,
            "{} {} {} ({}) {}",
            person.first_name,
            person.middle_name,
            person.last_name,
            person.gender,
            person.birth_date.format(DATE_FORMAT)
        );
        if fields.ssn {
            if let Some(ssn) = &person.ssn {
                let _ = write!(out, " {ssn}");
            }
        }
        if fields.salary {
            if let Some(salary) = person.salary {
                let _ = write!(out, " ${salary}");
            }
        }
        out.push('\n');
    }
    out.into_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use people_generator::Gender;

    #[test]
    fn test_render_text() {
        let person = Person {
            first_name: "Linda".to_string(),
            middle_name: "Rose".to_string(),
            last_name: "Hall".to_string(),
            gender: Gender::Female,
            birth_date: NaiveDate::from_ymd_opt(1955, 7, 4).unwrap(),
            ssn: Some("666-10-1000".to_string()),
            salary: Some(45000),
        };

        let out = render_text(std::slice::from_ref(&person), FieldSet::default());
        assert_eq!(out, b"Linda Rose Hall (F) 1955-07-04\n");

        let all = FieldSet {
            ssn: true,
            salary: true,
        };
        let out = render_text(&[person], all);
        assert_eq!(out, b"Linda Rose Hall (F) 1955-07-04 666-10-1000 $45000\n");
    }
}
