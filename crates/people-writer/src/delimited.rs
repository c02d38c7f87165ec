//! Delimited-text (CSV) rendering.

use crate::error::WriterError;
use csv::WriterBuilder;
use people_generator::{FieldSet, Person};

/// Date layout used by every output format.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Render people as delimited text, quoting fields that contain the
/// delimiter, a quote, or a newline.
pub fn render_csv(
    people: &[Person],
    fields: FieldSet,
    delimiter: &str,
    header: bool,
) -> Result<Vec<u8>, WriterError> {
    match delimiter.as_bytes() {
        [] => Err(WriterError::EmptyDelimiter),
        [byte] => render_single_byte(people, fields, *byte, header),
        [first, ..] => render_multi_byte(people, fields, delimiter, *first, header),
    }
}

fn render_single_byte(
    people: &[Person],
    fields: FieldSet,
    delimiter: u8,
    header: bool,
) -> Result<Vec<u8>, WriterError> {
    let mut writer = WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(Vec::new());

    if header {
        writer.write_record(fields.column_names())?;
    }

    for person in people {
        writer.write_record(person_to_csv_record(person, fields))?;
    }

    writer.flush()?;
    into_bytes(writer)
}

/// The csv writer only takes a one-byte delimiter. Each field is quoted on
/// its own against the separator's first byte, then fields are joined with
/// the whole separator.
fn render_multi_byte(
    people: &[Person],
    fields: FieldSet,
    delimiter: &str,
    first_byte: u8,
    header: bool,
) -> Result<Vec<u8>, WriterError> {
    let mut out = Vec::new();

    if header {
        write_joined(&mut out, fields.column_names(), delimiter, first_byte)?;
    }

    for person in people {
        let record = person_to_csv_record(person, fields);
        write_joined(&mut out, record, delimiter, first_byte)?;
    }

    Ok(out)
}

fn write_joined<I>(
    out: &mut Vec<u8>,
    record: I,
    delimiter: &str,
    first_byte: u8,
) -> Result<(), WriterError>
where
    I: IntoIterator,
    I::Item: AsRef<[u8]>,
{
    for (i, field) in record.into_iter().enumerate() {
        if i > 0 {
            out.extend_from_slice(delimiter.as_bytes());
        }
        out.extend_from_slice(&quote_field(field.as_ref(), first_byte)?);
    }
    out.push(b'\n');

    Ok(())
}

/// A single field as the csv writer would emit it, quoted only when needed.
fn quote_field(field: &[u8], delimiter: u8) -> Result<Vec<u8>, WriterError> {
    let mut writer = WriterBuilder::new()
        .delimiter(delimiter)
        .buffer_capacity(field.len() * 2 + 2)
        .from_writer(Vec::with_capacity(field.len() + 2));
    writer.write_field(field)?;
    into_bytes(writer)
}

fn into_bytes(writer: csv::Writer<Vec<u8>>) -> Result<Vec<u8>, WriterError> {
    writer
        .into_inner()
        .map_err(|e| WriterError::Io(std::io::Error::other(e.to_string())))
}

/// Convert a person to a CSV record in `FieldSet::column_names` order.
fn person_to_csv_record(person: &Person, fields: FieldSet) -> Vec<String> {
    let mut record = vec![
        person.first_name.clone(),
        person.middle_name.clone(),
        person.last_name.clone(),
        person.gender.to_string(),
        person.birth_date.format(DATE_FORMAT).to_string(),
    ];

    if fields.ssn {
        record.push(person.ssn.clone().unwrap_or_default());
    }
    if fields.salary {
        record.push(person.salary.map(|s| s.to_string()).unwrap_or_default());
    }

    record
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use people_generator::Gender;

    fn person(last_name: &str) -> Person {
        Person {
            first_name: "Mary".to_string(),
            middle_name: "Ann".to_string(),
            last_name: last_name.to_string(),
            gender: Gender::Female,
            birth_date: NaiveDate::from_ymd_opt(1984, 1, 2).unwrap(),
            ssn: Some("912-34-5678".to_string()),
            salary: Some(72000),
        }
    }

    #[test]
    fn test_person_to_csv_record() {
        let record = person_to_csv_record(&person("Smith"), FieldSet::default());
        assert_eq!(record, vec!["Mary", "Ann", "Smith", "F", "1984-01-02"]);

        let all = FieldSet {
            ssn: true,
            salary: true,
        };
        let record = person_to_csv_record(&person("Smith"), all);
        assert_eq!(record.len(), 7);
        assert_eq!(record[5], "912-34-5678");
        assert_eq!(record[6], "72000");
    }

    #[test]
    fn test_render_with_header() {
        let out = render_csv(&[person("Smith")], FieldSet::default(), ",", true).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "firstName,middleName,lastName,gender,birthDate");
        assert_eq!(lines[1], "Mary,Ann,Smith,F,1984-01-02");
    }

    #[test]
    fn test_render_custom_delimiter() {
        let fields = FieldSet {
            ssn: true,
            salary: false,
        };
        let out = render_csv(&[person("Smith")], fields, ";", false).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Mary;Ann;Smith;F;1984-01-02;912-34-5678\n"
        );
    }

    #[test]
    fn test_render_quotes_embedded_delimiter() {
        let out = render_csv(&[person("O'Neil;Jr")], FieldSet::default(), ";", false).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Mary;Ann;\"O'Neil;Jr\";F;1984-01-02\n"
        );

        let out = render_csv(&[person("Say \"Hi\"")], FieldSet::default(), ",", false).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Mary,Ann,\"Say \"\"Hi\"\"\",F,1984-01-02\n"
        );
    }

    #[test]
    fn test_render_multi_char_separator() {
        let fields = FieldSet {
            ssn: false,
            salary: true,
        };
        let out = render_csv(&[person("Smith")], fields, "::", true).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "firstName::middleName::lastName::gender::birthDate::salary\n\
             Mary::Ann::Smith::F::1984-01-02::72000\n"
        );
    }

    #[test]
    fn test_render_multi_char_separator_quotes_fields() {
        let people = [person("Ab::Cd"), person("Say \"Hi\"")];
        let out = render_csv(&people, FieldSet::default(), "::", false).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Mary::Ann::\"Ab::Cd\"::F::1984-01-02\n\
             Mary::Ann::\"Say \"\"Hi\"\"\"::F::1984-01-02\n"
        );

        let out = render_csv(&[person("Ab:Cd")], FieldSet::default(), " | ", false).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Mary | Ann | Ab:Cd | F | 1984-01-02\n"
        );
    }

    #[test]
    fn test_render_empty_delimiter_is_rejected() {
        let result = render_csv(&[person("Smith")], FieldSet::default(), "", false);
        assert!(matches!(result, Err(WriterError::EmptyDelimiter)));
    }

    #[test]
    fn test_render_empty() {
        let out = render_csv(&[], FieldSet::default(), ",", false).unwrap();
        assert!(out.is_empty());
    }
}
