//! Person record generator.

use crate::generators::date::generate_birth_date;
use crate::generators::numeric::generate_salary;
use crate::generators::ssn::generate_ssn;
use crate::generators::{BirthWindow, SalaryRange};
use crate::names::{NameList, ReferenceLists};
use crate::person::{FieldSet, Gender, Person};
use crate::split::SplitCounts;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::PathBuf;
use tracing::debug;

/// Error type for generator operations.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// A reference list file could not be read
    #[error("Failed to read name list '{}': {source}", path.display())]
    NameListRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A reference list contained no names
    #[error("Name list '{0}' is empty")]
    EmptyNameList(String),

    /// Split counts did not add up to the requested total
    #[error("Split of {total} records produced {female} female + {male} male")]
    SplitMismatch { total: u64, female: u64, male: u64 },

    /// The requested records do not fit in memory
    #[error("Cannot hold {total} records in memory")]
    TooManyRecords { total: u64 },
}

/// Per-record options that stay fixed for a whole run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawOptions {
    /// Attach a synthetic SSN to every record
    pub ssn: bool,
    /// Attach a salary drawn from this range
    pub salary: Option<SalaryRange>,
    /// Window birth dates are drawn from
    pub birth_window: BirthWindow,
}

impl DrawOptions {
    pub fn new(birth_window: BirthWindow) -> Self {
        Self {
            ssn: false,
            salary: None,
            birth_window,
        }
    }

    /// Optional fields these options produce.
    pub fn field_set(&self) -> FieldSet {
        FieldSet {
            ssn: self.ssn,
            salary: self.salary.is_some(),
        }
    }
}

/// Draws person records from reference lists.
///
/// All draws come from a single RNG. Seeding it makes a run reproducible;
/// without a seed it is initialised from OS entropy.
pub struct PersonGenerator {
    lists: ReferenceLists,
    options: DrawOptions,
    rng: StdRng,
}

impl PersonGenerator {
    /// Create a generator seeded from OS entropy.
    pub fn new(lists: ReferenceLists, options: DrawOptions) -> Self {
        Self {
            lists,
            options,
            rng: StdRng::from_entropy(),
        }
    }

    /// Create a generator with a fixed seed.
    pub fn with_seed(lists: ReferenceLists, options: DrawOptions, seed: u64) -> Self {
        Self {
            lists,
            options,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draw a single person of the given gender.
    pub fn next_person(&mut self, gender: Gender) -> Person {
        let first_names = match gender {
            Gender::Female => &self.lists.female_first,
            Gender::Male => &self.lists.male_first,
        };

        let first_name = pick(&mut self.rng, first_names);
        let middle_name = pick(&mut self.rng, first_names);
        let last_name = pick(&mut self.rng, &self.lists.last);
        let birth_date = generate_birth_date(&mut self.rng, self.options.birth_window);
        let ssn = self.options.ssn.then(|| generate_ssn(&mut self.rng));
        let salary = self
            .options
            .salary
            .map(|range| generate_salary(&mut self.rng, range));

        Person {
            first_name,
            middle_name,
            last_name,
            gender,
            birth_date,
            ssn,
            salary,
        }
    }

    /// Lazily draw `count` people of one gender.
    pub fn people(&mut self, gender: Gender, count: u64) -> PersonIterator<'_> {
        PersonIterator {
            generator: self,
            gender,
            remaining: count,
        }
    }

    /// Draw every record for a split: the female bucket, then the male bucket.
    ///
    /// Space for every record is reserved up front, so a total that cannot
    /// be held in memory fails before anything is drawn.
    pub fn generate(&mut self, counts: SplitCounts) -> Result<Vec<Person>, GeneratorError> {
        let total = counts.female.saturating_add(counts.male);
        let capacity =
            usize::try_from(total).map_err(|_| GeneratorError::TooManyRecords { total })?;
        let mut people = Vec::new();
        people
            .try_reserve_exact(capacity)
            .map_err(|_| GeneratorError::TooManyRecords { total })?;

        for (gender, count) in [(Gender::Female, counts.female), (Gender::Male, counts.male)] {
            if count > 0 {
                debug!("Drawing {} records with gender {}", count, gender);
                people.extend(self.people(gender, count));
            }
        }
        Ok(people)
    }
}

/// Uniformly random entry of a non-empty list.
fn pick<R: Rng>(rng: &mut R, list: &NameList) -> String {
    let index = rng.gen_range(0..list.len());
    list.as_slice()[index].clone()
}

/// Iterator that lazily draws people of a single gender.
pub struct PersonIterator<'a> {
    generator: &'a mut PersonGenerator,
    gender: Gender,
    remaining: u64,
}

impl Iterator for PersonIterator<'_> {
    type Item = Person;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        self.remaining -= 1;
        Some(self.generator.next_person(self.gender))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.remaining).unwrap_or(usize::MAX);
        (remaining, usize::try_from(self.remaining).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::split::GenderSplit;
    use chrono::NaiveDate;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    fn options() -> DrawOptions {
        DrawOptions::new(BirthWindow::years_before(today(), 100).unwrap())
    }

    fn tiny_lists() -> ReferenceLists {
        ReferenceLists {
            male_first: NameList::parse("male", "ADAM\nBOB\nCARL").unwrap(),
            female_first: NameList::parse("female", "ALICE\nBETH").unwrap(),
            last: NameList::parse("last", "SMITH\nJONES").unwrap(),
        }
    }

    #[test]
    fn test_next_person_uses_gender_list() {
        let lists = tiny_lists();
        let mut generator = PersonGenerator::with_seed(lists.clone(), options(), 42);

        for _ in 0..50 {
            let person = generator.next_person(Gender::Female);
            assert_eq!(person.gender, Gender::Female);
            assert!(lists.female_first.as_slice().contains(&person.first_name));
            assert!(lists.female_first.as_slice().contains(&person.middle_name));
            assert!(lists.last.as_slice().contains(&person.last_name));
            assert!(person.ssn.is_none());
            assert!(person.salary.is_none());

            let person = generator.next_person(Gender::Male);
            assert_eq!(person.gender, Gender::Male);
            assert!(lists.male_first.as_slice().contains(&person.first_name));
            assert!(lists.male_first.as_slice().contains(&person.middle_name));
        }
    }

    #[test]
    fn test_optional_fields() {
        let mut options = options();
        options.ssn = true;
        options.salary = SalaryRange::new(40000, 41000);
        let mut generator = PersonGenerator::with_seed(tiny_lists(), options, 42);

        let person = generator.next_person(Gender::Male);
        assert!(person.ssn.is_some());
        let salary = person.salary.unwrap();
        assert!((40000..=41000).contains(&salary));
        assert_eq!(
            options.field_set(),
            FieldSet {
                ssn: true,
                salary: true
            }
        );
    }

    #[test]
    fn test_birth_dates_in_window() {
        let options = options();
        let mut generator = PersonGenerator::with_seed(tiny_lists(), options, 1);

        for person in generator.people(Gender::Female, 500) {
            assert!(options.birth_window.contains(person.birth_date));
        }
    }

    #[test]
    fn test_generate_orders_female_before_male() {
        let mut generator = PersonGenerator::with_seed(tiny_lists(), options(), 42);
        let counts = GenderSplit::new(40, 60).unwrap().counts(10).unwrap();

        let people = generator.generate(counts).unwrap();

        assert_eq!(people.len(), 10);
        assert!(people[..4].iter().all(|p| p.gender == Gender::Female));
        assert!(people[4..].iter().all(|p| p.gender == Gender::Male));
    }

    #[test]
    fn test_generate_all_female_draws_no_males() {
        let mut generator = PersonGenerator::with_seed(tiny_lists(), options(), 42);
        let counts = GenderSplit::new(100, 0).unwrap().counts(25).unwrap();

        let people = generator.generate(counts).unwrap();

        assert_eq!(people.len(), 25);
        assert!(people.iter().all(|p| p.gender == Gender::Female));
    }

    #[test]
    fn test_deterministic_generation() {
        let counts = SplitCounts { female: 5, male: 5 };
        let mut gen1 = PersonGenerator::with_seed(tiny_lists(), options(), 42);
        let mut gen2 = PersonGenerator::with_seed(tiny_lists(), options(), 42);

        let first = gen1.generate(counts).unwrap();
        let second = gen2.generate(counts).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_generate_rejects_total_beyond_memory() {
        let mut generator = PersonGenerator::with_seed(tiny_lists(), options(), 42);
        let counts = SplitCounts {
            female: u64::MAX / 2,
            male: 0,
        };

        let result = generator.generate(counts);

        assert!(matches!(
            result,
            Err(GeneratorError::TooManyRecords { total }) if total == u64::MAX / 2
        ));
    }

    #[test]
    fn test_people_iterator_size_hint() {
        let mut generator = PersonGenerator::with_seed(tiny_lists(), options(), 42);
        let mut iter = generator.people(Gender::Male, 3);
        assert_eq!(iter.size_hint(), (3, Some(3)));
        iter.next();
        assert_eq!(iter.size_hint(), (2, Some(2)));
        assert_eq!(iter.count(), 2);
    }
}
