// Synthetic employee generation for the startup seed.
//
// Records are internally consistent: the position always belongs to the
// department, the email is derived from the name and index so it stays unique
// across the whole seed, and salaries land in a plausible band.

use rand::Rng;

use crate::modules::employees::core::employee::NewEmployee;

const FIRST_NAMES: &[&str] = &[
    "Olivia", "Liam", "Emma", "Noah", "Ava", "Elijah", "Sophia", "Lucas", "Isabella", "Mason",
    "Mia", "Ethan", "Charlotte", "Logan", "Amelia", "James", "Harper", "Benjamin", "Evelyn",
    "Jacob",
];

const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson", "Thomas", "Taylor",
    "Moore", "Jackson", "Martin",
];

const DEPARTMENTS: &[(&str, &[&str])] = &[
    (
        "Engineering",
        &["Software Engineer", "Senior Software Engineer", "Staff Engineer"],
    ),
    ("Sales", &["Account Executive", "Sales Manager"]),
    ("Marketing", &["Marketing Specialist", "Content Strategist"]),
    ("Human Resources", &["HR Generalist", "Recruiter"]),
    ("Finance", &["Financial Analyst", "Accountant"]),
];

const SALARY_MIN: f64 = 42_000.0;
const SALARY_MAX: f64 = 160_000.0;

/// Builds the creation fields for the `index`-th seeded record.
pub fn synthetic_new_employee(index: u64) -> NewEmployee {
    let i = index as usize;
    let first_name = FIRST_NAMES[i % FIRST_NAMES.len()];
    let last_name = LAST_NAMES[(i / FIRST_NAMES.len()) % LAST_NAMES.len()];
    let (department, positions) = DEPARTMENTS[i % DEPARTMENTS.len()];
    let position = positions[i % positions.len()];
    let salary = rand::thread_rng()
        .gen_range(SALARY_MIN..=SALARY_MAX)
        .round();

    NewEmployee {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        email: format!(
            "{}.{}.{index}@example.com",
            first_name.to_lowercase(),
            last_name.to_lowercase()
        ),
        position: position.to_string(),
        department: department.to_string(),
        salary,
    }
}
