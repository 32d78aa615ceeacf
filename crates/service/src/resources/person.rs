//! Employees and students share one shape: first name, last name and a
//! unique email.

use models::{employee, student};
use sea_orm::{ActiveValue::NotSet, Set};
use serde::{Deserialize, Serialize};

use crate::crud::{Resource, SeaOrmResource, UniqueKey};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonDto {
    #[serde(default)]
    pub id: Option<i32>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl PersonDto {
    pub fn new(first_name: &str, last_name: &str, email: &str) -> Self {
        Self {
            id: None,
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: email.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PersonDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl From<PersonDto> for PersonDraft {
    fn from(dto: PersonDto) -> Self {
        Self { first_name: dto.first_name, last_name: dto.last_name, email: dto.email }
    }
}

fn email_key(draft: &PersonDraft) -> Vec<UniqueKey> {
    vec![UniqueKey::new("email", draft.email.clone())]
}

/// `/api/employees`
pub struct Employee;

impl Resource for Employee {
    const NAME: &'static str = "employee";

    type Id = i32;
    type Dto = PersonDto;
    type Draft = PersonDraft;
    type Record = employee::Model;

    fn draft(dto: PersonDto) -> PersonDraft { dto.into() }

    fn unique_keys(d: &PersonDraft) -> Vec<UniqueKey> { email_key(d) }

    fn id_of(m: &employee::Model) -> i32 { m.id }

    fn dto_id(dto: &PersonDto) -> Option<i32> { dto.id }

    fn to_dto(m: employee::Model) -> PersonDto {
        PersonDto { id: Some(m.id), first_name: m.first_name, last_name: m.last_name, email: m.email }
    }

    fn assemble(id: i32, d: PersonDraft) -> employee::Model {
        employee::Model { id, first_name: d.first_name, last_name: d.last_name, email: d.email }
    }

    fn apply(m: &mut employee::Model, d: PersonDraft) {
        m.first_name = d.first_name;
        m.last_name = d.last_name;
        m.email = d.email;
    }

    fn unique_value(m: &employee::Model, field: &str) -> Option<String> {
        match field {
            "email" => Some(m.email.clone()),
            _ => None,
        }
    }
}

impl SeaOrmResource for Employee {
    type Entity = employee::Entity;

    fn insert_model(d: PersonDraft) -> employee::ActiveModel {
        employee::ActiveModel {
            id: NotSet,
            first_name: Set(d.first_name),
            last_name: Set(d.last_name),
            email: Set(d.email),
        }
    }

    fn unique_column(field: &str) -> Option<employee::Column> {
        match field {
            "email" => Some(employee::Column::Email),
            _ => None,
        }
    }
}

/// `/api/students`
pub struct Student;

impl Resource for Student {
    const NAME: &'static str = "student";

    type Id = i32;
    type Dto = PersonDto;
    type Draft = PersonDraft;
    type Record = student::Model;

    fn draft(dto: PersonDto) -> PersonDraft { dto.into() }

    fn unique_keys(d: &PersonDraft) -> Vec<UniqueKey> { email_key(d) }

    fn id_of(m: &student::Model) -> i32 { m.id }

    fn dto_id(dto: &PersonDto) -> Option<i32> { dto.id }

    fn to_dto(m: student::Model) -> PersonDto {
        PersonDto { id: Some(m.id), first_name: m.first_name, last_name: m.last_name, email: m.email }
    }

    fn assemble(id: i32, d: PersonDraft) -> student::Model {
        student::Model { id, first_name: d.first_name, last_name: d.last_name, email: d.email }
    }

    fn apply(m: &mut student::Model, d: PersonDraft) {
        m.first_name = d.first_name;
        m.last_name = d.last_name;
        m.email = d.email;
    }

    fn unique_value(m: &student::Model, field: &str) -> Option<String> {
        match field {
            "email" => Some(m.email.clone()),
            _ => None,
        }
    }
}

impl SeaOrmResource for Student {
    type Entity = student::Entity;

    fn insert_model(d: PersonDraft) -> student::ActiveModel {
        student::ActiveModel {
            id: NotSet,
            first_name: Set(d.first_name),
            last_name: Set(d.last_name),
            email: Set(d.email),
        }
    }

    fn unique_column(field: &str) -> Option<student::Column> {
        match field {
            "email" => Some(student::Column::Email),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dto_uses_camel_case_and_optional_id() {
        let dto: PersonDto = serde_json::from_value(serde_json::json!({
            "firstName": "Ramesh",
            "lastName": "Fadatare",
            "email": "ramesh@gmail.com"
        }))
        .unwrap();
        assert_eq!(dto, PersonDto::new("Ramesh", "Fadatare", "ramesh@gmail.com"));

        let v = serde_json::to_value(Employee::to_dto(Employee::assemble(3, dto.into()))).unwrap();
        assert_eq!(v["id"], 3);
        assert_eq!(v["firstName"], "Ramesh");
    }

    #[test]
    fn draft_drops_client_id() {
        let mut dto = PersonDto::new("A", "B", "a@b.c");
        dto.id = Some(5);
        let rec = Student::assemble(1, Student::draft(dto));
        assert_eq!(rec.id, 1);
    }

    #[test]
    fn apply_leaves_id_alone() {
        let mut rec = Employee::assemble(8, PersonDto::new("A", "B", "a@b.c").into());
        Employee::apply(&mut rec, PersonDto::new("C", "D", "c@d.e").into());
        assert_eq!(rec, employee::Model { id: 8, first_name: "C".into(), last_name: "D".into(), email: "c@d.e".into() });
    }

    #[test]
    fn email_is_the_unique_key() {
        let d: PersonDraft = PersonDto::new("A", "B", "a@b.c").into();
        assert_eq!(Employee::unique_keys(&d), vec![UniqueKey::new("email", "a@b.c")]);
        let rec = Student::assemble(1, d);
        assert_eq!(Student::unique_value(&rec, "email").as_deref(), Some("a@b.c"));
        assert_eq!(Student::unique_value(&rec, "first_name"), None);
    }
}
