use anyhow::Result;
use sea_orm::{ActiveModelTrait, EntityTrait, Set};
use uuid::Uuid;

use crate::{customer, employee, student};

#[tokio::test]
async fn test_employee_crud() -> Result<()> {
    let db = super::memory_db().await?;

    let am = employee::ActiveModel {
        first_name: Set("Ramesh".into()),
        last_name: Set("Fadatare".into()),
        email: Set("ramesh@gmail.com".into()),
        ..Default::default()
    };
    let created = am.insert(&db).await?;
    assert!(created.id > 0);

    let found = employee::Entity::find_by_id(created.id).one(&db).await?;
    assert_eq!(found.as_ref(), Some(&created));

    let mut am: employee::ActiveModel = created.clone().into();
    am.first_name = Set("Ram".into());
    let updated = am.update(&db).await?;
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.first_name, "Ram");

    employee::Entity::delete_by_id(created.id).exec(&db).await?;
    assert!(employee::Entity::find_by_id(created.id).one(&db).await?.is_none());
    Ok(())
}

#[tokio::test]
async fn test_student_ids_are_store_assigned() -> Result<()> {
    let db = super::memory_db().await?;
    let mut ids = Vec::new();
    for i in 0..3 {
        let am = student::ActiveModel {
            first_name: Set(format!("Student{i}")),
            last_name: Set("Doe".into()),
            email: Set(format!("s{i}@example.com")),
            ..Default::default()
        };
        ids.push(am.insert(&db).await?.id);
    }
    ids.dedup();
    assert_eq!(ids.len(), 3);
    assert_eq!(student::Entity::find().all(&db).await?.len(), 3);
    Ok(())
}

#[tokio::test]
async fn test_customer_uuid_roundtrip() -> Result<()> {
    let db = super::memory_db().await?;
    let id = Uuid::new_v4();
    let am = customer::ActiveModel { id: Set(id), name: Set("Joe Buck".into()) };
    am.insert(&db).await?;

    let found = customer::Entity::find_by_id(id).one(&db).await?.expect("customer");
    assert_eq!(found.name, "Joe Buck");
    Ok(())
}

