//! End-to-end behavior of the collection-association example over in-memory
//! `SQLite`.

use one_to_many::infra::storage::entity::{department, employee};
use one_to_many::{EmployeesController, Migrator, NewDepartment, NewEmployee};
use relkit_db::{ConnectOpts, DatabaseConnection};
use sea_orm::EntityTrait;
use sea_orm_migration::MigratorTrait;

async fn setup() -> (DatabaseConnection, EmployeesController) {
    let db = relkit_db::connect("sqlite::memory:", ConnectOpts::default())
        .await
        .unwrap();
    Migrator::up(&db, None).await.unwrap();
    let controller = EmployeesController::new(db.clone());
    (db, controller)
}

fn development() -> NewDepartment {
    NewDepartment {
        name: "Development".to_owned(),
    }
}

fn writer(ename: &str) -> NewEmployee {
    NewEmployee {
        ename: ename.to_owned(),
        salary: 45_000.0,
        deg: "Technical Writer".to_owned(),
    }
}

#[tokio::test]
async fn create_then_count() {
    let (_db, controller) = setup().await;
    controller
        .create(
            development(),
            vec![writer("Satish"), writer("Krishna"), writer("Masthanvali")],
        )
        .await
        .unwrap();
    assert_eq!(controller.count().await.unwrap(), 3);
}

#[tokio::test]
async fn create_with_an_empty_collection_persists_only_the_department() {
    let (db, controller) = setup().await;
    controller.create(development(), Vec::new()).await.unwrap();

    assert_eq!(controller.count().await.unwrap(), 0);
    assert_eq!(
        department::Entity::find().all(&db).await.unwrap().len(),
        1,
        "the owning record is still created"
    );
}

#[tokio::test]
async fn employees_of_returns_every_member() {
    let (db, controller) = setup().await;
    controller
        .create(
            development(),
            vec![writer("Satish"), writer("Krishna"), writer("Masthanvali")],
        )
        .await
        .unwrap();

    let dept = department::Entity::find().one(&db).await.unwrap().unwrap();
    let members = controller.employees_of(dept.id).await.unwrap();
    let names: Vec<&str> = members.iter().map(|e| e.ename.as_str()).collect();
    assert_eq!(names, ["Satish", "Krishna", "Masthanvali"]);
    assert!(members.iter().all(|e| e.department_id == dept.id));
}

#[tokio::test]
async fn employees_of_a_missing_department_signals_no_longer_exists() {
    let (_db, controller) = setup().await;
    let err = controller.employees_of(4242).await.unwrap_err();
    assert!(err.is_no_longer_exists());
}

#[tokio::test]
async fn find_by_id_after_create_returns_the_created_record() {
    let (_db, controller) = setup().await;
    controller
        .create(development(), vec![writer("Satish")])
        .await
        .unwrap();

    let stored = controller.find_all().await.unwrap().remove(0);
    let found = controller.find_by_id(stored.id).await.unwrap().unwrap();
    assert_eq!(found, stored);
}

#[tokio::test]
async fn destroy_then_find_by_id_returns_nothing() {
    let (_db, controller) = setup().await;
    controller
        .create(development(), vec![writer("Satish"), writer("Krishna")])
        .await
        .unwrap();
    let id = controller.find_all().await.unwrap()[0].id;

    controller.destroy(id).await.unwrap();
    assert!(controller.find_by_id(id).await.unwrap().is_none());
    assert_eq!(controller.count().await.unwrap(), 1);
}

#[tokio::test]
async fn destroy_on_nonexistent_id_signals_no_longer_exists() {
    let (_db, controller) = setup().await;
    let err = controller.destroy(4242).await.unwrap_err();
    assert!(err.is_no_longer_exists());
}

#[tokio::test]
async fn edit_on_nonexistent_id_signals_no_longer_exists() {
    let (_db, controller) = setup().await;
    let detached = employee::Model {
        id: 4242,
        ename: "Nobody".to_owned(),
        salary: 0.0,
        deg: "Ghost".to_owned(),
        department_id: 1,
    };
    let err = controller.edit(detached).await.unwrap_err();
    assert!(err.is_no_longer_exists());
}

#[tokio::test]
async fn edit_merges_the_detached_state_and_returns_the_refreshed_record() {
    let (_db, controller) = setup().await;
    controller
        .create(development(), vec![writer("Satish")])
        .await
        .unwrap();

    let mut stored = controller.find_all().await.unwrap().remove(0);
    stored.salary = 52_000.0;

    let refreshed = controller.edit(stored.clone()).await.unwrap();
    assert_eq!(refreshed, stored);
    let found = controller.find_by_id(stored.id).await.unwrap().unwrap();
    assert_eq!(found.salary, 52_000.0);
}

#[tokio::test]
async fn find_paged_returns_the_requested_window_in_storage_order() {
    let (_db, controller) = setup().await;
    controller
        .create(
            development(),
            vec![
                writer("First"),
                writer("Second"),
                writer("Third"),
                writer("Fourth"),
            ],
        )
        .await
        .unwrap();

    let page = controller.find_paged(2, 1).await.unwrap();
    let names: Vec<&str> = page.iter().map(|e| e.ename.as_str()).collect();
    assert_eq!(names, ["Second", "Third"]);
}

#[tokio::test]
async fn deleting_a_department_with_members_is_rejected_by_the_store() {
    let (db, controller) = setup().await;
    controller
        .create(development(), vec![writer("Satish")])
        .await
        .unwrap();
    let dept = department::Entity::find().one(&db).await.unwrap().unwrap();

    let result = department::Entity::delete_by_id(dept.id).exec(&db).await;
    assert!(result.is_err(), "restrict FK must reject the delete");
}
