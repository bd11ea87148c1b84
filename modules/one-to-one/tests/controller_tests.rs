//! End-to-end behavior of the direct-association example over in-memory
//! `SQLite`.

use one_to_one::infra::storage::entity::{department, employee};
use one_to_one::{EmployeesController, Migrator, NewDepartment, NewEmployee};
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

fn satish() -> NewEmployee {
    NewEmployee {
        ename: "Satish".to_owned(),
        salary: 45_000.0,
        deg: "Technical Writer".to_owned(),
    }
}

fn development() -> NewDepartment {
    NewDepartment {
        name: "Development".to_owned(),
    }
}

async fn create_pairs(controller: &EmployeesController, names: &[&str]) {
    for name in names {
        controller
            .create(
                NewDepartment {
                    name: format!("Department of {name}"),
                },
                NewEmployee {
                    ename: (*name).to_owned(),
                    salary: 45_000.0,
                    deg: "Technical Writer".to_owned(),
                },
            )
            .await
            .unwrap();
    }
}

#[tokio::test]
async fn create_then_count() {
    let (_db, controller) = setup().await;
    create_pairs(&controller, &["Satish", "Krishna", "Masthanvali"]).await;
    assert_eq!(controller.count().await.unwrap(), 3);
}

#[tokio::test]
async fn find_by_id_after_create_returns_the_created_record() {
    let (_db, controller) = setup().await;
    controller.create(development(), satish()).await.unwrap();

    let stored = controller.find_all().await.unwrap().remove(0);
    let found = controller.find_by_id(stored.id).await.unwrap().unwrap();
    assert_eq!(found, stored);
    assert_eq!(found.ename, "Satish");
    assert_eq!(found.deg, "Technical Writer");
}

#[tokio::test]
async fn foreign_key_resolves_to_the_created_department() {
    let (_db, controller) = setup().await;
    controller.create(development(), satish()).await.unwrap();

    let stored = controller.find_all().await.unwrap().remove(0);
    let dept = controller
        .department_of(&stored)
        .await
        .unwrap()
        .expect("department must resolve");
    assert_eq!(dept.name, "Development");
    assert_eq!(dept.id, stored.department_id);
}

#[tokio::test]
async fn destroy_then_find_by_id_returns_nothing() {
    let (_db, controller) = setup().await;
    controller.create(development(), satish()).await.unwrap();
    let id = controller.find_all().await.unwrap()[0].id;

    controller.destroy(id).await.unwrap();
    assert!(controller.find_by_id(id).await.unwrap().is_none());
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
    controller.create(development(), satish()).await.unwrap();

    let mut stored = controller.find_all().await.unwrap().remove(0);
    stored.salary = 50_000.0;
    stored.deg = "Senior Technical Writer".to_owned();

    let refreshed = controller.edit(stored.clone()).await.unwrap();
    assert_eq!(refreshed, stored);

    let found = controller.find_by_id(stored.id).await.unwrap().unwrap();
    assert_eq!(found.salary, 50_000.0);
    assert_eq!(found.deg, "Senior Technical Writer");
}

#[tokio::test]
async fn find_paged_returns_the_requested_window_in_storage_order() {
    let (_db, controller) = setup().await;
    create_pairs(&controller, &["First", "Second", "Third", "Fourth"]).await;

    let page = controller.find_paged(2, 1).await.unwrap();
    let names: Vec<&str> = page.iter().map(|e| e.ename.as_str()).collect();
    assert_eq!(names, ["Second", "Third"]);
}

#[tokio::test]
async fn deleting_a_department_with_an_employee_is_rejected_by_the_store() {
    let (db, controller) = setup().await;
    controller.create(development(), satish()).await.unwrap();
    let stored = controller.find_all().await.unwrap().remove(0);

    let result = department::Entity::delete_by_id(stored.department_id)
        .exec(&db)
        .await;
    assert!(result.is_err(), "restrict FK must reject the delete");
}
