//! End-to-end behavior of the single-table example over in-memory `SQLite`.

use relkit_db::{ConnectOpts, DatabaseConnection, StoreError};
use sea_orm::{EntityTrait, Set};
use sea_orm_migration::MigratorTrait;
use single_table::infra::storage::entity::{self, StaffKind};
use single_table::{Migrator, NewStaff, Staff, StaffController};

async fn setup() -> (DatabaseConnection, StaffController) {
    let db = relkit_db::connect("sqlite::memory:", ConnectOpts::default())
        .await
        .unwrap();
    Migrator::up(&db, None).await.unwrap();
    let controller = StaffController::new(db.clone());
    (db, controller)
}

fn school_staff() -> Vec<NewStaff> {
    vec![
        NewStaff::Teaching {
            name: "Gopal".to_owned(),
            qualification: "MSc MEd".to_owned(),
            subject_expertise: "Maths".to_owned(),
        },
        NewStaff::Teaching {
            name: "Manisha".to_owned(),
            qualification: "BSc BEd".to_owned(),
            subject_expertise: "English".to_owned(),
        },
        NewStaff::NonTeaching {
            name: "Satish".to_owned(),
            area_expertise: "Accounts".to_owned(),
        },
        NewStaff::NonTeaching {
            name: "Krishna".to_owned(),
            area_expertise: "Office Admin".to_owned(),
        },
    ]
}

#[tokio::test]
async fn create_then_count() {
    let (_db, controller) = setup().await;
    controller.create(school_staff()).await.unwrap();
    assert_eq!(controller.count().await.unwrap(), 4);
}

#[tokio::test]
async fn create_with_zero_records_is_a_no_op() {
    let (_db, controller) = setup().await;
    controller.create(Vec::new()).await.unwrap();
    assert_eq!(controller.count().await.unwrap(), 0);
}

#[tokio::test]
async fn find_by_id_after_create_returns_the_created_record() {
    let (_db, controller) = setup().await;
    controller.create(school_staff()).await.unwrap();

    let stored = controller.find_all().await.unwrap().remove(0);
    let found = controller.find_by_id(stored.id()).await.unwrap().unwrap();
    assert_eq!(found, stored);
    assert_eq!(found.name(), "Gopal");
}

#[tokio::test]
async fn mixed_create_yields_variant_correct_records() {
    let (_db, controller) = setup().await;
    controller.create(school_staff()).await.unwrap();

    let all = controller.find_all().await.unwrap();
    assert_eq!(all.len(), 4);
    assert!(matches!(all[0], Staff::Teaching(_)));
    assert!(matches!(all[1], Staff::Teaching(_)));
    assert!(matches!(all[2], Staff::NonTeaching(_)));
    assert!(matches!(all[3], Staff::NonTeaching(_)));
}

#[tokio::test]
async fn discriminator_queries_partition_the_table() {
    let (_db, controller) = setup().await;
    controller.create(school_staff()).await.unwrap();

    let teaching = controller.find_teaching().await.unwrap();
    let non_teaching = controller.find_non_teaching().await.unwrap();
    assert_eq!(teaching.len(), 2);
    assert_eq!(non_teaching.len(), 2);
    assert!(teaching.iter().all(|s| matches!(s, Staff::Teaching(_))));
    assert!(
        non_teaching
            .iter()
            .all(|s| matches!(s, Staff::NonTeaching(_)))
    );
}

#[tokio::test]
async fn destroy_then_find_by_id_returns_nothing() {
    let (_db, controller) = setup().await;
    controller.create(school_staff()).await.unwrap();
    let id = controller.find_all().await.unwrap()[0].id();

    controller.destroy(id).await.unwrap();
    assert!(controller.find_by_id(id).await.unwrap().is_none());
    assert_eq!(controller.count().await.unwrap(), 3);
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
    let detached = Staff::NonTeaching(single_table::NonTeachingStaff {
        id: 4242,
        name: "Nobody".to_owned(),
        area_expertise: "Ghost".to_owned(),
    });
    let err = controller.edit(detached).await.unwrap_err();
    assert!(err.is_no_longer_exists());
}

#[tokio::test]
async fn edit_merges_the_detached_state_and_returns_the_refreshed_record() {
    let (_db, controller) = setup().await;
    controller.create(school_staff()).await.unwrap();

    let stored = controller.find_all().await.unwrap().remove(0);
    let Staff::Teaching(mut teaching) = stored else {
        panic!("expected the teaching variant");
    };
    teaching.qualification = "PhD".to_owned();

    let refreshed = controller
        .edit(Staff::Teaching(teaching.clone()))
        .await
        .unwrap();
    assert_eq!(refreshed, Staff::Teaching(teaching.clone()));

    let found = controller.find_by_id(teaching.id).await.unwrap().unwrap();
    assert_eq!(found, Staff::Teaching(teaching));
}

#[tokio::test]
async fn find_paged_returns_the_requested_window_in_storage_order() {
    let (_db, controller) = setup().await;
    controller.create(school_staff()).await.unwrap();

    let page = controller.find_paged(2, 1).await.unwrap();
    let names: Vec<&str> = page.iter().map(Staff::name).collect();
    assert_eq!(names, ["Manisha", "Satish"]);
}

#[tokio::test]
async fn a_corrupt_discriminator_surfaces_as_a_storage_failure() {
    let (db, controller) = setup().await;
    // Bypass the mapper: a teaching row without its teaching columns.
    entity::Entity::insert(entity::ActiveModel {
        name: Set("Broken".to_owned()),
        kind: Set(StaffKind::Teaching),
        qualification: Set(None),
        subject_expertise: Set(None),
        area_expertise: Set(None),
        ..Default::default()
    })
    .exec(&db)
    .await
    .unwrap();

    let id = entity::Entity::find().one(&db).await.unwrap().unwrap().id;
    let err = controller.find_by_id(id).await.unwrap_err();
    assert!(matches!(err, StoreError::Db(_)));
}
