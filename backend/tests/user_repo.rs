mod support;

use jobly_backend::{
    error::AppError,
    models::user::UpdateUser,
    repositories::{application as application_repo, user as user_repo},
    sql::to_update_request,
    utils::password::verify_password,
};

#[tokio::test]
async fn register_hashes_and_authenticate_checks() {
    let Some(pool) = support::test_pool().await else { return };
    support::seed_users(&pool).await;

    let user = user_repo::get(&pool, "u1").await.expect("get");
    assert_ne!(user.password, "password1");
    assert!(user.password.starts_with("$argon2"));

    let authed = user_repo::authenticate(&pool, "u1", "password1").await.expect("auth");
    assert_eq!(authed.username, "u1");
    assert!(!authed.is_admin());

    assert!(matches!(
        user_repo::authenticate(&pool, "u1", "wrong").await,
        Err(AppError::Unauthorized(_))
    ));
    assert!(matches!(
        user_repo::authenticate(&pool, "nope", "password1").await,
        Err(AppError::Unauthorized(_))
    ));
}

#[tokio::test]
async fn duplicate_username_conflicts() {
    let Some(pool) = support::test_pool().await else { return };
    support::seed_users(&pool).await;

    let again = jobly_backend::models::user::NewUser {
        username: "u1".into(),
        password: "password1".into(),
        first_name: "F".into(),
        last_name: "L".into(),
        email: "dup@email.com".into(),
        is_admin: false,
    };
    assert!(matches!(
        user_repo::register(&pool, &again).await,
        Err(AppError::Conflict(_))
    ));
}

#[tokio::test]
async fn find_all_orders_by_username() {
    let Some(pool) = support::test_pool().await else { return };
    support::seed_users(&pool).await;

    let names: Vec<String> = user_repo::find_all(&pool)
        .await
        .unwrap()
        .into_iter()
        .map(|u| u.username)
        .collect();
    assert_eq!(names, ["admin", "u1", "u2"]);
}

#[tokio::test]
async fn update_rehashes_password_and_maps_names() {
    let Some(pool) = support::test_pool().await else { return };
    support::seed_users(&pool).await;

    let changes = to_update_request(&UpdateUser {
        first_name: Some("New".into()),
        password: Some("new-password".into()),
        ..Default::default()
    })
    .unwrap();
    let updated = user_repo::update(&pool, "u1", changes).await.expect("update");
    assert_eq!(updated.first_name, "New");
    assert_eq!(updated.last_name, "Lu1");
    assert!(verify_password("new-password", &updated.password).unwrap());

    let missing = to_update_request(&UpdateUser {
        last_name: Some("X".into()),
        ..Default::default()
    })
    .unwrap();
    assert!(matches!(
        user_repo::update(&pool, "nope", missing).await,
        Err(AppError::NotFound(_))
    ));
}

#[tokio::test]
async fn remove_user() {
    let Some(pool) = support::test_pool().await else { return };
    support::seed_users(&pool).await;

    user_repo::remove(&pool, "u1").await.expect("remove");
    assert!(matches!(user_repo::get(&pool, "u1").await, Err(AppError::NotFound(_))));
    assert!(matches!(user_repo::remove(&pool, "u1").await, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn applications() {
    let Some(pool) = support::test_pool().await else { return };
    support::seed_users(&pool).await;
    let ids = support::seed_companies_and_jobs(&pool).await;

    assert_eq!(application_repo::apply(&pool, "u1", ids[1]).await.unwrap(), ids[1]);
    application_repo::apply(&pool, "u1", ids[0]).await.unwrap();
    assert_eq!(
        application_repo::job_ids_for(&pool, "u1").await.unwrap(),
        vec![ids[0], ids[1]]
    );

    let by_user = application_repo::job_ids_by_user(&pool).await.unwrap();
    assert_eq!(by_user.get("u1"), Some(&vec![ids[0], ids[1]]));
    assert!(!by_user.contains_key("u2"));

    assert!(matches!(
        application_repo::apply(&pool, "u1", ids[0]).await,
        Err(AppError::Conflict(_))
    ));
    assert!(matches!(
        application_repo::apply(&pool, "nope", ids[0]).await,
        Err(AppError::NotFound(_))
    ));
    match application_repo::apply(&pool, "u1", 0).await {
        Err(AppError::BadRequest(msg)) => assert!(msg.starts_with("Invalid job id")),
        other => panic!("unexpected result: {:?}", other),
    }
}
