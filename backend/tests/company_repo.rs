mod support;

use serde_json::json;

use jobly_backend::{
    error::AppError,
    models::company::{NewCompany, UpdateCompany},
    repositories::{company as company_repo, job as job_repo},
    sql::{to_update_request, CompanyFilter},
};

fn new_company(handle: &str) -> NewCompany {
    NewCompany {
        handle: handle.into(),
        name: "New".into(),
        description: "New Description".into(),
        num_employees: Some(1),
        logo_url: Some("http://new.img".into()),
    }
}

#[tokio::test]
async fn create_then_get() {
    let Some(pool) = support::test_pool().await else { return };

    let created = company_repo::create(&pool, &new_company("new")).await.expect("create");
    assert_eq!(created.handle, "new");
    assert_eq!(company_repo::get(&pool, "new").await.expect("get"), created);

    let duplicate = company_repo::create(&pool, &new_company("new")).await;
    assert!(matches!(duplicate, Err(AppError::Conflict(_))));
}

#[tokio::test]
async fn find_all_applies_each_filter() {
    let Some(pool) = support::test_pool().await else { return };
    support::seed_companies_and_jobs(&pool).await;

    let handles = |companies: Vec<jobly_backend::models::Company>| {
        companies.into_iter().map(|c| c.handle).collect::<Vec<_>>()
    };

    let all = company_repo::find_all(&pool, &CompanyFilter::default()).await.unwrap();
    assert_eq!(handles(all), ["c1", "c2", "c3"]);

    let filter = CompanyFilter {
        name_like: Some("c".into()),
        min_employees: Some(2),
        max_employees: Some(2),
    };
    let found = company_repo::find_all(&pool, &filter).await.unwrap();
    assert_eq!(handles(found), ["c2"]);

    let filter = CompanyFilter {
        min_employees: Some(0),
        ..Default::default()
    };
    let found = company_repo::find_all(&pool, &filter).await.unwrap();
    assert_eq!(found.len(), 3);

    let filter = CompanyFilter {
        name_like: Some("nope".into()),
        ..Default::default()
    };
    assert!(company_repo::find_all(&pool, &filter).await.unwrap().is_empty());
}

#[tokio::test]
async fn update_changes_only_supplied_fields() {
    let Some(pool) = support::test_pool().await else { return };
    support::seed_companies_and_jobs(&pool).await;

    let changes = to_update_request(&UpdateCompany {
        num_employees: Some(10),
        logo_url: Some("http://other.img".into()),
        ..Default::default()
    })
    .unwrap();
    let updated = company_repo::update(&pool, "c1", &changes).await.expect("update");
    assert_eq!(updated.num_employees, Some(10));
    assert_eq!(updated.logo_url.as_deref(), Some("http://other.img"));
    assert_eq!(updated.name, "C1");
    assert_eq!(updated.description, "Desc1");

    let missing = company_repo::update(&pool, "nope", &changes).await;
    assert!(matches!(missing, Err(AppError::NotFound(_))));

    let empty = company_repo::update(&pool, "c1", &Default::default()).await;
    assert!(matches!(empty, Err(AppError::BadRequest(_))));
}

#[tokio::test]
async fn update_can_clear_nullable_columns() {
    let Some(pool) = support::test_pool().await else { return };
    support::seed_companies_and_jobs(&pool).await;

    let changes = json!({"numEmployees": null, "logoUrl": null})
        .as_object()
        .cloned()
        .unwrap();
    let updated = company_repo::update(&pool, "c2", &changes).await.expect("update");
    assert_eq!(updated.num_employees, None);
    assert_eq!(updated.logo_url, None);
    assert_eq!(updated.name, "C2");

    let reloaded = company_repo::get(&pool, "c2").await.expect("get");
    assert_eq!(reloaded.num_employees, None);
}

#[tokio::test]
async fn remove_cascades_to_jobs() {
    let Some(pool) = support::test_pool().await else { return };
    support::seed_companies_and_jobs(&pool).await;

    company_repo::remove(&pool, "c1").await.expect("remove");
    assert!(matches!(
        company_repo::get(&pool, "c1").await,
        Err(AppError::NotFound(_))
    ));
    assert!(job_repo::find_by_company(&pool, "c1").await.unwrap().is_empty());

    assert!(matches!(
        company_repo::remove(&pool, "c1").await,
        Err(AppError::NotFound(_))
    ));
}
