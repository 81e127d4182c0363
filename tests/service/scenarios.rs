//! End-to-end service scenarios.

use product_catalog::{
    InMemoryProductStore, ProductDraft, ProductForm, ProductService, ProductStore, ServiceError,
};

fn service() -> ProductService<InMemoryProductStore> {
    ProductService::new(InMemoryProductStore::new())
}

#[tokio::test]
async fn pen_is_created_renamed_and_deleted() {
    let service = service();

    let pen = service
        .create_from_payload(Some(ProductDraft::new("Pen", "", 1.5, true)))
        .await
        .unwrap();
    assert_eq!(pen.id, 1);

    let fetched = service.get_by_id(1).await.unwrap();
    assert_eq!(fetched.name, "Pen");
    assert_eq!(fetched.price, 1.5);
    assert!(fetched.in_stock);

    service
        .update(1, ProductDraft::new("Pen Blue", "", 1.75, false))
        .await
        .unwrap();
    let fetched = service.get_by_id(1).await.unwrap();
    assert_eq!(fetched.name, "Pen Blue");
    assert_eq!(fetched.price, 1.75);
    assert!(!fetched.in_stock);

    service.delete(1).await.unwrap();
    assert!(matches!(
        service.get_by_id(1).await,
        Err(ServiceError::NotFound(1))
    ));
}

#[tokio::test]
async fn create_then_get_returns_same_fields() {
    let service = service();
    let draft = ProductDraft::new("Lamp", "Brass desk lamp", 35.0, true);

    let created = service.create(draft.clone()).await.unwrap();
    let fetched = service.get_by_id(created.id).await.unwrap();

    assert_eq!(fetched.to_draft(), draft);
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn null_payload_adds_nothing() {
    let service = service();
    let result = service.create_from_payload(None).await;
    assert!(matches!(result, Err(ServiceError::BadRequest(_))));
    assert!(service.list_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn update_of_missing_id_leaves_store_unchanged() {
    let service = service();
    service
        .create(ProductDraft::new("Pen", "Blue ink", 1.5, true))
        .await
        .unwrap();
    let before = service.list_all().await.unwrap();

    let result = service
        .update_from_payload(2, Some(ProductDraft::new("Ghost", "", 0.0, false)))
        .await;
    assert!(matches!(result, Err(ServiceError::NotFound(2))));
    assert_eq!(service.list_all().await.unwrap(), before);
}

#[tokio::test]
async fn form_edit_with_foreign_id_mutates_nothing() {
    let service = service();
    for name in ["a", "b", "c", "d", "e", "f", "g"] {
        service
            .create(ProductDraft::new(name, "x", 1.0, true))
            .await
            .unwrap();
    }
    let before = service.list_all().await.unwrap();

    let form = ProductForm {
        id: Some("7".into()),
        name: Some("Changed".into()),
        description: Some("x".into()),
        price: Some("2".into()),
        in_stock: None,
    };
    let result = service.update_from_form(5, &form).await;
    match result {
        Err(err @ ServiceError::IdentityMismatch { .. }) => assert!(err.is_not_found()),
        other => panic!("expected identity mismatch, got {other:?}"),
    }
    assert_eq!(service.list_all().await.unwrap(), before);
}

#[tokio::test]
async fn concurrent_creates_get_distinct_ids() {
    let service = std::sync::Arc::new(service());

    let mut handles = Vec::new();
    for i in 0..16 {
        let service = service.clone();
        handles.push(tokio::spawn(async move {
            service
                .create(ProductDraft::new(format!("item-{i}"), "", i as f64, i % 2 == 0))
                .await
                .unwrap()
                .id
        }));
    }

    let mut ids = Vec::new();
    for handle in handles {
        ids.push(handle.await.unwrap());
    }
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 16);
    assert_eq!(service.store().list().await.unwrap().len(), 16);
}
