use super::*;

/// Tests creating an item.
///
/// Expected: Ok with all fields stored and no request reference
#[tokio::test]
async fn creates_item() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_sharing_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;

    let repo = ItemRepository::new(db);
    let item = repo
        .create(CreateItemParams {
            owner_id: owner.id,
            name: "Cordless drill".to_string(),
            description: "18V, two batteries".to_string(),
            available: true,
            request_id: None,
        })
        .await?;

    assert!(item.id > 0);
    assert_eq!(item.owner_id, owner.id);
    assert_eq!(item.name, "Cordless drill");
    assert!(item.available);
    assert!(item.request_id.is_none());

    Ok(())
}

/// Tests creating an item that answers a request.
///
/// Expected: Ok with the request reference stored
#[tokio::test]
async fn creates_item_with_request_reference() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_sharing_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let requester = factory::user::create_user(db).await?;
    let request = factory::item_request::create_item_request(db, requester.id).await?;

    let repo = ItemRepository::new(db);
    let item = repo
        .create(CreateItemParams {
            owner_id: owner.id,
            name: "Ladder".to_string(),
            description: "3m aluminium".to_string(),
            available: true,
            request_id: Some(request.id),
        })
        .await?;

    assert_eq!(item.request_id, Some(request.id));

    Ok(())
}

/// Tests the foreign key constraint on the owner column.
///
/// Expected: Err(DbErr) for a nonexistent owner
#[tokio::test]
async fn fails_for_nonexistent_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_sharing_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ItemRepository::new(db);
    let result = repo
        .create(CreateItemParams {
            owner_id: 999999,
            name: "Orphan".to_string(),
            description: "No owner".to_string(),
            available: true,
            request_id: None,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
