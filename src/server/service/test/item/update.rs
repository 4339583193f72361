use super::*;

/// Tests that absent patch fields leave the item untouched.
///
/// Expected: only the name changes
#[tokio::test]
async fn applies_present_fields_only() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_sharing_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, item) = factory::helpers::create_item_with_owner(db).await?;

    let service = ItemService::new(db);
    let updated = service
        .update(
            owner.id,
            item.id,
            UpdateItemDto {
                name: Some(Some("Renamed".to_string())),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.description, item.description);
    assert_eq!(updated.available, item.available);

    Ok(())
}

/// Tests a blank name in the patch.
///
/// Expected: BadRequest
#[tokio::test]
async fn blank_name_is_rejected() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_sharing_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, item) = factory::helpers::create_item_with_owner(db).await?;

    let service = ItemService::new(db);
    let result = service
        .update(
            owner.id,
            item.id,
            UpdateItemDto {
                name: Some(Some("   ".to_string())),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests an explicit null name, distinct from an absent field.
///
/// Expected: BadRequest
#[tokio::test]
async fn explicit_null_name_is_rejected() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_sharing_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, item) = factory::helpers::create_item_with_owner(db).await?;

    let service = ItemService::new(db);
    let result = service
        .update(
            owner.id,
            item.id,
            UpdateItemDto {
                name: Some(None),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests strict parsing of the availability text.
///
/// Expected: BadRequest for unparseable text, no silent false
#[tokio::test]
async fn invalid_boolean_text_is_rejected() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_sharing_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, item) = factory::helpers::create_item_with_owner(db).await?;

    let service = ItemService::new(db);
    let result = service
        .update(
            owner.id,
            item.id,
            UpdateItemDto {
                available: Some(Some("yes".to_string())),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    // The stored flag is untouched.
    let stored = service.get_by_id(item.id, owner.id).await.unwrap();
    assert!(stored.available);

    Ok(())
}

/// Tests case-insensitive boolean parsing.
///
/// Expected: "FALSE" parses and flips the flag
#[tokio::test]
async fn boolean_text_parses_case_insensitively() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_sharing_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, item) = factory::helpers::create_item_with_owner(db).await?;

    let service = ItemService::new(db);
    let updated = service
        .update(
            owner.id,
            item.id,
            UpdateItemDto {
                available: Some(Some("FALSE".to_string())),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert!(!updated.available);

    Ok(())
}

/// Tests a non-owner attempting the update.
///
/// Expected: NotFound
#[tokio::test]
async fn non_owner_gets_not_found() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_sharing_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, item) = factory::helpers::create_item_with_owner(db).await?;
    let stranger = factory::user::create_user(db).await?;

    let service = ItemService::new(db);
    let result = service
        .update(
            stranger.id,
            item.id,
            UpdateItemDto {
                name: Some(Some("Hijacked".to_string())),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
