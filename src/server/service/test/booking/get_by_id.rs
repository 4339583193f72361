use super::*;

/// Tests that both the booker and the owner can fetch a booking.
///
/// Expected: Ok for both callers
#[tokio::test]
async fn booker_and_owner_can_fetch() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_sharing_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, booker, _item, booking) =
        factory::helpers::create_booking_with_dependencies(db).await?;

    let service = BookingService::new(db);

    let seen_by_booker = service.get_by_id(booking.id, booker.id).await.unwrap();
    assert_eq!(seen_by_booker.id, booking.id);

    let seen_by_owner = service.get_by_id(booking.id, owner.id).await.unwrap();
    assert_eq!(seen_by_owner.id, booking.id);

    Ok(())
}

/// Tests a caller with no relation to the booking.
///
/// Expected: NotFound, the booking is not disclosed
#[tokio::test]
async fn unrelated_user_gets_not_found() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_sharing_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, _booker, _item, booking) =
        factory::helpers::create_booking_with_dependencies(db).await?;
    let stranger = factory::user::create_user(db).await?;

    let service = BookingService::new(db);
    let result = service.get_by_id(booking.id, stranger.id).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests fetching a missing booking.
///
/// Expected: NotFound
#[tokio::test]
async fn missing_booking_is_not_found() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_sharing_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let service = BookingService::new(db);
    let result = service.get_by_id(999, user.id).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
