use super::*;

/// Tests that the owner listing selects through the item join.
///
/// Expected: bookings of the owner's items only
#[tokio::test]
async fn returns_bookings_of_owned_items_only() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_sharing_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, _booker, _item, booking) =
        factory::helpers::create_booking_with_dependencies(db).await?;
    // Unrelated booking of another owner's item.
    factory::helpers::create_booking_with_dependencies(db).await?;

    let now = Utc::now().naive_utc();
    let repo = BookingRepository::new(db);
    let bookings = repo
        .find_all_by_owner(owner.id, BookingState::All, now, 0, 10)
        .await?;

    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0].id, booking.id);

    Ok(())
}

/// Tests that the state filter applies to the owner listing too.
///
/// Expected: WAITING filter drops the approved booking
#[tokio::test]
async fn applies_state_filter() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_sharing_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let booker = factory::user::create_user(db).await?;
    let item = factory::item::create_item(db, owner.id).await?;

    let waiting = factory::booking::create_booking(db, item.id, booker.id).await?;
    BookingFactory::new(db, item.id, booker.id)
        .status(BookingStatus::Approved)
        .build()
        .await?;

    let now = Utc::now().naive_utc();
    let repo = BookingRepository::new(db);
    let bookings = repo
        .find_all_by_owner(owner.id, BookingState::Waiting, now, 0, 10)
        .await?;

    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0].id, waiting.id);

    Ok(())
}

/// Tests the owner listing across several owned items.
///
/// Expected: bookings of all the owner's items, newest start first
#[tokio::test]
async fn spans_all_owned_items() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_sharing_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let booker = factory::user::create_user(db).await?;
    let first_item = factory::item::create_item(db, owner.id).await?;
    let second_item = factory::item::create_item(db, owner.id).await?;

    let now = Utc::now().naive_utc();
    let earlier = BookingFactory::new(db, first_item.id, booker.id)
        .start(now + Duration::hours(1))
        .end(now + Duration::hours(2))
        .build()
        .await?;
    let later = BookingFactory::new(db, second_item.id, booker.id)
        .start(now + Duration::hours(3))
        .end(now + Duration::hours(4))
        .build()
        .await?;

    let repo = BookingRepository::new(db);
    let bookings = repo
        .find_all_by_owner(owner.id, BookingState::All, now, 0, 10)
        .await?;

    let ids: Vec<i32> = bookings.iter().map(|booking| booking.id).collect();
    assert_eq!(ids, vec![later.id, earlier.id]);

    Ok(())
}
