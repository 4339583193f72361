use super::*;

/// Tests the comment-eligibility lookup with a finished APPROVED booking.
///
/// Expected: Ok(Some) for the qualifying booker and item
#[tokio::test]
async fn finds_finished_approved_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_sharing_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let booker = factory::user::create_user(db).await?;
    let item = factory::item::create_item(db, owner.id).await?;

    let now = Utc::now().naive_utc();
    let booking = BookingFactory::new(db, item.id, booker.id)
        .start(now - Duration::hours(3))
        .end(now - Duration::hours(1))
        .status(BookingStatus::Approved)
        .build()
        .await?;

    let repo = BookingRepository::new(db);
    let found = repo.find_completed(item.id, booker.id, now).await?;

    assert_eq!(found.map(|booking| booking.id), Some(booking.id));

    Ok(())
}

/// Tests that a WAITING booking never qualifies, even when finished.
///
/// Expected: Ok(None)
#[tokio::test]
async fn waiting_booking_does_not_qualify() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_sharing_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let booker = factory::user::create_user(db).await?;
    let item = factory::item::create_item(db, owner.id).await?;

    let now = Utc::now().naive_utc();
    BookingFactory::new(db, item.id, booker.id)
        .start(now - Duration::hours(3))
        .end(now - Duration::hours(1))
        .build()
        .await?;

    let repo = BookingRepository::new(db);
    let found = repo.find_completed(item.id, booker.id, now).await?;

    assert!(found.is_none());

    Ok(())
}

/// Tests that an APPROVED booking still running does not qualify.
///
/// Expected: Ok(None) while end >= now
#[tokio::test]
async fn unfinished_booking_does_not_qualify() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_sharing_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let booker = factory::user::create_user(db).await?;
    let item = factory::item::create_item(db, owner.id).await?;

    let now = Utc::now().naive_utc();
    BookingFactory::new(db, item.id, booker.id)
        .start(now - Duration::hours(1))
        .end(now + Duration::hours(1))
        .status(BookingStatus::Approved)
        .build()
        .await?;

    let repo = BookingRepository::new(db);
    let found = repo.find_completed(item.id, booker.id, now).await?;

    assert!(found.is_none());

    Ok(())
}

/// Tests that another user's finished booking does not qualify the caller.
///
/// Expected: Ok(None) for a booker without bookings of the item
#[tokio::test]
async fn other_bookers_do_not_qualify() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_sharing_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let booker = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;
    let item = factory::item::create_item(db, owner.id).await?;

    let now = Utc::now().naive_utc();
    BookingFactory::new(db, item.id, booker.id)
        .start(now - Duration::hours(3))
        .end(now - Duration::hours(1))
        .status(BookingStatus::Approved)
        .build()
        .await?;

    let repo = BookingRepository::new(db);
    let found = repo.find_completed(item.id, other.id, now).await?;

    assert!(found.is_none());

    Ok(())
}
