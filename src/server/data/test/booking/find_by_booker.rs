use super::*;
use crate::server::model::booking::Booking;
use sea_orm::DatabaseConnection;

/// Seeds one booking per time bucket for a single booker: one ended in the
/// past, one spanning now, one in the future. The future booking stays
/// WAITING, the others are APPROVED.
///
/// Returns (booker id, past, current, future).
async fn seed_time_buckets(
    db: &DatabaseConnection,
) -> Result<(i32, Booking, Booking, Booking), DbErr> {
    let owner = factory::user::create_user(db).await?;
    let booker = factory::user::create_user(db).await?;
    let item = factory::item::create_item(db, owner.id).await?;

    let now = Utc::now().naive_utc();

    let past = BookingFactory::new(db, item.id, booker.id)
        .start(now - Duration::hours(3))
        .end(now - Duration::hours(1))
        .status(BookingStatus::Approved)
        .build()
        .await?;
    let current = BookingFactory::new(db, item.id, booker.id)
        .start(now - Duration::hours(1))
        .end(now + Duration::hours(1))
        .status(BookingStatus::Approved)
        .build()
        .await?;
    let future = BookingFactory::new(db, item.id, booker.id)
        .start(now + Duration::hours(1))
        .end(now + Duration::hours(2))
        .build()
        .await?;

    Ok((
        booker.id,
        Booking::from_entity(past),
        Booking::from_entity(current),
        Booking::from_entity(future),
    ))
}

/// Tests the ALL filter.
///
/// Expected: every booking of the booker, newest start first
#[tokio::test]
async fn all_filter_returns_everything_ordered() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_sharing_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (booker_id, past, current, future) = seed_time_buckets(db).await?;
    let now = Utc::now().naive_utc();

    let repo = BookingRepository::new(db);
    let bookings = repo
        .find_all_by_booker(booker_id, BookingState::All, now, 0, 10)
        .await?;

    let ids: Vec<i32> = bookings.iter().map(|booking| booking.id).collect();
    assert_eq!(ids, vec![future.id, current.id, past.id]);

    Ok(())
}

/// Tests the CURRENT filter.
///
/// Expected: exactly the booking with start < now < end
#[tokio::test]
async fn current_filter_matches_only_spanning_now() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_sharing_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (booker_id, _past, current, _future) = seed_time_buckets(db).await?;
    let now = Utc::now().naive_utc();

    let repo = BookingRepository::new(db);
    let bookings = repo
        .find_all_by_booker(booker_id, BookingState::Current, now, 0, 10)
        .await?;

    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0].id, current.id);

    Ok(())
}

/// Tests the PAST filter.
///
/// Expected: exactly the booking with end < now
#[tokio::test]
async fn past_filter_matches_only_ended() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_sharing_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (booker_id, past, _current, _future) = seed_time_buckets(db).await?;
    let now = Utc::now().naive_utc();

    let repo = BookingRepository::new(db);
    let bookings = repo
        .find_all_by_booker(booker_id, BookingState::Past, now, 0, 10)
        .await?;

    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0].id, past.id);

    Ok(())
}

/// Tests the FUTURE filter.
///
/// Expected: exactly the booking with start > now
#[tokio::test]
async fn future_filter_matches_only_upcoming() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_sharing_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (booker_id, _past, _current, future) = seed_time_buckets(db).await?;
    let now = Utc::now().naive_utc();

    let repo = BookingRepository::new(db);
    let bookings = repo
        .find_all_by_booker(booker_id, BookingState::Future, now, 0, 10)
        .await?;

    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0].id, future.id);

    Ok(())
}

/// Tests that the three time filters partition the listing.
///
/// Expected: CURRENT, PAST and FUTURE are mutually exclusive and together
/// cover all three seeded bookings
#[tokio::test]
async fn time_filters_partition_bookings() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_sharing_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (booker_id, _past, _current, _future) = seed_time_buckets(db).await?;
    let now = Utc::now().naive_utc();

    let repo = BookingRepository::new(db);
    let mut ids = Vec::new();
    for state in [
        BookingState::Current,
        BookingState::Past,
        BookingState::Future,
    ] {
        for booking in repo
            .find_all_by_booker(booker_id, state, now, 0, 10)
            .await?
        {
            ids.push(booking.id);
        }
    }

    ids.sort_unstable();
    let mut deduped = ids.clone();
    deduped.dedup();

    assert_eq!(ids.len(), 3);
    assert_eq!(ids, deduped);

    Ok(())
}

/// Tests the WAITING and REJECTED status filters.
///
/// Expected: each filter returns only bookings in that status
#[tokio::test]
async fn status_filters_match_status() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_sharing_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let booker = factory::user::create_user(db).await?;
    let item = factory::item::create_item(db, owner.id).await?;

    let waiting = factory::booking::create_booking(db, item.id, booker.id).await?;
    let rejected = BookingFactory::new(db, item.id, booker.id)
        .status(BookingStatus::Rejected)
        .build()
        .await?;
    BookingFactory::new(db, item.id, booker.id)
        .status(BookingStatus::Approved)
        .build()
        .await?;

    let now = Utc::now().naive_utc();
    let repo = BookingRepository::new(db);

    let waiting_found = repo
        .find_all_by_booker(booker.id, BookingState::Waiting, now, 0, 10)
        .await?;
    assert_eq!(waiting_found.len(), 1);
    assert_eq!(waiting_found[0].id, waiting.id);

    let rejected_found = repo
        .find_all_by_booker(booker.id, BookingState::Rejected, now, 0, 10)
        .await?;
    assert_eq!(rejected_found.len(), 1);
    assert_eq!(rejected_found[0].id, rejected.id);

    Ok(())
}

/// Tests that another booker's bookings never appear.
///
/// Expected: empty listing for a booker without bookings
#[tokio::test]
async fn excludes_other_bookers() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_sharing_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, _booker, _item, _booking) =
        factory::helpers::create_booking_with_dependencies(db).await?;
    let other = factory::user::create_user(db).await?;

    let now = Utc::now().naive_utc();
    let repo = BookingRepository::new(db);
    let bookings = repo
        .find_all_by_booker(other.id, BookingState::All, now, 0, 10)
        .await?;

    assert!(bookings.is_empty());

    Ok(())
}

/// Tests page slicing of the booker listing.
///
/// Expected: two bookings on the first page, one on the second
#[tokio::test]
async fn paginates_booker_bookings() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_sharing_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let booker = factory::user::create_user(db).await?;
    let item = factory::item::create_item(db, owner.id).await?;

    let now = Utc::now().naive_utc();
    for hour in 1..=3 {
        BookingFactory::new(db, item.id, booker.id)
            .start(now + Duration::hours(hour))
            .end(now + Duration::hours(hour + 1))
            .build()
            .await?;
    }

    let repo = BookingRepository::new(db);
    let first_page = repo
        .find_all_by_booker(booker.id, BookingState::All, now, 0, 2)
        .await?;
    let second_page = repo
        .find_all_by_booker(booker.id, BookingState::All, now, 1, 2)
        .await?;

    assert_eq!(first_page.len(), 2);
    assert_eq!(second_page.len(), 1);
    // Descending by start: the second page holds the earliest booking.
    assert!(second_page[0].start < first_page[1].start);

    Ok(())
}
