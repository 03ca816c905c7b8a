use seatwise_booking::BookingService;
use seatwise_store::DbClient;

async fn fresh_service() -> BookingService {
    let db = DbClient::new("sqlite::memory:", 1)
        .await
        .expect("in-memory database");
    db.init_schema().await.expect("schema");
    BookingService::new(db)
}

// The demo script: one good batch, then a batch with an
// over-long name, then a batch with a missing name. Only the first batch may
// ever be visible.
#[tokio::test]
async fn test_demo_scenario_end_to_end() {
    let service = fresh_service().await;

    service
        .book(&[Some("Alice"), Some("Bob"), Some("Carol")])
        .await
        .expect("first booking should work with no problem");
    assert_eq!(service.find_all_bookings().await.unwrap().len(), 3);

    let err = service.book(&[Some("Chris"), Some("Samuel")]).await;
    assert!(err.is_err(), "'Samuel' should have triggered a rollback");
    assert_eq!(service.find_all_bookings().await.unwrap().len(), 3);

    let err = service.book(&[Some("Buddy"), None]).await;
    assert!(err.is_err(), "null should have triggered a rollback");

    let names = service.find_all_bookings().await.unwrap();
    assert_eq!(names, vec!["Alice", "Bob", "Carol"]);
}

#[tokio::test]
async fn test_valid_batch_appends_after_a_failed_one() {
    let service = fresh_service().await;

    service.book(&[Some("Alice")]).await.unwrap();
    service
        .book(&[Some("Buddy"), Some("Samuel")])
        .await
        .unwrap_err();
    service.book(&[Some("Dave")]).await.unwrap();

    let names = service.find_all_bookings().await.unwrap();
    assert_eq!(names, vec!["Alice", "Dave"]);
}

#[tokio::test]
async fn test_violation_position_in_batch_does_not_matter() {
    let service = fresh_service().await;

    // First entry invalid: nothing after it is attempted.
    service
        .book(&[None, Some("Eve")])
        .await
        .unwrap_err();
    assert!(service.find_all_bookings().await.unwrap().is_empty());

    // Middle entry invalid: valid neighbors on both sides are discarded.
    service
        .book(&[Some("Ann"), Some("Maximilian"), Some("Ben")])
        .await
        .unwrap_err();
    assert!(service.find_all_bookings().await.unwrap().is_empty());
}
