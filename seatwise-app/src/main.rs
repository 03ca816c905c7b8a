use seatwise_booking::BookingService;
use seatwise_store::{app_config::Config, DbClient};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "seatwise_app=info,seatwise_booking=debug,seatwise_store=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().expect("Failed to load config");
    tracing::info!("Opening database at {}", config.database.url);

    let db = DbClient::new(&config.database.url, config.database.max_connections)
        .await
        .expect("Failed to open database");
    db.init_schema().await.expect("Failed to create BOOKINGS table");

    let service = BookingService::new(db);

    service
        .book(&[Some("Alice"), Some("Bob"), Some("Carol")])
        .await
        .expect("First booking should work with no problem");
    log_bookings(&service).await;

    if let Err(e) = service.book(&[Some("Chris"), Some("Samuel")]).await {
        tracing::error!("{}", e);
        tracing::info!("'Samuel' is too long for FIRST_NAME, so 'Chris' was rolled back with him");
    }
    log_bookings(&service).await;

    if let Err(e) = service.book(&[Some("Buddy"), None]).await {
        tracing::error!("{}", e);
        tracing::info!("A missing name is rejected, so 'Buddy' was rolled back with it");
    }
    log_bookings(&service).await;
}

async fn log_bookings(service: &BookingService) {
    let bookings = service.find_all().await.expect("Failed to read bookings");
    for booking in &bookings {
        tracing::info!("So far, {} is booked (id {})", booking.first_name, booking.id);
    }
    tracing::info!("{} seat(s) booked in total", bookings.len());
}
