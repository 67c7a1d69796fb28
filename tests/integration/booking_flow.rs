//! Integration tests for the hold-to-booking handoff: create, confirm,
//! cancel, and the interplay with the seat holds underneath.

mod helpers;

use std::time::Duration;

use helpers::{TestApp, passengers, seats};
use ridehub_core::error::ErrorKind;
use ridehub_core::types::{HolderId, TripId};
use ridehub_entity::{BookingStatus, BookingStore, Passenger, SeatStatus};
use ridehub_lock::HoldConflict;
use rust_decimal_macros::dec;

#[tokio::test]
async fn test_full_purchase_lifecycle() {
    let app = TestApp::new().await;
    let holder = HolderId::from("user-1");

    let hold = app.acquire_ok(&["A1", "A2"], "user-1").await;

    let booking = app
        .booking
        .create_booking(
            hold.id,
            app.trip_id,
            seats(&["A1", "A2"]),
            passengers(2),
            holder.clone(),
        )
        .await
        .unwrap();

    assert_eq!(booking.status, BookingStatus::Pending);
    assert_eq!(booking.pnr.len(), 10);
    assert_eq!(booking.fare.total, dec!(1230.00));
    assert!(booking.payment_reference.is_none());

    // Payment is in flight: the hold must still shield the seats.
    assert!(app.locks.is_valid(hold.id).await.unwrap());
    let conflict = app.acquire_rejected(&["A1"], "user-2").await;
    assert_eq!(
        conflict,
        HoldConflict::AlreadyHeld {
            seat: "A1".into()
        }
    );

    let confirmed = app.booking.confirm(booking.id, "TXN-12345").await.unwrap();
    assert_eq!(confirmed.status, BookingStatus::Confirmed);
    assert_eq!(confirmed.payment_reference.as_deref(), Some("TXN-12345"));
    assert!(confirmed.confirmed_at.is_some());

    // The hold is gone; the seats are now permanently booked.
    assert!(!app.locks.is_valid(hold.id).await.unwrap());
    assert_eq!(
        app.selection
            .classify(app.trip_id, &"A1".into())
            .await
            .unwrap(),
        SeatStatus::Booked
    );
    let conflict = app.acquire_rejected(&["A2"], "user-2").await;
    assert_eq!(
        conflict,
        HoldConflict::AlreadyBooked {
            seat: "A2".into()
        }
    );

    // Lookup by PNR returns the same booking.
    let by_pnr = app.booking.get_booking_by_pnr(&confirmed.pnr).await.unwrap();
    assert_eq!(by_pnr.id, confirmed.id);
}

#[tokio::test]
async fn test_expired_hold_rejects_booking() {
    let app = TestApp::with_hold_ttl(Duration::from_millis(60)).await;

    let hold = app.acquire_ok(&["A1"], "user-1").await;
    tokio::time::sleep(Duration::from_millis(150)).await;

    let err = app
        .booking
        .create_booking(
            hold.id,
            app.trip_id,
            seats(&["A1"]),
            passengers(1),
            HolderId::from("user-1"),
        )
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);
    assert!(err.message.contains("expired"));

    // The seat is free again for anyone.
    app.acquire_ok(&["A1"], "user-2").await;
}

#[tokio::test]
async fn test_double_confirm_rejected() {
    let app = TestApp::new().await;

    let hold = app.acquire_ok(&["A1"], "user-1").await;
    let booking = app
        .booking
        .create_booking(
            hold.id,
            app.trip_id,
            seats(&["A1"]),
            passengers(1),
            HolderId::from("user-1"),
        )
        .await
        .unwrap();

    app.booking.confirm(booking.id, "TXN-1").await.unwrap();

    let err = app.booking.confirm(booking.id, "TXN-2").await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::State);

    // The first payment reference survives the duplicate attempt.
    let stored = app.booking.get_booking(booking.id).await.unwrap();
    assert_eq!(stored.status, BookingStatus::Confirmed);
    assert_eq!(stored.payment_reference.as_deref(), Some("TXN-1"));
}

#[tokio::test]
async fn test_passenger_seat_count_mismatch_rejected() {
    let app = TestApp::new().await;

    let hold = app.acquire_ok(&["A1", "A2"], "user-1").await;
    let err = app
        .booking
        .create_booking(
            hold.id,
            app.trip_id,
            seats(&["A1", "A2"]),
            passengers(1),
            HolderId::from("user-1"),
        )
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Validation);

    // Nothing was created and the hold is untouched.
    assert!(app.locks.is_valid(hold.id).await.unwrap());
    assert!(
        app.bookings
            .find_confirmed_by_trip(app.trip_id)
            .await
            .unwrap()
            .is_empty()
    );
}

#[tokio::test]
async fn test_invalid_passenger_rejected() {
    let app = TestApp::new().await;

    let hold = app.acquire_ok(&["A1"], "user-1").await;
    let bad = vec![Passenger::new("Ada Lovelace", "555-0100", "not-an-email")];
    let err = app
        .booking
        .create_booking(
            hold.id,
            app.trip_id,
            seats(&["A1"]),
            bad,
            HolderId::from("user-1"),
        )
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Validation);
    assert!(app.locks.is_valid(hold.id).await.unwrap());
}

#[tokio::test]
async fn test_seats_outside_hold_rejected() {
    let app = TestApp::new().await;

    let hold = app.acquire_ok(&["A1"], "user-1").await;
    let err = app
        .booking
        .create_booking(
            hold.id,
            app.trip_id,
            seats(&["A1", "A2"]),
            passengers(2),
            HolderId::from("user-1"),
        )
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Validation);
}

#[tokio::test]
async fn test_hold_for_different_trip_rejected() {
    let app = TestApp::new().await;

    let hold = app.acquire_ok(&["A1"], "user-1").await;
    let err = app
        .booking
        .create_booking(
            hold.id,
            TripId::new(),
            seats(&["A1"]),
            passengers(1),
            HolderId::from("user-1"),
        )
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Validation);
}

#[tokio::test]
async fn test_cancel_pending_releases_hold() {
    let app = TestApp::new().await;
    let holder = HolderId::from("user-1");

    let hold = app.acquire_ok(&["A1", "A2"], "user-1").await;
    let booking = app
        .booking
        .create_booking(
            hold.id,
            app.trip_id,
            seats(&["A1", "A2"]),
            passengers(2),
            holder.clone(),
        )
        .await
        .unwrap();

    let cancelled = app
        .booking
        .cancel(booking.id, Some(&holder), "changed my mind")
        .await
        .unwrap();
    assert_eq!(cancelled.status, BookingStatus::Cancelled);
    assert_eq!(
        cancelled.cancellation_reason.as_deref(),
        Some("changed my mind")
    );
    assert!(cancelled.cancelled_at.is_some());

    // Cancellation of a pending booking frees the seats immediately.
    assert!(!app.locks.is_valid(hold.id).await.unwrap());
    app.acquire_ok(&["A1", "A2"], "user-2").await;
}

#[tokio::test]
async fn test_cancel_by_wrong_holder_rejected() {
    let app = TestApp::new().await;

    let hold = app.acquire_ok(&["A1"], "user-1").await;
    let booking = app
        .booking
        .create_booking(
            hold.id,
            app.trip_id,
            seats(&["A1"]),
            passengers(1),
            HolderId::from("user-1"),
        )
        .await
        .unwrap();

    let intruder = HolderId::from("user-2");
    let err = app
        .booking
        .cancel(booking.id, Some(&intruder), "not mine")
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Validation);

    // The booking and its hold are untouched.
    let stored = app.booking.get_booking(booking.id).await.unwrap();
    assert_eq!(stored.status, BookingStatus::Pending);
    assert!(app.locks.is_valid(hold.id).await.unwrap());
}

#[tokio::test]
async fn test_cancel_already_cancelled_rejected() {
    let app = TestApp::new().await;
    let holder = HolderId::from("user-1");

    let hold = app.acquire_ok(&["A1"], "user-1").await;
    let booking = app
        .booking
        .create_booking(
            hold.id,
            app.trip_id,
            seats(&["A1"]),
            passengers(1),
            holder.clone(),
        )
        .await
        .unwrap();

    app.booking
        .cancel(booking.id, Some(&holder), "first")
        .await
        .unwrap();

    let err = app
        .booking
        .cancel(booking.id, Some(&holder), "second")
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::State);

    // The original cancellation record is preserved.
    let stored = app.booking.get_booking(booking.id).await.unwrap();
    assert_eq!(stored.cancellation_reason.as_deref(), Some("first"));
}

#[tokio::test]
async fn test_cancel_confirmed_frees_seats_without_hold() {
    let app = TestApp::new().await;
    let holder = HolderId::from("user-1");

    let hold = app.acquire_ok(&["A1"], "user-1").await;
    let booking = app
        .booking
        .create_booking(
            hold.id,
            app.trip_id,
            seats(&["A1"]),
            passengers(1),
            holder.clone(),
        )
        .await
        .unwrap();
    app.booking.confirm(booking.id, "TXN-1").await.unwrap();

    // Refund-style cancel without holder scoping. There is no hold left
    // to release by now; this must not error.
    let cancelled = app
        .booking
        .cancel(booking.id, None, "refund approved")
        .await
        .unwrap();
    assert_eq!(cancelled.status, BookingStatus::Cancelled);

    // The seat drops out of the confirmed set and is sellable again.
    assert_eq!(
        app.selection
            .classify(app.trip_id, &"A1".into())
            .await
            .unwrap(),
        SeatStatus::Available
    );
}

#[tokio::test]
async fn test_unknown_booking_and_pnr_not_found() {
    let app = TestApp::new().await;

    let err = app
        .booking
        .get_booking(ridehub_core::types::BookingId::new())
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);

    let err = app.booking.get_booking_by_pnr("ZZZZZZZZZZ").await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);
}
