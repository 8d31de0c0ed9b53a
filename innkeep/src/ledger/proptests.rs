//! Property-based tests for the `Ledger` booking lifecycle.

use super::{BookingRequest, Ledger};
use crate::reservation::ReservationId;
use crate::room::RoomNumber;
use crate::Inventory;
use chrono::{Duration, NaiveDate};
use proptest::prelude::*;
use rust_decimal::Decimal;

const ROOMS: [u32; 7] = [101, 102, 201, 103, 202, 301, 999];

#[derive(Debug, Clone)]
enum Op {
    Book {
        room: u32,
        start_offset: i64,
        len: i64,
    },
    Cancel {
        id: u64,
    },
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (prop::sample::select(ROOMS.to_vec()), 0i64..400, -2i64..30).prop_map(
            |(room, start_offset, len)| Op::Book {
                room,
                start_offset,
                len
            }
        ),
        (1u64..12).prop_map(|id| Op::Cancel { id }),
    ]
}

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

fn assert_consistent(inventory: &Inventory, ledger: &Ledger) -> Result<(), TestCaseError> {
    for room in inventory.list() {
        let holders = ledger
            .list()
            .filter(|r| r.room_number() == room.number())
            .count();
        prop_assert_eq!(room.is_reserved(), holders == 1);
        prop_assert!(holders <= 1);
    }
    for res in ledger.list() {
        prop_assert!(res.check_out() > res.check_in());
        prop_assert!(res.id() < ledger.next_id());
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 500,
        .. ProptestConfig::default()
    })]

    // Reserved flags track the ledger after any sequence of operations
    #[test]
    fn ledger_and_inventory_stay_consistent(ops in prop::collection::vec(op_strategy(), 0..40)) {
        let mut inventory = Inventory::with_default_rooms();
        let mut ledger = Ledger::new();

        for op in ops {
            let inventory_before = inventory.clone();
            let ledger_before = ledger.clone();

            match op {
                Op::Book { room, start_offset, len } => {
                    let check_in = base_date() + Duration::days(start_offset);
                    let check_out = check_in + Duration::days(len);
                    let request = BookingRequest::with_dates(
                        RoomNumber::try_from(room).unwrap(),
                        "Guest",
                        "guest@example.com",
                        check_in,
                        check_out,
                    );
                    match ledger.book(&mut inventory, request) {
                        Ok(booking) => {
                            prop_assert_eq!(booking.reservation.id(), ledger_before.next_id());
                            prop_assert_eq!(ledger.next_id(), ledger_before.next_id().next().unwrap());
                        }
                        Err(_) => {
                            prop_assert_eq!(&inventory, &inventory_before);
                            prop_assert_eq!(&ledger, &ledger_before);
                        }
                    }
                }
                Op::Cancel { id } => {
                    let id = ReservationId::new(id);
                    if ledger.cancel(&mut inventory, id).is_ok() {
                        prop_assert!(ledger.get(id).is_err());
                        prop_assert_eq!(ledger.next_id(), ledger_before.next_id());
                    } else {
                        prop_assert_eq!(&inventory, &inventory_before);
                        prop_assert_eq!(&ledger, &ledger_before);
                    }
                }
            }

            assert_consistent(&inventory, &ledger)?;
        }
    }

    // Cost is always whole nights times the nightly rate
    #[test]
    fn cost_is_nights_times_rate(room in prop::sample::select(ROOMS[..6].to_vec()), offset in 0i64..1000, len in 1i64..60) {
        let mut inventory = Inventory::with_default_rooms();
        let mut ledger = Ledger::new();
        let number = RoomNumber::try_from(room).unwrap();
        let rate = inventory.find(number).unwrap().nightly_rate();

        let check_in = base_date() + Duration::days(offset);
        let request = BookingRequest::with_dates(
            number,
            "Guest",
            "guest@example.com",
            check_in,
            check_in + Duration::days(len),
        );
        let booking = ledger.book(&mut inventory, request).unwrap();

        prop_assert_eq!(i64::from(booking.nights), len);
        prop_assert_eq!(booking.total_cost, rate * Decimal::from(len));
        prop_assert_eq!(booking.reservation.nights(), booking.nights);
    }
}
