//! Fixed sample dataset shown by the simulator
//!
//! Eleven `(time, balance)` pairs, ordered by time, spanning
//! x in `[5.1, 70.0]` and y in `[3.4, 14.0]`.

use crate::chart::DataPoint;

/// Sample balances over time
pub const SAMPLE_BALANCES: [DataPoint; 11] = [
    DataPoint::new(5.1, 3.8),
    DataPoint::new(7.7, 3.4),
    DataPoint::new(11.0, 4.5),
    DataPoint::new(13.8, 9.2),
    DataPoint::new(18.3, 6.7),
    DataPoint::new(20.6, 9.5),
    DataPoint::new(25.0, 7.8),
    DataPoint::new(35.0, 14.0),
    DataPoint::new(40.0, 10.5),
    DataPoint::new(55.0, 13.9),
    DataPoint::new(70.0, 10.0),
];
