//! `serde` form of `Int64`: the number returned by `to_json`.
//!
//! Integral numbers inside the `i64` range serialize as integers so that
//! JSON output carries no trailing `.0`; the rest fall back to `f64`.

use serde::{Serialize, Serializer};

use crate::int64::Int64;
use crate::store::Store;
use crate::variant::Variant;

/// 2^63 as an `f64`.
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

impl<V: Variant, S: Store> Serialize for Int64<V, S> {
    fn serialize<Se: Serializer>(&self, serializer: Se) -> Result<Se::Ok, Se::Error> {
        let number = self.to_json();

        if (-I64_BOUND..I64_BOUND).contains(&number) {
            serializer.serialize_i64(number as i64)
        } else {
            serializer.serialize_f64(number)
        }
    }
}
