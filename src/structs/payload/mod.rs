pub mod raw_aggregate_payload;
pub mod raw_record;
