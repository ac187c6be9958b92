mod aggregation;
mod arithmetic;
mod errors;
pub mod keys;
mod selection;

pub use aggregation::{
    concatenate_distinct_keys, count_by_group, filter_then_sum_by_group, group_by, max_amount, sum_amount_by_group,
    top_n_by_amount, total_amount, unique_keys
};
pub use errors::AggregationError;
pub use selection::{apply_percentage_adjustment, filter_by_amount_greater_than, filter_by_type, map_to_field};
