mod nearest_parameter;

pub use nearest_parameter::{NearestParameter, SearchStrategy};
