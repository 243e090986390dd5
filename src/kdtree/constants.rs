/// The maximum number of points held in a leaf unless configured otherwise.
pub const DEFAULT_BUCKET_CAPACITY: usize = 7;
