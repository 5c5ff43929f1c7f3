mod count;
mod max;
mod mean;
mod min;
mod sum;

pub use count::Count;
pub use max::Max;
pub use mean::Mean;
pub use min::Min;
pub use sum::Sum;
