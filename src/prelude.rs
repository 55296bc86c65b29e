pub use crate::attribute::{Attribute, Timestamp};
pub use crate::request::{Ec2Model, Ec2Request, Paginated};
pub use anyhow::{anyhow, bail, Context, Result};
pub(crate) use std::format as f;

pub trait OptionVecExt<T> {
    fn is_none_or_empty(&self) -> bool;
    fn not_empty(self) -> Option<Vec<T>>;
}

impl<T> OptionVecExt<T> for Option<Vec<T>> {
    fn is_none_or_empty(&self) -> bool {
        self.as_ref().map_or(true, Vec::is_empty)
    }

    fn not_empty(self) -> Option<Vec<T>> {
        self.filter(|x| !x.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::OptionVecExt;

    #[test]
    fn not_empty_clears_empty_vectors() {
        assert_eq!(Some(Vec::<i32>::new()).not_empty(), None);
        assert_eq!(None::<Vec<i32>>.not_empty(), None);
        assert_eq!(Some(vec![1]).not_empty(), Some(vec![1]));
    }

    #[test]
    fn is_none_or_empty() {
        assert!(None::<Vec<i32>>.is_none_or_empty());
        assert!(Some(Vec::<i32>::new()).is_none_or_empty());
        assert!(!Some(vec![1]).is_none_or_empty());
    }
}
