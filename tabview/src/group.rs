//! Partitioning rows into named buckets.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

type Accessor<T> = Arc<dyn Fn(&T) -> String + Send + Sync>;
type LabelOrder = Arc<dyn Fn(&str, &str) -> Ordering + Send + Sync>;

/// Declares one way to partition rows.
pub struct GroupDescriptor<T> {
    /// Unique group id.
    pub id: String,
    /// Selector label.
    pub label: String,
    accessor: Accessor<T>,
    sort_groups: Option<LabelOrder>,
}

impl<T> GroupDescriptor<T> {
    /// Create a group descriptor. The accessor must return a label for every
    /// row; rows lacking a value should map to a sentinel such as `""`.
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        accessor: impl Fn(&T) -> String + Send + Sync + 'static,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            accessor: Arc::new(accessor),
            sort_groups: None,
        }
    }

    /// Order buckets with a custom comparator instead of label order.
    pub fn sort_groups(
        mut self,
        cmp: impl Fn(&str, &str) -> Ordering + Send + Sync + 'static,
    ) -> Self {
        self.sort_groups = Some(Arc::new(cmp));
        self
    }

    /// The bucket label of `row`.
    pub fn label_of(&self, row: &T) -> String {
        (self.accessor)(row)
    }

    fn compare(&self, a: &str, b: &str) -> Ordering {
        match &self.sort_groups {
            Some(cmp) => cmp(a, b),
            None => compare_labels(a, b),
        }
    }
}

impl<T> Clone for GroupDescriptor<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            label: self.label.clone(),
            accessor: Arc::clone(&self.accessor),
            sort_groups: self.sort_groups.clone(),
        }
    }
}

impl<T> fmt::Debug for GroupDescriptor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GroupDescriptor")
            .field("id", &self.id)
            .field("label", &self.label)
            .field("custom_order", &self.sort_groups.is_some())
            .finish_non_exhaustive()
    }
}

/// One named group of rows, as indices into the row slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bucket {
    /// Label produced by the accessor.
    pub label: String,
    /// Row indices in their incoming order.
    pub indices: Vec<usize>,
}

/// Ascending label order: case-insensitive first, raw text as tie-break.
pub fn compare_labels(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));
    folded.then_with(|| a.cmp(b))
}

/// Partition `indices` (into `rows`) by the descriptor's label.
///
/// Every index lands in exactly one bucket; rows keep their relative order
/// inside a bucket.
pub fn group_indices<T>(
    rows: &[T],
    indices: &[usize],
    descriptor: &GroupDescriptor<T>,
) -> Vec<Bucket> {
    let mut buckets: Vec<Bucket> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for &index in indices {
        let label = descriptor.label_of(&rows[index]);
        match positions.get(&label) {
            Some(&pos) => buckets[pos].indices.push(index),
            None => {
                positions.insert(label.clone(), buckets.len());
                buckets.push(Bucket {
                    label,
                    indices: vec![index],
                });
            }
        }
    }

    buckets.sort_by(|a, b| descriptor.compare(&a.label, &b.label));
    buckets
}

/// Partition `rows` by the descriptor's label, returning rows per label.
pub fn group_rows<'a, T>(
    rows: &'a [T],
    descriptor: &GroupDescriptor<T>,
) -> Vec<(String, Vec<&'a T>)> {
    let all: Vec<usize> = (0..rows.len()).collect();
    group_indices(rows, &all, descriptor)
        .into_iter()
        .map(|bucket| {
            let members = bucket.indices.iter().map(|&i| &rows[i]).collect();
            (bucket.label, members)
        })
        .collect()
}
