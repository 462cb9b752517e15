//! Owned singly-linked chains used as hash buckets.

/// A link in a bucket chain.
struct Link<T> {
    value: T,
    next: Option<Box<Link<T>>>,
}

/// A singly-linked list of the values stored in one bucket.
///
/// New values are pushed at the front. Dropping a chain unlinks it node by
/// node, so a pathological hash function that funnels every element into one
/// bucket cannot exhaust the call stack on drop.
pub(crate) struct Chain<T> {
    head: Option<Box<Link<T>>>,
    length: usize,
}

impl<T> Chain<T> {
    pub(crate) const fn new() -> Self {
        Self {
            head: None,
            length: 0,
        }
    }

    #[inline]
    pub(crate) const fn len(&self) -> usize {
        self.length
    }

    /// Prepends `value`.
    pub(crate) fn push_front(&mut self, value: T) {
        self.push_front_link(Box::new(Link { value, next: None }));
    }

    fn push_front_link(&mut self, mut link: Box<Link<T>>) {
        link.next = self.head.take();
        self.head = Some(link);
        self.length += 1;
    }

    fn pop_front_link(&mut self) -> Option<Box<Link<T>>> {
        let mut link = self.head.take()?;
        self.head = link.next.take();
        self.length -= 1;
        Some(link)
    }

    /// Moves every link of `self`, front to back, into `buckets[index_of(value)]`,
    /// reusing the existing allocations.
    pub(crate) fn drain_into<F>(&mut self, buckets: &mut [Self], mut index_of: F)
    where
        F: FnMut(&T) -> usize,
    {
        while let Some(link) = self.pop_front_link() {
            let index = index_of(&link.value);
            buckets[index].push_front_link(link);
        }
    }

    pub(crate) fn iter(&self) -> ChainIterator<'_, T> {
        ChainIterator {
            cursor: self.head.as_deref(),
        }
    }
}

impl<T: PartialEq> Chain<T> {
    pub(crate) fn contains(&self, value: &T) -> bool {
        self.iter().any(|candidate| candidate == value)
    }
}

impl<T: Clone> Clone for Chain<T> {
    /// Copies the chain link by link, keeping the order of the original.
    fn clone(&self) -> Self {
        let values: Vec<&T> = self.iter().collect();
        let mut copy = Self::new();
        for value in values.into_iter().rev() {
            copy.push_front(value.clone());
        }
        copy
    }
}

impl<T> Default for Chain<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Chain<T> {
    fn drop(&mut self) {
        let mut cursor = self.head.take();
        while let Some(mut link) = cursor {
            cursor = link.next.take();
        }
    }
}

/// Borrowing iterator over a [`Chain`], front to back.
pub(crate) struct ChainIterator<'a, T> {
    cursor: Option<&'a Link<T>>,
}

impl<'a, T> Iterator for ChainIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let link = self.cursor?;
        self.cursor = link.next.as_deref();
        Some(&link.value)
    }
}
