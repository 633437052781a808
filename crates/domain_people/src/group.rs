//! Group capability and set algebra
//!
//! A [`Group`] is any collection that can iterate its members and remove
//! members by predicate. Every query and set operation is provided on top of
//! those two primitives, so a concrete collection only implements storage.
//!
//! Membership tests scan the other group linearly. Groups are small
//! in-memory collections and keep no secondary index.

use std::collections::HashSet;
use std::hash::Hash;

/// A collection of members supporting set algebra.
///
/// Results of [`find_by`](Group::find_by), [`difference`](Group::difference),
/// [`intersection`](Group::intersection) and [`union`](Group::union) are sets:
/// they hold no duplicates and have no defined order.
pub trait Group<T: Eq + Hash> {
    /// Iterates the members in the group's presentation order
    fn iter(&self) -> Box<dyn Iterator<Item = &T> + '_>;

    /// Keeps only the members for which `keep` returns true
    fn retain(&mut self, keep: &mut dyn FnMut(&T) -> bool);

    fn size(&self) -> usize {
        self.iter().count()
    }

    fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    fn is_not_empty(&self) -> bool {
        !self.is_empty()
    }

    /// Returns true if a member equal to `member` is present
    fn contains(&self, member: &T) -> bool {
        self.iter().any(|candidate| candidate == member)
    }

    /// Counts the members matching `predicate`
    fn count<P>(&self, mut predicate: P) -> usize
    where
        P: FnMut(&T) -> bool,
        Self: Sized,
    {
        self.iter().filter(|member| predicate(*member)).count()
    }

    /// Returns every member matching `predicate`
    fn find_by<P>(&self, mut predicate: P) -> HashSet<&T>
    where
        P: FnMut(&T) -> bool,
        Self: Sized,
    {
        self.iter().filter(|member| predicate(*member)).collect()
    }

    /// Returns the first member in iteration order matching `predicate`
    fn find_one<P>(&self, mut predicate: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool,
        Self: Sized,
    {
        self.iter().find(|member| predicate(*member))
    }

    /// Members of this group that `other` does not contain
    fn difference<G>(&self, other: &G) -> HashSet<&T>
    where
        G: Group<T> + ?Sized,
        Self: Sized,
    {
        self.find_by(|member| !other.contains(member))
    }

    /// Members of this group that `other` also contains
    fn intersection<G>(&self, other: &G) -> HashSet<&T>
    where
        G: Group<T> + ?Sized,
        Self: Sized,
    {
        self.find_by(|member| other.contains(member))
    }

    /// Members of either group; `None` yields this group's members only
    fn union<'a, G>(&'a self, other: Option<&'a G>) -> HashSet<&'a T>
    where
        G: Group<T> + ?Sized,
        Self: Sized,
    {
        let mut members: HashSet<&'a T> = self.iter().collect();
        if let Some(other) = other {
            members.extend(other.iter());
        }
        members
    }

    /// Removes every member equal to `member`
    ///
    /// Returns true if the group changed.
    fn leave(&mut self, member: &T) -> bool {
        let before = self.size();
        self.retain(&mut |candidate| candidate != member);
        self.size() != before
    }

    /// Removes every member matching `predicate`
    ///
    /// Returns true if the group changed.
    fn leave_where<P>(&mut self, mut predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
        Self: Sized,
    {
        let before = self.size();
        self.retain(&mut |member| !predicate(member));
        self.size() != before
    }

    /// Visits every member in iteration order
    fn accept<F>(&self, visitor: F)
    where
        F: FnMut(&T),
        Self: Sized,
    {
        self.iter().for_each(visitor);
    }
}
