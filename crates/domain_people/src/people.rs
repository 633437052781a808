//! People collection
//!
//! [`People`] is the concrete [`Group`] of [`Person`] members. Members are
//! unique by person equality (name and birth date). They are stored in
//! insertion order and presented in natural order: every iteration sorts a
//! fresh view by name, then birth date.

use std::collections::HashSet;
use std::fmt;

use core_kernel::GroupId;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::group::Group;
use crate::person::Person;

const EMPTY_GROUP_LABEL: &str = "EMPTY NON-IDENTIFIED GROUP";

/// An identifiable, named group of people.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "PeopleRecord")]
pub struct People {
    id: Option<GroupId>,
    name: Option<String>,
    members: Vec<Person>,
}

/// Wire shape of [`People`]; members may repeat
#[derive(Deserialize)]
struct PeopleRecord {
    #[serde(default)]
    id: Option<GroupId>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    members: Vec<Person>,
}

impl From<PeopleRecord> for People {
    fn from(record: PeopleRecord) -> Self {
        let mut people = People::of(record.members);
        people.id = record.id;
        people.name = record.name;
        people
    }
}

impl People {
    /// Creates an empty, unnamed and unidentified group
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a group from the distinct people in `members`
    pub fn of(members: impl IntoIterator<Item = Person>) -> Self {
        let mut people = Self::empty();
        for person in members {
            people.join(person);
        }
        people
    }

    /// Creates a group with a single member
    pub fn one(person: Person) -> Self {
        Self::of([person])
    }

    pub fn id(&self) -> Option<GroupId> {
        self.id
    }

    pub fn set_id(&mut self, id: Option<GroupId>) {
        self.id = id;
    }

    pub fn identified_by(mut self, id: GroupId) -> Self {
        self.set_id(Some(id));
        self
    }

    /// Returns true if the group has not been assigned an id
    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }

    /// Assigns a freshly generated id and returns it
    pub fn generate_id(&mut self) -> GroupId {
        let id = GroupId::new();
        self.id = Some(id);
        id
    }

    pub fn set_name(&mut self, name: Option<String>) {
        self.name = name;
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.set_name(Some(name.into()));
        self
    }

    /// Returns the display name of this group
    ///
    /// Resolved in order: an assigned non-blank name, the id, the single
    /// last name shared by every member, the empty-group sentinel, and
    /// finally a member count.
    pub fn name(&self) -> String {
        if let Some(name) = self.name.as_ref().filter(|name| !name.trim().is_empty()) {
            return name.clone();
        }

        if let Some(id) = self.id {
            return format!("GROUP ID [{}]", id.as_uuid());
        }

        let last_names: HashSet<&str> = self.members.iter().map(Person::last_name).collect();

        match last_names.len() {
            1 => last_names
                .into_iter()
                .map(|last_name| format!("GROUP of [{}]", last_name))
                .collect(),
            0 => EMPTY_GROUP_LABEL.to_string(),
            count => {
                debug!(last_names = count, "no shared last name for group label");
                format!("GROUP of [{}] people", self.members.len())
            }
        }
    }

    /// Adds the person unless an equal person is already a member
    ///
    /// Returns true if the person was added.
    #[instrument(skip(self, person), fields(person = %person.name()))]
    pub fn join(&mut self, person: Person) -> bool {
        if self.contains(&person) {
            debug!("Person already a member");
            return false;
        }

        debug!("Adding member to group");
        self.members.push(person);
        true
    }

    /// Returns the members in natural order
    pub fn to_vec(&self) -> Vec<Person> {
        self.sorted().into_iter().cloned().collect()
    }

    fn sorted(&self) -> Vec<&Person> {
        let mut members: Vec<&Person> = self.members.iter().collect();
        members.sort();
        members
    }
}

impl Group<Person> for People {
    fn iter(&self) -> Box<dyn Iterator<Item = &Person> + '_> {
        Box::new(self.sorted().into_iter())
    }

    fn retain(&mut self, keep: &mut dyn FnMut(&Person) -> bool) {
        self.members.retain(|member| keep(member));
    }

    fn size(&self) -> usize {
        self.members.len()
    }

    fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    fn contains(&self, member: &Person) -> bool {
        self.members.iter().any(|candidate| candidate == member)
    }

    #[instrument(skip(self, member), fields(person = %member.name()))]
    fn leave(&mut self, member: &Person) -> bool {
        let before = self.members.len();
        self.members.retain(|candidate| candidate != member);
        let removed = before - self.members.len();

        debug!(removed, "Removing member from group");
        removed > 0
    }

    #[instrument(skip(self, predicate))]
    fn leave_where<P>(&mut self, mut predicate: P) -> bool
    where
        P: FnMut(&Person) -> bool,
    {
        let before = self.members.len();
        self.members.retain(|member| !predicate(member));
        let removed = before - self.members.len();

        debug!(removed, "Removing matching members from group");
        removed > 0
    }
}

impl FromIterator<Person> for People {
    fn from_iter<I: IntoIterator<Item = Person>>(iter: I) -> Self {
        People::of(iter)
    }
}

impl fmt::Display for People {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let members: Vec<String> = self
            .sorted()
            .into_iter()
            .map(|person| person.name().display_last_first())
            .collect();

        write!(f, "[{}]", members.join("; "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::name::Name;

    fn person(first: &str, last: &str) -> Person {
        Person::new(Name::of(first, last).unwrap())
    }

    #[test]
    fn test_empty_group_label() {
        let people = People::empty();

        assert!(people.is_empty());
        assert!(people.is_new());
        assert_eq!(people.name(), "EMPTY NON-IDENTIFIED GROUP");
        assert_eq!(people.to_string(), "[]");
    }

    #[test]
    fn test_shared_last_name_label() {
        let people = People::of([person("Jon", "Doe"), person("Jane", "Doe")]);
        assert_eq!(people.name(), "GROUP of [Doe]");
    }

    #[test]
    fn test_mixed_last_names_label() {
        let people = People::of([person("Jon", "Doe"), person("Jon", "Bloom")]);
        assert_eq!(people.name(), "GROUP of [2] people");
    }

    #[test]
    fn test_id_label_precedes_last_name() {
        let mut people = People::one(person("Jon", "Doe"));
        let id = people.generate_id();

        assert_eq!(people.name(), format!("GROUP ID [{}]", id.as_uuid()));
        assert!(!people.is_new());
    }

    #[test]
    fn test_assigned_name_wins_unless_blank() {
        let people = People::one(person("Jon", "Doe"))
            .identified_by(GroupId::new())
            .named("Family");
        assert_eq!(people.name(), "Family");

        let blank = People::one(person("Jon", "Doe")).named("   ");
        assert_eq!(blank.name(), "GROUP of [Doe]");
    }

    #[test]
    fn test_generated_ids_are_unique() {
        let mut people = People::empty();
        let first = people.generate_id();
        let second = people.generate_id();

        assert_ne!(first, second);
        assert_eq!(people.id(), Some(second));
    }

    #[test]
    fn test_join_rejects_duplicates() {
        let mut people = People::one(person("Jon", "Doe"));

        assert!(!people.join(person("Jon", "Doe")));
        assert!(people.join(person("Jane", "Doe")));
        assert_eq!(people.size(), 2);
    }

    #[test]
    fn test_iteration_in_natural_order() {
        let people: People = [person("Sarah", "Bloom"), person("Adam", "Doe"), person("Ellie", "Bloom")]
            .into_iter()
            .collect();

        let first_names: Vec<&str> = people.iter().map(Person::first_name).collect();

        assert_eq!(first_names, vec!["Ellie", "Sarah", "Adam"]);
        assert_eq!(people.to_string(), "[Bloom, Ellie; Bloom, Sarah; Doe, Adam]");
    }
}
