//! Referential integrity between projects and people.
//!
//! # Responsibility
//! - Keep `Person.projects` consistent with `Project.team` on every
//!   mutating operation that touches either side.
//! - Provide the authoritative full-scan repair.
//!
//! # Invariants
//! - `Project.team` is the source of truth; `Person.projects` is the
//!   derived side and is always safe to recompute from a scan.
//! - Team entries that match no person id are display-only credits and
//!   are left alone.

use crate::model::person::Person;
use crate::model::project::Project;

/// Applies a team diff to the affected people's project lists.
///
/// For every person id added to the team, the project id is appended to
/// that person's list (deduplicated); for every id removed, it is
/// stripped. Returns whether any person changed.
pub fn apply_team_diff(
    project_id: &str,
    old_team: &[String],
    new_team: &[String],
    people: &mut [Person],
) -> bool {
    let mut changed = false;

    for member in new_team {
        if old_team.contains(member) {
            continue;
        }
        if let Some(person) = people.iter_mut().find(|p| &p.id == member) {
            if !person.projects.iter().any(|id| id == project_id) {
                person.projects.push(project_id.to_string());
                changed = true;
            }
        }
    }

    for member in old_team {
        if new_team.contains(member) {
            continue;
        }
        if let Some(person) = people.iter_mut().find(|p| &p.id == member) {
            let before = person.projects.len();
            person.projects.retain(|id| id != project_id);
            changed |= person.projects.len() != before;
        }
    }

    changed
}

/// Removes a deleted person's id from every project team.
///
/// Publication/software credits are free-text names and stay untouched.
pub fn unlink_person(person_id: &str, projects: &mut [Project]) -> bool {
    let mut changed = false;
    for project in projects.iter_mut() {
        let before = project.team.len();
        project.team.retain(|member| member != person_id);
        changed |= project.team.len() != before;
    }
    changed
}

/// Removes a deleted project's id from every person's project list.
pub fn unlink_project(project_id: &str, people: &mut [Person]) -> bool {
    let mut changed = false;
    for person in people.iter_mut() {
        let before = person.projects.len();
        person.projects.retain(|id| id != project_id);
        changed |= person.projects.len() != before;
    }
    changed
}

/// Recomputes every person's project list from the project teams.
///
/// Full-scan repair: the derived side is rebuilt outright, so both
/// missing and stale links disappear. Idempotent. Returns whether any
/// person changed.
pub fn rebuild_person_links(projects: &[Project], people: &mut [Person]) -> bool {
    let mut changed = false;
    for person in people.iter_mut() {
        let expected: Vec<String> = projects
            .iter()
            .filter(|project| project.team.iter().any(|member| member == &person.id))
            .map(|project| project.id.clone())
            .collect();
        if person.projects != expected {
            person.projects = expected;
            changed = true;
        }
    }
    changed
}

/// Load-time cleanup: converts legacy name-keyed team entries to person
/// ids. Entries matching neither an id nor a name stay verbatim.
pub fn migrate_team_names_to_ids(projects: &mut [Project], people: &[Person]) -> bool {
    let mut changed = false;
    for project in projects.iter_mut() {
        for member in project.team.iter_mut() {
            if people.iter().any(|p| &p.id == member) {
                continue;
            }
            if let Some(person) = people.iter().find(|p| &p.name == member) {
                *member = person.id.clone();
                changed = true;
            }
        }
    }
    changed
}

/// Load-time cleanup: deduplicates project-id lists that drifted under
/// older incremental patching.
pub fn dedupe_person_links(people: &mut [Person]) -> bool {
    let mut changed = false;
    for person in people.iter_mut() {
        let mut seen: Vec<&str> = Vec::with_capacity(person.projects.len());
        let deduped: Vec<String> = person
            .projects
            .iter()
            .filter(|id| {
                if seen.contains(&id.as_str()) {
                    false
                } else {
                    seen.push(id.as_str());
                    true
                }
            })
            .cloned()
            .collect();
        if deduped.len() != person.projects.len() {
            person.projects = deduped;
            changed = true;
        }
    }
    changed
}

#[cfg(test)]
mod tests {
    use super::{
        apply_team_diff, dedupe_person_links, migrate_team_names_to_ids, rebuild_person_links,
    };
    use crate::model::person::Person;
    use crate::model::project::Project;

    fn person(id: &str, name: &str, projects: &[&str]) -> Person {
        let mut p = Person::new(name);
        p.id = id.to_string();
        p.projects = projects.iter().map(|s| s.to_string()).collect();
        p
    }

    fn project(id: &str, team: &[&str]) -> Project {
        let mut p = Project::new(id);
        p.id = id.to_string();
        p.team = team.iter().map(|s| s.to_string()).collect();
        p
    }

    #[test]
    fn team_diff_adds_and_removes_links() {
        let mut people = vec![person("person-1", "Ada", &[]), person("person-2", "Grace", &["project-1"])];
        let old = vec!["person-2".to_string()];
        let new = vec!["person-1".to_string()];

        assert!(apply_team_diff("project-1", &old, &new, &mut people));
        assert_eq!(people[0].projects, vec!["project-1"]);
        assert!(people[1].projects.is_empty());
    }

    #[test]
    fn team_diff_deduplicates_additions() {
        let mut people = vec![person("person-1", "Ada", &["project-1"])];
        let new = vec!["person-1".to_string()];

        assert!(!apply_team_diff("project-1", &[], &new, &mut people));
        assert_eq!(people[0].projects, vec!["project-1"]);
    }

    #[test]
    fn rebuild_removes_stale_and_adds_missing_links() {
        let projects = vec![project("project-1", &["person-1"])];
        let mut people = vec![
            person("person-1", "Ada", &[]),
            person("person-2", "Grace", &["project-1", "project-gone"]),
        ];

        assert!(rebuild_person_links(&projects, &mut people));
        assert_eq!(people[0].projects, vec!["project-1"]);
        assert!(people[1].projects.is_empty());
        // Idempotent.
        assert!(!rebuild_person_links(&projects, &mut people));
    }

    #[test]
    fn migration_converts_names_and_keeps_unknown_credits() {
        let people = vec![person("person-1", "Ada Lovelace", &[])];
        let mut projects = vec![project("project-1", &["Ada Lovelace", "External Visitor"])];

        assert!(migrate_team_names_to_ids(&mut projects, &people));
        assert_eq!(projects[0].team, vec!["person-1", "External Visitor"]);
    }

    #[test]
    fn dedupe_keeps_first_occurrence_order() {
        let mut people = vec![person("person-1", "Ada", &["a", "b", "a", "c", "b"])];
        assert!(dedupe_person_links(&mut people));
        assert_eq!(people[0].projects, vec!["a", "b", "c"]);
        assert!(!dedupe_person_links(&mut people));
    }
}
