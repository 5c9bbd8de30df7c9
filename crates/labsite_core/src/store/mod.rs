//! The relational content store.
//!
//! # Responsibility
//! - Own every collection plus the topic registry, featured selection
//!   and site settings.
//! - Run each mutation through one pipeline: link upkeep, persistence,
//!   change notification.
//!
//! # Invariants
//! - `Project.team` and `Person.projects` never drift: both sides are
//!   updated within the same mutation call.
//! - Every touched collection is written back before the mutation
//!   returns; a failed write is reported but the in-memory state keeps
//!   the mutation (accepted divergence until the next successful save).
//! - Topic colors are read from the registry, never re-derived per
//!   project.

use crate::color::gradient::{compose_gradient, DEFAULT_DIRECTION};
use crate::model::featured::FeaturedSelection;
use crate::model::leaf::{Collaborator, FundingSource, JobOpening, NewsItem};
use crate::model::person::Person;
use crate::model::project::Project;
use crate::model::publication::Publication;
use crate::model::software::Software;
use crate::model::topic::TopicColor;
use crate::repo::{keys, KvStore, RepoError};
use log::{error, info};
use serde::Serialize;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::{Instant, SystemTime, UNIX_EPOCH};

pub mod collection;
pub mod integrity;
pub mod notify;
pub mod seed;
pub mod topics;

pub use collection::{Collection, Record};
pub use notify::{ChangeAction, ChangeEvent, ChangeNotifier, ListenerId};
pub use topics::TopicColorRegistry;

pub type StoreResult<T> = Result<T, StoreError>;

/// Store operation error.
#[derive(Debug)]
pub enum StoreError {
    /// The referenced id does not exist in its collection.
    NotFound { kind: &'static str, id: String },
    /// A reorder was not a total permutation of the collection's ids.
    ReorderMismatch { kind: &'static str },
    /// Durable write or read failed; in-memory state is unchanged for
    /// reads and keeps the mutation for writes.
    Persistence(RepoError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound { kind, id } => write!(f, "{kind} not found: {id}"),
            Self::ReorderMismatch { kind } => write!(
                f,
                "reorder of {kind} collection must list every current id exactly once"
            ),
            Self::Persistence(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Persistence(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for StoreError {
    fn from(value: RepoError) -> Self {
        Self::Persistence(value)
    }
}

/// Resolved featured records for the landing view.
///
/// Stale featured ids resolve to `None`; a missing record is never an
/// error at read time.
#[derive(Debug, Clone, Default)]
pub struct FeaturedItems {
    pub project: Option<Project>,
    pub news: Option<NewsItem>,
    pub publication: Option<Publication>,
}

macro_rules! collection_api {
    ($ty:ty, $field:ident,
     $list:ident, $by_id:ident, $add:ident, $update:ident, $delete:ident, $reorder:ident
     $(, featured: $fslot:ident)?) => {
        pub fn $list(&self) -> &[$ty] {
            self.$field.items()
        }

        pub fn $by_id(&self, id: &str) -> Option<&$ty> {
            self.$field.get(id)
        }

        pub fn $add(&mut self, mut record: $ty) -> StoreResult<$ty> {
            if record.id().is_empty() {
                let id = self.next_id(<$ty as Record>::KIND);
                record.set_id(id);
            }
            let stored = record.clone();
            self.$field.push(record);
            self.persist(<$ty as Record>::STORE_KEY, self.$field.items())?;
            self.announce(<$ty as Record>::KIND, stored.id(), ChangeAction::Created);
            Ok(stored)
        }

        pub fn $update(&mut self, record: $ty) -> StoreResult<()> {
            let id = record.id().to_string();
            if !self.$field.replace(record) {
                return Err(StoreError::NotFound {
                    kind: <$ty as Record>::KIND,
                    id,
                });
            }
            self.persist(<$ty as Record>::STORE_KEY, self.$field.items())?;
            self.announce(<$ty as Record>::KIND, &id, ChangeAction::Updated);
            Ok(())
        }

        pub fn $delete(&mut self, id: &str) -> StoreResult<()> {
            if self.$field.remove(id).is_none() {
                return Err(StoreError::NotFound {
                    kind: <$ty as Record>::KIND,
                    id: id.to_string(),
                });
            }
            $(
                if self.featured.$fslot.as_deref() == Some(id) {
                    self.featured.$fslot = None;
                    self.persist(keys::FEATURED, &self.featured)?;
                }
            )?
            self.persist(<$ty as Record>::STORE_KEY, self.$field.items())?;
            self.announce(<$ty as Record>::KIND, id, ChangeAction::Deleted);
            Ok(())
        }

        pub fn $reorder(&mut self, ids_in_order: &[&str]) -> StoreResult<()> {
            if !self.$field.reorder(ids_in_order) {
                return Err(StoreError::ReorderMismatch {
                    kind: <$ty as Record>::KIND,
                });
            }
            self.persist(<$ty as Record>::STORE_KEY, self.$field.items())?;
            self.announce(<$ty as Record>::KIND, "", ChangeAction::Reordered);
            Ok(())
        }
    };
}

/// Single-writer, synchronous content store over a key-value adapter.
pub struct ContentStore<S: KvStore> {
    kv: S,
    projects: Collection<Project>,
    people: Collection<Person>,
    publications: Collection<Publication>,
    software: Collection<Software>,
    jobs: Collection<JobOpening>,
    collaborators: Collection<Collaborator>,
    funding: Collection<FundingSource>,
    news: Collection<NewsItem>,
    topic_colors: TopicColorRegistry,
    featured: FeaturedSelection,
    team_image: String,
    team_image_position: String,
    notifier: ChangeNotifier,
    last_generated_ms: i64,
}

impl<S: KvStore> ContentStore<S> {
    /// Loads every collection from the adapter, seeding any absent (or
    /// unreadable) key from built-in defaults, runs the one-time
    /// load migration pass, and persists the result so a reload is
    /// stable.
    pub fn open(kv: S) -> StoreResult<Self> {
        let started_at = Instant::now();
        info!("event=store_open module=store status=start");

        let people = kv
            .load_json::<Vec<Person>>(keys::PEOPLE)?
            .unwrap_or_else(seed::people);
        let projects = kv
            .load_json::<Vec<Project>>(keys::PROJECTS)?
            .unwrap_or_else(seed::projects);
        let publications = kv
            .load_json::<Vec<Publication>>(keys::PUBLICATIONS)?
            .unwrap_or_else(seed::publications);
        let software = kv
            .load_json::<Vec<Software>>(keys::SOFTWARE)?
            .unwrap_or_else(seed::software);
        let jobs = kv
            .load_json::<Vec<JobOpening>>(keys::JOBS)?
            .unwrap_or_else(seed::jobs);
        let collaborators = kv
            .load_json::<Vec<Collaborator>>(keys::COLLABORATORS)?
            .unwrap_or_else(seed::collaborators);
        let funding = kv
            .load_json::<Vec<FundingSource>>(keys::FUNDING)?
            .unwrap_or_else(seed::funding);
        let news = kv
            .load_json::<Vec<NewsItem>>(keys::NEWS)?
            .unwrap_or_else(seed::news);
        let topic_colors = kv
            .load_json::<BTreeMap<String, TopicColor>>(keys::TOPIC_COLORS)?
            .map(TopicColorRegistry::from_entries)
            .unwrap_or_default();
        let featured = kv
            .load_json::<FeaturedSelection>(keys::FEATURED)?
            .unwrap_or_else(seed::featured);
        let team_image = kv
            .load_json::<String>(keys::TEAM_IMAGE)?
            .unwrap_or_else(|| seed::TEAM_IMAGE.to_string());
        let team_image_position = kv
            .load_json::<String>(keys::TEAM_IMAGE_POSITION)?
            .unwrap_or_else(|| seed::TEAM_IMAGE_POSITION.to_string());

        let mut store = Self {
            kv,
            projects: Collection::new(projects),
            people: Collection::new(people),
            publications: Collection::new(publications),
            software: Collection::new(software),
            jobs: Collection::new(jobs),
            collaborators: Collection::new(collaborators),
            funding: Collection::new(funding),
            news: Collection::new(news),
            topic_colors,
            featured,
            team_image,
            team_image_position,
            notifier: ChangeNotifier::new(),
            last_generated_ms: 0,
        };

        // One-time cleanup, run on load only.
        integrity::migrate_team_names_to_ids(store.projects.items_mut(), store.people.items());
        integrity::dedupe_person_links(store.people.items_mut());
        store.refresh_project_colors();
        store.persist_all()?;

        info!(
            "event=store_open module=store status=ok duration_ms={} projects={} people={}",
            started_at.elapsed().as_millis(),
            store.projects.len(),
            store.people.len()
        );
        Ok(store)
    }

    // ---- projects ------------------------------------------------------

    pub fn projects(&self) -> &[Project] {
        self.projects.items()
    }

    pub fn project_by_id(&self, id: &str) -> Option<&Project> {
        self.projects.get(id)
    }

    pub fn add_project(&mut self, mut project: Project) -> StoreResult<Project> {
        if project.id.is_empty() {
            project.id = self.next_id(Project::KIND);
        }
        project.last_updated = now_millis();
        let registry_changed = Self::derive_project_fields(&mut self.topic_colors, &mut project);
        let people_changed =
            integrity::apply_team_diff(&project.id, &[], &project.team, self.people.items_mut());

        let stored = project.clone();
        self.projects.push(project);
        self.persist(keys::PROJECTS, self.projects.items())?;
        if people_changed {
            self.persist(keys::PEOPLE, self.people.items())?;
        }
        if registry_changed {
            self.persist(keys::TOPIC_COLORS, self.topic_colors.entries())?;
        }
        self.announce(Project::KIND, &stored.id, ChangeAction::Created);
        Ok(stored)
    }

    pub fn update_project(&mut self, mut project: Project) -> StoreResult<Project> {
        let old_team = match self.projects.get(&project.id) {
            Some(existing) => existing.team.clone(),
            None => {
                return Err(StoreError::NotFound {
                    kind: Project::KIND,
                    id: project.id,
                })
            }
        };

        project.last_updated = now_millis();
        let registry_changed = Self::derive_project_fields(&mut self.topic_colors, &mut project);
        let people_changed = integrity::apply_team_diff(
            &project.id,
            &old_team,
            &project.team,
            self.people.items_mut(),
        );

        let stored = project.clone();
        self.projects.replace(project);
        self.persist(keys::PROJECTS, self.projects.items())?;
        if people_changed {
            self.persist(keys::PEOPLE, self.people.items())?;
        }
        if registry_changed {
            self.persist(keys::TOPIC_COLORS, self.topic_colors.entries())?;
        }
        self.announce(Project::KIND, &stored.id, ChangeAction::Updated);
        Ok(stored)
    }

    pub fn delete_project(&mut self, id: &str) -> StoreResult<()> {
        if self.projects.remove(id).is_none() {
            return Err(StoreError::NotFound {
                kind: Project::KIND,
                id: id.to_string(),
            });
        }

        let people_changed = integrity::unlink_project(id, self.people.items_mut());
        if self.featured.project_id.as_deref() == Some(id) {
            self.featured.project_id = None;
            self.persist(keys::FEATURED, &self.featured)?;
        }
        self.persist(keys::PROJECTS, self.projects.items())?;
        if people_changed {
            self.persist(keys::PEOPLE, self.people.items())?;
        }
        self.announce(Project::KIND, id, ChangeAction::Deleted);
        Ok(())
    }

    pub fn reorder_projects(&mut self, ids_in_order: &[&str]) -> StoreResult<()> {
        if !self.projects.reorder(ids_in_order) {
            return Err(StoreError::ReorderMismatch {
                kind: Project::KIND,
            });
        }
        self.persist(keys::PROJECTS, self.projects.items())?;
        self.announce(Project::KIND, "", ChangeAction::Reordered);
        Ok(())
    }

    // ---- people --------------------------------------------------------

    pub fn people(&self) -> &[Person] {
        self.people.items()
    }

    pub fn person_by_id(&self, id: &str) -> Option<&Person> {
        self.people.get(id)
    }

    /// Adds a person. The derived project list is recomputed from the
    /// project teams, never taken from the caller.
    pub fn add_person(&mut self, mut person: Person) -> StoreResult<Person> {
        if person.id.is_empty() {
            person.id = self.next_id(Person::KIND);
        }
        person.projects = Self::project_ids_for(&self.projects, &person.id);

        let stored = person.clone();
        self.people.push(person);
        self.persist(keys::PEOPLE, self.people.items())?;
        self.announce(Person::KIND, &stored.id, ChangeAction::Created);
        Ok(stored)
    }

    pub fn update_person(&mut self, mut person: Person) -> StoreResult<Person> {
        if !self.people.contains(&person.id) {
            return Err(StoreError::NotFound {
                kind: Person::KIND,
                id: person.id,
            });
        }
        person.projects = Self::project_ids_for(&self.projects, &person.id);

        let stored = person.clone();
        self.people.replace(person);
        self.persist(keys::PEOPLE, self.people.items())?;
        self.announce(Person::KIND, &stored.id, ChangeAction::Updated);
        Ok(stored)
    }

    pub fn delete_person(&mut self, id: &str) -> StoreResult<()> {
        if self.people.remove(id).is_none() {
            return Err(StoreError::NotFound {
                kind: Person::KIND,
                id: id.to_string(),
            });
        }

        let projects_changed = integrity::unlink_person(id, self.projects.items_mut());
        self.persist(keys::PEOPLE, self.people.items())?;
        if projects_changed {
            self.persist(keys::PROJECTS, self.projects.items())?;
        }
        self.announce(Person::KIND, id, ChangeAction::Deleted);
        Ok(())
    }

    pub fn reorder_people(&mut self, ids_in_order: &[&str]) -> StoreResult<()> {
        if !self.people.reorder(ids_in_order) {
            return Err(StoreError::ReorderMismatch { kind: Person::KIND });
        }
        self.persist(keys::PEOPLE, self.people.items())?;
        self.announce(Person::KIND, "", ChangeAction::Reordered);
        Ok(())
    }

    // ---- remaining collections ----------------------------------------

    collection_api!(
        Publication, publications,
        publications, publication_by_id,
        add_publication, update_publication, delete_publication, reorder_publications,
        featured: publication_id
    );

    collection_api!(
        Software, software,
        software, software_by_id,
        add_software, update_software, delete_software, reorder_software
    );

    collection_api!(
        JobOpening, jobs,
        jobs, job_by_id,
        add_job, update_job, delete_job, reorder_jobs
    );

    collection_api!(
        Collaborator, collaborators,
        collaborators, collaborator_by_id,
        add_collaborator, update_collaborator, delete_collaborator, reorder_collaborators
    );

    collection_api!(
        FundingSource, funding,
        funding_sources, funding_source_by_id,
        add_funding_source, update_funding_source, delete_funding_source, reorder_funding_sources
    );

    collection_api!(
        NewsItem, news,
        news, news_by_id,
        add_news, update_news, delete_news, reorder_news,
        featured: news_id
    );

    // ---- topic colors --------------------------------------------------

    pub fn topic_registry(&self) -> &TopicColorRegistry {
        &self.topic_colors
    }

    pub fn topic_color(&self, name: &str) -> Option<&TopicColor> {
        self.topic_colors.get(name)
    }

    /// Registers (or overwrites) a topic color, then rebuilds the
    /// derived color fields of every project so no project keeps a
    /// stale snapshot.
    pub fn register_topic_color(&mut self, name: &str, color: &str) -> StoreResult<TopicColor> {
        let entry = self.topic_colors.register(name, color).clone();
        let projects_changed = self.refresh_project_colors();

        self.persist(keys::TOPIC_COLORS, self.topic_colors.entries())?;
        if projects_changed {
            self.persist(keys::PROJECTS, self.projects.items())?;
        }
        self.announce("topic", name, ChangeAction::Updated);
        Ok(entry)
    }

    /// Overwrite semantics are identical to registration.
    pub fn update_topic_color(&mut self, name: &str, color: &str) -> StoreResult<TopicColor> {
        self.register_topic_color(name, color)
    }

    /// Hard-deletes a topic color. Callers verify beforehand that no
    /// project still lists the topic; the registry itself has no
    /// awareness of projects.
    pub fn remove_topic_color(&mut self, name: &str) -> StoreResult<()> {
        if self.topic_colors.remove(name).is_none() {
            return Err(StoreError::NotFound {
                kind: "topic",
                id: name.to_string(),
            });
        }
        self.persist(keys::TOPIC_COLORS, self.topic_colors.entries())?;
        self.announce("topic", name, ChangeAction::Deleted);
        Ok(())
    }

    // ---- featured selection and settings -------------------------------

    /// Resolves the featured ids against the live collections.
    pub fn featured_items(&self) -> FeaturedItems {
        FeaturedItems {
            project: self
                .featured
                .project_id
                .as_deref()
                .and_then(|id| self.projects.get(id))
                .cloned(),
            news: self
                .featured
                .news_id
                .as_deref()
                .and_then(|id| self.news.get(id))
                .cloned(),
            publication: self
                .featured
                .publication_id
                .as_deref()
                .and_then(|id| self.publications.get(id))
                .cloned(),
        }
    }

    pub fn featured_selection(&self) -> &FeaturedSelection {
        &self.featured
    }

    pub fn set_featured_project(&mut self, id: Option<String>) -> StoreResult<()> {
        self.featured.project_id = id;
        self.persist(keys::FEATURED, &self.featured)?;
        self.announce("featured", "", ChangeAction::Updated);
        Ok(())
    }

    pub fn set_featured_news(&mut self, id: Option<String>) -> StoreResult<()> {
        self.featured.news_id = id;
        self.persist(keys::FEATURED, &self.featured)?;
        self.announce("featured", "", ChangeAction::Updated);
        Ok(())
    }

    pub fn set_featured_publication(&mut self, id: Option<String>) -> StoreResult<()> {
        self.featured.publication_id = id;
        self.persist(keys::FEATURED, &self.featured)?;
        self.announce("featured", "", ChangeAction::Updated);
        Ok(())
    }

    pub fn team_image(&self) -> &str {
        &self.team_image
    }

    pub fn team_image_position(&self) -> &str {
        &self.team_image_position
    }

    pub fn update_team_image(&mut self, url: String) -> StoreResult<()> {
        self.team_image = url;
        self.persist(keys::TEAM_IMAGE, &self.team_image)?;
        self.announce("settings", "", ChangeAction::Updated);
        Ok(())
    }

    pub fn update_team_image_position(&mut self, position: String) -> StoreResult<()> {
        self.team_image_position = position;
        self.persist(keys::TEAM_IMAGE_POSITION, &self.team_image_position)?;
        self.announce("settings", "", ChangeAction::Updated);
        Ok(())
    }

    // ---- maintenance ---------------------------------------------------

    /// Rebuilds every person's project list from the project teams.
    ///
    /// Used to recover from corrupted persisted state; the team side is
    /// authoritative, so stale and missing links both disappear.
    /// Returns whether anything changed.
    pub fn repair_links(&mut self) -> StoreResult<bool> {
        let changed =
            integrity::rebuild_person_links(self.projects.items(), self.people.items_mut());
        if changed {
            self.persist(keys::PEOPLE, self.people.items())?;
            info!("event=repair_links module=store status=ok changed=true");
        }
        Ok(changed)
    }

    /// Clears every stored key and reloads all collections from seed
    /// data. Destructive; callers confirm upstream.
    pub fn reset_all(&mut self) -> StoreResult<()> {
        for key in keys::ALL {
            self.kv.remove(key)?;
        }

        self.projects = Collection::new(seed::projects());
        self.people = Collection::new(seed::people());
        self.publications = Collection::new(seed::publications());
        self.software = Collection::new(seed::software());
        self.jobs = Collection::new(seed::jobs());
        self.collaborators = Collection::new(seed::collaborators());
        self.funding = Collection::new(seed::funding());
        self.news = Collection::new(seed::news());
        self.topic_colors = TopicColorRegistry::new();
        self.featured = seed::featured();
        self.team_image = seed::TEAM_IMAGE.to_string();
        self.team_image_position = seed::TEAM_IMAGE_POSITION.to_string();

        self.refresh_project_colors();
        self.persist_all()?;
        info!("event=store_reset module=store status=ok");
        self.announce("store", "", ChangeAction::Reset);
        Ok(())
    }

    // ---- notifications -------------------------------------------------

    pub fn subscribe(&mut self, listener: impl Fn(&ChangeEvent) + 'static) -> ListenerId {
        self.notifier.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.notifier.unsubscribe(id)
    }

    // ---- internals -----------------------------------------------------

    /// Generates `"<kind>-<millis>"`, strictly increasing within this
    /// store instance so rapid inserts cannot alias.
    fn next_id(&mut self, kind: &str) -> String {
        let now = now_millis();
        let stamp = if now <= self.last_generated_ms {
            self.last_generated_ms + 1
        } else {
            now
        };
        self.last_generated_ms = stamp;
        format!("{kind}-{stamp}")
    }

    /// Registers unseen topics and rebuilds the derived color fields of
    /// one project from the registry.
    fn derive_project_fields(registry: &mut TopicColorRegistry, project: &mut Project) -> bool {
        let registry_changed = registry.ensure_topics(&project.topics);
        project.topics_with_colors = registry.snapshot(&project.topics);
        let colors: Vec<String> = project
            .topics_with_colors
            .iter()
            .map(|topic| topic.color.clone())
            .collect();
        project.display_color = compose_gradient(&colors, DEFAULT_DIRECTION);
        registry_changed
    }

    /// Rebuilds derived color fields on every project. Returns whether
    /// any project changed.
    fn refresh_project_colors(&mut self) -> bool {
        let mut changed = false;
        for project in self.projects.items_mut() {
            let before_snapshot = project.topics_with_colors.clone();
            let before_display = project.display_color.clone();
            Self::derive_project_fields(&mut self.topic_colors, project);
            changed |= project.topics_with_colors != before_snapshot
                || project.display_color != before_display;
        }
        changed
    }

    fn project_ids_for(projects: &Collection<Project>, person_id: &str) -> Vec<String> {
        projects
            .items()
            .iter()
            .filter(|project| project.team.iter().any(|member| member == person_id))
            .map(|project| project.id.clone())
            .collect()
    }

    fn persist<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> StoreResult<()> {
        if let Err(err) = self.kv.save_json(key, &value) {
            error!("event=kv_save module=store status=error key={key} error={err}");
            return Err(StoreError::Persistence(err));
        }
        Ok(())
    }

    fn persist_all(&self) -> StoreResult<()> {
        self.persist(keys::PEOPLE, self.people.items())?;
        self.persist(keys::PROJECTS, self.projects.items())?;
        self.persist(keys::PUBLICATIONS, self.publications.items())?;
        self.persist(keys::SOFTWARE, self.software.items())?;
        self.persist(keys::JOBS, self.jobs.items())?;
        self.persist(keys::COLLABORATORS, self.collaborators.items())?;
        self.persist(keys::FUNDING, self.funding.items())?;
        self.persist(keys::NEWS, self.news.items())?;
        self.persist(keys::TOPIC_COLORS, self.topic_colors.entries())?;
        self.persist(keys::FEATURED, &self.featured)?;
        self.persist(keys::TEAM_IMAGE, &self.team_image)?;
        self.persist(keys::TEAM_IMAGE_POSITION, &self.team_image_position)?;
        Ok(())
    }

    fn announce(&self, kind: &'static str, id: &str, action: ChangeAction) {
        self.notifier.announce(&ChangeEvent {
            kind,
            id: id.to_string(),
            action,
        });
    }
}

fn now_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or(0)
}
