//! Built-in seed data.
//!
//! Used the first time a collection loads with nothing in durable
//! storage, and after `reset_all`. Link fields reference other seed
//! records by id; derived project fields are filled by the store's
//! normalization pass, not here.

use crate::model::featured::FeaturedSelection;
use crate::model::leaf::{Collaborator, FundingSource, JobOpening, NewsItem};
use crate::model::person::Person;
use crate::model::project::Project;
use crate::model::publication::{Publication, PublicationType};
use crate::model::software::Software;

pub const TEAM_IMAGE: &str = "/images/team.jpg";
pub const TEAM_IMAGE_POSITION: &str = "center";

pub fn people() -> Vec<Person> {
    vec![
        {
            let mut p = Person::new("Maren Holt");
            p.id = "person-1".to_string();
            p.role = "Principal Investigator".to_string();
            p.bio = "Leads the lab's work on learned perception for field robotics.".to_string();
            p.color = "#4a6fa5".to_string();
            p.projects = vec!["project-1".to_string(), "project-2".to_string()];
            p.email = Some("m.holt@example.edu".to_string());
            p
        },
        {
            let mut p = Person::new("Tomas Eklund");
            p.id = "person-2".to_string();
            p.role = "Postdoctoral Researcher".to_string();
            p.bio = "Works on uncertainty-aware mapping.".to_string();
            p.color = "#7a9e7e".to_string();
            p.projects = vec!["project-1".to_string()];
            p.github = Some("teklund".to_string());
            p
        },
        {
            let mut p = Person::new("Ines Okafor");
            p.id = "person-3".to_string();
            p.role = "PhD Student".to_string();
            p.bio = "Studies multimodal sensor fusion.".to_string();
            p.color = "#b5651d".to_string();
            p.projects = vec!["project-2".to_string()];
            p
        },
    ]
}

pub fn projects() -> Vec<Project> {
    vec![
        {
            let mut p = Project::new("Terrain-Aware Navigation");
            p.id = "project-1".to_string();
            p.description =
                "Self-supervised traversability estimation for off-road robots.".to_string();
            p.categories = vec!["Robotics".to_string()];
            p.team = vec!["person-1".to_string(), "person-2".to_string()];
            p.topics = vec!["perception".to_string(), "planning".to_string()];
            p.emoji = Some("🤖".to_string());
            p.status = "active".to_string();
            p.start_date = Some("2023-09".to_string());
            p.publications = vec!["publication-1".to_string()];
            p
        },
        {
            let mut p = Project::new("Glacier Monitoring from Space");
            p.id = "project-2".to_string();
            p.description =
                "Change detection on multispectral satellite imagery of arctic glaciers."
                    .to_string();
            p.categories = vec!["Remote Sensing".to_string()];
            p.team = vec!["person-1".to_string(), "person-3".to_string()];
            p.topics = vec!["remote sensing".to_string(), "climate".to_string()];
            p.emoji = Some("🛰️".to_string());
            p.status = "active".to_string();
            p.start_date = Some("2024-01".to_string());
            p.publications = vec!["publication-2".to_string()];
            p
        },
    ]
}

pub fn publications() -> Vec<Publication> {
    vec![
        {
            let mut p = Publication::new(
                "Self-Supervised Traversability from Proprioception",
                2024,
                PublicationType::Conference,
            );
            p.id = "publication-1".to_string();
            p.authors = vec!["T. Eklund".to_string(), "M. Holt".to_string()];
            p.citation =
                "Eklund, T. and Holt, M. Self-Supervised Traversability from Proprioception. ICRA 2024."
                    .to_string();
            p.project_ids = vec!["project-1".to_string()];
            p.software_ids = vec!["software-1".to_string()];
            p.keywords = vec!["traversability".to_string(), "self-supervision".to_string()];
            p
        },
        {
            let mut p = Publication::new(
                "Uncertainty Calibration for Glacier Change Maps",
                2025,
                PublicationType::Journal,
            );
            p.id = "publication-2".to_string();
            p.authors = vec![
                "I. Okafor".to_string(),
                "M. Holt".to_string(),
                "R. Steiner".to_string(),
            ];
            p.citation =
                "Okafor, I., Holt, M. and Steiner, R. Uncertainty Calibration for Glacier Change Maps. RSE 2025."
                    .to_string();
            p.project_ids = vec!["project-2".to_string()];
            p
        },
    ]
}

pub fn software() -> Vec<Software> {
    vec![{
        let mut s = Software::new("traverse-kit");
        s.id = "software-1".to_string();
        s.description = "Training and evaluation toolkit for traversability models.".to_string();
        s.repo_url = "https://github.com/example-lab/traverse-kit".to_string();
        s.technologies = vec!["Python".to_string(), "PyTorch".to_string()];
        s.developers = vec!["T. Eklund".to_string()];
        s.license = "MIT".to_string();
        s.project_ids = vec!["project-1".to_string()];
        s.publication_ids = vec!["publication-1".to_string()];
        s
    }]
}

pub fn jobs() -> Vec<JobOpening> {
    vec![{
        let mut j = JobOpening::new("PhD Position: Robot Perception");
        j.id = "job-1".to_string();
        j.description = "Fully funded position on terrain-aware navigation.".to_string();
        j.location = "On site".to_string();
        j.deadline = Some("2026-10-15".to_string());
        j
    }]
}

pub fn collaborators() -> Vec<Collaborator> {
    vec![
        {
            let mut c = Collaborator::new("Arctic Observation Institute");
            c.id = "collaborator-1".to_string();
            c.affiliation = "Tromsø".to_string();
            c.url = Some("https://example.org/aoi".to_string());
            c
        },
        {
            let mut c = Collaborator::new("Field Robotics Group, TU Example");
            c.id = "collaborator-2".to_string();
            c.affiliation = "TU Example".to_string();
            c
        },
    ]
}

pub fn funding() -> Vec<FundingSource> {
    vec![
        {
            let mut f = FundingSource::new("National Research Council");
            f.id = "funding-1".to_string();
            f.program = "Autonomous Systems".to_string();
            f.grant_id = Some("NRC-2023-0417".to_string());
            f
        },
        {
            let mut f = FundingSource::new("Polar Futures Foundation");
            f.id = "funding-2".to_string();
            f.program = "Climate Monitoring".to_string();
            f
        },
    ]
}

pub fn news() -> Vec<NewsItem> {
    vec![
        {
            let mut n = NewsItem::new("Best paper nomination at ICRA");
            n.id = "news-1".to_string();
            n.body = "The traversability paper was shortlisted for best paper.".to_string();
            n.date = "2024-05-17".to_string();
            n
        },
        {
            let mut n = NewsItem::new("New glacier monitoring project funded");
            n.id = "news-2".to_string();
            n.body = "The Polar Futures Foundation funds three years of glacier work.".to_string();
            n.date = "2024-01-09".to_string();
            n
        },
    ]
}

pub fn featured() -> FeaturedSelection {
    FeaturedSelection {
        project_id: Some("project-1".to_string()),
        news_id: Some("news-1".to_string()),
        publication_id: None,
    }
}
