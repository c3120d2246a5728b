use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::modules::resume::application::ports::outgoing::{
    ResumeRepository, ResumeRepositoryError,
};
use crate::modules::resume::domain::entities::{Contact, Education, Experience, Resume};

pub fn sample_resume() -> Resume {
    Resume {
        summary: "Backend engineer who likes small, sharp tools.".to_string(),
        contact: Contact {
            email: "me@example.com".to_string(),
            mobile: "+62 812 0000 0000".to_string(),
            linkedin: "https://linkedin.com/in/me".to_string(),
            github: "https://github.com/me".to_string(),
            leetcode: "https://leetcode.com/me".to_string(),
            location: "Jakarta, Indonesia".to_string(),
        },
        experience: vec![Experience {
            role: "Software Engineer".to_string(),
            company: "Acme".to_string(),
            duration: "2021 - Present".to_string(),
            description: "Payments platform".to_string(),
            highlights: vec!["Cut p99 latency in half".to_string()],
        }],
        skills: vec!["Rust".to_string(), "TypeScript".to_string()],
        education: Education {
            degree: "B.Sc. Computer Science".to_string(),
            university: "Universitas Indonesia".to_string(),
            year: "2018".to_string(),
        },
        certifications: vec![],
        resume_link: None,
    }
}

/// Holds one document in memory; `upsert` overwrites it.
#[derive(Clone)]
pub struct MockResumeRepo {
    stored: Arc<Mutex<Option<Resume>>>,
    failure: Option<ResumeRepositoryError>,
    upserts: Arc<AtomicUsize>,
}

impl MockResumeRepo {
    pub fn with(resume: Option<Resume>) -> Self {
        Self {
            stored: Arc::new(Mutex::new(resume)),
            failure: None,
            upserts: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn failing(error: ResumeRepositoryError) -> Self {
        Self {
            failure: Some(error),
            ..Self::with(None)
        }
    }

    pub fn upserts(&self) -> usize {
        self.upserts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ResumeRepository for MockResumeRepo {
    async fn get(&self) -> Result<Option<Resume>, ResumeRepositoryError> {
        if let Some(e) = &self.failure {
            return Err(e.clone());
        }
        Ok(self.stored.lock().unwrap().clone())
    }

    async fn upsert(&self, resume: Resume) -> Result<Resume, ResumeRepositoryError> {
        self.upserts.fetch_add(1, Ordering::SeqCst);
        if let Some(e) = &self.failure {
            return Err(e.clone());
        }
        *self.stored.lock().unwrap() = Some(resume.clone());
        Ok(resume)
    }
}
