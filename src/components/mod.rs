//! Page section components and shared UI plumbing.

pub mod backdrop;
mod case_studies;
mod cta;
mod decor;
mod footer;
mod handles;
mod hero;
mod integrations;
mod media;
mod process;
mod reveal;
mod styles;
mod typewriter;
mod use_cases;
mod why;

pub use case_studies::CaseStudies;
pub use cta::Cta;
pub use footer::Footer;
pub use hero::Hero;
pub use integrations::Integrations;
pub use process::Process;
pub use reveal::Reveal;
pub use styles::SiteStyles;
pub use typewriter::TypewriterText;
pub use use_cases::UseCases;
pub use why::Why;
