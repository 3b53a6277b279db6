//! Static page content.
//!
//! Everything the page renders is compiled in: the section sequence the
//! header navigates, the skill grid, the education timeline, and the project
//! cards. The values are sample data; the shapes and the section ordering are
//! what the rest of the crate relies on.

/// One entry in the header navigation, tied to an on-page section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionLink {
    pub id: &'static str,
    pub label: &'static str,
    pub path: &'static str,
}

/// A technology badge in the skills grid.
#[derive(Debug, Clone, Copy)]
pub struct Skill {
    pub name: &'static str,
    pub rgb: (u8, u8, u8),
}

/// One milestone on the education timeline.
#[derive(Debug, Clone, Copy)]
pub struct EducationEvent {
    pub year: u16,
    pub title: &'static str,
    pub description: &'static str,
    pub details: &'static str,
}

/// A project card.
#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub repo_url: &'static str,
    pub demo_url: &'static str,
    pub featured: bool,
}

/// An outbound profile link shown in the hero and contact sections.
#[derive(Debug, Clone, Copy)]
pub struct SocialLink {
    pub name: &'static str,
    pub url: &'static str,
}

pub const SITE_TITLE: &str = "Alex Rivera | Software Engineer";
pub const AUTHOR: &str = "Alex Rivera";
pub const TAGLINE: &str = "Software engineer building fast, reliable tools for the web and beyond.";
pub const ABOUT_TEXT: &str = "I am a software engineer with a focus on systems that stay responsive \
under load: frontends that never jank, services that degrade gracefully, and tooling that gets out \
of the way. Away from the keyboard I read widely, climb badly, and maintain a growing collection of \
mechanical keyboards.";

pub const CONTACT_LOCATION: &str = "Lisbon, Portugal";
pub const CONTACT_EMAIL: &str = "alex@rivera.dev";
pub const CONTACT_PHONE: &str = "+351 900 000 000";

/// Ordered section sequence. Declaration order decides which section wins
/// when several sit under the header probe at once, so reordering this table
/// changes observable behavior.
pub const SECTION_LINKS: [SectionLink; 6] = [
    SectionLink { id: "hero", label: "Home", path: "/" },
    SectionLink { id: "about", label: "About", path: "/" },
    SectionLink { id: "skills", label: "Skills", path: "/" },
    SectionLink { id: "education", label: "Experience", path: "/" },
    SectionLink { id: "projects", label: "Projects", path: "/" },
    SectionLink { id: "contact", label: "Contact", path: "/" },
];

pub const SKILLS: [Skill; 10] = [
    Skill { name: "Rust", rgb: (222, 165, 132) },
    Skill { name: "TypeScript", rgb: (49, 120, 198) },
    Skill { name: "React", rgb: (97, 218, 251) },
    Skill { name: "PostgreSQL", rgb: (51, 103, 145) },
    Skill { name: "Python", rgb: (55, 118, 171) },
    Skill { name: "Docker", rgb: (36, 150, 237) },
    Skill { name: "GraphQL", rgb: (229, 53, 171) },
    Skill { name: "Linux", rgb: (252, 198, 36) },
    Skill { name: "Git", rgb: (240, 80, 50) },
    Skill { name: "WebAssembly", rgb: (101, 79, 240) },
];

pub const EDUCATION_EVENTS: [EducationEvent; 4] = [
    EducationEvent {
        year: 2018,
        title: "BSc in Computer Science",
        description: "Instituto Superior Técnico",
        details: "Focused on distributed systems and compilers; thesis on incremental \
dataflow for spreadsheet engines.",
    },
    EducationEvent {
        year: 2020,
        title: "Backend Engineer, Meridian Labs",
        description: "Payments infrastructure team",
        details: "Built idempotent settlement pipelines and the internal load-shedding \
library that kept checkout alive through two regional outages.",
    },
    EducationEvent {
        year: 2022,
        title: "Senior Engineer, Meridian Labs",
        description: "Platform reliability",
        details: "Led the migration of the edge fleet to Rust services; cut p99 latency \
by 40% and wrote the team's observability playbook.",
    },
    EducationEvent {
        year: 2024,
        title: "Independent consultant",
        description: "Performance and tooling",
        details: "Helping teams profile, simplify, and ship. Occasional open-source \
maintenance and conference talks.",
    },
];

pub const PROJECTS: [Project; 3] = [
    Project {
        title: "driftless",
        description: "A scroll-synchronized annotation layer for long documents. Renders \
thousands of margin notes without dropping frames.",
        tags: &["Rust", "WebAssembly", "TypeScript"],
        repo_url: "https://github.com/arivera/driftless",
        demo_url: "https://driftless.rivera.dev",
        featured: true,
    },
    Project {
        title: "quayside",
        description: "Container-native job queue with pluggable backpressure policies and \
a single-binary dashboard.",
        tags: &["Rust", "PostgreSQL", "Docker"],
        repo_url: "https://github.com/arivera/quayside",
        demo_url: "https://quayside.rivera.dev",
        featured: true,
    },
    Project {
        title: "ledgerline",
        description: "Plain-text accounting reports rendered as interactive timelines.",
        tags: &["TypeScript", "React", "GraphQL"],
        repo_url: "https://github.com/arivera/ledgerline",
        demo_url: "https://ledgerline.rivera.dev",
        featured: false,
    },
];

pub const SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink { name: "GitHub", url: "https://github.com/arivera" },
    SocialLink { name: "LinkedIn", url: "https://www.linkedin.com/in/alex-rivera" },
    SocialLink { name: "Mastodon", url: "https://hachyderm.io/@arivera" },
];
