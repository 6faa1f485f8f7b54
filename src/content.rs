//! Static portfolio content.

pub const NAME: &str = "Abel Fagbemi";
pub const BRAND: &str = "abelfagbemi.me";
pub const BRAND_HREF: &str = "https://abelfagbemi.me";
pub const GITHUB_HOME: &str = "https://github.com";

pub const HERO_TITLE: &str = "Backend-Focused Fullstack Developer";
pub const HERO_DESCRIPTION: &str = "Crafting robust backend systems and scalable architectures. Passionate about clean code, performance optimization, and building solutions that power the digital world.";

pub const ABOUT_PARAGRAPHS: [&str; 2] = [
    "I'm a passionate fullstack developer with a strong focus on backend development. I love architecting scalable systems, optimizing database performance, and building APIs that can handle millions of requests.",
    "When I'm not coding, you'll find me exploring new technologies, contributing to open source projects, or sharing knowledge with the developer community.",
];

pub const CONTACT_DESCRIPTION: &str = "I'm always interested in new opportunities and exciting projects. Let's discuss how we can work together to build something amazing.";

/// Characters floating behind the hero text.
pub const HERO_GLYPHS: [char; 8] = ['{', '}', '<', '>', '[', ']', '(', ')'];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub category: &'static str,
    /// Percentage, 0..=100
    pub level: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub github: &'static str,
    pub live: Option<&'static str>,
    pub featured: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialKind {
    Email,
    GitHub,
    LinkedIn,
}

impl SocialKind {
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Email => "extra-email",
            Self::GitHub => "devicon-github-plain",
            Self::LinkedIn => "devicon-linkedin-plain",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub kind: SocialKind,
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub icon_class: &'static str,
    pub value: &'static str,
    pub label: &'static str,
}

pub static SKILLS: &[Skill] = &[
    Skill { name: "Node.js", category: "Backend", level: 95 },
    Skill { name: "Python", category: "Language", level: 90 },
    Skill { name: "MySQL", category: "Database", level: 85 },
    Skill { name: "MongoDB", category: "Database", level: 80 },
    Skill { name: "React", category: "Frontend", level: 88 },
    Skill { name: "Next.js", category: "Frontend", level: 85 },
    Skill { name: "TypeScript", category: "Language", level: 92 },
    Skill { name: "Docker", category: "DevOps", level: 75 },
    Skill { name: "Redis", category: "Database", level: 80 },
    Skill { name: "REST APIs", category: "API", level: 95 },
    Skill { name: "Flask", category: "Backend", level: 95 },
];

pub static PROJECTS: &[Project] = &[
    Project {
        title: "Hippocrates",
        description: "A question bank to help medical students prepare for PLAB",
        tech: &["Python", "Flask", "React"],
        github: "https://github.com/xilder/hippocrats",
        live: None,
        featured: true,
    },
    Project {
        title: "Microservices E-commerce API",
        description: "Scalable e-commerce backend with microservices architecture, event-driven communication, and comprehensive testing.",
        tech: &["Node.js", "MongoDB", "Redis"],
        github: "https://github.com/xilder/datof",
        live: None,
        featured: true,
    },
];

pub static SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        kind: SocialKind::Email,
        label: "Email",
        href: "mailto:abel.fagbemi@med.uniben.edu",
    },
    SocialLink {
        kind: SocialKind::GitHub,
        label: "GitHub",
        href: "https://github.com/xilder",
    },
    SocialLink {
        kind: SocialKind::LinkedIn,
        label: "LinkedIn",
        href: "https://www.linkedin.com/in/abel-fagbemi/",
    },
];

pub static STATS: &[Stat] = &[
    Stat { icon_class: "extra-code", value: "1+", label: "Years Experience" },
    Stat { icon_class: "extra-server", value: "5+", label: "Projects Completed" },
    Stat { icon_class: "extra-database", value: "10+", label: "Technologies" },
];

/// Distinct skill categories, in order of first appearance.
pub fn skill_categories() -> Vec<&'static str> {
    let mut categories = Vec::new();
    for skill in SKILLS {
        if !categories.contains(&skill.category) {
            categories.push(skill.category);
        }
    }
    categories
}

pub fn skills_in(category: &str) -> impl Iterator<Item = &'static Skill> + '_ {
    SKILLS.iter().filter(move |s| s.category == category)
}
